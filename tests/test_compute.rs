use spacek::compute::enemy::{damage_enemy, spawn_enemy, update_enemy};
use spacek::compute::particles::{spawn_particles, update_particles};
use spacek::compute::pickups::{collect_coins, collect_power_ups};
use spacek::compute::player::{follow_camera, jump, step_player, take_damage};
use spacek::compute::projectile::{fire_laser, update_lasers};
use spacek::compute::*;
use spacek::constants::*;
use spacek::entities::*;
use spacek::geometry::Rect;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// A world in `Playing` with level 1 loaded and the opening cues dropped.
fn playing(variant: Variant) -> (GameWorld, StdRng) {
    let mut rng = seeded_rng();
    let mut world = new_world(variant, &mut rng);
    start_game(&mut world, &mut rng);
    world.sounds.clear();
    (world, rng)
}

/// Same, with no enemies or pickups to interfere.
fn empty_level(variant: Variant) -> (GameWorld, StdRng) {
    let (mut world, rng) = playing(variant);
    world.enemies.clear();
    world.coins.clear();
    world.power_ups.clear();
    (world, rng)
}

// ── Player physics ───────────────────────────────────────────────────────────

#[test]
fn player_falls_and_lands_on_platform_top() {
    let platforms = vec![Rect::new(0.0, 540.0, 1600.0, 60.0)];
    let controls = Controls::default();
    let mut player = Player::new();
    player.y = 400.0;

    step_player(&mut player, &controls, &platforms, Variant::Mini);
    assert!(player.vy > 0.0);
    assert!(player.y > 400.0);
    assert!(!player.on_ground);

    for _ in 0..100 {
        step_player(&mut player, &controls, &platforms, Variant::Mini);
        if player.on_ground {
            break;
        }
    }
    assert!(player.on_ground);
    assert_eq!(player.y, 500.0);
    assert_eq!(player.vy, 0.0);
}

#[test]
fn player_at_start_position_snaps_and_stays_grounded() {
    let platforms = vec![Rect::new(0.0, 540.0, 1600.0, 60.0)];
    let controls = Controls::default();
    let mut player = Player::new();
    assert_eq!((player.x, player.y), (100.0, 500.0));

    for _ in 0..30 {
        step_player(&mut player, &controls, &platforms, Variant::Mini);
        assert!(player.on_ground);
        assert_eq!(player.y, 500.0);
    }
}

#[test]
fn landing_uses_centre_before_the_move() {
    let platforms = vec![Rect::new(200.0, 300.0, 100.0, 20.0)];
    let controls = Controls::default();
    let mut player = Player::new();
    // Centre at 175 starts left of the platform; after the move the box overlaps it.
    player.x = 160.0;
    player.y = 250.0;
    player.vx = 40.0;
    player.vy = 10.0;

    step_player(&mut player, &controls, &platforms, Variant::Mini);
    assert!(player.rect().intersects(&platforms[0]));
    assert!(!player.on_ground);
    assert!((player.y - 260.6).abs() < 1e-3);
}

#[test]
fn fall_speed_is_clamped() {
    let controls = Controls::default();
    let mut player = Player::new();
    player.y = -5000.0;
    for _ in 0..200 {
        step_player(&mut player, &controls, &[], Variant::Full);
        assert!(player.vy <= MAX_FALL_SPEED);
    }
    assert_eq!(player.vy, MAX_FALL_SPEED);
}

#[test]
fn mini_control_snaps_to_full_speed() {
    let controls = Controls { move_right: true, ..Controls::default() };
    let mut player = Player::new();
    player.vx = -6.0;
    step_player(&mut player, &controls, &[], Variant::Mini);
    assert_eq!(player.vx, PLAYER_MAX_SPEED);
    assert_eq!(player.facing, Facing::Right);
}

#[test]
fn full_control_accelerates_and_caps() {
    let controls = Controls { move_left: true, ..Controls::default() };
    let mut player = Player::new();
    step_player(&mut player, &controls, &[], Variant::Full);
    assert!((player.vx + 0.8).abs() < 1e-5);
    for _ in 0..20 {
        step_player(&mut player, &controls, &[], Variant::Full);
    }
    assert_eq!(player.vx, -PLAYER_MAX_SPEED);
    assert_eq!(player.facing, Facing::Left);
}

#[test]
fn friction_stops_player() {
    let controls = Controls::default();
    let mut player = Player::new();
    player.vx = 6.0;
    for _ in 0..60 {
        step_player(&mut player, &controls, &[], Variant::Full);
    }
    assert_eq!(player.vx, 0.0);
}

#[test]
fn player_cannot_leave_left_edge() {
    let controls = Controls { move_left: true, ..Controls::default() };
    let mut player = Player::new();
    player.x = 2.0;
    step_player(&mut player, &controls, &[], Variant::Mini);
    assert_eq!(player.x, 0.0);
}

#[test]
fn camera_eases_toward_player() {
    assert_eq!(follow_camera(0.0, 100.0), 0.0);
    let cam = follow_camera(0.0, 1000.0);
    assert!((cam - 34.0).abs() < 1e-4);
    assert!(follow_camera(cam, 1000.0) > cam);
}

#[test]
fn grounded_jump_uses_variant_impulse() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.on_ground = true;
    jump(&mut world, &mut rng);
    assert_eq!(world.player.vy, -12.0);
    assert!(world.sounds.contains(&SoundCue::Jump));

    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.on_ground = true;
    jump(&mut world, &mut rng);
    assert_eq!(world.player.vy, -16.0);
    assert!(!world.particles.is_empty());
}

#[test]
fn airborne_jump_burns_jetpack_fuel_in_full_only() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.on_ground = false;
    world.player.vy = 0.0;
    jump(&mut world, &mut rng);
    assert_eq!(world.player.vy, -JETPACK_THRUST);
    assert_eq!(world.player.jetpack_fuel, 96.0);

    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.on_ground = false;
    world.player.vy = 1.0;
    jump(&mut world, &mut rng);
    assert_eq!(world.player.vy, 1.0);
}

#[test]
fn empty_jetpack_gives_no_thrust() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.on_ground = false;
    world.player.jetpack_fuel = 0.0;
    world.player.vy = 2.0;
    jump(&mut world, &mut rng);
    assert_eq!(world.player.vy, 2.0);
}

// ── Lasers ───────────────────────────────────────────────────────────────────

#[test]
fn laser_cap_limits_live_lasers() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    let fired = (0..6).filter(|_| fire_laser(&mut world, &mut rng)).count();
    assert_eq!(fired, 5);
    assert_eq!(world.lasers.len(), 5);

    let (mut world, mut rng) = empty_level(Variant::Mini);
    for _ in 0..6 {
        fire_laser(&mut world, &mut rng);
    }
    assert_eq!(world.lasers.len(), 3);
}

#[test]
fn laser_spawns_at_muzzle_for_facing() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.facing = Facing::Left;
    fire_laser(&mut world, &mut rng);
    let laser = &world.lasers[0];
    assert_eq!(laser.x, world.player.x - 20.0);
    assert_eq!(laser.y, world.player.y + 20.0);
    assert_eq!(laser.direction, Facing::Left);
    assert_eq!(laser.energy, None);
}

#[test]
fn laser_runs_out_of_energy() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    fire_laser(&mut world, &mut rng);
    // 120 energy at 3 per frame.
    for _ in 0..39 {
        update_lasers(&mut world, &mut rng);
    }
    assert_eq!(world.lasers.len(), 1);
    update_lasers(&mut world, &mut rng);
    assert!(world.lasers.is_empty());
}

#[test]
fn laser_leaves_camera_range() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    fire_laser(&mut world, &mut rng);
    for _ in 0..200 {
        update_lasers(&mut world, &mut rng);
    }
    assert!(world.lasers.is_empty());
}

#[test]
fn laser_kills_first_overlapping_enemy_only() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.enemies = vec![
        spawn_enemy(160.0, 505.0, EnemyKind::Standard, 100.0, &mut rng),
        spawn_enemy(160.0, 505.0, EnemyKind::Standard, 100.0, &mut rng),
    ];
    fire_laser(&mut world, &mut rng);
    update_lasers(&mut world, &mut rng);

    assert!(world.lasers.is_empty());
    assert!(!world.enemies[0].alive);
    assert!(world.enemies[1].alive);
    assert_eq!(world.enemies_defeated, 1);
    assert_eq!(world.score, 150);
    assert!(world.sounds.contains(&SoundCue::LaserHit));
    assert!(world.sounds.contains(&SoundCue::EnemyDeath));
}

#[test]
fn laser_ignores_dead_enemies() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    let mut corpse = spawn_enemy(160.0, 505.0, EnemyKind::Standard, 80.0, &mut rng);
    corpse.alive = false;
    world.enemies = vec![corpse];
    fire_laser(&mut world, &mut rng);
    update_lasers(&mut world, &mut rng);
    assert_eq!(world.lasers.len(), 1);
    assert_eq!(world.score, 0);
}

// ── Enemies ──────────────────────────────────────────────────────────────────

#[test]
fn enemy_dies_exactly_when_health_runs_out() {
    let mut rng = seeded_rng();
    let mut robot = spawn_enemy(0.0, 0.0, EnemyKind::Robot, 50.0, &mut rng);
    assert_eq!(robot.health, 3);
    assert!(!robot.take_hit());
    assert!(robot.alive);
    assert!(!robot.take_hit());
    assert!(robot.alive);
    assert!(robot.take_hit());
    assert!(!robot.alive);
    assert!(!robot.take_hit());
}

#[test]
fn non_lethal_hit_knocks_enemy_back_and_scores() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    let mut jumper = spawn_enemy(600.0, 300.0, EnemyKind::Jumper, 50.0, &mut rng);
    jumper.vx = 2.0;
    jumper.resume_vx = 2.0;
    world.enemies = vec![jumper];

    assert!(!damage_enemy(&mut world, 0, &mut rng));
    assert_eq!(world.enemies[0].vx, -3.0);
    assert_eq!(world.score, 50);
    assert!(world.sounds.contains(&SoundCue::Hurt));

    assert!(damage_enemy(&mut world, 0, &mut rng));
    assert_eq!(world.score, 200);
}

#[test]
fn dead_enemies_stay_as_tombstones() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.enemies = vec![spawn_enemy(600.0, 300.0, EnemyKind::Standard, 80.0, &mut rng)];
    assert!(damage_enemy(&mut world, 0, &mut rng));
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.score, 100);

    let before = world.enemies[0].x;
    tick(&mut world, &mut rng);
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemies[0].x, before);
    assert!(!damage_enemy(&mut world, 0, &mut rng));
    assert_eq!(world.score, 100);
}

#[test]
fn enemies_stay_inside_their_territory() {
    let mut rng = seeded_rng();
    let ground = vec![Rect::new(0.0, 540.0, 4000.0, 60.0)];
    for variant in [Variant::Mini, Variant::Full] {
        for kind in [EnemyKind::Standard, EnemyKind::Jumper, EnemyKind::Flyer, EnemyKind::Robot] {
            let mut enemy = spawn_enemy(1000.0, 400.0, kind, 80.0, &mut rng);
            for _ in 0..2000 {
                update_enemy(&mut enemy, &ground, variant, &mut rng);
                assert!(
                    (enemy.x - enemy.start_x).abs() <= enemy.territory + ENEMY_SPEED + 1e-3,
                    "{kind:?} strayed to {}",
                    enemy.x
                );
            }
        }
    }
}

#[test]
fn walkers_land_on_platforms() {
    let mut rng = seeded_rng();
    let ground = vec![Rect::new(0.0, 540.0, 4000.0, 60.0)];
    let mut enemy = spawn_enemy(500.0, 400.0, EnemyKind::Standard, 80.0, &mut rng);
    for _ in 0..100 {
        update_enemy(&mut enemy, &ground, Variant::Mini, &mut rng);
    }
    assert_eq!(enemy.y, 540.0 - ENEMY_SIZE);
}

#[test]
fn paused_enemy_resumes_moving() {
    let mut rng = seeded_rng();
    let mut enemy = spawn_enemy(500.0, 200.0, EnemyKind::Flyer, 80.0, &mut rng);
    enemy.pause_timer = 2;
    enemy.vx = 0.0;
    enemy.resume_vx = 1.4;
    update_enemy(&mut enemy, &[], Variant::Full, &mut rng);
    assert_eq!(enemy.x, 500.0);
    update_enemy(&mut enemy, &[], Variant::Full, &mut rng);
    assert_eq!(enemy.vx, 1.4);
    update_enemy(&mut enemy, &[], Variant::Full, &mut rng);
    assert!(enemy.x > 500.0);
}

// ── Damage & survival ────────────────────────────────────────────────────────

#[test]
fn invulnerability_blocks_repeat_damage() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    take_damage(&mut world, &mut rng);
    assert_eq!(world.player.lives, 2);
    assert_eq!(world.player.invulnerable, 200);
    take_damage(&mut world, &mut rng);
    assert_eq!(world.player.lives, 2);
}

#[test]
fn damage_respawns_player_near_camera() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.camera_x = 900.0;
    world.player.x = 1000.0;
    world.player.y = 300.0;
    world.player.vx = 5.0;
    take_damage(&mut world, &mut rng);
    assert_eq!(world.player.x, 1000.0);
    assert_eq!(world.player.y, PLAYER_START_Y);
    assert_eq!(world.player.vx, 0.0);
    assert_eq!(world.player.invulnerable, 120);
}

#[test]
fn last_life_ends_the_game_on_next_frame() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.score = 250;
    world.player.lives = 1;
    take_damage(&mut world, &mut rng);
    assert_eq!(world.player.lives, 0);
    assert_eq!(world.status, GameStatus::Playing);

    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::GameOver);
    assert_eq!(world.high_score, 250);
}

#[test]
fn dead_enemies_never_hurt_the_player() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    let (px, py) = (world.player.x, world.player.y);
    let mut corpse = spawn_enemy(px, py + 10.0, EnemyKind::Standard, 100.0, &mut rng);
    corpse.alive = false;
    world.enemies = vec![corpse];

    tick(&mut world, &mut rng);
    assert!(world.player.rect().intersects(&world.enemies[0].rect()));
    assert_eq!(world.player.lives, PLAYER_START_LIVES);
    assert_eq!(world.player.invulnerable, 0);
}

#[test]
fn enemy_contact_hurts_unless_shielded() {
    for (shield, expected_lives) in [(0, 2), (SHIELD_FRAMES, 3)] {
        let (mut world, mut rng) = empty_level(Variant::Full);
        world.player.shield_timer = shield;
        let (px, py) = (world.player.x, world.player.y);
        world.enemies = vec![spawn_enemy(px, py + 10.0, EnemyKind::Standard, 100.0, &mut rng)];
        tick(&mut world, &mut rng);
        assert_eq!(world.player.lives, expected_lives);
    }
}

#[test]
fn running_out_of_oxygen_costs_a_life_and_refills() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.oxygen = 0.01;
    tick(&mut world, &mut rng);
    assert_eq!(world.player.lives, 2);
    assert_eq!(world.player.oxygen, METER_MAX);
}

#[test]
fn mini_has_no_oxygen_drain() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    for _ in 0..10 {
        tick(&mut world, &mut rng);
    }
    assert_eq!(world.player.oxygen, METER_MAX);
}

#[test]
fn falling_off_the_world_costs_a_life() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.y = FALL_LIMIT_Y + 1.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.player.lives, 2);
    assert_eq!(world.player.y, PLAYER_START_Y);
}

// ── Collectibles ─────────────────────────────────────────────────────────────

#[test]
fn coin_is_collected_exactly_once() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.coins = vec![Coin::new(world.player.x, world.player.y)];

    collect_coins(&mut world, &mut rng);
    assert!(world.coins[0].collected);
    assert_eq!(world.score, 50);
    assert_eq!(world.coins_collected, 1);

    collect_coins(&mut world, &mut rng);
    assert_eq!(world.score, 50);
    assert_eq!(world.coins_collected, 1);
}

#[test]
fn power_ups_apply_their_effects() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    let (px, py) = (world.player.x, world.player.y);
    world.player.energy = 10.0;
    world.player.oxygen = 50.0;
    world.player.jetpack_fuel = 0.0;
    world.power_ups = [
        PowerUpKind::Energy,
        PowerUpKind::Oxygen,
        PowerUpKind::Life,
        PowerUpKind::Jetpack,
        PowerUpKind::Shield,
    ]
    .into_iter()
    .map(|kind| PowerUp::new(px, py, kind))
    .collect();

    collect_power_ups(&mut world, &mut rng);
    assert!(world.power_ups.iter().all(|p| p.collected));
    assert_eq!(world.player.energy, 70.0);
    assert_eq!(world.player.oxygen, METER_MAX);
    assert_eq!(world.player.lives, 4);
    assert_eq!(world.player.jetpack_fuel, METER_MAX);
    assert_eq!(world.player.shield_timer, SHIELD_FRAMES);
    assert_eq!(world.score, 200 + 150 + 750 + 300 + 400);
}

#[test]
fn speed_power_up_only_scores() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    let before = world.player.clone();
    world.power_ups = vec![PowerUp::new(before.x, before.y, PowerUpKind::Speed)];
    collect_power_ups(&mut world, &mut rng);
    assert_eq!(world.score, 250);
    assert_eq!(world.player.vx, before.vx);
    assert_eq!(world.player.lives, before.lives);
}

// ── Particles ────────────────────────────────────────────────────────────────

#[test]
fn particles_expire_and_are_removed() {
    let mut rng = seeded_rng();
    let mut particles = Vec::new();
    spawn_particles(&mut particles, 0.0, 0.0, Rgb::WHITE, 10, ParticleKind::Spark, &mut rng);
    assert_eq!(particles.len(), 10);
    for p in &particles {
        assert!((50..=100).contains(&p.lifetime));
    }
    for _ in 0..100 {
        update_particles(&mut particles);
        assert!(particles.iter().all(|p| p.size >= 1.0 && p.size <= PARTICLE_MAX_SIZE));
    }
    assert!(particles.is_empty());
}

// ── Progression & state machine ──────────────────────────────────────────────

#[test]
fn full_variant_advances_to_second_level_then_wins() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.x = 2401.0;
    fire_laser(&mut world, &mut rng);
    world.sounds.clear();

    tick(&mut world, &mut rng);
    assert_eq!(world.level, 2);
    assert_eq!(world.status, GameStatus::Playing);
    assert_eq!(world.score, 3000);
    assert_eq!(world.player.x, PLAYER_START_X);
    assert_eq!(world.camera_x, 0.0);
    assert!(world.lasers.is_empty());
    assert!(world.sounds.contains(&SoundCue::PowerUp));
    assert!(!world.enemies.is_empty());

    world.enemies.clear();
    world.player.x = 2201.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::Victory);
    assert_eq!(world.high_score, 3000);
}

#[test]
fn losing_the_last_life_beats_finishing_the_level() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.lives = 1;
    world.player.x = 1150.0;
    world.player.y = FALL_LIMIT_Y + 1.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.player.lives, 0);
    assert_eq!(world.status, GameStatus::GameOver);

    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.lives = 1;
    world.player.x = 2401.0;
    world.player.y = FALL_LIMIT_Y + 1.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::GameOver);
}

#[test]
fn mini_variant_wins_after_its_only_level() {
    let (mut world, mut rng) = empty_level(Variant::Mini);
    world.player.x = 1101.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::Victory);
    assert_eq!(world.level, 1);
}

#[test]
fn victory_screen_runs_a_fountain() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.player.x = 2401.0;
    tick(&mut world, &mut rng);
    world.enemies.clear();
    world.player.x = 2201.0;
    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::Victory);

    let mut seen = 0;
    for _ in 0..500 {
        tick(&mut world, &mut rng);
        seen = seen.max(world.particles.len());
    }
    assert!(seen > 0);
    assert_eq!(world.status, GameStatus::Victory);
}

#[test]
fn menu_keys_drive_the_state_machine() {
    let mut rng = seeded_rng();
    let mut world = new_world(Variant::Mini, &mut rng);
    assert_eq!(world.status, GameStatus::Menu);

    assert_eq!(key_down(&mut world, Key::Enter, &mut rng), None);
    assert_eq!(world.status, GameStatus::Playing);

    key_down(&mut world, Key::Escape, &mut rng);
    assert_eq!(world.status, GameStatus::Menu);

    assert_eq!(key_down(&mut world, Key::Escape, &mut rng), Some(Command::Quit));
}

#[test]
fn restart_from_game_over_resets_the_run() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    world.score = 900;
    world.player.lives = 0;
    tick(&mut world, &mut rng);
    assert_eq!(world.status, GameStatus::GameOver);

    // Simulation is frozen on the game-over screen.
    let frozen = world.player.y;
    tick(&mut world, &mut rng);
    assert_eq!(world.player.y, frozen);

    key_down(&mut world, Key::Enter, &mut rng);
    assert_eq!(world.status, GameStatus::Playing);
    assert_eq!(world.score, 0);
    assert_eq!(world.player.lives, PLAYER_START_LIVES);
    assert_eq!(world.high_score, 900);
}

#[test]
fn movement_keys_set_and_clear_controls() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    key_down(&mut world, Key::Left, &mut rng);
    assert!(world.controls.move_left);
    assert_eq!(world.player.facing, Facing::Left);
    key_up(&mut world, Key::Left);
    assert!(!world.controls.move_left);

    key_down(&mut world, Key::D, &mut rng);
    assert!(world.controls.move_right);
    key_up(&mut world, Key::D);
    assert!(!world.controls.move_right);

    key_down(&mut world, Key::X, &mut rng);
    assert_eq!(world.lasers.len(), 1);
}

#[test]
fn menu_buttons_respond_to_mouse() {
    let mut rng = seeded_rng();
    let mut world = new_world(Variant::Mini, &mut rng);

    mouse_move(&mut world, 400.0, 275.0);
    assert!(world.buttons[0].hovered);
    assert!(!world.buttons[2].hovered);

    assert_eq!(mouse_down(&mut world, 10.0, 10.0, &mut rng), None);
    assert_eq!(world.status, GameStatus::Menu);

    assert_eq!(mouse_down(&mut world, 400.0, 415.0, &mut rng), Some(Command::Quit));
    assert_eq!(world.buttons[2].click_timer, 10);

    assert_eq!(mouse_down(&mut world, 400.0, 275.0, &mut rng), None);
    assert_eq!(world.status, GameStatus::Playing);
}

#[test]
fn full_menu_has_test_sounds_button() {
    let mut rng = seeded_rng();
    let world = new_world(Variant::Full, &mut rng);
    let actions: Vec<ButtonAction> = world.buttons.iter().map(|b| b.action).collect();
    assert_eq!(
        actions,
        vec![
            ButtonAction::Start,
            ButtonAction::ToggleAudio,
            ButtonAction::TestSounds,
            ButtonAction::Quit,
        ]
    );
    let mini = new_world(Variant::Mini, &mut rng);
    assert_eq!(mini.buttons.len(), 3);
}

#[test]
fn toggling_audio_silences_the_cue_queue() {
    let (mut world, mut rng) = empty_level(Variant::Full);
    toggle_audio(&mut world);
    assert!(!world.sounds_enabled);
    assert!(world.sounds.is_empty());
    let label = world
        .buttons
        .iter()
        .find(|b| b.action == ButtonAction::ToggleAudio)
        .map(|b| b.label.clone());
    assert_eq!(label.as_deref(), Some("AUDIO: OFF"));

    fire_laser(&mut world, &mut rng);
    assert!(world.sounds.is_empty());

    toggle_audio(&mut world);
    assert_eq!(world.sounds, vec![SoundCue::Click]);
}

#[test]
fn sound_test_queues_every_cue() {
    let mut rng = seeded_rng();
    let mut world = new_world(Variant::Full, &mut rng);
    key_down(&mut world, Key::T, &mut rng);
    assert_eq!(world.sounds, SoundCue::ALL.to_vec());

    let mut mini = new_world(Variant::Mini, &mut rng);
    key_down(&mut mini, Key::T, &mut rng);
    assert!(mini.sounds.is_empty());
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let (mut world, mut rng) = playing(Variant::Full);
        world.controls.move_right = true;
        for _ in 0..300 {
            tick(&mut world, &mut rng);
        }
        let enemy_x: f32 = world.enemies.iter().map(|e| e.x).sum();
        (world.player.x, world.player.y, world.score, enemy_x)
    };
    assert_eq!(run(), run());
}

#[test]
fn frame_counter_advances_every_tick() {
    let mut rng = seeded_rng();
    let mut world = new_world(Variant::Mini, &mut rng);
    for _ in 0..5 {
        tick(&mut world, &mut rng);
    }
    assert_eq!(world.frame, 5);
}
