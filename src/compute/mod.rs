//! Game logic: the per-frame orchestrator, the state machine and input.
//!
//! The host calls [`tick`] once per frame and forwards input through
//! [`key_down`], [`key_up`], [`mouse_move`] and [`mouse_down`].  All
//! randomness comes through the injected `rng`, so a seeded RNG replays
//! a run exactly.

pub mod enemy;
pub mod particles;
pub mod pickups;
pub mod player;
pub mod projectile;
pub mod tables;

use rand::Rng;
use tracing::info;

use crate::constants::{
    FALL_LIMIT_Y, METER_MAX, OXYGEN_DRAIN, PLAYER_HEIGHT, PLAYER_START_X, PLAYER_START_Y,
    PLAYER_WIDTH, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::entities::{
    ButtonAction, Command, Controls, Facing, GameStatus, GameWorld, Key, MenuButton,
    ParticleKind, Player, Rgb, SoundCue, Star, Variant,
};
use crate::geometry::Rect;
use crate::levels::{level_count, level_end_x, load_level};

use self::enemy::update_enemies;
use self::particles::{spawn_particles, update_fountain, update_particles};
use self::pickups::{animate_coin, animate_power_up, collect_coins, collect_power_ups};
use self::player::{animate_pose, follow_camera, jump, step_player, take_damage};
use self::projectile::{fire_laser, update_lasers};
use self::tables::{has_oxygen, level_bonus};

/// Queue a sound cue for the host, unless sound is switched off.
pub fn emit(world: &mut GameWorld, cue: SoundCue) {
    if world.sounds_enabled {
        world.sounds.push(cue);
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build a world sitting on the main menu with level 1 already laid out
/// behind it.
pub fn new_world(variant: Variant, rng: &mut impl Rng) -> GameWorld {
    let mut world = GameWorld {
        variant,
        status: GameStatus::Menu,
        player: Player::new(),
        controls: Controls::default(),
        level: 1,
        platforms: Vec::new(),
        enemies: Vec::new(),
        coins: Vec::new(),
        power_ups: Vec::new(),
        lasers: Vec::new(),
        particles: Vec::new(),
        stars: Vec::new(),
        buttons: create_menu(variant, true),
        camera_x: 0.0,
        score: 0,
        high_score: 0,
        coins_collected: 0,
        enemies_defeated: 0,
        sounds_enabled: true,
        sounds: Vec::new(),
        frame: 0,
    };
    setup(&mut world, rng);
    world
}

fn audio_label(enabled: bool) -> String {
    format!("AUDIO: {}", if enabled { "ON" } else { "OFF" })
}

pub fn create_menu(variant: Variant, sounds_enabled: bool) -> Vec<MenuButton> {
    let button = |rect: Rect, label: String, action: ButtonAction, color: Rgb| MenuButton {
        rect,
        label,
        action,
        color,
        hovered: false,
        click_timer: 0,
        glow_timer: 0,
    };
    let cx = WORLD_WIDTH / 2.0;
    let mini = Rgb(100, 100, 200);

    match variant {
        Variant::Mini => vec![
            button(
                Rect::new(cx - 100.0, 250.0, 200.0, 50.0),
                "START".into(),
                ButtonAction::Start,
                mini,
            ),
            button(
                Rect::new(cx - 100.0, 320.0, 200.0, 50.0),
                audio_label(sounds_enabled),
                ButtonAction::ToggleAudio,
                mini,
            ),
            button(
                Rect::new(cx - 100.0, 390.0, 200.0, 50.0),
                "QUIT".into(),
                ButtonAction::Quit,
                mini,
            ),
        ],
        Variant::Full => vec![
            button(
                Rect::new(cx - 120.0, 300.0, 240.0, 60.0),
                "START SPACEK".into(),
                ButtonAction::Start,
                Rgb(80, 150, 80),
            ),
            button(
                Rect::new(cx - 120.0, 380.0, 240.0, 50.0),
                audio_label(sounds_enabled),
                ButtonAction::ToggleAudio,
                Rgb(80, 80, 150),
            ),
            button(
                Rect::new(cx - 120.0, 450.0, 240.0, 50.0),
                "TEST SOUNDS".into(),
                ButtonAction::TestSounds,
                Rgb(150, 150, 80),
            ),
            button(
                Rect::new(cx - 120.0, 520.0, 240.0, 50.0),
                "QUIT".into(),
                ButtonAction::Quit,
                Rgb(150, 80, 80),
            ),
        ],
    }
}

fn create_stars(variant: Variant, rng: &mut impl Rng) -> Vec<Star> {
    const PALETTE: [Rgb; 4] = [
        Rgb(255, 255, 255),
        Rgb(255, 255, 200),
        Rgb(200, 255, 255),
        Rgb(255, 200, 255),
    ];
    let (count, span, max_size) = match variant {
        Variant::Mini => (60, WORLD_WIDTH * 2.0, 3),
        Variant::Full => (120, WORLD_WIDTH * 6.0, 4),
    };

    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..=span),
            y: rng.gen_range(0.0..=WORLD_HEIGHT),
            size: rng.gen_range(1..=max_size) as f32,
            speed: match variant {
                Variant::Mini => 0.5,
                Variant::Full => rng.gen_range(0.02..=0.3),
            },
            twinkle: rng.gen_range(0..=100) as f32,
            color: match variant {
                Variant::Mini => Rgb::WHITE,
                Variant::Full => PALETTE[rng.gen_range(0..PALETTE.len())],
            },
        })
        .collect()
}

/// Reset the player and run statistics and lay out level 1.
pub fn setup(world: &mut GameWorld, rng: &mut impl Rng) {
    world.player = Player::new();
    world.controls = Controls::default();
    world.camera_x = 0.0;
    world.score = 0;
    world.coins_collected = 0;
    world.enemies_defeated = 0;
    world.lasers.clear();
    world.particles.clear();
    world.stars = create_stars(world.variant, rng);
    load_level(world, 1, rng);
}

pub fn start_game(world: &mut GameWorld, rng: &mut impl Rng) {
    world.status = GameStatus::Playing;
    setup(world, rng);
    info!(variant = ?world.variant, high_score = world.high_score, "game started");
}

/// Leave `Playing` for a terminal screen, recording a new high score.
fn finish(world: &mut GameWorld, status: GameStatus) {
    world.status = status;
    world.controls = Controls::default();
    if status == GameStatus::Victory {
        // The fountain draws in screen space; drop the last level's debris.
        world.particles.clear();
    }
    if world.score > world.high_score {
        world.high_score = world.score;
    }
    info!(?status, score = world.score, high_score = world.high_score, "game finished");
}

// ── Per-frame tick ──────────────────────────────────────────────────────────

/// Advance the simulation by one frame.
pub fn tick(world: &mut GameWorld, rng: &mut impl Rng) {
    world.frame += 1;
    match world.status {
        GameStatus::Menu => update_menu(world),
        GameStatus::Playing => update_playing(world, rng),
        GameStatus::Victory => update_fountain(&mut world.particles, rng),
        GameStatus::GameOver => {}
    }
}

fn update_menu(world: &mut GameWorld) {
    for star in world.stars.iter_mut() {
        match world.variant {
            Variant::Mini => star.x = (star.x - star.speed).rem_euclid(WORLD_WIDTH * 2.0),
            Variant::Full => {
                star.x -= star.speed;
                if star.x < -20.0 {
                    star.x = WORLD_WIDTH + 20.0;
                }
                star.twinkle += 1.0;
            }
        }
    }
    for button in world.buttons.iter_mut() {
        button.click_timer = button.click_timer.saturating_sub(1);
        button.glow_timer += 1;
    }
}

/// Parallax drift of the starfield while playing (full variant only).
fn update_stars(world: &mut GameWorld) {
    if world.variant != Variant::Full {
        return;
    }
    let camera_x = world.camera_x;
    for star in world.stars.iter_mut() {
        star.x -= star.speed * 0.5;
        if star.x < camera_x - 200.0 {
            star.x = camera_x + WORLD_WIDTH + 200.0;
        }
        star.twinkle += 0.5;
    }
}

/// The full gameplay pipeline, in a fixed order.
fn update_playing(world: &mut GameWorld, rng: &mut impl Rng) {
    let variant = world.variant;

    // ── 1. Player ────────────────────────────────────────────────────────────
    animate_pose(&mut world.player);
    world.player.shield_timer = world.player.shield_timer.saturating_sub(1);
    step_player(&mut world.player, &world.controls, &world.platforms, variant);
    world.camera_x = follow_camera(world.camera_x, world.player.x);
    update_stars(world);

    // ── 2. Enemies, pickups, projectiles, particles ──────────────────────────
    update_enemies(world, rng);
    for power_up in world.power_ups.iter_mut() {
        animate_power_up(power_up);
    }
    for coin in world.coins.iter_mut() {
        animate_coin(coin, variant);
    }
    update_lasers(world, rng);
    update_particles(&mut world.particles);

    // ── 3. Player ↔ enemy contact ────────────────────────────────────────────
    if world.player.invulnerable > 0 {
        world.player.invulnerable -= 1;
    } else if !world.player.has_shield() {
        let player_rect = world.player.rect();
        let touched = world
            .enemies
            .iter()
            .any(|e| e.alive && player_rect.intersects(&e.rect()));
        if touched {
            take_damage(world, rng);
        }
    }

    // ── 4. Collection ────────────────────────────────────────────────────────
    collect_power_ups(world, rng);
    collect_coins(world, rng);

    // ── 5. Survival ──────────────────────────────────────────────────────────
    if has_oxygen(variant) {
        world.player.oxygen -= OXYGEN_DRAIN;
        if world.player.oxygen <= 0.0 {
            take_damage(world, rng);
            world.player.oxygen = METER_MAX;
        }
    }
    if world.player.y > FALL_LIMIT_Y {
        take_damage(world, rng);
    }

    // ── 6. Progression ───────────────────────────────────────────────────────
    check_level_end(world, rng);
    // Running out of lives overrides a level finished on the same frame.
    if world.player.lives == 0 {
        finish(world, GameStatus::GameOver);
    }
}

fn check_level_end(world: &mut GameWorld, rng: &mut impl Rng) {
    if world.player.x <= level_end_x(world.variant, world.level) {
        return;
    }
    if world.level >= level_count(world.variant) {
        finish(world, GameStatus::Victory);
        return;
    }

    let next = world.level + 1;
    load_level(world, next, rng);
    let player = &mut world.player;
    player.x = PLAYER_START_X;
    player.y = PLAYER_START_Y;
    player.vx = 0.0;
    player.vy = 0.0;
    world.camera_x = 0.0;
    world.lasers.clear();
    world.score += level_bonus(world.variant);

    emit(world, SoundCue::PowerUp);
    spawn_particles(
        &mut world.particles,
        PLAYER_START_X + PLAYER_WIDTH / 2.0,
        PLAYER_START_Y + PLAYER_HEIGHT / 2.0,
        Rgb(0, 255, 0),
        40,
        ParticleKind::Spark,
        rng,
    );
}

// ── Input ─────────────────────────────────────────────────────────────────────

pub fn is_left(key: Key) -> bool {
    matches!(key, Key::A | Key::Left)
}

pub fn is_right(key: Key) -> bool {
    matches!(key, Key::D | Key::Right)
}

pub fn is_jump(key: Key) -> bool {
    matches!(key, Key::Space | Key::W | Key::Up)
}

/// Handle a key press.  Returns a command when the host must act.
pub fn key_down(world: &mut GameWorld, key: Key, rng: &mut impl Rng) -> Option<Command> {
    match world.status {
        GameStatus::Menu => match key {
            Key::Enter => {
                emit(world, SoundCue::Click);
                start_game(world, rng);
            }
            Key::M => toggle_audio(world),
            Key::T if world.variant == Variant::Full => test_sounds(world),
            Key::Escape => return Some(Command::Quit),
            _ => {}
        },
        GameStatus::Playing => {
            if is_left(key) {
                world.controls.move_left = true;
                world.player.facing = Facing::Left;
            } else if is_right(key) {
                world.controls.move_right = true;
                world.player.facing = Facing::Right;
            } else if is_jump(key) {
                world.controls.jump_held = true;
                jump(world, rng);
            } else if key == Key::X {
                fire_laser(world, rng);
            } else if key == Key::Escape {
                emit(world, SoundCue::Click);
                world.controls = Controls::default();
                world.status = GameStatus::Menu;
                info!(score = world.score, "back to menu");
            }
        }
        GameStatus::GameOver | GameStatus::Victory => match key {
            Key::Enter => {
                emit(world, SoundCue::Click);
                start_game(world, rng);
            }
            Key::Escape => {
                emit(world, SoundCue::Click);
                world.status = GameStatus::Menu;
            }
            _ => {}
        },
    }
    None
}

pub fn key_up(world: &mut GameWorld, key: Key) {
    if is_left(key) {
        world.controls.move_left = false;
    } else if is_right(key) {
        world.controls.move_right = false;
    } else if is_jump(key) {
        world.controls.jump_held = false;
    }
}

/// Hover feedback for the menu buttons.
pub fn mouse_move(world: &mut GameWorld, x: f32, y: f32) {
    if world.status != GameStatus::Menu {
        return;
    }
    for button in world.buttons.iter_mut() {
        button.hovered = button.rect.contains_point(x, y);
    }
}

/// Click a menu button, if one is under the pointer.
pub fn mouse_down(world: &mut GameWorld, x: f32, y: f32, rng: &mut impl Rng) -> Option<Command> {
    if world.status != GameStatus::Menu {
        return None;
    }
    let button = world.buttons.iter_mut().find(|b| b.rect.contains_point(x, y))?;
    button.click_timer = 10;
    let action = button.action;
    emit(world, SoundCue::Click);
    press_button(world, action, rng)
}

pub fn press_button(
    world: &mut GameWorld,
    action: ButtonAction,
    rng: &mut impl Rng,
) -> Option<Command> {
    match action {
        ButtonAction::Start => start_game(world, rng),
        ButtonAction::ToggleAudio => toggle_audio(world),
        ButtonAction::TestSounds => test_sounds(world),
        ButtonAction::Quit => return Some(Command::Quit),
    }
    None
}

pub fn toggle_audio(world: &mut GameWorld) {
    world.sounds_enabled = !world.sounds_enabled;
    let label = audio_label(world.sounds_enabled);
    if let Some(button) = world
        .buttons
        .iter_mut()
        .find(|b| b.action == ButtonAction::ToggleAudio)
    {
        button.label = label;
    }
    if !world.sounds_enabled {
        world.sounds.clear();
    }
    emit(world, SoundCue::Click);
    info!(enabled = world.sounds_enabled, "audio toggled");
}

/// Queue every cue once so the host plays the whole set.
pub fn test_sounds(world: &mut GameWorld) {
    info!(enabled = world.sounds_enabled, "sound self-test");
    for cue in SoundCue::ALL {
        emit(world, cue);
    }
}
