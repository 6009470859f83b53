//! Alien patrol behaviour and damage.
//!
//! Every kind patrols `start_x ± territory`.  Walkers (standard, robot,
//! jumper) fall onto platforms; flyers bob on a sine wave instead.  In the
//! full variant enemies sometimes stop for a moment at a territory bound.

use rand::Rng;
use tracing::debug;

use super::emit;
use super::particles::spawn_particles;
use super::tables::{enemy_health, enemy_hit_score, enemy_kill_score, has_patrol_pauses};
use crate::constants::{
    ENEMY_GRAVITY, ENEMY_SIZE, ENEMY_SPEED, FLYER_AMPLITUDE, FLYER_PHASE_STEP,
    FLYER_SPEED_FACTOR, KNOCKBACK_FACTOR,
};
use crate::entities::{
    Enemy, EnemyKind, Facing, GameWorld, ParticleKind, Rgb, SoundCue, Variant,
};
use crate::geometry::Rect;

// ── Construction ──────────────────────────────────────────────────────────────

/// Build an enemy with a random initial patrol direction.
pub fn spawn_enemy(x: f32, y: f32, kind: EnemyKind, territory: f32, rng: &mut impl Rng) -> Enemy {
    let mut vx = if rng.gen_bool(0.5) { ENEMY_SPEED } else { -ENEMY_SPEED };
    let mut flight_phase = 0.0;
    let mut jump_timer = 0;

    match kind {
        EnemyKind::Flyer => {
            flight_phase = rng.gen_range(0.0..std::f32::consts::TAU);
            vx *= FLYER_SPEED_FACTOR;
        }
        EnemyKind::Jumper => jump_timer = rng.gen_range(60..=120),
        EnemyKind::Standard | EnemyKind::Robot => {}
    }

    let health = enemy_health(kind);
    Enemy {
        x,
        y,
        vx,
        vy: 0.0,
        kind,
        start_x: x,
        territory,
        health,
        max_health: health,
        alive: true,
        facing: Facing::from_velocity(vx),
        on_ground: false,
        pause_timer: 0,
        resume_vx: vx,
        jump_timer,
        flight_phase,
        base_y: y,
        anim_timer: rng.gen_range(0..100),
    }
}

// ── Per-frame update ──────────────────────────────────────────────────────────

/// Advance one enemy by a frame.  Dead enemies are left untouched.
pub fn update_enemy(
    enemy: &mut Enemy,
    platforms: &[Rect],
    variant: Variant,
    rng: &mut impl Rng,
) -> Option<SoundCue> {
    if !enemy.alive {
        return None;
    }
    enemy.anim_timer = enemy.anim_timer.wrapping_add(1);

    if enemy.pause_timer > 0 {
        enemy.pause_timer -= 1;
        enemy.vx = 0.0;
        if enemy.pause_timer == 0 {
            enemy.vx = enemy.resume_vx;
        }
        return None;
    }

    let mut cue = None;
    match enemy.kind {
        EnemyKind::Flyer => {
            enemy.flight_phase += FLYER_PHASE_STEP;
            enemy.y = enemy.base_y + enemy.flight_phase.sin() * FLYER_AMPLITUDE;
            if turn_at_bound(enemy) && has_patrol_pauses(variant) {
                pause(enemy, rng.gen_range(30..=60));
            }
        }
        EnemyKind::Jumper => {
            fall_onto_platforms(enemy, platforms);
            enemy.jump_timer -= 1;
            if enemy.jump_timer <= 0 && enemy.on_ground {
                enemy.vy = rng.gen_range(-12..=-8) as f32;
                enemy.jump_timer = rng.gen_range(40..=80);
                cue = Some(SoundCue::Jump);
            }
            turn_at_bound(enemy);
        }
        EnemyKind::Standard | EnemyKind::Robot => {
            fall_onto_platforms(enemy, platforms);
            if turn_at_bound(enemy) && has_patrol_pauses(variant) && rng.gen_range(0..=100) < 30 {
                pause(enemy, rng.gen_range(60..=120));
            }
        }
    }

    if enemy.pause_timer > 0 {
        return cue;
    }
    if enemy.vx != 0.0 {
        enemy.facing = Facing::from_velocity(enemy.vx);
    }
    enemy.x += enemy.vx;
    enemy.y += enemy.vy;
    cue
}

/// Gravity plus snap-to-top against every platform the enemy overlaps
/// while falling.
fn fall_onto_platforms(enemy: &mut Enemy, platforms: &[Rect]) {
    enemy.vy += ENEMY_GRAVITY;
    enemy.on_ground = false;
    for plat in platforms {
        if enemy.vy > 0.0 && enemy.rect().intersects(plat) {
            enemy.y = plat.top() - ENEMY_SIZE;
            enemy.vy = 0.0;
            enemy.on_ground = true;
        }
    }
}

/// Point the enemy back toward its patrol centre once it has strayed past
/// the territory bound.  Returns true when a turn happened.
fn turn_at_bound(enemy: &mut Enemy) -> bool {
    let offset = enemy.x - enemy.start_x;
    if offset.abs() <= enemy.territory {
        return false;
    }
    let inward = -offset.signum();
    let turned = enemy.vx.signum() != inward;
    enemy.vx = enemy.vx.abs() * inward;
    turned
}

fn pause(enemy: &mut Enemy, frames: u32) {
    enemy.resume_vx = enemy.vx;
    enemy.facing = Facing::from_velocity(enemy.vx);
    enemy.vx = 0.0;
    enemy.pause_timer = frames;
}

// ── Damage ────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Remove one hit point.  Kills the enemy at zero health; otherwise
    /// knocks it back.  Returns true if this hit killed it.
    pub fn take_hit(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.health = self.health.saturating_sub(1);
        if self.health == 0 {
            self.alive = false;
            true
        } else {
            self.vx *= -KNOCKBACK_FACTOR;
            self.resume_vx *= -KNOCKBACK_FACTOR;
            false
        }
    }
}

/// Apply one damage tick to `world.enemies[index]` with its score, sound
/// and particle side effects.  Returns true if the enemy died.
pub fn damage_enemy(world: &mut GameWorld, index: usize, rng: &mut impl Rng) -> bool {
    let Some(enemy) = world.enemies.get_mut(index) else {
        return false;
    };
    let was_alive = enemy.alive;
    let died = enemy.take_hit();
    let (cx, cy) = (enemy.rect().center_x(), enemy.rect().center_y());
    let kind = enemy.kind;
    if !was_alive {
        return false;
    }

    if died {
        let (cue, count) = match world.variant {
            Variant::Mini => (SoundCue::Explosion, 10),
            Variant::Full => (SoundCue::EnemyDeath, 15),
        };
        emit(world, cue);
        let red = Rgb(255, 100, 100);
        spawn_particles(&mut world.particles, cx, cy, red, count, ParticleKind::Normal, rng);
        world.enemies_defeated += 1;
        world.score += enemy_kill_score(world.variant);
        debug!(?kind, score = world.score, "enemy destroyed");
    } else {
        let count = match world.variant {
            Variant::Mini => 5,
            Variant::Full => 8,
        };
        emit(world, SoundCue::Hurt);
        let yellow = Rgb(255, 255, 0);
        spawn_particles(&mut world.particles, cx, cy, yellow, count, ParticleKind::Normal, rng);
        world.score += enemy_hit_score(world.variant);
    }
    died
}

/// Advance every enemy and queue whatever cues they produced.
pub fn update_enemies(world: &mut GameWorld, rng: &mut impl Rng) {
    let variant = world.variant;
    let mut cues = Vec::new();
    for enemy in world.enemies.iter_mut() {
        if let Some(cue) = update_enemy(enemy, &world.platforms, variant, rng) {
            cues.push(cue);
        }
    }
    for cue in cues {
        emit(world, cue);
    }
}
