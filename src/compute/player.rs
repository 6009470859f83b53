//! Player physics, jumping, the follow camera and damage.

use rand::Rng;
use tracing::debug;

use super::emit;
use super::particles::spawn_particles;
use super::tables::{acceleration, invulnerability_frames, jump_impulse};
use crate::constants::{
    CAMERA_LEAD, CAMERA_SMOOTHING, GRAVITY, JETPACK_BURN, JETPACK_REFILL, JETPACK_THRUST,
    MAX_FALL_SPEED, METER_MAX, PLAYER_FRICTION, PLAYER_HEIGHT, PLAYER_MAX_SPEED,
    PLAYER_START_Y, PLAYER_STOP_EPSILON, PLAYER_WIDTH, RESPAWN_CAMERA_OFFSET, RESPAWN_MIN_X,
};
use crate::entities::{
    Controls, Facing, GameWorld, ParticleKind, Player, Pose, Rgb, SoundCue, Variant,
};
use crate::geometry::Rect;

// ── Movement ──────────────────────────────────────────────────────────────────

/// Steer, fall, integrate and land the player for one frame.
pub fn step_player(player: &mut Player, controls: &Controls, platforms: &[Rect], variant: Variant) {
    // Horizontal
    let steer = match (controls.move_left, controls.move_right) {
        (true, false) => Some(Facing::Left),
        (false, true) => Some(Facing::Right),
        _ => None,
    };
    if let Some(facing) = steer {
        let target = PLAYER_MAX_SPEED * facing.sign();
        player.vx = match acceleration(variant) {
            None => target,
            Some(accel) => {
                (player.vx + accel * facing.sign()).clamp(-PLAYER_MAX_SPEED, PLAYER_MAX_SPEED)
            }
        };
        player.facing = facing;
    } else {
        player.vx *= PLAYER_FRICTION;
        if player.vx.abs() < PLAYER_STOP_EPSILON {
            player.vx = 0.0;
        }
    }

    // Vertical
    if !player.on_ground {
        player.vy += GRAVITY;
    }
    player.vy = player.vy.min(MAX_FALL_SPEED);

    // Integrate
    let old_x = player.x;
    let was_on_ground = player.on_ground;
    player.x = (player.x + player.vx).max(0.0);
    player.y += player.vy;

    land_on_platforms(player, old_x, was_on_ground, platforms, variant);
}

/// Snap the player onto the first platform it is falling into.  The
/// horizontal-span test uses the pre-move x so the player cannot slip
/// sideways through a platform edge.
fn land_on_platforms(
    player: &mut Player,
    old_x: f32,
    was_on_ground: bool,
    platforms: &[Rect],
    variant: Variant,
) {
    player.on_ground = false;
    let rect = player.rect();
    let center = old_x + PLAYER_WIDTH / 2.0;
    // A grounded player at rest still counts as standing on its platform.
    let descending = player.vy > 0.0 || (was_on_ground && player.vy == 0.0);

    for plat in platforms {
        if descending && rect.intersects(plat) && center > plat.left() && center < plat.right() {
            player.y = plat.top() - PLAYER_HEIGHT;
            player.vy = 0.0;
            player.on_ground = true;
            if variant == Variant::Full {
                player.jetpack_fuel = (player.jetpack_fuel + JETPACK_REFILL).min(METER_MAX);
            }
            break;
        }
    }
}

/// Jump from the ground, or burn jetpack fuel while airborne (full only).
pub fn jump(world: &mut GameWorld, rng: &mut impl Rng) {
    let variant = world.variant;
    let player = &mut world.player;

    if player.on_ground {
        player.vy = jump_impulse(variant);
        player.on_ground = false;
        let (px, py) = (player.x, player.y);
        emit(world, SoundCue::Jump);
        if variant == Variant::Full {
            spawn_particles(
                &mut world.particles,
                px + PLAYER_WIDTH / 2.0,
                py + PLAYER_HEIGHT,
                Rgb::WHITE,
                12,
                ParticleKind::Smoke,
                rng,
            );
        }
    } else if variant == Variant::Full && player.jetpack_fuel > 0.0 {
        player.vy -= JETPACK_THRUST;
        player.jetpack_fuel = (player.jetpack_fuel - JETPACK_BURN).max(0.0);
        if player.jetpack_fuel % 25.0 == 0.0 {
            emit(world, SoundCue::Jetpack);
        }
    }
}

/// Ease the camera toward a point that keeps the player left of centre.
pub fn follow_camera(camera_x: f32, player_x: f32) -> f32 {
    let target = (player_x - CAMERA_LEAD).max(0.0);
    camera_x + (target - camera_x) * CAMERA_SMOOTHING
}

// ── Pose animation ────────────────────────────────────────────────────────────

pub const POSE_FACES: [(Pose, &[&str]); 4] = [
    (Pose::Idle, &["^_^", "^_^", "^_^", "o_o", "^_^", "^_^", "-_-", "^_^"]),
    (Pose::Walking, &["^_^", "o_o", "^_^", "-_-", "^_^", "o_o", "~_~", "^_^"]),
    (Pose::Jumping, &["O_O", "O_O", "@_@", "O_O", "O_O", "@_@"]),
    (Pose::Breathing, &["^_^", "^_^", "o_o", "^_^", "-_-", "^_^", "o_o", "^_^"]),
];

pub fn pose_faces(pose: Pose) -> &'static [&'static str] {
    POSE_FACES
        .iter()
        .find(|(p, _)| *p == pose)
        .map(|(_, faces)| *faces)
        .unwrap_or(&["^_^"])
}

/// Face glyph for the player's current animation frame.
pub fn current_face(player: &Player) -> &'static str {
    let faces = pose_faces(player.pose);
    faces[player.pose_frame % faces.len()]
}

pub fn animate_pose(player: &mut Player) {
    if !player.on_ground {
        player.pose = Pose::Jumping;
    } else if player.vx.abs() > 0.5 {
        player.pose = Pose::Walking;
    } else {
        if !matches!(player.pose, Pose::Idle | Pose::Breathing) {
            player.pose = Pose::Idle;
        }
        player.breathing_cycle += 1;
        if player.breathing_cycle > 200 {
            player.pose = match player.pose {
                Pose::Idle => Pose::Breathing,
                _ => Pose::Idle,
            };
            player.breathing_cycle = 0;
        }
    }

    player.pose_timer += 1;
    if player.pose_timer > 8 {
        player.pose_timer = 0;
        player.pose_frame = (player.pose_frame + 1) % pose_faces(player.pose).len();
    }
}

// ── Damage ────────────────────────────────────────────────────────────────────

/// Cost the player a life unless still invulnerable.  While lives remain
/// the player respawns near the camera with zero velocity.
pub fn take_damage(world: &mut GameWorld, rng: &mut impl Rng) {
    if world.player.invulnerable > 0 {
        return;
    }

    world.player.lives = world.player.lives.saturating_sub(1);
    world.player.invulnerable = invulnerability_frames(world.variant);
    emit(world, SoundCue::Hurt);

    let (cx, cy) = (world.player.x + PLAYER_WIDTH / 2.0, world.player.y + PLAYER_HEIGHT / 2.0);
    let (count, kind) = match world.variant {
        Variant::Mini => (15, ParticleKind::Normal),
        Variant::Full => (25, ParticleKind::Spark),
    };
    spawn_particles(&mut world.particles, cx, cy, Rgb(255, 100, 100), count, kind, rng);
    debug!(lives = world.player.lives, "player damaged");

    if world.player.lives > 0 {
        let player = &mut world.player;
        player.x = RESPAWN_MIN_X.max(world.camera_x + RESPAWN_CAMERA_OFFSET);
        player.y = PLAYER_START_Y;
        player.vx = 0.0;
        player.vy = 0.0;
        debug!(x = player.x, "player respawned");
    }
}
