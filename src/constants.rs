//! World dimensions and the tunables shared by both variants.
//! Variant-specific values live in `compute::tables`.

// ── World ─────────────────────────────────────────────────────────────────────

pub const WORLD_WIDTH: f32 = 800.0;
pub const WORLD_HEIGHT: f32 = 600.0;

/// Falling past this line costs a life.
pub const FALL_LIMIT_Y: f32 = WORLD_HEIGHT + 100.0;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_WIDTH: f32 = 30.0;
pub const PLAYER_HEIGHT: f32 = 40.0;
pub const PLAYER_START_X: f32 = 100.0;
pub const PLAYER_START_Y: f32 = 500.0;
pub const PLAYER_START_LIVES: u32 = 3;

pub const PLAYER_MAX_SPEED: f32 = 6.0;
pub const PLAYER_FRICTION: f32 = 0.85;
/// Horizontal speeds below this snap to zero once friction applies.
pub const PLAYER_STOP_EPSILON: f32 = 0.1;
pub const GRAVITY: f32 = 0.6;
pub const MAX_FALL_SPEED: f32 = 15.0;

/// Respawn x is `max(RESPAWN_MIN_X, camera_x + RESPAWN_CAMERA_OFFSET)`.
pub const RESPAWN_MIN_X: f32 = 100.0;
pub const RESPAWN_CAMERA_OFFSET: f32 = 100.0;

// ── Resource meters (full variant) ────────────────────────────────────────────

pub const METER_MAX: f32 = 100.0;
pub const OXYGEN_DRAIN: f32 = 0.03;
pub const JETPACK_THRUST: f32 = 2.5;
pub const JETPACK_BURN: f32 = 4.0;
/// Fuel regained per frame spent standing on a platform.
pub const JETPACK_REFILL: f32 = 4.0;
pub const SHIELD_FRAMES: u32 = 600;

// ── Camera ────────────────────────────────────────────────────────────────────

/// Player is kept this far from the left edge of the viewport.
pub const CAMERA_LEAD: f32 = 320.0; // WORLD_WIDTH / 2.5
pub const CAMERA_SMOOTHING: f32 = 0.05;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 30.0;
pub const ENEMY_SPEED: f32 = 2.0;
pub const ENEMY_GRAVITY: f32 = 0.5;
pub const FLYER_SPEED_FACTOR: f32 = 0.7;
pub const FLYER_PHASE_STEP: f32 = 0.12;
pub const FLYER_AMPLITUDE: f32 = 35.0;
/// Non-lethal hits reverse the enemy and scale its speed by this.
pub const KNOCKBACK_FACTOR: f32 = 1.5;

// ── Lasers ────────────────────────────────────────────────────────────────────

pub const LASER_SPEED: f32 = 18.0;
pub const LASER_WIDTH: f32 = 14.0;
pub const LASER_HEIGHT: f32 = 6.0;
pub const LASER_ENERGY: i32 = 120;
pub const LASER_ENERGY_COST: i32 = 3;
/// Lasers die once this far outside the viewport.
pub const LASER_MARGIN: f32 = 150.0;
pub const LASER_TRAIL_LEN: usize = 12;

// ── Pickups ───────────────────────────────────────────────────────────────────

pub const COIN_SIZE: f32 = 16.0;
pub const POWER_UP_SIZE: f32 = 30.0;

// ── Particles ─────────────────────────────────────────────────────────────────

pub const PARTICLE_MAX_SIZE: f32 = 7.0;
pub const FOUNTAIN_LIFETIME: u32 = 150;
