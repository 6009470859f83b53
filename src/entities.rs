//! All game entity types.  Pure data, no logic beyond bounding boxes.

use crate::constants::{
    COIN_SIZE, ENEMY_SIZE, LASER_HEIGHT, LASER_WIDTH, METER_MAX, PLAYER_HEIGHT, PLAYER_START_LIVES,
    PLAYER_START_X, PLAYER_START_Y, PLAYER_WIDTH, POWER_UP_SIZE,
};
use crate::geometry::Rect;

// ── Enums ─────────────────────────────────────────────────────────────────────

/// Which rule set is running: the cut-down single level or the full game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Mini,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Menu,
    Playing,
    GameOver,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    pub fn from_velocity(vx: f32) -> Facing {
        if vx > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyKind {
    /// Walks its territory under gravity.
    Standard,
    /// Walks like a standard alien and hops on a random timer.
    Jumper,
    /// Ignores gravity, bobbing on a sine wave around its spawn height.
    Flyer,
    /// Standard movement, three hit points.
    Robot,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    Energy,
    Oxygen,
    Life,
    Jetpack,
    Shield,
    /// Score only.
    Speed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
    /// Falls under light gravity.
    Normal,
    /// Fast burst that decays with drag.
    Spark,
    /// Drifts upward and slows.
    Smoke,
}

/// Fire-and-forget audio cues queued by the simulation for the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Jump,
    Click,
    Explosion,
    Hurt,
    Jetpack,
    LaserShoot,
    LaserHit,
    EnemyDeath,
    PowerUp,
    Collect,
}

impl SoundCue {
    pub const ALL: [SoundCue; 10] = [
        SoundCue::Click,
        SoundCue::EnemyDeath,
        SoundCue::Explosion,
        SoundCue::Hurt,
        SoundCue::Jetpack,
        SoundCue::Jump,
        SoundCue::LaserHit,
        SoundCue::LaserShoot,
        SoundCue::PowerUp,
        SoundCue::Collect,
    ];

    /// Asset file backing this cue.  Several cues share a file.
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Jump | SoundCue::Collect => "jump.mp3",
            SoundCue::Click | SoundCue::PowerUp => "button_click.mp3",
            SoundCue::Explosion => "explode.mp3",
            SoundCue::Hurt => "impact.mp3",
            SoundCue::Jetpack => "jetpack.mp3",
            SoundCue::LaserShoot => "laser_shoot.mp3",
            SoundCue::LaserHit => "laser_hit.mp3",
            SoundCue::EnemyDeath => "enemy_death.mp3",
        }
    }
}

/// Physical keys the simulation understands.  The host maps its own key
/// codes onto these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    A,
    D,
    W,
    Left,
    Right,
    Up,
    Space,
    X,
    Enter,
    Escape,
    M,
    T,
}

/// Requests the simulation makes of its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
}

// ── Colour ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Build a colour from unbounded channels, clamping each to 0..=255.
    pub fn clamped(r: f32, g: f32, b: f32) -> Rgb {
        let c = |v: f32| v.clamp(0.0, 255.0) as u8;
        Rgb(c(r), c(g), c(b))
    }

    pub fn scale(self, factor: f32) -> Rgb {
        Rgb::clamped(
            self.0 as f32 * factor,
            self.1 as f32 * factor,
            self.2 as f32 * factor,
        )
    }

    pub fn offset(self, delta: f32) -> Rgb {
        Rgb::clamped(
            self.0 as f32 + delta,
            self.1 as f32 + delta,
            self.2 as f32 + delta,
        )
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Walking,
    Jumping,
    Breathing,
}

#[derive(Clone, Debug)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing: Facing,
    pub lives: u32,
    /// Frames left during which damage is ignored.
    pub invulnerable: u32,
    pub energy: f32,
    pub oxygen: f32,
    pub jetpack_fuel: f32,
    /// Frames of shield left; zero means no shield.
    pub shield_timer: u32,
    pub pose: Pose,
    pub pose_frame: usize,
    pub pose_timer: u32,
    pub breathing_cycle: u32,
}

impl Player {
    pub fn new() -> Self {
        Player {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing: Facing::Right,
            lives: PLAYER_START_LIVES,
            invulnerable: 0,
            energy: METER_MAX,
            oxygen: METER_MAX,
            jetpack_fuel: METER_MAX,
            shield_timer: 0,
            pose: Pose::Idle,
            pose_frame: 0,
            pose_timer: 0,
            breathing_cycle: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    pub fn has_shield(&self) -> bool {
        self.shield_timer > 0
    }
}

impl Default for Player {
    fn default() -> Self {
        Player::new()
    }
}

/// Held-key state, set by key events and read once per frame.
#[derive(Clone, Debug, Default)]
pub struct Controls {
    pub move_left: bool,
    pub move_right: bool,
    /// Only used to draw the jetpack flame.
    pub jump_held: bool,
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub kind: EnemyKind,
    /// Patrol centre.
    pub start_x: f32,
    /// Patrol half-width.
    pub territory: f32,
    pub health: u32,
    pub max_health: u32,
    /// Dead enemies stay in the level as inert tombstones.
    pub alive: bool,
    pub facing: Facing,
    pub on_ground: bool,
    /// Frames left standing still at a territory bound.
    pub pause_timer: u32,
    /// Velocity restored once a pause ends.
    pub resume_vx: f32,
    /// Jumper countdown to the next hop.
    pub jump_timer: i32,
    /// Flyer sine phase and the height it bobs around.
    pub flight_phase: f32,
    pub base_y: f32,
    pub anim_timer: u32,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }
}

// ── Projectiles & particles ───────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Laser {
    pub x: f32,
    pub y: f32,
    pub direction: Facing,
    /// Remaining range budget; `None` means only the camera bounds apply.
    pub energy: Option<i32>,
    pub alive: bool,
    /// Recent positions, oldest first.
    pub trail: Vec<(f32, f32)>,
}

impl Laser {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, LASER_WIDTH, LASER_HEIGHT)
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub color: Rgb,
    pub lifetime: u32,
    pub max_lifetime: u32,
    pub size: f32,
    pub kind: ParticleKind,
    pub rotation: f32,
}

impl Particle {
    /// Remaining life as a fraction of the original, 0.0..=1.0.
    pub fn alpha(&self) -> f32 {
        if self.max_lifetime == 0 {
            0.0
        } else {
            self.lifetime as f32 / self.max_lifetime as f32
        }
    }
}

// ── Collectibles ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub origin_y: f32,
    /// Flips to true once and never back.
    pub collected: bool,
    pub rotation: f32,
    pub float_timer: f32,
    pub sparkle_timer: u32,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Coin {
            x,
            y,
            origin_y: y,
            collected: false,
            rotation: 0.0,
            float_timer: 0.0,
            sparkle_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, COIN_SIZE, COIN_SIZE)
    }
}

#[derive(Clone, Debug)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub origin_y: f32,
    pub kind: PowerUpKind,
    pub collected: bool,
    pub float_timer: f32,
    pub glow_timer: u32,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind) -> Self {
        PowerUp {
            x,
            y,
            origin_y: y,
            kind,
            collected: false,
            float_timer: 0.0,
            glow_timer: 0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, POWER_UP_SIZE, POWER_UP_SIZE)
    }
}

// ── Background & menu ─────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub twinkle: f32,
    pub color: Rgb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Start,
    ToggleAudio,
    TestSounds,
    Quit,
}

#[derive(Clone, Debug)]
pub struct MenuButton {
    pub rect: Rect,
    pub label: String,
    pub action: ButtonAction,
    pub color: Rgb,
    pub hovered: bool,
    /// Frames of pressed-look feedback left after a click.
    pub click_timer: u32,
    pub glow_timer: u32,
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire game.  The frame orchestrator is its only writer; drawing
/// reads it through a shared reference.
#[derive(Clone, Debug)]
pub struct GameWorld {
    pub variant: Variant,
    pub status: GameStatus,
    pub player: Player,
    pub controls: Controls,
    /// 1-based level number.
    pub level: u32,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub lasers: Vec<Laser>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub buttons: Vec<MenuButton>,
    pub camera_x: f32,
    pub score: u32,
    /// Best score of this process; never persisted.
    pub high_score: u32,
    pub coins_collected: u32,
    pub enemies_defeated: u32,
    pub sounds_enabled: bool,
    /// Cues queued this frame, drained by the host.
    pub sounds: Vec<SoundCue>,
    pub frame: u64,
}
