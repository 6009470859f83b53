//! Static level layouts and the loader that rebuilds a level from them.

use rand::Rng;
use tracing::info;

use crate::compute::enemy::spawn_enemy;
use crate::constants::WORLD_WIDTH;
use crate::entities::{Coin, EnemyKind, GameWorld, PowerUp, PowerUpKind, Variant};
use crate::geometry::Rect;

use EnemyKind::{Flyer, Jumper, Robot, Standard};
use PowerUpKind::{Energy, Jetpack, Life, Oxygen, Shield, Speed};

struct Layout {
    platforms: &'static [(f32, f32, f32, f32)],
    /// (x, y, kind, territory half-width)
    enemies: &'static [(f32, f32, EnemyKind, f32)],
    power_ups: &'static [(f32, f32, PowerUpKind)],
    coins: &'static [(f32, f32)],
    /// Crossing this x finishes the level.
    end_x: f32,
}

// ── Mini: one short stretch ───────────────────────────────────────────────────

static MINI: Layout = Layout {
    platforms: &[
        (0.0, 540.0, WORLD_WIDTH * 2.0, 60.0),
        (200.0, 450.0, 120.0, 20.0),
        (400.0, 400.0, 140.0, 20.0),
        (600.0, 350.0, 120.0, 20.0),
        (800.0, 380.0, 160.0, 20.0),
        (1000.0, 320.0, 120.0, 20.0),
    ],
    enemies: &[
        (250.0, 430.0, Standard, 80.0),
        (450.0, 380.0, Standard, 80.0),
        (850.0, 360.0, Standard, 80.0),
    ],
    power_ups: &[],
    coins: &[(280.0, 410.0), (520.0, 300.0), (920.0, 340.0)],
    end_x: 1100.0,
};

// ── Full, level 1: space station ──────────────────────────────────────────────

static STATION: Layout = Layout {
    platforms: &[
        (0.0, 540.0, WORLD_WIDTH * 3.0, 60.0),
        (200.0, 450.0, 120.0, 20.0),
        (400.0, 400.0, 140.0, 20.0),
        (600.0, 350.0, 120.0, 20.0),
        (800.0, 380.0, 160.0, 20.0),
        (1100.0, 320.0, 120.0, 20.0),
        (1300.0, 400.0, 200.0, 30.0),
        (1600.0, 350.0, 150.0, 20.0),
        (1900.0, 300.0, 120.0, 20.0),
        (2200.0, 450.0, 300.0, 30.0),
    ],
    enemies: &[
        (250.0, 430.0, Standard, 100.0),
        (450.0, 380.0, Jumper, 120.0),
        (650.0, 330.0, Flyer, 140.0),
        (850.0, 360.0, Robot, 100.0),
        (1150.0, 300.0, Standard, 80.0),
        (1400.0, 370.0, Flyer, 200.0),
        (1700.0, 330.0, Jumper, 130.0),
        (2000.0, 280.0, Robot, 150.0),
    ],
    power_ups: &[
        (350.0, 420.0, Energy),
        (550.0, 320.0, Oxygen),
        (750.0, 350.0, Jetpack),
        (950.0, 350.0, Shield),
        (1200.0, 280.0, Life),
        (1500.0, 320.0, Energy),
        (1800.0, 270.0, Shield),
        (2100.0, 430.0, Life),
    ],
    coins: &[
        (280.0, 410.0),
        (520.0, 300.0),
        (680.0, 310.0),
        (920.0, 340.0),
        (1080.0, 280.0),
        (1450.0, 350.0),
        (1750.0, 310.0),
        (2050.0, 410.0),
    ],
    end_x: 2400.0,
};

// ── Full, level 2: alien base ─────────────────────────────────────────────────

static ALIEN_BASE: Layout = Layout {
    platforms: &[
        (0.0, 540.0, WORLD_WIDTH * 3.0, 60.0),
        (150.0, 480.0, 100.0, 20.0),
        (320.0, 420.0, 80.0, 20.0),
        (480.0, 360.0, 100.0, 20.0),
        (640.0, 300.0, 80.0, 20.0),
        (800.0, 380.0, 120.0, 20.0),
        (980.0, 320.0, 100.0, 20.0),
        (1150.0, 260.0, 120.0, 20.0),
        (1320.0, 400.0, 150.0, 20.0),
        (1550.0, 340.0, 100.0, 20.0),
        (1750.0, 280.0, 120.0, 20.0),
        (1950.0, 400.0, 250.0, 30.0),
    ],
    enemies: &[
        (180.0, 460.0, Jumper, 40.0),
        (350.0, 400.0, Robot, 50.0),
        (510.0, 340.0, Flyer, 60.0),
        (670.0, 280.0, Standard, 40.0),
        (830.0, 360.0, Robot, 70.0),
        (1010.0, 300.0, Flyer, 50.0),
        (1180.0, 240.0, Jumper, 50.0),
        (1350.0, 380.0, Standard, 80.0),
        (1580.0, 320.0, Robot, 60.0),
        (1780.0, 260.0, Flyer, 70.0),
        (2000.0, 380.0, Standard, 100.0),
    ],
    power_ups: &[
        (220.0, 440.0, Shield),
        (380.0, 380.0, Energy),
        (540.0, 320.0, Jetpack),
        (700.0, 240.0, Oxygen),
        (860.0, 340.0, Life),
        (1040.0, 280.0, Speed),
        (1210.0, 220.0, Energy),
        (1380.0, 360.0, Shield),
        (1610.0, 300.0, Jetpack),
        (1810.0, 240.0, Life),
    ],
    coins: &[
        (250.0, 420.0),
        (410.0, 360.0),
        (570.0, 300.0),
        (730.0, 220.0),
        (890.0, 320.0),
        (1070.0, 260.0),
        (1240.0, 200.0),
        (1410.0, 340.0),
        (1640.0, 280.0),
        (1840.0, 220.0),
    ],
    end_x: 2200.0,
};

fn layout(variant: Variant, level: u32) -> &'static Layout {
    match (variant, level) {
        (Variant::Mini, _) => &MINI,
        (Variant::Full, 1) => &STATION,
        (Variant::Full, _) => &ALIEN_BASE,
    }
}

/// Number of levels in a run of this variant.
pub fn level_count(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 1,
        Variant::Full => 2,
    }
}

/// x coordinate past which the given level is finished.
pub fn level_end_x(variant: Variant, level: u32) -> f32 {
    layout(variant, level).end_x
}

/// Throw away the current level's platforms, enemies and pickups and
/// build `level` from its layout table.
pub fn load_level(world: &mut GameWorld, level: u32, rng: &mut impl Rng) {
    let layout = layout(world.variant, level);
    world.level = level;

    world.platforms = layout
        .platforms
        .iter()
        .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
        .collect();
    world.enemies = layout
        .enemies
        .iter()
        .map(|&(x, y, kind, territory)| spawn_enemy(x, y, kind, territory, rng))
        .collect();
    world.power_ups = layout
        .power_ups
        .iter()
        .map(|&(x, y, kind)| PowerUp::new(x, y, kind))
        .collect();
    world.coins = layout.coins.iter().map(|&(x, y)| Coin::new(x, y)).collect();

    info!(
        variant = ?world.variant,
        level,
        enemies = world.enemies.len(),
        coins = world.coins.len(),
        "level loaded"
    );
}
