//! Per-variant rule tables.

use crate::entities::{EnemyKind, PowerUpKind, Variant};

pub fn jump_impulse(variant: Variant) -> f32 {
    match variant {
        Variant::Mini => -12.0,
        Variant::Full => -16.0,
    }
}

/// Per-frame horizontal acceleration while a direction is held.  `None`
/// snaps straight to full speed.
pub fn acceleration(variant: Variant) -> Option<f32> {
    match variant {
        Variant::Mini => None,
        Variant::Full => Some(0.8),
    }
}

pub fn laser_cap(variant: Variant) -> usize {
    match variant {
        Variant::Mini => 3,
        Variant::Full => 5,
    }
}

pub fn laser_energy(variant: Variant) -> Option<i32> {
    match variant {
        Variant::Mini => None,
        Variant::Full => Some(crate::constants::LASER_ENERGY),
    }
}

pub fn invulnerability_frames(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 120,
        Variant::Full => 200,
    }
}

pub fn enemy_kill_score(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 100,
        Variant::Full => 150,
    }
}

pub fn enemy_hit_score(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 20,
        Variant::Full => 50,
    }
}

pub fn coin_score(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 50,
        Variant::Full => 100,
    }
}

pub fn level_bonus(variant: Variant) -> u32 {
    match variant {
        Variant::Mini => 0,
        Variant::Full => 3000,
    }
}

pub fn has_oxygen(variant: Variant) -> bool {
    variant == Variant::Full
}

pub fn has_patrol_pauses(variant: Variant) -> bool {
    variant == Variant::Full
}

pub fn enemy_health(kind: EnemyKind) -> u32 {
    match kind {
        EnemyKind::Standard | EnemyKind::Flyer => 1,
        EnemyKind::Jumper => 2,
        EnemyKind::Robot => 3,
    }
}

pub fn power_up_score(kind: PowerUpKind) -> u32 {
    match kind {
        PowerUpKind::Energy => 200,
        PowerUpKind::Oxygen => 150,
        PowerUpKind::Life => 750,
        PowerUpKind::Jetpack => 300,
        PowerUpKind::Shield => 400,
        PowerUpKind::Speed => 250,
    }
}
