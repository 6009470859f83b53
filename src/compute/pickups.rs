//! Coins and power-ups: idle animation and collection.

use rand::Rng;
use tracing::debug;

use super::emit;
use super::particles::spawn_particles;
use super::tables::{coin_score, power_up_score};
use crate::constants::{COIN_SIZE, METER_MAX, POWER_UP_SIZE, SHIELD_FRAMES};
use crate::entities::{Coin, GameWorld, ParticleKind, PowerUp, PowerUpKind, Rgb, SoundCue, Variant};

// ── Animation ─────────────────────────────────────────────────────────────────

pub fn animate_coin(coin: &mut Coin, variant: Variant) {
    if coin.collected {
        return;
    }
    coin.rotation += 8.0;
    match variant {
        Variant::Mini => coin.y = coin.origin_y + (coin.rotation * 0.05).sin() * 6.0,
        Variant::Full => {
            coin.float_timer += 0.3;
            coin.y = coin.origin_y + coin.float_timer.sin() * 6.0;
            coin.sparkle_timer += 1;
        }
    }
}

pub fn animate_power_up(power_up: &mut PowerUp) {
    if power_up.collected {
        return;
    }
    power_up.float_timer += 0.15;
    power_up.y = power_up.origin_y + power_up.float_timer.sin() * 12.0;
    power_up.glow_timer += 1;
}

// ── Collection ────────────────────────────────────────────────────────────────

/// Collect every uncollected coin the player overlaps.
pub fn collect_coins(world: &mut GameWorld, rng: &mut impl Rng) {
    let player_rect = world.player.rect();
    let (count, kind) = match world.variant {
        Variant::Mini => (10, ParticleKind::Normal),
        Variant::Full => (15, ParticleKind::Spark),
    };

    for i in 0..world.coins.len() {
        let coin = &mut world.coins[i];
        if coin.collected || !player_rect.intersects(&coin.rect()) {
            continue;
        }
        coin.collected = true;
        let (cx, cy) = (coin.x + COIN_SIZE / 2.0, coin.y + COIN_SIZE / 2.0);

        world.coins_collected += 1;
        world.score += coin_score(world.variant);
        emit(world, SoundCue::Collect);
        spawn_particles(&mut world.particles, cx, cy, Rgb(255, 215, 0), count, kind, rng);
    }
}

/// Collect every uncollected power-up the player overlaps.
pub fn collect_power_ups(world: &mut GameWorld, rng: &mut impl Rng) {
    let player_rect = world.player.rect();
    for i in 0..world.power_ups.len() {
        let power_up = &world.power_ups[i];
        if power_up.collected || !player_rect.intersects(&power_up.rect()) {
            continue;
        }
        apply_power_up(world, i, rng);
    }
}

/// Mark a power-up collected and apply its effect.
pub fn apply_power_up(world: &mut GameWorld, index: usize, rng: &mut impl Rng) {
    let Some(power_up) = world.power_ups.get_mut(index) else {
        return;
    };
    if power_up.collected {
        return;
    }
    power_up.collected = true;
    let kind = power_up.kind;
    let (cx, cy) = (power_up.x + POWER_UP_SIZE / 2.0, power_up.y + POWER_UP_SIZE / 2.0);

    emit(world, SoundCue::PowerUp);
    spawn_particles(&mut world.particles, cx, cy, Rgb(255, 255, 0), 20, ParticleKind::Spark, rng);

    let player = &mut world.player;
    match kind {
        PowerUpKind::Energy => player.energy = (player.energy + 60.0).min(METER_MAX),
        PowerUpKind::Oxygen => player.oxygen = (player.oxygen + 80.0).min(METER_MAX),
        PowerUpKind::Life => player.lives += 1,
        PowerUpKind::Jetpack => player.jetpack_fuel = METER_MAX,
        PowerUpKind::Shield => player.shield_timer = SHIELD_FRAMES,
        PowerUpKind::Speed => {}
    }
    world.score += power_up_score(kind);
    debug!(?kind, score = world.score, "power-up collected");
}
