//! Player lasers: spawning under the on-screen cap, flight, and hits.

use rand::Rng;

use super::emit;
use super::enemy::damage_enemy;
use super::particles::spawn_particles;
use super::tables::{laser_cap, laser_energy};
use crate::constants::{
    LASER_ENERGY_COST, LASER_MARGIN, LASER_SPEED, LASER_TRAIL_LEN, WORLD_WIDTH,
};
use crate::entities::{Facing, GameWorld, Laser, ParticleKind, Rgb, SoundCue, Variant};

/// Fire a laser from the player's muzzle.  Returns false when the cap
/// of live lasers is already reached.
pub fn fire_laser(world: &mut GameWorld, rng: &mut impl Rng) -> bool {
    if world.lasers.len() >= laser_cap(world.variant) {
        return false;
    }

    let p = &world.player;
    let x = p.x + match p.facing {
        Facing::Right => 45.0,
        Facing::Left => -20.0,
    };
    let y = p.y + 20.0;

    world.lasers.push(Laser {
        x,
        y,
        direction: p.facing,
        energy: laser_energy(world.variant),
        alive: true,
        trail: Vec::new(),
    });
    emit(world, SoundCue::LaserShoot);
    if world.variant == Variant::Full {
        spawn_particles(&mut world.particles, x, y, Rgb(0, 255, 255), 10, ParticleKind::Spark, rng);
    }
    true
}

/// Move a laser one frame and mark it dead when it runs out of range.
pub fn step_laser(laser: &mut Laser, camera_x: f32) {
    laser.trail.push((laser.x, laser.y));
    if laser.trail.len() > LASER_TRAIL_LEN {
        laser.trail.remove(0);
    }

    laser.x += LASER_SPEED * laser.direction.sign();
    if let Some(energy) = laser.energy.as_mut() {
        *energy -= LASER_ENERGY_COST;
    }

    let out_of_view =
        laser.x < camera_x - LASER_MARGIN || laser.x > camera_x + WORLD_WIDTH + LASER_MARGIN;
    let spent = laser.energy.map_or(false, |e| e <= 0);
    if out_of_view || spent {
        laser.alive = false;
    }
}

/// Advance all lasers, resolve hits against live enemies, then drop the
/// dead ones.  A laser damages at most one enemy and always dies on a hit.
pub fn update_lasers(world: &mut GameWorld, rng: &mut impl Rng) {
    let camera_x = world.camera_x;
    for laser in world.lasers.iter_mut() {
        step_laser(laser, camera_x);
    }

    for li in 0..world.lasers.len() {
        if !world.lasers[li].alive {
            continue;
        }
        let laser_rect = world.lasers[li].rect();
        let target = world
            .enemies
            .iter()
            .position(|e| e.alive && laser_rect.intersects(&e.rect()));

        if let Some(ei) = target {
            emit(world, SoundCue::LaserHit);
            world.lasers[li].alive = false;
            damage_enemy(world, ei, rng);
        }
    }

    world.lasers.retain(|l| l.alive);
}
