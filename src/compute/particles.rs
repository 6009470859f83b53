//! Cosmetic particle bursts.  Nothing in the gameplay rules reads these;
//! only the draw pass does.

use rand::Rng;

use crate::constants::{FOUNTAIN_LIFETIME, PARTICLE_MAX_SIZE, WORLD_HEIGHT, WORLD_WIDTH};
use crate::entities::{Particle, ParticleKind, Rgb};

/// Spawn `count` particles at a point with a velocity profile chosen by kind.
pub fn spawn_particles(
    particles: &mut Vec<Particle>,
    x: f32,
    y: f32,
    color: Rgb,
    count: usize,
    kind: ParticleKind,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        let (vx, vy) = match kind {
            ParticleKind::Normal => (rng.gen_range(-6.0..=6.0), rng.gen_range(-8.0..=-3.0)),
            ParticleKind::Spark => (rng.gen_range(-10.0..=10.0), rng.gen_range(-12.0..=-4.0)),
            ParticleKind::Smoke => (rng.gen_range(-3.0..=3.0), rng.gen_range(-8.0..=-5.0)),
        };
        let lifetime = rng.gen_range(50..=100);
        particles.push(Particle {
            x,
            y,
            vx,
            vy,
            color,
            lifetime,
            max_lifetime: lifetime,
            size: rng.gen_range(2..=7) as f32,
            kind,
            rotation: rng.gen_range(0.0..360.0),
        });
    }
}

/// Advance one particle by a frame.
pub fn step_particle(p: &mut Particle) {
    p.x += p.vx;
    p.y += p.vy;

    match p.kind {
        ParticleKind::Normal => p.vy += 0.2,
        ParticleKind::Spark => {
            p.vx *= 0.92;
            p.vy *= 0.92;
        }
        ParticleKind::Smoke => {
            p.vy -= 0.1;
            p.vx *= 0.9;
        }
    }

    p.lifetime = p.lifetime.saturating_sub(1);
    p.rotation += 10.0;
    p.size = (PARTICLE_MAX_SIZE * p.alpha()).floor().max(1.0);
}

/// Age every particle, then drop the expired ones in a separate pass.
pub fn update_particles(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        step_particle(p);
    }
    particles.retain(|p| p.lifetime > 0);
}

/// Victory screen: keep the existing sparks moving and occasionally
/// launch a new one near the top of the screen.
pub fn update_fountain(particles: &mut Vec<Particle>, rng: &mut impl Rng) {
    update_particles(particles);

    if rng.gen_range(0..=12) == 0 {
        particles.push(Particle {
            x: rng.gen_range(0.0..=WORLD_WIDTH),
            y: rng.gen_range(0.0..=WORLD_HEIGHT / 3.0),
            vx: rng.gen_range(-4.0..=4.0),
            vy: rng.gen_range(-5.0..=-2.0),
            color: Rgb(255, 255, 0),
            lifetime: FOUNTAIN_LIFETIME,
            max_lifetime: FOUNTAIN_LIFETIME,
            size: rng.gen_range(2..=7) as f32,
            kind: ParticleKind::Spark,
            rotation: rng.gen_range(0.0..360.0),
        });
    }
}
