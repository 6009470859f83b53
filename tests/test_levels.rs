use spacek::compute::new_world;
use spacek::entities::*;
use spacek::levels::{level_count, level_end_x, load_level};

use rand::rngs::StdRng;
use rand::SeedableRng;

fn world(variant: Variant) -> (GameWorld, StdRng) {
    let mut rng = StdRng::seed_from_u64(42);
    let world = new_world(variant, &mut rng);
    (world, rng)
}

#[test]
fn mini_has_one_short_level() {
    let (world, _) = world(Variant::Mini);
    assert_eq!(level_count(Variant::Mini), 1);
    assert_eq!(level_end_x(Variant::Mini, 1), 1100.0);
    assert_eq!(world.level, 1);
    assert_eq!(world.platforms.len(), 6);
    assert_eq!(world.enemies.len(), 3);
    assert_eq!(world.coins.len(), 3);
    assert!(world.power_ups.is_empty());
    assert!(world
        .enemies
        .iter()
        .all(|e| e.kind == EnemyKind::Standard && e.territory == 80.0 && e.health == 1));
}

#[test]
fn full_levels_have_their_own_layouts() {
    let (mut world, mut rng) = world(Variant::Full);
    assert_eq!(level_count(Variant::Full), 2);
    assert_eq!(level_end_x(Variant::Full, 1), 2400.0);
    assert_eq!(level_end_x(Variant::Full, 2), 2200.0);

    assert_eq!(world.platforms.len(), 10);
    assert_eq!(world.enemies.len(), 8);
    assert_eq!(world.power_ups.len(), 8);
    assert_eq!(world.coins.len(), 8);

    load_level(&mut world, 2, &mut rng);
    assert_eq!(world.level, 2);
    assert_eq!(world.platforms.len(), 12);
    assert_eq!(world.enemies.len(), 11);
    assert_eq!(world.power_ups.len(), 10);
    assert_eq!(world.coins.len(), 10);
}

#[test]
fn ground_spans_the_whole_level() {
    for variant in [Variant::Mini, Variant::Full] {
        let (world, _) = world(variant);
        let ground = world.platforms[0];
        assert_eq!(ground.x, 0.0);
        assert_eq!(ground.y, 540.0);
        assert!(ground.right() >= level_end_x(variant, 1));
    }
}

#[test]
fn enemy_health_depends_on_kind() {
    let (world, _) = world(Variant::Full);
    for e in &world.enemies {
        let expected = match e.kind {
            EnemyKind::Standard | EnemyKind::Flyer => 1,
            EnemyKind::Jumper => 2,
            EnemyKind::Robot => 3,
        };
        assert_eq!(e.health, expected, "{:?}", e.kind);
        assert_eq!(e.max_health, expected);
        assert!(e.alive);
        assert_eq!(e.start_x, e.x);
        assert!(e.vx.abs() > 0.0);
    }
}

#[test]
fn reloading_resets_collectibles() {
    let (mut world, mut rng) = world(Variant::Full);
    for coin in world.coins.iter_mut() {
        coin.collected = true;
    }
    world.enemies[0].alive = false;
    load_level(&mut world, 1, &mut rng);
    assert!(world.coins.iter().all(|c| !c.collected));
    assert!(world.enemies.iter().all(|e| e.alive));
}
