//! Tests for deterministic RNG
//!
//! CRITICAL: Same seed MUST produce same sequence, and therefore same draw.

use lucky_dip_core_rs::{DrawGenerator, GeneratorConfig, RandomSource, RngManager};

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_next_int_stays_in_ball_range() {
    let mut rng = RngManager::new(12345);

    for _ in 0..100 {
        let val = rng.next_int(1, 60);
        assert!((1..=60).contains(&val), "Value {} out of range [1, 60]", val);
    }
}

#[test]
fn test_next_int_deterministic() {
    let mut rng1 = RngManager::new(99999);
    let mut rng2 = RngManager::new(99999);

    for _ in 0..50 {
        assert_eq!(rng1.next_int(1, 60), rng2.next_int(1, 60));
    }
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = RngManager::new(12345);
    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.get_state();
    let val1_a = rng1.next();
    let val1_b = rng1.next();

    let mut rng2 = RngManager::new(checkpoint_state);
    assert_eq!(val1_a, rng2.next());
    assert_eq!(val1_b, rng2.next());
}

#[test]
fn test_next_int_roughly_uniform() {
    let mut rng = RngManager::new(2024);
    let mut counts = [0usize; 60];

    for _ in 0..60_000 {
        let ball = rng.next_int(1, 60);
        counts[(ball - 1) as usize] += 1;
    }

    // Expected 1000 per ball; generous band keeps this a sanity check
    for (i, &count) in counts.iter().enumerate() {
        assert!(
            (700..1300).contains(&count),
            "ball {} drawn {} times",
            i + 1,
            count
        );
    }
}

#[test]
fn test_fixed_seed_reproduces_draw() {
    let generator = DrawGenerator::new(GeneratorConfig::seeded(777)).unwrap();

    let (mut rng1, _) = generator.source();
    let (mut rng2, _) = generator.source();

    let draw1 = generator.generate(&mut rng1).unwrap();
    let draw2 = generator.generate(&mut rng2).unwrap();
    assert_eq!(draw1, draw2);
}

#[test]
fn test_entropy_sources_differ() {
    let (_, seed1) = RngManager::from_entropy();
    let (_, seed2) = RngManager::from_entropy();
    assert_ne!(seed1, seed2, "two v4 UUIDs should not yield the same seed");
}
