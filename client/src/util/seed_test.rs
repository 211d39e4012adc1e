use super::*;

use rand::Rng;

#[test]
fn mix_seed_is_deterministic() {
    assert_eq!(mix_seed(1_234, 42), mix_seed(1_234, 42));
}

#[test]
fn mix_seed_differs_with_jitter() {
    assert_ne!(mix_seed(1_234, 1), mix_seed(1_234, 2));
}

#[test]
fn mix_seed_differs_with_clock() {
    assert_ne!(mix_seed(1, 42), mix_seed(2, 42));
}

#[test]
fn session_rng_yields_values() {
    // Native builds use the fixed fallback seed; the RNG must still work.
    let mut rng = session_rng();
    let value: u32 = rng.random_range(0..100);
    assert!(value < 100);
}
