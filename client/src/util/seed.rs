//! Seeding for the browser-session RNG.
//!
//! DESIGN
//! ======
//! `rand` is compiled without its OS entropy source so one crate graph
//! builds for both wasm and native targets; browser sessions mix the wall
//! clock and `Math.random` into a seed instead. A memory game does not need
//! cryptographic draws, only ones the player cannot anticipate.

#[cfg(test)]
#[path = "seed_test.rs"]
mod seed_test;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Mix two entropy words into one seed.
#[must_use]
pub fn mix_seed(clock_ms: u64, jitter: u64) -> u64 {
    clock_ms.rotate_left(17) ^ jitter.wrapping_mul(0x9e37_79b9_7f4a_7c15)
}

/// A small RNG for one interactive session.
#[must_use]
pub fn session_rng() -> SmallRng {
    SmallRng::seed_from_u64(entropy_seed())
}

fn entropy_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clock_ms = js_sys::Date::now() as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let jitter = (js_sys::Math::random() * f64::from(u32::MAX)) as u64;
        mix_seed(clock_ms, jitter)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        // SSR renders no interactive rolls; a fixed seed is fine.
        0x00c0_ffee
    }
}
