//! Deterministic seed derivation and small draw helpers for generation.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Mix the run seed with the dungeon level so every level gets an
/// independent, reproducible random stream.
pub fn derive_level_seed(run_seed: u64, level: i32) -> u64 {
    let mut mixed = run_seed ^ (level as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}

pub(super) fn rand_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() as usize) % len
}

/// Uniform draw from the inclusive range `min..=max`.
pub(super) fn rand_range(rng: &mut ChaCha8Rng, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as u64;
    min + (rng.next_u64() % span) as i32
}
