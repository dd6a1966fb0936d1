//! Fixture arrays.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `true, false, true`
pub const BOOLS: [bool; 3] = [true, false, true];
/// `'a', '\0', 'c'` as UTF-16 code units.
pub const CHARS: [u16; 3] = [b'a' as u16, 0, b'c' as u16];
pub const BYTES: [i8; 3] = [i8::MIN, i8::MAX, 0];
pub const SHORTS: [i16; 3] = [i16::MIN, i16::MAX, 0];
pub const INTS: [i32; 3] = [i32::MIN, i32::MAX, 0];
pub const LONGS: [i64; 3] = [i64::MIN, i64::MAX, 0];
/// Smallest positive subnormal, largest finite, zero.
pub const FLOATS: [f32; 3] = [f32::from_bits(1), f32::MAX, 0.0];
/// Smallest positive subnormal, largest finite, zero.
pub const DOUBLES: [f64; 3] = [f64::from_bits(1), f64::MAX, 0.0];

/// Deterministic pseudo-random `i32` values.
pub fn seeded_ints(seed: u64, len: usize) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u32() as i32).collect()
}

/// Deterministic pseudo-random `i32` values in `[0, bound)`.
pub fn seeded_ints_below(seed: u64, len: usize, bound: u32) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| (rng.next_u32() % bound.max(1)) as i32)
        .collect()
}

/// Deterministic pseudo-random bytes.
pub fn seeded_bytes(seed: u64, len: usize) -> Vec<i8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out.into_iter().map(|b| b as i8).collect()
}

/// Deterministic pseudo-random `i64` values.
pub fn seeded_longs(seed: u64, len: usize) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.next_u64() as i64).collect()
}

/// Deterministic pseudo-random `f64` values in `[0, 1)`.
pub fn seeded_doubles(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64)
        .collect()
}
