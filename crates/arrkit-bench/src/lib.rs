//! Benchmark inputs for arrkit.
//!
//! Provides deterministic arrays sized for the criterion benches:
//!
//! - [`ints`]: seeded `i32` values over the full range
//! - [`ints_with_needle`]: a haystack of small values with a known run
//!   planted near the end, for subsequence search
//! - [`doubles`]: seeded `f64` values in `[0, 1)`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use arrkit_test_utils::{seeded_doubles, seeded_ints, seeded_ints_below};

/// Array length used by most benches.
pub const LEN: usize = 10_000;

/// Seeded `i32` values.
pub fn ints(seed: u64, len: usize) -> Vec<i32> {
    seeded_ints(seed, len)
}

/// A haystack of values in `[0, 4)` with `needle` planted so that its
/// only guaranteed occurrence ends `len / 10` elements before the end.
///
/// Values in the haystack are kept below 4 and the needle uses values of
/// 4 and above, so the planted run is the first match.
pub fn ints_with_needle(seed: u64, len: usize, needle: &[i32]) -> (Vec<i32>, usize) {
    let mut haystack = seeded_ints_below(seed, len, 4);
    let at = len.saturating_sub(len / 10 + needle.len());
    let end = (at + needle.len()).min(len);
    haystack[at..end].copy_from_slice(&needle[..end - at]);
    (haystack, at)
}

/// Seeded `f64` values in `[0, 1)`.
pub fn doubles(seed: u64, len: usize) -> Vec<f64> {
    seeded_doubles(seed, len)
}
