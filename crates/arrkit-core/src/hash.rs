//! Running array hash.

use crate::element::Element;

/// Accumulates a running hash as `31 * h + e`, starting from 1.
///
/// This is the JVM `Arrays.hashCode` scheme: an empty array hashes to 1
/// and each element hash is folded in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hasher {
    code: i32,
}

impl Hasher {
    /// Initial hash value.
    pub const SEED: i32 = 1;
    /// Per-element multiplier.
    pub const MULTIPLIER: i32 = 31;

    /// Create a hasher holding [`Self::SEED`].
    pub const fn new() -> Self {
        Self { code: Self::SEED }
    }

    /// Fold a precomputed element hash into the running value.
    pub fn add(&mut self, hash: i32) -> &mut Self {
        self.code = self.code.wrapping_mul(Self::MULTIPLIER).wrapping_add(hash);
        self
    }

    /// Fold an element's [`Element::hash_code`] into the running value.
    pub fn element<T: Element + ?Sized>(&mut self, value: &T) -> &mut Self {
        self.add(value.hash_code())
    }

    /// The current hash.
    pub const fn code(&self) -> i32 {
        self.code
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// Hash every element of `values` in order.
pub fn hash_all<T: Element>(values: &[T]) -> i32 {
    values
        .iter()
        .fold(Hasher::new(), |mut h, v| {
            h.element(v);
            h
        })
        .code()
}
