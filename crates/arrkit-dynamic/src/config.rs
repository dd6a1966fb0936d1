//! Builder configuration parameters.

use crate::growth::Growth;

/// Configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Fixed for the builder's lifetime once it is constructed.
#[derive(Clone, Copy, Debug)]
pub struct DynamicConfig {
    /// Growth policy for the backing buffer.
    ///
    /// Default: [`Growth::DEFAULT`], doubling from 8 elements.
    pub growth: Growth,

    /// Length of the buffer allocated up front.
    ///
    /// Default: `None`, meaning whatever the growth policy yields for an
    /// empty buffer (`growth.apply(0, 0)`).
    pub initial_capacity: Option<usize>,
}

impl DynamicConfig {
    /// Default growth policy.
    pub const DEFAULT_GROWTH: Growth = Growth::DEFAULT;

    /// Default initial capacity: derived from the growth policy.
    pub const DEFAULT_INITIAL_CAPACITY: Option<usize> = None;

    /// A config with the given growth policy and a policy-derived initial
    /// capacity.
    pub const fn new(growth: Growth) -> Self {
        Self {
            growth,
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
        }
    }

    /// Replace the initial capacity.
    pub const fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = Some(capacity);
        self
    }

    /// Number of elements the builder allocates at construction.
    pub fn initial_len(&self) -> usize {
        self.initial_capacity.unwrap_or_else(|| self.growth.apply(0, 0))
    }
}

impl Default for DynamicConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GROWTH)
    }
}
