//! Buffer growth policies.
//!
//! A [`Growth`] maps the current capacity (and the size a write needs) to
//! the next capacity to try. Policies are pure; [`Growth::capacity_for`]
//! applies one repeatedly until the buffer is large enough, so a single
//! large write and many small appends go through the same path.

use tracing::warn;

/// How a builder's backing buffer grows.
#[derive(Clone, Copy, Debug)]
pub enum Growth {
    /// Start at `min`, then double.
    Double {
        /// Capacity of the first allocation.
        min: usize,
    },
    /// Start at `min`, then add `step` each time.
    Step {
        /// Capacity of the first allocation.
        min: usize,
        /// Elements added per growth.
        step: usize,
    },
    /// Grow straight to the required size, but never below `min`.
    Exact {
        /// Smallest capacity ever allocated.
        min: usize,
    },
    /// A caller-supplied `(capacity, required) -> capacity` function.
    Custom(fn(usize, usize) -> usize),
}

impl Growth {
    /// Start at 8 elements, then double.
    pub const DEFAULT: Self = Self::Double { min: 8 };

    /// The next capacity after `capacity`, for a write needing `required`
    /// elements.
    pub fn apply(&self, capacity: usize, required: usize) -> usize {
        match *self {
            Self::Double { min } => {
                if capacity < min {
                    min
                } else {
                    capacity.saturating_mul(2)
                }
            }
            Self::Step { min, step } => {
                if capacity < min {
                    min
                } else {
                    capacity.saturating_add(step)
                }
            }
            Self::Exact { min } => min.max(required),
            Self::Custom(f) => f(capacity, required),
        }
    }

    /// The capacity to grow to from `capacity` so that at least `required`
    /// elements fit.
    ///
    /// Returns `capacity` unchanged when it already suffices. A policy that
    /// stops making progress (for example `Double { min: 0 }` from an empty
    /// buffer) is abandoned in favour of exactly `required`.
    pub fn capacity_for(&self, capacity: usize, required: usize) -> usize {
        let mut current = capacity;
        while current < required {
            let next = self.apply(current, required);
            if next <= current {
                warn!(
                    policy = ?self,
                    capacity = current,
                    required,
                    "growth policy made no progress; growing to the required size"
                );
                return required;
            }
            current = next;
        }
        current
    }
}

impl Default for Growth {
    fn default() -> Self {
        Self::DEFAULT
    }
}
