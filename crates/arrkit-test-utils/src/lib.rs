//! Test fixtures and recorders for arrkit development.
//!
//! Provides extreme-value fixture arrays for every primitive kind, seeded
//! pseudo-random arrays for property and benchmark inputs, and a
//! [`Recorder`] that captures values passed to callbacks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::fmt::Debug;

pub use fixtures::*;

/// Captures every value handed to a callback, in order.
///
/// Pass [`Recorder::sink`] where a `FnMut(T)` is expected, then assert on
/// the captured values with [`Recorder::verify`].
#[derive(Debug)]
pub struct Recorder<T> {
    values: Vec<T>,
}

impl<T> Recorder<T> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// A callback that records its argument.
    pub fn sink(&mut self) -> impl FnMut(T) + '_ {
        move |value| self.values.push(value)
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl<T: PartialEq + Debug> Recorder<T> {
    /// Assert the recorded values equal `expected`.
    #[track_caller]
    pub fn verify(&self, expected: &[T]) {
        assert_eq!(self.values, expected, "recorded values differ");
    }
}

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self::new()
    }
}
