//! Read-only views over built primitive arrays.
//!
//! [`View`] borrows the written range of a builder without copying. The
//! borrow keeps the builder from being mutated while the view is alive.

use std::fmt;
use std::iter::Copied;
use std::slice::Iter;

use arrkit_core::{ArrayLike, Hex, Slice};
use arrkit_kernel::{Integral, Of, Primitive, TypedArray};

/// An immutable, zero-copy view of primitive elements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View<'a, T> {
    values: &'a [T],
}

impl<'a, T: Primitive> View<'a, T> {
    /// View the whole of `values`.
    pub const fn new(values: &'a [T]) -> Self {
        Self { values }
    }

    /// Number of viewed elements.
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the view is empty.
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Element at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.values.get(index).copied()
    }

    /// A clamped sub-view sharing the same storage.
    pub fn slice(&self, offset: isize, length: isize) -> Self {
        Self::new(&self.values[Slice::clamp(self.values.len(), offset, length).range()])
    }

    /// The viewed elements.
    pub const fn as_slice(&self) -> &'a [T] {
        self.values
    }

    /// An owned copy of the viewed elements.
    pub fn to_vec(&self) -> Vec<T> {
        self.values.to_vec()
    }

    /// Iterate over the viewed elements by value.
    pub fn iter(&self) -> Copied<Iter<'a, T>> {
        self.values.iter().copied()
    }
}

impl<T: Primitive + Hex> View<'_, T> {
    /// `[0x.., 0x..]` form of the viewed elements.
    pub fn to_hex(&self) -> String {
        Of::<T>::new().to_hex(self.values)
    }
}

impl<T: Primitive> fmt::Display for View<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Of::<T>::new().to_string(self.values))
    }
}

impl<'a, T: Primitive> IntoIterator for View<'a, T> {
    type Item = T;
    type IntoIter = Copied<Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: 'a> ArrayLike<'a, T> for View<'a, T> {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        Some(self.values)
    }
}
