//! Uniform access to array-shaped values.
//!
//! Kernel operations accept "any array" through [`ArrayLike`], which
//! covers slices, fixed-size arrays, vectors and their `Option`-wrapped
//! forms. `None` stands for an absent array and behaves as zero-length
//! everywhere in the range family.

use crate::slice::{is_valid_index, signed};

/// A read-only view of something array-shaped, possibly absent.
pub trait ArrayLike<'a, T: 'a> {
    /// The elements, or `None` for an absent array.
    fn as_slice_opt(self) -> Option<&'a [T]>;
}

/// A mutable view of something array-shaped, possibly absent.
pub trait ArrayLikeMut<'a, T: 'a> {
    /// The elements, or `None` for an absent array.
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]>;
}

impl<'a, T> ArrayLike<'a, T> for &'a [T] {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        Some(self)
    }
}

impl<'a, T, const N: usize> ArrayLike<'a, T> for &'a [T; N] {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T> ArrayLike<'a, T> for &'a Vec<T> {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        Some(self.as_slice())
    }
}

impl<'a, T> ArrayLike<'a, T> for Option<&'a [T]> {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        self
    }
}

impl<'a, T> ArrayLike<'a, T> for Option<&'a Vec<T>> {
    fn as_slice_opt(self) -> Option<&'a [T]> {
        self.map(Vec::as_slice)
    }
}

impl<'a, T> ArrayLikeMut<'a, T> for &'a mut [T] {
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]> {
        Some(self)
    }
}

impl<'a, T, const N: usize> ArrayLikeMut<'a, T> for &'a mut [T; N] {
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T> ArrayLikeMut<'a, T> for &'a mut Vec<T> {
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]> {
        Some(self.as_mut_slice())
    }
}

impl<'a, T> ArrayLikeMut<'a, T> for Option<&'a mut [T]> {
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]> {
        self
    }
}

impl<'a, T> ArrayLikeMut<'a, T> for Option<&'a mut Vec<T>> {
    fn as_mut_slice_opt(self) -> Option<&'a mut [T]> {
        self.map(Vec::as_mut_slice)
    }
}

/// An absent array.
pub const fn null<'a, T>() -> Option<&'a [T]> {
    None
}

/// An absent mutable array.
pub fn null_mut<'a, T>() -> Option<&'a mut [T]> {
    None
}

/// Number of elements; an absent array has length 0.
pub fn length<'a, T: 'a>(array: impl ArrayLike<'a, T>) -> usize {
    array.as_slice_opt().map_or(0, <[T]>::len)
}

/// Whether the array is absent or holds no elements.
pub fn is_empty<'a, T: 'a>(array: impl ArrayLike<'a, T>) -> bool {
    length(array) == 0
}

/// Whether `index` addresses an element of the array.
pub fn contains_index<'a, T: 'a>(array: impl ArrayLike<'a, T>, index: isize) -> bool {
    is_valid_index(length(array), index)
}

/// The array length as a signed value for range arithmetic.
pub fn signed_length<'a, T: 'a>(array: impl ArrayLike<'a, T>) -> isize {
    signed(length(array))
}
