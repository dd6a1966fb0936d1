//! Slice arithmetic over `(offset, length)` windows.
//!
//! Two families live side by side:
//!
//! - the strict validators ([`is_valid_slice`], [`is_valid_range`],
//!   [`is_full_slice`], [`is_valid_index`]) answer whether a window fits
//!   an array, without changing anything;
//! - the clamping dispatchers ([`apply_slice`], [`accept_slice`],
//!   [`apply_bi_slice`], [`accept_bi_slice`]) pull any window into range
//!   and pass the clamped [`Slice`] to a callback.
//!
//! Offsets and lengths arrive as `isize` so that negative input clamps to
//! zero. [`END`] is the length sentinel for "through the end of the array".

use std::ops::Range;

/// Length sentinel meaning "through the end of the array".
pub const END: isize = isize::MAX;

/// A clamped `(offset, length)` window into an array.
///
/// Always satisfies `offset + length <= len` for the array it was clamped
/// against. Slices are recomputed per call and never stored alongside the
/// array they describe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Slice {
    /// First index of the window.
    pub offset: usize,
    /// Number of elements in the window.
    pub length: usize,
}

/// Array length as a signed value, saturating for lengths beyond `isize::MAX`.
pub(crate) fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}

impl Slice {
    /// The empty window at offset 0.
    pub const EMPTY: Self = Self::new(0, 0);

    /// Create a slice from already-valid values.
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// The window covering an entire array of length `len`.
    pub const fn full(len: usize) -> Self {
        Self::new(0, len)
    }

    /// Clamp `offset` into `[0, len]`, then `length` into `[0, len - offset]`.
    ///
    /// Never fails: out-of-range input shrinks to the nearest valid window,
    /// and [`END`] reaches the end of the array without overflowing.
    pub fn clamp(len: usize, offset: isize, length: isize) -> Self {
        let len = signed(len);
        let offset = offset.clamp(0, len);
        let length = length.clamp(0, len - offset);
        Self::new(offset as usize, length as usize)
    }

    /// One past the last index of the window.
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }

    /// The window as an index range.
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether the window holds no elements.
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Whether `index` addresses an element of an array of length `len`.
pub fn is_valid_index(len: usize, index: isize) -> bool {
    index >= 0 && index < signed(len)
}

/// Whether `(offset, length)` lies entirely within an array of length `len`.
pub fn is_valid_slice(len: usize, offset: isize, length: isize) -> bool {
    let len = signed(len);
    if offset < 0 || offset > len || length < 0 {
        return false;
    }
    offset.checked_add(length).is_some_and(|end| end <= len)
}

/// Whether `[start, end)` lies entirely within an array of length `len`.
pub fn is_valid_range(len: usize, start: isize, end: isize) -> bool {
    let len = signed(len);
    start >= 0 && start <= len && end >= start && end <= len
}

/// Whether `(offset, length)` covers exactly the whole array.
pub fn is_full_slice(len: usize, offset: isize, length: isize) -> bool {
    offset == 0 && length == signed(len)
}

/// Clamp a window and pass it to `f`, returning its result.
pub fn apply_slice<R>(len: usize, offset: isize, length: isize, f: impl FnOnce(Slice) -> R) -> R {
    f(Slice::clamp(len, offset, length))
}

/// Clamp a window and pass it to `f`.
pub fn accept_slice(len: usize, offset: isize, length: isize, f: impl FnOnce(Slice)) {
    f(Slice::clamp(len, offset, length));
}

/// Clamp a window and call `f` once per index in it, in ascending order.
pub fn accept_indexes(len: usize, offset: isize, length: isize, f: impl FnMut(usize)) {
    Slice::clamp(len, offset, length).range().for_each(f);
}

/// Clamp two windows over two arrays, each against its own length, and
/// pass both to `f`.
pub fn apply_bi_slice<R>(
    lhs_len: usize,
    lhs_offset: isize,
    lhs_length: isize,
    rhs_len: usize,
    rhs_offset: isize,
    rhs_length: isize,
    f: impl FnOnce(Slice, Slice) -> R,
) -> R {
    f(
        Slice::clamp(lhs_len, lhs_offset, lhs_length),
        Slice::clamp(rhs_len, rhs_offset, rhs_length),
    )
}

/// Clamp two windows over two arrays and pass both to `f`.
pub fn accept_bi_slice(
    lhs_len: usize,
    lhs_offset: isize,
    lhs_length: isize,
    rhs_len: usize,
    rhs_offset: isize,
    rhs_length: isize,
    f: impl FnOnce(Slice, Slice),
) {
    apply_bi_slice(
        lhs_len, lhs_offset, lhs_length, rhs_len, rhs_offset, rhs_length, f,
    );
}
