//! Typed-array abstraction.
//!
//! [`TypedArray`] is the capability set shared by every array kind. It is
//! implemented once on top of [`crate::raw`]; a concrete kind only
//! supplies [`swap`](TypedArray::swap), [`hash_elem`](TypedArray::hash_elem)
//! and [`range_equals`](TypedArray::range_equals).
//!
//! Range methods come in pairs: the short form covers the whole array and
//! the `_range` form takes clamped `offset`/`length` arguments, where
//! [`END`] means "through the end".

use std::fmt;

use arrkit_core::{ArrayLike, ArrayLikeMut, Element, Hasher, Hex, Joiner, END};

use crate::raw;

/// Array operations for one element kind.
pub trait TypedArray {
    /// The element type of arrays of this kind.
    type Elem: Element + Clone + Default + 'static;

    /// Swap two elements.
    fn swap(&self, array: &mut [Self::Elem], i: usize, j: usize);

    /// Fold the element at `index` into `hasher`.
    fn hash_elem(&self, hasher: &mut Hasher, array: &[Self::Elem], index: usize);

    /// Whether two equal-length windows hold equal elements.
    fn range_equals(&self, lhs: &[Self::Elem], rhs: &[Self::Elem]) -> bool;

    /// Append the string form of the element at `index`.
    fn write_elem(&self, out: &mut String, array: &[Self::Elem], index: usize) {
        array[index].render(out);
    }

    /// Number of elements; an absent array has length 0.
    fn length<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> usize {
        raw::length(array)
    }

    /// Whether the array is absent or empty.
    fn is_empty<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> bool {
        raw::is_empty(array)
    }

    /// Whether `index` addresses an element.
    fn contains_index<'a>(&self, array: impl ArrayLike<'a, Self::Elem>, index: isize) -> bool {
        raw::contains_index(array, index)
    }

    /// A new default-filled array.
    fn array(&self, length: usize) -> Vec<Self::Elem> {
        vec![Self::Elem::default(); length]
    }

    /// Resize an owned array, returning it unchanged if the length matches.
    fn resize(&self, array: impl Into<Option<Vec<Self::Elem>>>, length: usize) -> Vec<Self::Elem> {
        raw::resize(array, length)
    }

    /// An element-wise copy of the whole array.
    fn copy_of<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> Vec<Self::Elem> {
        let array = array.as_slice_opt();
        raw::copy_of(array, 0, raw::length(array))
    }

    /// A copy truncated or default-padded to `length`.
    fn copy_of_len<'a>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        length: usize,
    ) -> Vec<Self::Elem> {
        raw::copy_of(array, 0, length)
    }

    /// A copy of `length` elements starting at `offset`, default-padded.
    fn copy_of_range<'a>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: usize,
    ) -> Vec<Self::Elem> {
        raw::copy_of(array, offset, length)
    }

    /// Copy as much of `src` into `dest` as fits; returns the count.
    fn copy<'a, 'b>(
        &self,
        src: impl ArrayLike<'a, Self::Elem>,
        dest: impl ArrayLikeMut<'b, Self::Elem>,
    ) -> usize {
        raw::copy(src, 0, dest, 0, END)
    }

    /// Copy between clamped windows; returns the count.
    fn copy_range<'a, 'b>(
        &self,
        src: impl ArrayLike<'a, Self::Elem>,
        src_offset: isize,
        dest: impl ArrayLikeMut<'b, Self::Elem>,
        dest_offset: isize,
        length: isize,
    ) -> usize {
        raw::copy(src, src_offset, dest, dest_offset, length)
    }

    /// A copy of `array` followed by `values`.
    fn append<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        values: impl ArrayLike<'b, Self::Elem>,
    ) -> Vec<Self::Elem> {
        self.append_range(array, values, 0, END)
    }

    /// A copy of `array` followed by a window of `values`.
    fn append_range<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        values: impl ArrayLike<'b, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> Vec<Self::Elem> {
        raw::insert(array, END, values, offset, length)
    }

    /// A copy of `array` with `values` inserted at `offset`.
    fn insert<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        values: impl ArrayLike<'b, Self::Elem>,
    ) -> Vec<Self::Elem> {
        raw::insert(array, offset, values, 0, END)
    }

    /// A copy of `array` with a window of `values` inserted at `offset`.
    fn insert_range<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        values: impl ArrayLike<'b, Self::Elem>,
        values_offset: isize,
        length: isize,
    ) -> Vec<Self::Elem> {
        raw::insert(array, offset, values, values_offset, length)
    }

    /// Whether `values` occurs as a contiguous run in `array`.
    fn contains<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        values: impl ArrayLike<'b, Self::Elem>,
    ) -> bool {
        self.index_of(array, values).is_some()
    }

    /// Whether a window of `values` occurs within a window of `array`.
    fn contains_range<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        array_offset: isize,
        array_length: isize,
        values: impl ArrayLike<'b, Self::Elem>,
        values_offset: isize,
        values_length: isize,
    ) -> bool {
        self.index_of_range(
            array,
            array_offset,
            array_length,
            values,
            values_offset,
            values_length,
        )
        .is_some()
    }

    /// Lowest index at which `values` occurs in `array`.
    fn index_of<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        values: impl ArrayLike<'b, Self::Elem>,
    ) -> Option<usize> {
        self.index_of_range(array, 0, END, values, 0, END)
    }

    /// Lowest absolute index at which a window of `values` occurs within
    /// a window of `array`.
    fn index_of_range<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        array_offset: isize,
        array_length: isize,
        values: impl ArrayLike<'b, Self::Elem>,
        values_offset: isize,
        values_length: isize,
    ) -> Option<usize> {
        raw::index_of(
            |l, r| self.range_equals(l, r),
            array,
            array_offset,
            array_length,
            values,
            values_offset,
            values_length,
        )
    }

    /// Highest index at which `values` occurs in `array`.
    fn last_index_of<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        values: impl ArrayLike<'b, Self::Elem>,
    ) -> Option<usize> {
        self.last_index_of_range(array, 0, END, values, 0, END)
    }

    /// Highest absolute index at which a window of `values` occurs within
    /// a window of `array`.
    fn last_index_of_range<'a, 'b>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        array_offset: isize,
        array_length: isize,
        values: impl ArrayLike<'b, Self::Elem>,
        values_offset: isize,
        values_length: isize,
    ) -> Option<usize> {
        raw::last_index_of(
            |l, r| self.range_equals(l, r),
            array,
            array_offset,
            array_length,
            values,
            values_offset,
            values_length,
        )
    }

    /// Reverse the whole array in place.
    fn reverse<'a>(&self, array: impl ArrayLikeMut<'a, Self::Elem>) {
        self.reverse_range(array, 0, END);
    }

    /// Reverse a window in place.
    fn reverse_range<'a>(
        &self,
        array: impl ArrayLikeMut<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) {
        raw::reverse(|a, i, j| self.swap(a, i, j), array, offset, length);
    }

    /// Whether two arrays have equal length and elements.
    fn equals<'a, 'b>(
        &self,
        lhs: impl ArrayLike<'a, Self::Elem>,
        rhs: impl ArrayLike<'b, Self::Elem>,
    ) -> bool {
        self.equals_range(lhs, 0, rhs, 0, END)
    }

    /// Whether two clamped windows of `length` elements are equal.
    fn equals_range<'a, 'b>(
        &self,
        lhs: impl ArrayLike<'a, Self::Elem>,
        lhs_offset: isize,
        rhs: impl ArrayLike<'b, Self::Elem>,
        rhs_offset: isize,
        length: isize,
    ) -> bool {
        raw::equals(
            |l, r| self.range_equals(l, r),
            lhs,
            lhs_offset,
            rhs,
            rhs_offset,
            length,
        )
    }

    /// Hash of the whole array; 0 if absent.
    fn hash<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> i32 {
        self.hash_range(array, 0, END)
    }

    /// Hash of a window; 0 if absent.
    fn hash_range<'a>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> i32 {
        raw::hash(|h, a, i| self.hash_elem(h, a, i), array, offset, length)
    }

    /// `[a, b, c]` form of the whole array.
    fn to_string<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> String {
        self.to_string_with(&Joiner::ARRAY, array, 0, END)
    }

    /// `[a, b, c]` form of a window.
    fn to_string_range<'a>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> String {
        self.to_string_with(&Joiner::ARRAY, array, offset, length)
    }

    /// String form of a window in the given join style.
    fn to_string_with<'a>(
        &self,
        joiner: &Joiner,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> String {
        raw::append_to_string(|out, a, i| self.write_elem(out, a, i), joiner, array, offset, length)
    }

    /// String form of a window using a custom per-element display function.
    fn to_string_by<'a, S: fmt::Display>(
        &self,
        string: impl Fn(&[Self::Elem], usize) -> S,
        joiner: &Joiner,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> String {
        raw::to_string(string, joiner, array, offset, length)
    }
}

/// Hex rendering for kinds with integral elements.
pub trait Integral: TypedArray
where
    Self::Elem: Hex,
{
    /// `[0x.., 0x..]` form of the whole array.
    fn to_hex<'a>(&self, array: impl ArrayLike<'a, Self::Elem>) -> String {
        self.to_hex_with(&Joiner::ARRAY, array, 0, END)
    }

    /// `[0x.., 0x..]` form of a window.
    fn to_hex_range<'a>(
        &self,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> String {
        self.to_hex_with(&Joiner::ARRAY, array, offset, length)
    }

    /// Hex form of a window in the given join style.
    fn to_hex_with<'a>(
        &self,
        joiner: &Joiner,
        array: impl ArrayLike<'a, Self::Elem>,
        offset: isize,
        length: isize,
    ) -> String {
        raw::append_to_string(|out, a, i| a[i].write_hex(out), joiner, array, offset, length)
    }
}

impl<K: TypedArray> Integral for K where K::Elem: Hex {}
