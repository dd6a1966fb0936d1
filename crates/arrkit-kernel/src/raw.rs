//! Raw array kernel.
//!
//! Element-kind-agnostic operations over any [`ArrayLike`] value. Every
//! range argument is clamped through [`arrkit_core::slice`]; absent arrays
//! behave as zero-length. Kind-specific behaviour (equality, hashing,
//! swapping, formatting) arrives through callbacks, so the typed layer can
//! implement its capability set once on top of these functions.

use std::fmt;
use std::fmt::Write;

use arrkit_core::slice::{self, Slice, END};
use arrkit_core::{ArrayError, ArrayLike, ArrayLikeMut, Hasher, Joiner, NULL};

pub use arrkit_core::array::{contains_index, is_empty, length};

fn present<'a, T: 'a>(array: impl ArrayLike<'a, T>) -> &'a [T] {
    array.as_slice_opt().unwrap_or_default()
}

/// Element at `index`, failing outside `[0, len)`.
pub fn get<T>(array: &[T], index: isize) -> Result<&T, ArrayError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| array.get(i))
        .ok_or(ArrayError::IndexOutOfBounds {
            index,
            len: array.len(),
        })
}

/// Overwrite the element at `index`, failing outside `[0, len)`.
pub fn set<T>(array: &mut [T], index: isize, value: T) -> Result<(), ArrayError> {
    let len = array.len();
    let slot = usize::try_from(index)
        .ok()
        .and_then(|i| array.get_mut(i))
        .ok_or(ArrayError::IndexOutOfBounds { index, len })?;
    *slot = value;
    Ok(())
}

/// Copy up to `length` elements from `src[src_offset..]` to
/// `dest[dest_offset..]`.
///
/// Both windows are clamped independently and the shorter one wins.
/// Returns the number of elements copied; 0 if either array is absent.
pub fn copy<'a, 'b, T: Clone + 'a + 'b>(
    src: impl ArrayLike<'a, T>,
    src_offset: isize,
    dest: impl ArrayLikeMut<'b, T>,
    dest_offset: isize,
    length: isize,
) -> usize {
    let (Some(src), Some(dest)) = (src.as_slice_opt(), dest.as_mut_slice_opt()) else {
        return 0;
    };
    slice::apply_bi_slice(
        src.len(),
        src_offset,
        length,
        dest.len(),
        dest_offset,
        length,
        |s, d| {
            let n = s.length.min(d.length);
            dest[d.offset..d.offset + n].clone_from_slice(&src[s.offset..s.offset + n]);
            n
        },
    )
}

/// A new array of exactly `length` elements, filled from `array[offset..]`
/// and padded with defaults where the source runs out.
pub fn copy_of<'a, T: Clone + Default + 'a>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: usize,
) -> Vec<T> {
    let mut out = vec![T::default(); length];
    copy(array, offset, &mut out, 0, END);
    out
}

/// Resize an owned array to `length`, padding with defaults.
///
/// An absent array yields a new default-filled array. When the length
/// already matches, the same array is returned untouched; a shrunk array
/// releases its spare capacity.
pub fn resize<T: Clone + Default>(array: impl Into<Option<Vec<T>>>, length: usize) -> Vec<T> {
    let Some(mut array) = array.into() else {
        return vec![T::default(); length];
    };
    if array.len() == length {
        return array;
    }
    let shrink = length < array.len();
    array.resize(length, T::default());
    if shrink {
        array.shrink_to_fit();
    }
    array
}

/// A copy of `array` with `gap` default elements opened at `offset`.
///
/// The head `[0, offset)` and tail `[offset, len)` are copied around the
/// gap in one pass. `offset` is clamped into `[0, len]`.
pub fn insert_gap<'a, T: Clone + Default + 'a>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    gap: usize,
) -> Vec<T> {
    let array = present(array);
    let offset = Slice::clamp(array.len(), offset, 0).offset;
    let mut out = Vec::with_capacity(array.len() + gap);
    out.extend_from_slice(&array[..offset]);
    out.resize(offset + gap, T::default());
    out.extend_from_slice(&array[offset..]);
    out
}

/// A copy of `array` with `values[values_offset..][..length]` inserted at
/// `offset`.
///
/// Inserting at [`END`] appends. An empty clamped window of values yields
/// an unchanged copy.
pub fn insert<'a, 'b, T: Clone + Default + 'a + 'b>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    values: impl ArrayLike<'b, T>,
    values_offset: isize,
    length: isize,
) -> Vec<T> {
    let array = present(array);
    let values = present(values);
    slice::apply_bi_slice(
        values.len(),
        values_offset,
        length,
        array.len(),
        offset,
        0,
        |v, a| {
            let mut out = insert_gap(array, a.offset as isize, v.length);
            out[a.offset..a.offset + v.length].clone_from_slice(&values[v.range()]);
            out
        },
    )
}

/// Lowest index in `array` where the values window occurs in full within
/// the clamped array window.
///
/// Brute-force `O(n·m)` search. The returned index is absolute, not
/// relative to `array_offset`. An empty values window matches at the start
/// of the array window. `None` when either array is absent.
pub fn index_of<'a, 'b, T: 'a + 'b>(
    equals: impl Fn(&[T], &[T]) -> bool,
    array: impl ArrayLike<'a, T>,
    array_offset: isize,
    array_length: isize,
    values: impl ArrayLike<'b, T>,
    values_offset: isize,
    values_length: isize,
) -> Option<usize> {
    let (array, values) = (array.as_slice_opt()?, values.as_slice_opt()?);
    slice::apply_bi_slice(
        array.len(),
        array_offset,
        array_length,
        values.len(),
        values_offset,
        values_length,
        |a, v| {
            let needle = &values[v.range()];
            let last = a.length.checked_sub(v.length)?;
            (0..=last)
                .map(|i| a.offset + i)
                .find(|&i| equals(&array[i..i + v.length], needle))
        },
    )
}

/// Highest index in `array` where the values window occurs in full within
/// the clamped array window. See [`index_of`].
pub fn last_index_of<'a, 'b, T: 'a + 'b>(
    equals: impl Fn(&[T], &[T]) -> bool,
    array: impl ArrayLike<'a, T>,
    array_offset: isize,
    array_length: isize,
    values: impl ArrayLike<'b, T>,
    values_offset: isize,
    values_length: isize,
) -> Option<usize> {
    let (array, values) = (array.as_slice_opt()?, values.as_slice_opt()?);
    slice::apply_bi_slice(
        array.len(),
        array_offset,
        array_length,
        values.len(),
        values_offset,
        values_length,
        |a, v| {
            let needle = &values[v.range()];
            let last = a.length.checked_sub(v.length)?;
            (0..=last)
                .rev()
                .map(|i| a.offset + i)
                .find(|&i| equals(&array[i..i + v.length], needle))
        },
    )
}

/// Reverse the clamped window in place by swapping its outer halves.
pub fn reverse<'a, T: 'a>(
    mut swap: impl FnMut(&mut [T], usize, usize),
    array: impl ArrayLikeMut<'a, T>,
    offset: isize,
    length: isize,
) {
    let Some(array) = array.as_mut_slice_opt() else {
        return;
    };
    let s = Slice::clamp(array.len(), offset, length);
    for i in 0..s.length / 2 {
        swap(array, s.offset + i, s.end() - i - 1);
    }
}

/// Compare `length` elements of two arrays from their own offsets.
///
/// Two absent arrays are equal; one absent array is unequal to anything.
/// Each window is clamped independently and windows of differing clamped
/// length are unequal.
pub fn equals<'a, 'b, T: 'a + 'b>(
    equals: impl Fn(&[T], &[T]) -> bool,
    lhs: impl ArrayLike<'a, T>,
    lhs_offset: isize,
    rhs: impl ArrayLike<'b, T>,
    rhs_offset: isize,
    length: isize,
) -> bool {
    match (lhs.as_slice_opt(), rhs.as_slice_opt()) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => slice::apply_bi_slice(
            lhs.len(),
            lhs_offset,
            length,
            rhs.len(),
            rhs_offset,
            length,
            |l, r| l.length == r.length && equals(&lhs[l.range()], &rhs[r.range()]),
        ),
        _ => false,
    }
}

/// Running hash over the clamped window, one callback per index.
/// An absent array hashes to 0.
pub fn hash<'a, T: 'a>(
    mut hash: impl FnMut(&mut Hasher, &[T], usize),
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
) -> i32 {
    let Some(array) = array.as_slice_opt() else {
        return 0;
    };
    let mut hasher = Hasher::new();
    slice::accept_indexes(array.len(), offset, length, |i| hash(&mut hasher, array, i));
    hasher.code()
}

/// Join the clamped window, each element written by `append(out, array, index)`.
/// An absent array formats as [`NULL`].
pub fn append_to_string<'a, T: 'a>(
    mut append: impl FnMut(&mut String, &[T], usize),
    joiner: &Joiner,
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
) -> String {
    let Some(array) = array.as_slice_opt() else {
        return NULL.to_string();
    };
    let s = Slice::clamp(array.len(), offset, length);
    joiner.join_index(s.length, |out, i| append(out, array, s.offset + i))
}

/// Join the clamped window using a per-index display function.
pub fn to_string<'a, T: 'a, S: fmt::Display>(
    string: impl Fn(&[T], usize) -> S,
    joiner: &Joiner,
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
) -> String {
    append_to_string(
        |out, array, i| {
            let _ = write!(out, "{}", string(array, i));
        },
        joiner,
        array,
        offset,
        length,
    )
}

/// Call `f` with each index of the clamped window, in order.
pub fn for_each_index<'a, T: 'a>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
    f: impl FnMut(usize),
) {
    slice::accept_indexes(arrkit_core::array::length(array), offset, length, f);
}

/// Iterate the clamped window.
pub fn iter<'a, T: 'a>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
) -> std::slice::Iter<'a, T> {
    let array = present(array);
    array[Slice::clamp(array.len(), offset, length).range()].iter()
}

/// Overwrite every element of the clamped window with `value`.
pub fn fill<'a, T: Clone + 'a>(
    array: impl ArrayLikeMut<'a, T>,
    offset: isize,
    length: isize,
    value: T,
) {
    if let Some(array) = array.as_mut_slice_opt() {
        let s = Slice::clamp(array.len(), offset, length);
        array[s.range()].fill(value);
    }
}

/// Apply an in-place sorter to the clamped window.
pub fn sort<'a, T: 'a>(
    sorter: impl FnOnce(&mut [T]),
    array: impl ArrayLikeMut<'a, T>,
    offset: isize,
    length: isize,
) {
    if let Some(array) = array.as_mut_slice_opt() {
        let s = Slice::clamp(array.len(), offset, length);
        sorter(&mut array[s.range()]);
    }
}

/// The clamped window as a boxed array, one `Some` per element.
/// An absent array boxes to an empty array.
pub fn boxed<'a, T: Clone + 'a>(
    array: impl ArrayLike<'a, T>,
    offset: isize,
    length: isize,
) -> Vec<Option<T>> {
    iter(array, offset, length).cloned().map(Some).collect()
}

/// Unbox the clamped window of a boxed array.
///
/// Fails with [`ArrayError::NullElement`] at the first absent element.
pub fn unboxed<'a, T: Clone + 'a>(
    boxed: impl ArrayLike<'a, Option<T>>,
    offset: isize,
    length: isize,
) -> Result<Vec<T>, ArrayError> {
    let boxed = present(boxed);
    let s = Slice::clamp(boxed.len(), offset, length);
    boxed[s.range()]
        .iter()
        .enumerate()
        .map(|(i, v)| v.clone().ok_or(ArrayError::NullElement { index: s.offset + i }))
        .collect()
}

/// Unbox every element of a collection, in iteration order.
pub fn unboxed_iter<T>(boxed: impl IntoIterator<Item = Option<T>>) -> Result<Vec<T>, ArrayError> {
    boxed
        .into_iter()
        .enumerate()
        .map(|(index, v)| v.ok_or(ArrayError::NullElement { index }))
        .collect()
}
