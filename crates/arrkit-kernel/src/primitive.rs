//! Primitive array kinds.
//!
//! [`Of<T>`] implements the whole shared algebra once for every
//! [`Primitive`] element type. The genuinely kind-specific pieces are
//! small: the sort rule on [`Primitive`], bit-exact narrowing through
//! [`Narrow`], and hex rendering through [`Hex`] (which makes the integral
//! kinds [`Integral`](crate::typed::Integral)).

use std::fmt;
use std::iter;
use std::marker::PhantomData;

use arrkit_core::slice;
use arrkit_core::{ArrayError, ArrayLike, ArrayLikeMut, Element, Hasher, Narrow, END};

use crate::obj::Type;
use crate::raw;
use crate::typed::TypedArray;

/// One of the eight primitive element types.
pub trait Primitive: Element + Copy + Default + PartialEq + fmt::Debug + 'static {
    /// Sort into natural ascending order.
    fn sort(values: &mut [Self]);
}

/// `false` before `true`: a two-way partition rather than a comparison sort.
impl Primitive for bool {
    fn sort(values: &mut [Self]) {
        let falses = values.iter().filter(|v| !**v).count();
        let (low, high) = values.split_at_mut(falses);
        low.fill(false);
        high.fill(true);
    }
}

macro_rules! integral_primitive {
    ($($ty:ty),*) => {$(
        impl Primitive for $ty {
            fn sort(values: &mut [Self]) {
                values.sort_unstable();
            }
        }
    )*};
}

integral_primitive!(u16, i8, i16, i32, i64);

// Total order with every NaN collapsed to the positive quiet NaN, so
// `-0.0 < 0.0` and all NaNs sort last.
impl Primitive for f32 {
    fn sort(values: &mut [Self]) {
        let key = |v: &f32| if v.is_nan() { f32::NAN } else { *v };
        values.sort_unstable_by(|l, r| key(l).total_cmp(&key(r)));
    }
}

impl Primitive for f64 {
    fn sort(values: &mut [Self]) {
        let key = |v: &f64| if v.is_nan() { f64::NAN } else { *v };
        values.sort_unstable_by(|l, r| key(l).total_cmp(&key(r)));
    }
}

/// Array operations for primitive elements of type `T`.
pub struct Of<T> {
    _elem: PhantomData<fn() -> T>,
}

/// `bool` arrays.
pub type OfBool = Of<bool>;
/// UTF-16 code unit arrays.
pub type OfChar = Of<u16>;
/// `i8` arrays.
pub type OfByte = Of<i8>;
/// `i16` arrays.
pub type OfShort = Of<i16>;
/// `i32` arrays.
pub type OfInt = Of<i32>;
/// `i64` arrays.
pub type OfLong = Of<i64>;
/// `f32` arrays.
pub type OfFloat = Of<f32>;
/// `f64` arrays.
pub type OfDouble = Of<f64>;

/// The `bool` kind.
pub const BOOL: OfBool = Of::new();
/// The char kind.
pub const CHAR: OfChar = Of::new();
/// The byte kind.
pub const BYTE: OfByte = Of::new();
/// The short kind.
pub const SHORT: OfShort = Of::new();
/// The int kind.
pub const INT: OfInt = Of::new();
/// The long kind.
pub const LONG: OfLong = Of::new();
/// The float kind.
pub const FLOAT: OfFloat = Of::new();
/// The double kind.
pub const DOUBLE: OfDouble = Of::new();

impl<T> Of<T> {
    /// The kind for element type `T`.
    pub const fn new() -> Self {
        Self { _elem: PhantomData }
    }
}

impl<T> Clone for Of<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Of<T> {}

impl<T> Default for Of<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Primitive> fmt::Debug for Of<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Of<{}>", T::KIND)
    }
}

impl<T: Primitive> TypedArray for Of<T> {
    type Elem = T;

    fn swap(&self, array: &mut [T], i: usize, j: usize) {
        array.swap(i, j);
    }

    fn hash_elem(&self, hasher: &mut Hasher, array: &[T], index: usize) {
        hasher.element(&array[index]);
    }

    fn range_equals(&self, lhs: &[T], rhs: &[T]) -> bool {
        lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(|(l, r)| l.same(r))
    }
}

impl<T: Primitive> Of<T> {
    /// A new array holding `values`.
    pub fn of(&self, values: &[T]) -> Vec<T> {
        values.to_vec()
    }

    /// A new array of `values` narrowed from a wider type, discarding
    /// high-order bits.
    pub fn narrowed<W: Copy>(&self, values: &[W]) -> Vec<T>
    where
        T: Narrow<W>,
    {
        values.iter().map(|&v| T::narrow(v)).collect()
    }

    /// Whether `array` equals `values` after narrowing each value.
    ///
    /// Narrowed values compare with `==`, not by bit pattern, so `0.0` is
    /// equivalent to `-0.0` and NaN is equivalent to nothing. Two absent
    /// arrays are equivalent; one absent array is not, and neither are
    /// arrays of different length.
    pub fn equivalent<'a, 'b, W: Copy + 'b>(
        &self,
        array: impl ArrayLike<'a, T>,
        values: impl ArrayLike<'b, W>,
    ) -> bool
    where
        T: Narrow<W>,
    {
        match (array.as_slice_opt(), values.as_slice_opt()) {
            (None, None) => true,
            (Some(array), Some(values)) => {
                array.len() == values.len()
                    && array.iter().zip(values).all(|(&a, &v)| a == T::narrow(v))
            }
            _ => false,
        }
    }

    /// The object kind for boxed elements of this kind.
    pub const fn boxed_type(&self) -> Type<Option<T>> {
        Type::new()
    }

    /// The whole array as boxed elements.
    pub fn boxed<'a>(&self, array: impl ArrayLike<'a, T>) -> Vec<Option<T>> {
        raw::boxed(array, 0, END)
    }

    /// A clamped window as boxed elements.
    pub fn boxed_range<'a>(
        &self,
        array: impl ArrayLike<'a, T>,
        offset: isize,
        length: isize,
    ) -> Vec<Option<T>> {
        raw::boxed(array, offset, length)
    }

    /// Unbox a whole boxed array; fails on the first absent element.
    pub fn unboxed<'a>(&self, boxed: impl ArrayLike<'a, Option<T>>) -> Result<Vec<T>, ArrayError> {
        raw::unboxed(boxed, 0, END)
    }

    /// Unbox a clamped window of a boxed array.
    pub fn unboxed_range<'a>(
        &self,
        boxed: impl ArrayLike<'a, Option<T>>,
        offset: isize,
        length: isize,
    ) -> Result<Vec<T>, ArrayError> {
        raw::unboxed(boxed, offset, length)
    }

    /// Unbox every element of a collection.
    pub fn unboxed_iter(
        &self,
        boxed: impl IntoIterator<Item = Option<T>>,
    ) -> Result<Vec<T>, ArrayError> {
        raw::unboxed_iter(boxed)
    }

    /// Element at `index`, or `default` outside the array.
    pub fn at<'a>(&self, array: impl ArrayLike<'a, T>, index: isize, default: T) -> T {
        array
            .as_slice_opt()
            .and_then(|a| usize::try_from(index).ok().and_then(|i| a.get(i)))
            .copied()
            .unwrap_or(default)
    }

    /// Last element, or `default` if the array is absent or empty.
    pub fn last<'a>(&self, array: impl ArrayLike<'a, T>, default: T) -> T {
        array
            .as_slice_opt()
            .and_then(<[T]>::last)
            .copied()
            .unwrap_or(default)
    }

    /// Overwrite every element with `value`.
    pub fn fill<'a>(&self, array: impl ArrayLikeMut<'a, T>, value: T) {
        raw::fill(array, 0, END, value);
    }

    /// Overwrite a clamped window with `value`.
    pub fn fill_range<'a>(
        &self,
        array: impl ArrayLikeMut<'a, T>,
        offset: isize,
        length: isize,
        value: T,
    ) {
        raw::fill(array, offset, length, value);
    }

    /// Visit each element by value.
    pub fn for_each<'a>(&self, array: impl ArrayLike<'a, T>, f: impl FnMut(T)) {
        self.for_each_range(array, 0, END, f);
    }

    /// Visit each element of a clamped window by value.
    pub fn for_each_range<'a>(
        &self,
        array: impl ArrayLike<'a, T>,
        offset: isize,
        length: isize,
        f: impl FnMut(T),
    ) {
        raw::iter(array, offset, length).copied().for_each(f);
    }

    /// Visit each element with its index.
    pub fn for_each_indexed<'a>(&self, array: impl ArrayLike<'a, T>, mut f: impl FnMut(T, usize)) {
        let array = array.as_slice_opt().unwrap_or_default();
        slice::accept_indexes(array.len(), 0, END, |i| f(array[i], i));
    }

    /// Sort the whole array in place.
    pub fn sort<'a>(&self, array: impl ArrayLikeMut<'a, T>) {
        self.sort_range(array, 0, END);
    }

    /// Sort a clamped window in place.
    pub fn sort_range<'a>(&self, array: impl ArrayLikeMut<'a, T>, offset: isize, length: isize) {
        raw::sort(T::sort, array, offset, length);
    }
}

impl Of<i32> {
    /// `length` consecutive values starting at `offset`; empty when
    /// `length <= 0`. Values wrap past `i32::MAX`.
    pub fn range(&self, offset: i32, length: isize) -> Vec<i32> {
        let length = usize::try_from(length).unwrap_or(0);
        iter::successors(Some(offset), |v| Some(v.wrapping_add(1)))
            .take(length)
            .collect()
    }
}

impl Of<i64> {
    /// `length` consecutive values starting at `offset`; empty when
    /// `length <= 0`. Values wrap past `i64::MAX`.
    pub fn range(&self, offset: i64, length: isize) -> Vec<i64> {
        let length = usize::try_from(length).unwrap_or(0);
        iter::successors(Some(offset), |v| Some(v.wrapping_add(1)))
            .take(length)
            .collect()
    }
}

impl Of<u16> {
    /// The UTF-16 code units of `s`.
    pub fn of_str(&self, s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    /// Decode a clamped window of code units; unpaired surrogates become
    /// U+FFFD.
    pub fn to_str<'a>(
        &self,
        array: impl ArrayLike<'a, u16>,
        offset: isize,
        length: isize,
    ) -> String {
        char::decode_utf16(raw::iter(array, offset, length).copied())
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
