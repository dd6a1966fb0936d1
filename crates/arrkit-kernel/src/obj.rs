//! Object-array kind.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use arrkit_core::slice::{self, Slice};
use arrkit_core::{ArrayError, ArrayLike, ArrayLikeMut, Element, Hasher, END};

use crate::raw;
use crate::typed::TypedArray;

/// Array operations for object elements of type `T`.
///
/// Elements are compared with [`Element::same`] and hashed with
/// [`Element::hash_code`]. Nullable object arrays use `Option<T>`
/// elements, which sort absent values first and render them as `null`.
pub struct Type<T> {
    _elem: PhantomData<fn() -> T>,
}

impl<T> Type<T> {
    /// The kind for element type `T`.
    pub const fn new() -> Self {
        Self { _elem: PhantomData }
    }
}

impl<T> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Type<T> {}

impl<T> Default for Type<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type<{}>", std::any::type_name::<T>())
    }
}

/// Owned string arrays.
pub const STRING: Type<String> = Type::new();
/// Static string arrays.
pub const STR: Type<&'static str> = Type::new();

impl<T: Element + Clone + Default + 'static> TypedArray for Type<T> {
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

impl<T: Element + Clone + Default + 'static> Type<T> {
    /// A new array holding `values`.
    pub fn of(&self, values: &[T]) -> Vec<T> {
        values.to_vec()
    }

    /// A new default-filled array of `size` elements.
    ///
    /// Fails for primitive element types, which have their own kinds.
    pub fn of_type(&self, size: usize) -> Result<Vec<T>, ArrayError> {
        if T::KIND.is_primitive() {
            return Err(ArrayError::PrimitiveType { kind: T::KIND });
        }
        Ok(self.array(size))
    }

    /// Element at `index`, or `None` outside the array.
    pub fn at<'a>(&self, array: impl ArrayLike<'a, T>, index: isize) -> Option<&'a T> {
        let array = array.as_slice_opt()?;
        usize::try_from(index).ok().and_then(|i| array.get(i))
    }

    /// Element at `index`, or `default` outside the array.
    pub fn at_or<'a>(&self, array: impl ArrayLike<'a, T>, index: isize, default: T) -> T {
        self.at(array, index).cloned().unwrap_or(default)
    }

    /// Last element, or `None` if the array is absent or empty.
    pub fn last<'a>(&self, array: impl ArrayLike<'a, T>) -> Option<&'a T> {
        array.as_slice_opt()?.last()
    }

    /// Last element, or `default` if the array is absent or empty.
    pub fn last_or<'a>(&self, array: impl ArrayLike<'a, T>, default: T) -> T {
        self.last(array).cloned().unwrap_or(default)
    }

    /// Whether any element equals `value`.
    pub fn has<'a>(&self, array: impl ArrayLike<'a, T>, value: &T) -> bool {
        self.any(array, |v| v.same(value))
    }

    /// Whether any element matches; false for an absent array.
    pub fn any<'a>(&self, array: impl ArrayLike<'a, T>, predicate: impl Fn(&T) -> bool) -> bool {
        array.as_slice_opt().is_some_and(|a| a.iter().any(predicate))
    }

    /// Whether every element matches; true for an absent array.
    pub fn all<'a>(&self, array: impl ArrayLike<'a, T>, predicate: impl Fn(&T) -> bool) -> bool {
        array.as_slice_opt().is_none_or(|a| a.iter().all(predicate))
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

    /// Visit each element of a clamped window.
    pub fn for_each<'a>(
        &self,
        array: impl ArrayLike<'a, T>,
        offset: isize,
        length: isize,
        f: impl FnMut(&'a T),
    ) {
        raw::iter(array, offset, length).for_each(f);
    }

    /// Visit each element with its absolute index.
    pub fn for_each_indexed<'a>(
        &self,
        array: impl ArrayLike<'a, T>,
        mut f: impl FnMut(&'a T, usize),
    ) {
        let array = array.as_slice_opt().unwrap_or_default();
        slice::accept_indexes(array.len(), 0, END, |i| f(&array[i], i));
    }

    /// Sort a clamped window with a comparator. The sort is stable.
    pub fn sort_by<'a>(
        &self,
        array: impl ArrayLikeMut<'a, T>,
        offset: isize,
        length: isize,
        compare: impl FnMut(&T, &T) -> Ordering,
    ) {
        raw::sort(|a| a.sort_by(compare), array, offset, length);
    }

    /// Sort the whole array into natural order. The sort is stable.
    pub fn sort<'a>(&self, array: impl ArrayLikeMut<'a, T>)
    where
        T: Ord,
    {
        raw::sort(<[T]>::sort, array, 0, END);
    }

    /// The clamped window of `array`.
    pub fn window<'a>(
        &self,
        array: impl ArrayLike<'a, T>,
        offset: isize,
        length: isize,
    ) -> &'a [T] {
        let array = array.as_slice_opt().unwrap_or_default();
        &array[Slice::clamp(array.len(), offset, length).range()]
    }
}
