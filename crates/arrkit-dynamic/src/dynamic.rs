//! Growable array builder.
//!
//! [`DynamicArray`] owns one backing buffer and a write cursor. The buffer
//! is always fully initialised: its length is the builder's capacity and
//! slots past the cursor hold default values. Writes past the end grow
//! the buffer through the configured [`Growth`] policy.
//!
//! Indexes passed to the builder are signed. A negative index is taken
//! relative to the cursor and floors at 0, so `set(-2, ..)` overwrites
//! the last two written elements.

use std::fmt;
use std::mem;

use arrkit_core::{ArrayLike, Element, Narrow, Slice, END};
use arrkit_kernel::{
    Of, OfBool, OfByte, OfChar, OfDouble, OfFloat, OfInt, OfLong, OfShort, Primitive, Type,
    TypedArray, BOOL, BYTE, CHAR, DOUBLE, FLOAT, INT, LONG, SHORT,
};
use tracing::trace;

use crate::config::DynamicConfig;
use crate::growth::Growth;
use crate::view::View;

/// Builds an array of kind `K` without knowing its final size.
///
/// Not thread-safe; the builder is a plain owned value and needs `&mut`
/// for every write.
pub struct DynamicArray<K: TypedArray> {
    kind: K,
    growth: Growth,
    /// Backing storage; `len()` is the capacity.
    buffer: Vec<K::Elem>,
    /// Write cursor: one past the highest written index.
    index: usize,
}

impl<K: TypedArray> DynamicArray<K> {
    /// A builder with default growth.
    pub fn new(kind: K) -> Self {
        Self::with_config(kind, DynamicConfig::default())
    }

    /// A builder with the given growth policy.
    pub fn with_growth(kind: K, growth: Growth) -> Self {
        Self::with_config(kind, DynamicConfig::new(growth))
    }

    /// A builder with full configuration.
    pub fn with_config(kind: K, config: DynamicConfig) -> Self {
        let buffer = kind.array(config.initial_len());
        Self {
            kind,
            growth: config.growth,
            buffer,
            index: 0,
        }
    }

    /// The array kind this builder writes.
    pub fn kind(&self) -> &K {
        &self.kind
    }

    /// The write cursor.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move the write cursor, growing the buffer if it lands past the end.
    ///
    /// A negative `index` is relative to the current cursor. Unlike the
    /// write operations this may move the cursor backwards. Returns the
    /// resolved cursor.
    pub fn set_index(&mut self, index: isize) -> usize {
        let index = self.resolve(index);
        self.ensure_size(index);
        self.index = index;
        index
    }

    /// Current buffer length, including unwritten padding.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// The whole backing buffer, including padding past the cursor.
    pub fn array(&self) -> &[K::Elem] {
        &self.buffer
    }

    /// The whole backing buffer, mutably.
    pub fn array_mut(&mut self) -> &mut [K::Elem] {
        &mut self.buffer
    }

    /// The written range `[0, index)`.
    pub fn as_slice(&self) -> &[K::Elem] {
        &self.buffer[..self.index]
    }

    /// Make `index` addressable and count it as written.
    ///
    /// Grows the buffer as needed and advances the cursor past `index`.
    /// Returns the resolved index.
    pub fn ensure_index(&mut self, index: isize) -> usize {
        let index = self.resolve(index);
        let end = index.saturating_add(1);
        self.ensure_size(end);
        self.index = self.index.max(end);
        index
    }

    /// The element at `index`, growing the buffer if needed.
    pub fn get(&mut self, index: isize) -> &K::Elem {
        let index = self.ensure_index(index);
        &self.buffer[index]
    }

    /// Write `value` at the cursor and advance it.
    pub fn accept(&mut self, value: K::Elem) {
        self.ensure_size(self.index + 1);
        self.buffer[self.index] = value;
        self.index += 1;
    }

    /// Write `values` starting at `index`. Returns the new cursor.
    pub fn set<'a>(&mut self, index: isize, values: impl ArrayLike<'a, K::Elem>) -> usize {
        self.set_range(index, values, 0, END)
    }

    /// Write a clamped window of `values` starting at `index`.
    ///
    /// The cursor only moves forward, to the end of the write if that is
    /// past it. Returns the new cursor.
    ///
    /// An absent `values` is a zero-length write: nothing is copied, but
    /// the buffer still grows to `index` and the cursor still advances to
    /// it, as for an empty slice.
    pub fn set_range<'a>(
        &mut self,
        index: isize,
        values: impl ArrayLike<'a, K::Elem>,
        offset: isize,
        length: isize,
    ) -> usize {
        let at = self.resolve(index);
        self.write(at, values, offset, length)
    }

    /// Write `values` at the cursor. Returns the new cursor.
    pub fn append<'a>(&mut self, values: impl ArrayLike<'a, K::Elem>) -> usize {
        self.append_range(values, 0, END)
    }

    /// Write a clamped window of `values` at the cursor. An absent
    /// `values` leaves the builder unchanged.
    pub fn append_range<'a>(
        &mut self,
        values: impl ArrayLike<'a, K::Elem>,
        offset: isize,
        length: isize,
    ) -> usize {
        self.write(self.index, values, offset, length)
    }

    /// Shrink the buffer to exactly the written range and return it.
    pub fn truncate(&mut self) -> &[K::Elem] {
        if self.buffer.len() != self.index {
            trace!(from = self.buffer.len(), to = self.index, "truncating buffer");
        }
        self.buffer = self.kind.resize(mem::take(&mut self.buffer), self.index);
        &self.buffer
    }

    /// The written range as an owned, exact-size array.
    pub fn into_vec(mut self) -> Vec<K::Elem> {
        self.truncate();
        self.buffer
    }

    fn resolve(&self, index: isize) -> usize {
        usize::try_from(index).unwrap_or_else(|_| self.index.saturating_sub(index.unsigned_abs()))
    }

    fn write<'a>(
        &mut self,
        at: usize,
        values: impl ArrayLike<'a, K::Elem>,
        offset: isize,
        length: isize,
    ) -> usize {
        let values = values.as_slice_opt().unwrap_or_default();
        let window = &values[Slice::clamp(values.len(), offset, length).range()];
        self.write_iter(at, window.iter().cloned())
    }

    fn write_iter(&mut self, at: usize, values: impl ExactSizeIterator<Item = K::Elem>) -> usize {
        let end = at.saturating_add(values.len());
        self.ensure_size(end);
        for (slot, value) in self.buffer[at..end].iter_mut().zip(values) {
            *slot = value;
        }
        self.index = self.index.max(end);
        self.index
    }

    fn ensure_size(&mut self, size: usize) {
        let capacity = self.buffer.len();
        if size <= capacity {
            return;
        }
        let grown = self.growth.capacity_for(capacity, size);
        trace!(from = capacity, to = grown, "growing buffer");
        self.buffer = self.kind.resize(mem::take(&mut self.buffer), grown);
    }
}

impl<K: TypedArray> fmt::Display for DynamicArray<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.kind.to_string(self.as_slice()))
    }
}

impl<K: TypedArray> fmt::Debug for DynamicArray<K>
where
    K::Elem: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("index", &self.index)
            .field("capacity", &self.buffer.len())
            .field("growth", &self.growth)
            .field("values", &self.as_slice())
            .finish()
    }
}

impl<K: TypedArray + Default> Default for DynamicArray<K> {
    fn default() -> Self {
        Self::new(K::default())
    }
}

impl<K: TypedArray> Extend<K::Elem> for DynamicArray<K> {
    fn extend<I: IntoIterator<Item = K::Elem>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.accept(value));
    }
}

impl<T: Element + Clone + Default + 'static> DynamicArray<Type<T>> {
    /// An object array builder with default growth.
    pub fn of() -> Self {
        Self::new(Type::new())
    }
}

macro_rules! primitive_factories {
    ($($name:ident: $kind:ty = $value:expr;)*) => {$(
        impl DynamicArray<$kind> {
            #[doc = concat!("A `", stringify!($name), "` builder with default growth.")]
            pub fn $name() -> Self {
                Self::new($value)
            }
        }
    )*};
}

primitive_factories! {
    bools: OfBool = BOOL;
    chars: OfChar = CHAR;
    bytes: OfByte = BYTE;
    shorts: OfShort = SHORT;
    ints: OfInt = INT;
    longs: OfLong = LONG;
    floats: OfFloat = FLOAT;
    doubles: OfDouble = DOUBLE;
}

impl<T: Primitive> DynamicArray<Of<T>> {
    /// Narrow `value` and write it at the cursor.
    pub fn accept_wide<W: Copy>(&mut self, value: W)
    where
        T: Narrow<W>,
    {
        self.accept(T::narrow(value));
    }

    /// Narrow `values` and write them starting at `index`.
    pub fn set_wide<W: Copy>(&mut self, index: isize, values: &[W]) -> usize
    where
        T: Narrow<W>,
    {
        let at = self.resolve(index);
        self.write_iter(at, values.iter().map(|&v| T::narrow(v)))
    }

    /// Narrow `values` and write them at the cursor.
    pub fn append_wide<W: Copy>(&mut self, values: &[W]) -> usize
    where
        T: Narrow<W>,
    {
        self.write_iter(self.index, values.iter().map(|&v| T::narrow(v)))
    }

    /// A zero-copy view of the written range.
    ///
    /// The view borrows the builder, so no write can happen while it is
    /// alive.
    pub fn wrap(&self) -> View<'_, T> {
        View::new(self.as_slice())
    }
}

impl DynamicArray<OfChar> {
    /// Write the UTF-16 code units of `s` starting at `index`.
    pub fn set_str(&mut self, index: isize, s: &str) -> usize {
        self.set_str_range(index, s, 0, END)
    }

    /// Write a clamped window of the UTF-16 code units of `s` starting at
    /// `index`. `offset` and `length` count code units.
    pub fn set_str_range(&mut self, index: isize, s: &str, offset: isize, length: isize) -> usize {
        let units = CHAR.of_str(s);
        self.set_range(index, &units, offset, length)
    }

    /// Write the UTF-16 code units of `s` at the cursor.
    pub fn append_str(&mut self, s: &str) -> usize {
        self.append_str_range(s, 0, END)
    }

    /// Write a clamped window of the UTF-16 code units of `s` at the
    /// cursor.
    pub fn append_str_range(&mut self, s: &str, offset: isize, length: isize) -> usize {
        let units = CHAR.of_str(s);
        self.append_range(&units, offset, length)
    }

    /// The written range decoded as a string.
    pub fn as_string(&self) -> String {
        CHAR.to_str(self.as_slice(), 0, END)
    }
}
