//! Shape of nested arrays.

use std::fmt;

use smallvec::SmallVec;

/// Ordered, immutable sizes of a nested array, outermost level first.
///
/// Derived by walking an array of arrays and keeping the maximum length
/// seen at each nesting level, so ragged input reports its bounding shape.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dimensions {
    sizes: SmallVec<[usize; 4]>,
}

impl Dimensions {
    /// Dimensions with no levels.
    pub fn none() -> Self {
        Self::default()
    }

    /// Dimensions from explicit sizes.
    pub fn from_sizes(sizes: &[usize]) -> Self {
        Self {
            sizes: SmallVec::from_slice(sizes),
        }
    }

    /// Walk `value` and record the maximum length at each level.
    pub fn of<S: Shape + ?Sized>(value: &S) -> Self {
        let mut sizes = SmallVec::new();
        value.record(0, &mut sizes);
        Self { sizes }
    }

    /// Number of nesting levels.
    pub fn rank(&self) -> usize {
        self.sizes.len()
    }

    /// Size at `level`, if that level exists.
    pub fn get(&self, level: usize) -> Option<usize> {
        self.sizes.get(level).copied()
    }

    /// Total element count of the bounding shape; 0 with no levels.
    pub fn size(&self) -> usize {
        if self.sizes.is_empty() {
            return 0;
        }
        self.sizes.iter().product()
    }

    /// Whether there are no levels.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// The sizes, outermost first.
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, size) in self.sizes.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{size}")?;
        }
        Ok(())
    }
}

/// Something whose nesting shape can be recorded into [`Dimensions`].
///
/// Arrays record their length and recurse into their items; leaf
/// elements record nothing; absent values contribute nothing.
pub trait Shape {
    /// Record this value's lengths starting at `level`.
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>);
}

fn widen(sizes: &mut SmallVec<[usize; 4]>, level: usize, len: usize) {
    if sizes.len() <= level {
        sizes.resize(level + 1, 0);
    }
    sizes[level] = sizes[level].max(len);
}

impl<T: Shape> Shape for [T] {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        widen(sizes, level, self.len());
        for item in self {
            item.record(level + 1, sizes);
        }
    }
}

impl<T: Shape, const N: usize> Shape for [T; N] {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        self.as_slice().record(level, sizes);
    }
}

impl<T: Shape> Shape for Vec<T> {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        self.as_slice().record(level, sizes);
    }
}

impl<T: Shape> Shape for Option<T> {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        if let Some(value) = self {
            value.record(level, sizes);
        }
    }
}

impl<T: Shape + ?Sized> Shape for &T {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        (**self).record(level, sizes);
    }
}

impl<T: Shape + ?Sized> Shape for Box<T> {
    fn record(&self, level: usize, sizes: &mut SmallVec<[usize; 4]>) {
        (**self).record(level, sizes);
    }
}

macro_rules! leaf_shape {
    ($($ty:ty),*) => {$(
        impl Shape for $ty {
            fn record(&self, _level: usize, _sizes: &mut SmallVec<[usize; 4]>) {}
        }
    )*};
}

leaf_shape!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, String, str);
