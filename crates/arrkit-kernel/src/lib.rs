//! Array kernel for arrkit.
//!
//! Layers, leaves first:
//!
//! - [`raw`]: element-kind-agnostic operations over any array-shaped
//!   value, parameterised by equality, hashing, swapping and formatting
//!   callbacks.
//! - [`typed`]: the [`TypedArray`] capability set, implemented once on top
//!   of [`raw`], plus hex rendering through [`Integral`].
//! - [`obj`]: the object-array kind [`Type<T>`].
//! - [`primitive`]: the eight primitive kinds, [`Of<T>`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod obj;
pub mod primitive;
pub mod raw;
pub mod typed;

pub use obj::{Type, STR, STRING};
pub use primitive::{
    Of, OfBool, OfByte, OfChar, OfDouble, OfFloat, OfInt, OfLong, OfShort, Primitive, BOOL, BYTE,
    CHAR, DOUBLE, FLOAT, INT, LONG, SHORT,
};
pub use typed::{Integral, TypedArray};
