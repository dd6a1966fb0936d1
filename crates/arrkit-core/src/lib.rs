//! Core types for the arrkit array algebra.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces every array operation is built from: slice arithmetic, the
//! uniform array accessor, the element model, hashing, joining, nested
//! dimensions and the error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod dims;
pub mod element;
pub mod error;
pub mod hash;
pub mod join;
pub mod slice;

pub use array::{ArrayLike, ArrayLikeMut};
pub use dims::{Dimensions, Shape};
pub use element::{Element, Hex, Kind, Narrow};
pub use error::ArrayError;
pub use hash::Hasher;
pub use join::{Joiner, JoinerBuilder, ShowCount, NULL};
pub use slice::{Slice, END};
