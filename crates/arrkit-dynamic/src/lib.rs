//! Growable array builders for arrkit.
//!
//! A [`DynamicArray`] builds an array of any kernel kind without knowing
//! its final size up front:
//!
//! ```text
//! DynamicArray<K: TypedArray>
//! ├── Growth (Double / Step / Exact / Custom)
//! ├── buffer: Vec<K::Elem>, fully initialised, len == capacity
//! └── index: write cursor
//! ```
//!
//! Finish with [`DynamicArray::truncate`] or [`DynamicArray::into_vec`]
//! for an exact-size array, or borrow the written range of a primitive
//! builder as a [`View`] through `wrap()`.
//!
//! Buffer growth and truncation are traced through `tracing` at TRACE
//! level; a growth policy that stops making progress is reported at WARN.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dynamic;
pub mod growth;
pub mod view;

pub use config::DynamicConfig;
pub use dynamic::DynamicArray;
pub use growth::Growth;
pub use view::View;
