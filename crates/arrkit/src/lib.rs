//! arrkit: bounds-safe array algebra over slices, typed array kinds and
//! growable builders.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all arrkit sub-crates. For most users, adding `arrkit` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use arrkit::prelude::*;
//!
//! // Every range argument is clamped, never rejected.
//! let a = INT.range(0, 5);
//! assert_eq!(INT.to_string_range(&a, 3, END), "[3, 4]");
//! assert_eq!(INT.to_string_range(&a, -9, 2), "[0, 1]");
//!
//! // Search reports absolute indexes.
//! assert_eq!(INT.index_of_range(&a, 2, END, &[3], 0, END), Some(3));
//!
//! // Build without knowing the final size.
//! let mut d = DynamicArray::bytes();
//! d.append_wide(&[0xaa, 0xbb]);
//! assert_eq!(d.wrap().to_hex(), "[0xaa, 0xbb]");
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`base`] | `arrkit-core` | Slices, accessor, element model, hash, joiner, dimensions, errors |
//! | [`kernel`] | `arrkit-kernel` | Raw kernel, `TypedArray`, object and primitive kinds |
//! | [`dynamic`] | `arrkit-dynamic` | Growth policies, builder config, `DynamicArray`, `View` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Slice arithmetic and the shared vocabulary types (`arrkit-core`).
///
/// Contains [`base::Slice`] and the [`base::END`] sentinel, the
/// [`base::ArrayLike`] accessor, the [`base::Element`] model, the
/// [`base::Joiner`] string styles and [`base::Dimensions`].
pub use arrkit_core as base;

/// Array operations (`arrkit-kernel`).
///
/// The [`kernel::raw`] layer works on any element type given callbacks;
/// [`kernel::TypedArray`] packages those callbacks per kind.
pub use arrkit_kernel as kernel;

/// Growable array builders (`arrkit-dynamic`).
pub use arrkit_dynamic as dynamic;

/// Common imports for typical arrkit usage.
///
/// ```rust
/// use arrkit::prelude::*;
/// ```
///
/// This imports the kind constants, the capability traits, the builder
/// and the range vocabulary.
pub mod prelude {
    // Range vocabulary
    pub use arrkit_core::{ArrayLike, ArrayLikeMut, Joiner, Slice, END};

    // Element model and errors
    pub use arrkit_core::{ArrayError, Element, Kind};

    // Kinds and capabilities
    pub use arrkit_kernel::{
        Integral, Of, Type, TypedArray, BOOL, BYTE, CHAR, DOUBLE, FLOAT, INT, LONG, SHORT, STR,
        STRING,
    };

    // Builders
    pub use arrkit_dynamic::{DynamicArray, DynamicConfig, Growth, View};
}
