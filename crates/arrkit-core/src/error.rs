//! Array error types.

use std::error::Error;
use std::fmt;

use crate::element::Kind;

/// Errors surfaced by the array kernel.
///
/// Range arguments never produce errors: they are clamped against the
/// array length instead. Only direct element access and type misuse fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An object-array operation was requested for a primitive element kind.
    PrimitiveType {
        /// The primitive kind that was rejected.
        kind: Kind,
    },
    /// Direct element access outside `[0, len)`.
    IndexOutOfBounds {
        /// The requested index.
        index: isize,
        /// Length of the array that was accessed.
        len: usize,
    },
    /// A boxed element was absent where a value was required.
    NullElement {
        /// Index of the absent element.
        index: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrimitiveType { kind } => {
                write!(f, "primitives not supported: {kind}")
            }
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::NullElement { index } => {
                write!(f, "null element at index {index}")
            }
        }
    }
}

impl Error for ArrayError {}
