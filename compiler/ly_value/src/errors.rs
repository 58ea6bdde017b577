//! Error types for value access and container operations.
//!
//! Every condition except allocation failure is local and recoverable: the
//! operation returns an error and leaves the container untouched.

use thiserror::Error;

use crate::value::Value;

/// Result of a value or container operation.
pub type ValueResult<T> = Result<T, ValueError>;

/// Failure raised by value accessors and container operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A payload was requested as a variant other than the active one.
    ///
    /// The representation cannot hold a mismatched payload; this only comes
    /// from the checked `require_*` accessors and native argument checks.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// Positional access outside `0..len`.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: i64, len: usize },

    /// Key lookup miss.
    #[error("key not found: {key}")]
    NotFound { key: String },

    /// A container could not reserve its next growth step.
    #[error("allocation failure: cannot grow container to {requested} slots")]
    AllocationFailure { requested: usize },
}

impl ValueError {
    /// Type mismatch against the variant actually held by `got`.
    pub fn type_mismatch(expected: &'static str, got: &Value) -> Self {
        ValueError::TypeMismatch {
            expected,
            got: got.type_name(),
        }
    }

    /// Lookup miss for `key`.
    pub fn not_found(key: impl Into<String>) -> Self {
        ValueError::NotFound { key: key.into() }
    }

    /// Out-of-range access at `index` into a container of `len` elements.
    pub fn index_out_of_bounds(index: i64, len: usize) -> Self {
        ValueError::IndexOutOfBounds { index, len }
    }

    /// Whether this error is a lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ValueError::NotFound { .. })
    }
}
