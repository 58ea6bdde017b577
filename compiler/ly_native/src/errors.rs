//! Errors raised while resolving and invoking native functions.

use ly_value::ValueError;
use thiserror::Error;

use crate::arity::Arity;

/// Result of a native call or registry operation.
pub type NativeResult<T> = Result<T, NativeError>;

/// Failure raised by the native bridge.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NativeError {
    /// No native function is registered under this name.
    #[error("unknown native function `{name}`")]
    UnknownFunction { name: String },

    /// The call supplied an argument count the function does not accept.
    #[error("`{name}` expects {expected}, got {got}")]
    ArityMismatch {
        name: String,
        expected: Arity,
        got: usize,
    },

    /// A second registration attempted to reuse a taken name.
    #[error("native function `{name}` is already registered")]
    AlreadyRegistered { name: String },

    /// A by-name function reference was invoked without a registry.
    #[error("function `{name}` has no native entry point")]
    Unresolved { name: String },

    /// The native function itself failed.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl NativeError {
    pub fn unknown_function(name: impl Into<String>) -> Self {
        NativeError::UnknownFunction { name: name.into() }
    }

    pub fn arity_mismatch(name: impl Into<String>, expected: Arity, got: usize) -> Self {
        NativeError::ArityMismatch {
            name: name.into(),
            expected,
            got,
        }
    }
}
