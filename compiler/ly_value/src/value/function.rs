//! Function references carried by `Value::Function`.

use std::fmt;

use super::Value;
use crate::errors::ValueResult;

/// Native function signature.
///
/// Receives the call arguments by reference and returns a freshly owned
/// value; ownership of the result passes to the caller.
pub type NativeFn = fn(&[Value]) -> ValueResult<Value>;

/// Reference to a callable.
///
/// A function reference owns no other value, so holding one can never
/// create a cycle through the value graph.
#[derive(Clone)]
pub enum FunctionRef {
    /// Function resolved by the interpreter through its name.
    Named(String),
    /// Native function with its entry point.
    Native { name: &'static str, func: NativeFn },
}

impl FunctionRef {
    /// Reference a function by name.
    pub fn named(name: impl Into<String>) -> Self {
        FunctionRef::Named(name.into())
    }

    /// Reference a native entry point.
    pub fn native(name: &'static str, func: NativeFn) -> Self {
        FunctionRef::Native { name, func }
    }

    /// Name of the referenced function.
    pub fn name(&self) -> &str {
        match self {
            FunctionRef::Named(name) => name.as_str(),
            FunctionRef::Native { name, .. } => *name,
        }
    }

    /// Native entry point, if this reference carries one.
    pub fn native_fn(&self) -> Option<NativeFn> {
        match self {
            FunctionRef::Named(_) => None,
            FunctionRef::Native { func, .. } => Some(*func),
        }
    }
}

// Equal by name: entry-point addresses are not stable across codegen units.
impl PartialEq for FunctionRef {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl fmt::Debug for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionRef::Named(name) => write!(f, "Named({name})"),
            FunctionRef::Native { name, .. } => write!(f, "Native({name})"),
        }
    }
}

impl fmt::Display for FunctionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name())
    }
}
