//! Runtime values exchanged across the native-function boundary.
//!
//! # Construction
//!
//! Aggregates are boxed inside the factory methods, so callers never build
//! the boxes themselves:
//!
//! ```text
//! let n = Value::int(10);
//! let s = Value::string("hello");
//! let arr = Value::array(Array::from(vec![Value::int(1), Value::int(2)]));
//! let point = Value::class(ClassInstance::new("Point"));
//! ```
//!
//! # Variant Safety
//!
//! The discriminant is the enum variant and the payload is its field, so a
//! value can never claim one variant while holding another's payload.
//! Reading a payload goes through `as_*` (returns `Option`) or `require_*`
//! (returns `ValueError::TypeMismatch`). No accessor coerces between
//! variants.

mod function;
mod type_index;

use std::fmt;
use std::mem;

pub use function::{FunctionRef, NativeFn};
pub use type_index::TypeIndex;

use crate::array::Array;
use crate::class::ClassInstance;
use crate::errors::{ValueError, ValueResult};
use crate::map::Map;

/// Dynamic value.
///
/// Aggregate variants own their contents exclusively. `Clone` performs a
/// deep copy.
#[derive(Clone, Default, PartialEq)]
pub enum Value {
    /// Absent value; the state every value starts in.
    #[default]
    Null,
    /// 64-bit signed integer.
    Int(i64),
    /// IEEE 754 double.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Owned string.
    Str(String),
    /// Reference to a callable.
    Function(FunctionRef),
    /// Owned class instance.
    Class(Box<ClassInstance>),
    /// Owned dictionary.
    Dict(Box<Map>),
    /// Owned array.
    Array(Box<Array>),
}

// Factory Methods

impl Value {
    /// Create a null value.
    #[inline]
    pub const fn null() -> Self {
        Value::Null
    }

    /// Create an integer value.
    #[inline]
    pub const fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub const fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a boolean value.
    #[inline]
    pub const fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create a string value.
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Create a reference to a function resolved by name.
    #[inline]
    pub fn function(name: impl Into<String>) -> Self {
        Value::Function(FunctionRef::named(name))
    }

    /// Create a reference to a native function.
    #[inline]
    pub fn native(name: &'static str, func: NativeFn) -> Self {
        Value::Function(FunctionRef::native(name, func))
    }

    /// Wrap a class instance.
    #[inline]
    pub fn class(instance: ClassInstance) -> Self {
        Value::Class(Box::new(instance))
    }

    /// Wrap a dictionary.
    #[inline]
    pub fn dict(map: Map) -> Self {
        Value::Dict(Box::new(map))
    }

    /// Wrap an array.
    #[inline]
    pub fn array(array: Array) -> Self {
        Value::Array(Box::new(array))
    }
}

// Value Methods

impl Value {
    /// Replace discriminant and payload together, returning the old value.
    pub fn set(&mut self, value: Value) -> Value {
        mem::replace(self, value)
    }

    /// Take the value out, leaving null behind.
    pub fn take(&mut self) -> Value {
        mem::take(self)
    }

    /// Numeric tag of the active variant.
    pub fn type_index(&self) -> TypeIndex {
        match self {
            Value::Null => TypeIndex::Null,
            Value::Int(_) => TypeIndex::Int,
            Value::Float(_) => TypeIndex::Float,
            Value::Bool(_) => TypeIndex::Bool,
            Value::Str(_) => TypeIndex::Str,
            Value::Function(_) => TypeIndex::Function,
            Value::Class(_) => TypeIndex::Class,
            Value::Dict(_) => TypeIndex::Dict,
            Value::Array(_) => TypeIndex::Array,
        }
    }

    /// Get the type name for error messages.
    pub fn type_name(&self) -> &'static str {
        self.type_index().name()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Float payload. Integers are not widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionRef> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassInstance> {
        match self {
            Value::Class(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassInstance> {
        match self {
            Value::Class(instance) => Some(instance),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Map> {
        match self {
            Value::Dict(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_dict_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Dict(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Integer payload or a type mismatch.
    pub fn require_int(&self) -> ValueResult<i64> {
        self.as_int().ok_or_else(|| ValueError::type_mismatch("int", self))
    }

    /// Float payload or a type mismatch.
    pub fn require_float(&self) -> ValueResult<f64> {
        self.as_float().ok_or_else(|| ValueError::type_mismatch("float", self))
    }

    /// Boolean payload or a type mismatch.
    pub fn require_bool(&self) -> ValueResult<bool> {
        self.as_bool().ok_or_else(|| ValueError::type_mismatch("bool", self))
    }

    /// String payload or a type mismatch.
    pub fn require_str(&self) -> ValueResult<&str> {
        self.as_str().ok_or_else(|| ValueError::type_mismatch("str", self))
    }

    /// Function reference or a type mismatch.
    pub fn require_function(&self) -> ValueResult<&FunctionRef> {
        self.as_function().ok_or_else(|| ValueError::type_mismatch("function", self))
    }

    /// Class instance or a type mismatch.
    pub fn require_class(&self) -> ValueResult<&ClassInstance> {
        self.as_class().ok_or_else(|| ValueError::type_mismatch("class", self))
    }

    /// Dictionary or a type mismatch.
    pub fn require_dict(&self) -> ValueResult<&Map> {
        self.as_dict().ok_or_else(|| ValueError::type_mismatch("dict", self))
    }

    /// Array or a type mismatch.
    pub fn require_array(&self) -> ValueResult<&Array> {
        self.as_array().ok_or_else(|| ValueError::type_mismatch("array", self))
    }
}

// Conversions

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<FunctionRef> for Value {
    fn from(func: FunctionRef) -> Self {
        Value::Function(func)
    }
}

impl From<ClassInstance> for Value {
    fn from(instance: ClassInstance) -> Self {
        Value::class(instance)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::dict(map)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::array(array)
    }
}

// Trait Implementations

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(n) => write!(f, "Float({n:?})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Str(s) => write!(f, "Str({s:?})"),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Class(instance) => write!(f, "Class({:?})", &**instance),
            Value::Dict(map) => write!(f, "Dict({:?})", &**map),
            Value::Array(array) => write!(f, "Array({:?})", &**array),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Function(func) => write!(f, "{func}"),
            Value::Class(instance) => write!(f, "<class {}>", instance.name()),
            Value::Dict(map) => {
                write!(f, "{{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k:?}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Array(array) => {
                write!(f, "[")?;
                for (i, item) in array.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
