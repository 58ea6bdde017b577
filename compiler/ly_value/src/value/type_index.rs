//! Numeric discriminants exchanged with native callers.

use std::fmt;

/// Fieldless mirror of `Value`'s variants with the numeric tags used across
/// the native boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i16)]
pub enum TypeIndex {
    Null = -1,
    Int = 0,
    Float = 1,
    Bool = 2,
    Str = 3,
    Function = 4,
    Class = 5,
    Dict = 6,
    Array = 7,
}

impl TypeIndex {
    /// All tags in numeric order.
    pub const ALL: [TypeIndex; 9] = [
        TypeIndex::Null,
        TypeIndex::Int,
        TypeIndex::Float,
        TypeIndex::Bool,
        TypeIndex::Str,
        TypeIndex::Function,
        TypeIndex::Class,
        TypeIndex::Dict,
        TypeIndex::Array,
    ];

    /// The raw numeric tag.
    #[inline]
    pub const fn raw(self) -> i16 {
        self as i16
    }

    /// Decode a raw tag. Unknown tags yield `None`.
    pub fn from_raw(raw: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.raw() == raw)
    }

    /// Lowercase name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            TypeIndex::Null => "null",
            TypeIndex::Int => "int",
            TypeIndex::Float => "float",
            TypeIndex::Bool => "bool",
            TypeIndex::Str => "str",
            TypeIndex::Function => "function",
            TypeIndex::Class => "class",
            TypeIndex::Dict => "dict",
            TypeIndex::Array => "array",
        }
    }

    /// Whether values with this tag own nested values.
    pub const fn is_aggregate(self) -> bool {
        matches!(self, TypeIndex::Class | TypeIndex::Dict | TypeIndex::Array)
    }
}

impl fmt::Display for TypeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
