//! Name-to-function table for native calls.
//!
//! Entries are keyed by their `'static` name. Registration never replaces
//! an existing entry; a second registration under a taken name fails with
//! `NativeError::AlreadyRegistered`.

use std::collections::hash_map::Entry;
use std::fmt;

use ly_value::{FunctionRef, NativeFn, Value};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::arity::Arity;
use crate::builtins;
use crate::errors::{NativeError, NativeResult};

/// A registered native function.
#[derive(Copy, Clone)]
pub struct NativeEntry {
    name: &'static str,
    arity: Arity,
    func: NativeFn,
}

impl NativeEntry {
    pub const fn new(name: &'static str, arity: Arity, func: NativeFn) -> Self {
        NativeEntry { name, arity, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    pub fn func(&self) -> NativeFn {
        self.func
    }

    /// Function reference pointing at this entry.
    pub fn function_ref(&self) -> FunctionRef {
        FunctionRef::native(self.name, self.func)
    }

    /// Check the argument count, then run the function.
    pub fn invoke(&self, args: &[Value]) -> NativeResult<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(NativeError::arity_mismatch(self.name, self.arity, args.len()));
        }
        Ok((self.func)(args)?)
    }
}

impl fmt::Debug for NativeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeEntry")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Registry of native functions callable by name.
#[derive(Clone, Debug, Default)]
pub struct NativeRegistry {
    entries: FxHashMap<&'static str, NativeEntry>,
}

impl NativeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        NativeRegistry {
            entries: FxHashMap::default(),
        }
    }

    /// Create a registry holding the builtin natives (`print`, `describe`,
    /// `type_index`, `len`).
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for entry in &builtins::BUILTINS {
            registry.entries.insert(entry.name, *entry);
        }
        registry
    }

    /// Register a native function under `name`.
    pub fn register(&mut self, name: &'static str, arity: Arity, func: NativeFn) -> NativeResult<()> {
        match self.entries.entry(name) {
            Entry::Occupied(_) => Err(NativeError::AlreadyRegistered {
                name: name.to_owned(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(NativeEntry::new(name, arity, func));
                debug!(name, %arity, "registered native function");
                Ok(())
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&NativeEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names in lexicographic order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Call the function registered under `name`.
    #[tracing::instrument(level = "debug", skip(self, args), fields(argc = args.len()))]
    pub fn call(&self, name: &str, args: &[Value]) -> NativeResult<Value> {
        self.get(name)
            .ok_or_else(|| NativeError::unknown_function(name))?
            .invoke(args)
    }

    /// Call through a function reference.
    ///
    /// By-name references resolve through this registry. Native references
    /// always run their own entry point; when their name is registered, the
    /// registered arity is checked first.
    pub fn call_ref(&self, func: &FunctionRef, args: &[Value]) -> NativeResult<Value> {
        match func {
            FunctionRef::Named(name) => self.call(name, args),
            FunctionRef::Native { name, func: native } => {
                if let Some(entry) = self.get(name) {
                    if !entry.arity.accepts(args.len()) {
                        return Err(NativeError::arity_mismatch(*name, entry.arity, args.len()));
                    }
                }
                Ok(native(args)?)
            }
        }
    }

    /// `Value::Function` referencing the entry registered under `name`.
    pub fn function_value(&self, name: &str) -> NativeResult<Value> {
        self.get(name)
            .map(|entry| Value::Function(entry.function_ref()))
            .ok_or_else(|| NativeError::unknown_function(name))
    }
}

/// Invoke a native function reference without a registry.
///
/// By-name references cannot be resolved here and fail with
/// `NativeError::Unresolved`.
pub fn call_function(func: &FunctionRef, args: &[Value]) -> NativeResult<Value> {
    match func {
        FunctionRef::Native { func: native, .. } => Ok(native(args)?),
        FunctionRef::Named(name) => Err(NativeError::Unresolved { name: name.clone() }),
    }
}
