//! Named class instances with separate variable and method tables.

use crate::errors::ValueResult;
use crate::map::Map;
use crate::value::Value;

/// Class instance backing `Value::Class`.
///
/// Variables and methods share the `Map` type and lookup rules but live in
/// separate tables that are never merged. Method dispatch belongs to the
/// interpreter; this type only stores the table.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassInstance {
    name: String,
    variables: Map,
    methods: Map,
}

impl ClassInstance {
    /// Create an instance with empty variable and method tables.
    pub fn new(name: impl Into<String>) -> Self {
        ClassInstance {
            name: name.into(),
            variables: Map::new(),
            methods: Map::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable `key`, or `NotFound`.
    pub fn get_variable(&self, key: &str) -> ValueResult<&Value> {
        self.variables.lookup(key)
    }

    /// Method `key`, or `NotFound`.
    pub fn get_method(&self, key: &str) -> ValueResult<&Value> {
        self.methods.lookup(key)
    }

    /// Insert or overwrite a variable, returning the previous value.
    pub fn set_variable(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.variables.insert(key, value)
    }

    /// Insert or overwrite a method, returning the previous value.
    pub fn set_method(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.methods.insert(key, value)
    }

    pub fn variables(&self) -> &Map {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut Map {
        &mut self.variables
    }

    pub fn methods(&self) -> &Map {
        &self.methods
    }

    pub fn methods_mut(&mut self) -> &mut Map {
        &mut self.methods
    }
}
