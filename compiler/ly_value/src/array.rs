//! Ordered, growable sequence of owned values.

use std::fmt;
use std::mem;
use std::slice;
use std::vec;

use crate::errors::{ValueError, ValueResult};
use crate::growth::{grow_if_full, try_grow_if_full, INITIAL_CAPACITY};
use crate::value::Value;

/// Growable array backing `Value::Array`.
///
/// Indexing takes `i64` so negative indices from script code are reported
/// as out of bounds instead of wrapping.
#[derive(Clone, PartialEq)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Create an empty array with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Array {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of elements storable before the next growth step.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append a value, growing by one step when full.
    pub fn push(&mut self, value: Value) {
        grow_if_full(&mut self.items);
        self.items.push(value);
    }

    /// Append a value, reporting allocation failure instead of aborting.
    pub fn try_push(&mut self, value: Value) -> ValueResult<()> {
        try_grow_if_full(&mut self.items)?;
        self.items.push(value);
        Ok(())
    }

    /// Remove and return the last element.
    pub fn pop(&mut self) -> Option<Value> {
        self.items.pop()
    }

    /// Element at `index`, which must lie in `0..len`.
    pub fn get(&self, index: i64) -> ValueResult<&Value> {
        let len = self.items.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get(i))
            .ok_or_else(|| ValueError::index_out_of_bounds(index, len))
    }

    /// Mutable element at `index`, which must lie in `0..len`.
    pub fn get_mut(&mut self, index: i64) -> ValueResult<&mut Value> {
        let len = self.items.len();
        usize::try_from(index)
            .ok()
            .and_then(|i| self.items.get_mut(i))
            .ok_or_else(|| ValueError::index_out_of_bounds(index, len))
    }

    /// Overwrite the element at `index`, returning the previous one.
    pub fn set(&mut self, index: i64, value: Value) -> ValueResult<Value> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        let mut array = Array::new();
        for value in iter {
            array.push(value);
        }
        array
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        items.into_iter().collect()
    }
}

impl Extend<Value> for Array {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
