//! Insertion-ordered string-keyed map of owned values.
//!
//! Entries live in a `Vec` in insertion order; an `FxHashMap` indexes each
//! key to its position. Lookups compare key contents, never string
//! identity, and inserting an existing key overwrites its value in place.

use std::fmt;
use std::mem;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::errors::{ValueError, ValueResult};
use crate::growth::{grow_if_full, try_grow_if_full, INITIAL_CAPACITY};
use crate::value::Value;

/// Ordered map backing `Value::Dict` and class member tables.
///
/// # Invariants
///
/// - Keys are unique.
/// - `index[key] == i` exactly when `entries[i].0 == key`.
/// - Iteration follows insertion order; overwriting a key keeps its slot.
#[derive(Clone)]
pub struct Map {
    entries: Vec<(String, Value)>,
    index: FxHashMap<String, usize>,
}

impl Map {
    /// Create an empty map with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries storable before the next growth step.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Position of `key` in insertion order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Insert or overwrite `key`.
    ///
    /// An existing key keeps its position and size is unchanged; the
    /// previous value is returned. A new key is appended, growing the map
    /// by one step when full.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        if let Some(slot) = self.slot_mut(&key) {
            trace!(key = %key, "map entry overwritten");
            return Some(mem::replace(slot, value));
        }
        grow_if_full(&mut self.entries);
        self.append(key, value);
        None
    }

    /// Insert or overwrite `key`, reporting allocation failure instead of
    /// aborting.
    ///
    /// Both the entry storage and the key index are reserved fallibly
    /// before anything is written; a failed reservation leaves the map
    /// unchanged.
    pub fn try_insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> ValueResult<Option<Value>> {
        let key = key.into();
        if let Some(slot) = self.slot_mut(&key) {
            trace!(key = %key, "map entry overwritten");
            return Ok(Some(mem::replace(slot, value)));
        }
        try_grow_if_full(&mut self.entries)?;
        self.index
            .try_reserve(1)
            .map_err(|_| ValueError::AllocationFailure {
                requested: self.entries.len().saturating_add(1),
            })?;
        self.append(key, value);
        Ok(None)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        let i = self.index_of(key)?;
        self.entries.get(i).map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.slot_mut(key)
    }

    /// Value stored under `key`, or `NotFound`.
    pub fn lookup(&self, key: &str) -> ValueResult<&Value> {
        self.get(key).ok_or_else(|| ValueError::not_found(key))
    }

    /// Entry at position `i` in insertion order.
    pub fn get_index(&self, i: usize) -> Option<(&str, &Value)> {
        self.entries.get(i).map(|(key, value)| (key.as_str(), value))
    }

    /// Entry at position `index`, or `IndexOutOfBounds`.
    pub fn entry_at(&self, index: i64) -> ValueResult<(&str, &Value)> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get_index(i))
            .ok_or_else(|| ValueError::index_out_of_bounds(index, self.len()))
    }

    /// Remove `key`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed_at = self.index.remove(key)?;
        let (_, value) = self.entries.remove(removed_at);
        for position in self.index.values_mut() {
            if *position > removed_at {
                *position -= 1;
            }
        }
        Some(value)
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Entries in insertion order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (&str, &Value)> + ExactSizeIterator + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Entries in insertion order with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> + '_ {
        self.entries
            .iter_mut()
            .map(|(key, value)| (key.as_str(), value))
    }

    fn slot_mut(&mut self, key: &str) -> Option<&mut Value> {
        let i = self.index_of(key)?;
        self.entries.get_mut(i).map(|(_, value)| value)
    }

    fn append(&mut self, key: String, value: Value) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

// Content equality, independent of insertion order.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Map {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
