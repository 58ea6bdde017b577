//! Structured traversal over nested values.
//!
//! [`Value::walk`] yields every value reachable from a root together with
//! the path leading to it, depth-first and pre-order:
//!
//! ```text
//! $            Dict
//! $.a          Int(1)
//! $.b          Array
//! $.b[0]       Bool(true)
//! $.b[1]       Float(2.5)
//! ```
//!
//! Children are visited in container order: array elements by index, dict
//! entries in insertion order, class variables and then class methods in
//! insertion order. The walk keeps an explicit work stack, so nesting depth
//! never grows the native stack.

use std::fmt;

use smallvec::SmallVec;

use crate::value::Value;

/// One step from a container into a child value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment<'a> {
    /// Array element.
    Index(usize),
    /// Dictionary entry.
    Key(&'a str),
    /// Class variable.
    Variable(&'a str),
    /// Class method.
    Method(&'a str),
}

/// Location of a value relative to the walk root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ValuePath<'a> {
    segments: SmallVec<[PathSegment<'a>; 4]>,
}

impl<'a> ValuePath<'a> {
    /// Path of the walk root.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment<'a>] {
        &self.segments
    }

    /// Number of containers between the root and this value.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Final segment, or `None` for the root.
    pub fn last(&self) -> Option<PathSegment<'a>> {
        self.segments.last().copied()
    }

    fn child(&self, segment: PathSegment<'a>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment);
        ValuePath { segments }
    }
}

impl fmt::Display for ValuePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
                PathSegment::Variable(name) => write!(f, "::{name}")?,
                PathSegment::Method(name) => write!(f, "::{name}()")?,
            }
        }
        Ok(())
    }
}

/// Lazy depth-first iterator returned by [`Value::walk`].
pub struct Walk<'a> {
    pending: Vec<(ValuePath<'a>, &'a Value)>,
}

impl<'a> Walk<'a> {
    fn new(root: &'a Value) -> Self {
        Walk {
            pending: vec![(ValuePath::root(), root)],
        }
    }

    // Children are pushed in reverse so the stack pops them in order.
    fn push_children(&mut self, path: &ValuePath<'a>, value: &'a Value) {
        match value {
            Value::Array(array) => {
                for (i, item) in array.iter().enumerate().rev() {
                    self.pending.push((path.child(PathSegment::Index(i)), item));
                }
            }
            Value::Dict(map) => {
                for (key, item) in map.iter().rev() {
                    self.pending.push((path.child(PathSegment::Key(key)), item));
                }
            }
            Value::Class(instance) => {
                for (name, item) in instance.methods().iter().rev() {
                    self.pending
                        .push((path.child(PathSegment::Method(name)), item));
                }
                for (name, item) in instance.variables().iter().rev() {
                    self.pending
                        .push((path.child(PathSegment::Variable(name)), item));
                }
            }
            Value::Null
            | Value::Int(_)
            | Value::Float(_)
            | Value::Bool(_)
            | Value::Str(_)
            | Value::Function(_) => {}
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (ValuePath<'a>, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, value) = self.pending.pop()?;
        self.push_children(&path, value);
        Some((path, value))
    }
}

impl Value {
    /// Walk this value and everything it owns, depth-first.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Follow `path` from this value.
    ///
    /// Returns `None` when a segment does not match the container kind or
    /// names a missing child.
    pub fn at(&self, path: &[PathSegment<'_>]) -> Option<&Value> {
        path.iter().try_fold(self, |current, segment| match (current, segment) {
            (Value::Array(array), PathSegment::Index(i)) => array.as_slice().get(*i),
            (Value::Dict(map), PathSegment::Key(key)) => map.get(key),
            (Value::Class(instance), PathSegment::Variable(name)) => {
                instance.variables().get(name)
            }
            (Value::Class(instance), PathSegment::Method(name)) => instance.methods().get(name),
            _ => None,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests use unwrap to panic on unexpected state")]
mod tests;
