//! Lyron Values - dynamic value representation for the native boundary.
//!
//! This crate provides:
//! - The tagged `Value` type (null, int, float, bool, string, function,
//!   class instance, dict, array)
//! - The growable containers backing aggregates (`Array`, `Map`)
//! - Named class instances with separate variable and method tables
//! - Structured traversal (`Value::walk`) and the diagnostic printer
//!   (`describe`, `log_value`)
//!
//! # Ownership
//!
//! Every aggregate is owned by exactly one parent. A `Value` holding an
//! `Array`, `Map`, or `ClassInstance` boxes it, and the aggregate owns the
//! values it contains. Cloning is a deep copy, so two values never share an
//! aggregate and no cycle can be built. Dropping a value releases everything
//! beneath it.
//!
//! # Growth
//!
//! `Array` and `Map` start with [`INITIAL_CAPACITY`] slots and grow by
//! [`CAPACITY_STEP`] slots whenever an append finds them full.

mod array;
mod class;
mod describe;
mod errors;
mod growth;
mod map;
mod value;
mod walk;

pub use array::Array;
pub use class::ClassInstance;
pub use describe::{describe, log_value, Describe};
pub use errors::{ValueError, ValueResult};
pub use growth::{CAPACITY_STEP, INITIAL_CAPACITY};
pub use map::Map;
pub use value::{FunctionRef, NativeFn, TypeIndex, Value};
pub use walk::{PathSegment, ValuePath, Walk};
