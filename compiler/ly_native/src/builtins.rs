//! Builtin native functions.
//!
//! Each builtin checks nothing beyond what its own body needs; argument
//! counts are enforced by the registry before the call. Called directly
//! with no arguments, the single-argument builtins report index 0 out of
//! bounds.

use ly_value::{describe as render, Value, ValueError, ValueResult};
use tracing::debug;

use crate::arity::Arity;
use crate::registry::NativeEntry;

pub(crate) static BUILTINS: [NativeEntry; 4] = [
    NativeEntry::new("print", Arity::AtLeast(1), print),
    NativeEntry::new("describe", Arity::Exact(1), describe),
    NativeEntry::new("type_index", Arity::Exact(1), type_index),
    NativeEntry::new("len", Arity::Exact(1), len),
];

fn first(args: &[Value]) -> ValueResult<&Value> {
    args.first()
        .ok_or_else(|| ValueError::index_out_of_bounds(0, args.len()))
}

/// Print the rendering of every argument to stdout. Returns null.
pub fn print(args: &[Value]) -> ValueResult<Value> {
    for arg in args {
        debug!(type_index = arg.type_index().raw(), "print");
        print!("{}", arg.describe());
    }
    Ok(Value::null())
}

/// The rendering of the argument as a string value.
pub fn describe(args: &[Value]) -> ValueResult<Value> {
    first(args).map(|value| Value::string(render(value)))
}

/// Numeric type tag of the argument.
pub fn type_index(args: &[Value]) -> ValueResult<Value> {
    first(args).map(|value| Value::int(i64::from(value.type_index().raw())))
}

/// Length of a string (in chars), array, dictionary, or class instance
/// (variable count).
pub fn len(args: &[Value]) -> ValueResult<Value> {
    let count = match first(args)? {
        Value::Str(s) => s.chars().count(),
        Value::Array(array) => array.len(),
        Value::Dict(map) => map.len(),
        Value::Class(instance) => instance.variables().len(),
        other => return Err(ValueError::type_mismatch("str, array, dict or class", other)),
    };
    Ok(Value::int(i64::try_from(count).unwrap_or(i64::MAX)))
}
