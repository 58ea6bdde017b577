//! Diagnostic rendering of values.
//!
//! Renders one item per line, nesting children two spaces deeper than
//! their container:
//!
//! ```text
//! Dict length=2
//!   a: Int: 1
//!   b: Array length=2
//!     Bool: true
//!     Float: 2.5
//! ```
//!
//! Class instances print their name and table sizes, then every variable
//! with its rendered value, then every method name. Rendering recurses
//! through the value tree; `stacker` grows the native stack when nesting
//! gets deep.

use std::fmt;

use tracing::debug;

use crate::value::Value;

/// Minimum stack space to keep available while recursing (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Stack space allocated per growth (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// `Display` adapter producing the diagnostic rendering of a value.
#[derive(Copy, Clone)]
pub struct Describe<'a>(pub &'a Value);

impl fmt::Display for Describe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self.0, 0)
    }
}

impl Value {
    /// Diagnostic rendering adapter for this value.
    pub fn describe(&self) -> Describe<'_> {
        Describe(self)
    }
}

/// Render `value` and everything it owns.
pub fn describe(value: &Value) -> String {
    Describe(value).to_string()
}

/// Emit the rendering of `value` as a debug event.
pub fn log_value(value: &Value) {
    debug!(
        target: "ly_value::describe",
        type_index = value.type_index().raw(),
        "\n{}",
        Describe(value)
    );
}

fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, indent: usize) -> fmt::Result {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, || match value {
        Value::Null => writeln!(f, "Null"),
        Value::Int(n) => writeln!(f, "Int: {n}"),
        Value::Float(x) => writeln!(f, "Float: {x:?}"),
        Value::Bool(b) => writeln!(f, "Bool: {b}"),
        Value::Str(s) => writeln!(f, "String: {s:?}"),
        Value::Function(func) => writeln!(f, "Function: {}", func.name()),
        Value::Class(instance) => {
            writeln!(
                f,
                "Class {} (variables={}, methods={})",
                instance.name(),
                instance.variables().len(),
                instance.methods().len()
            )?;
            for (key, item) in instance.variables().iter() {
                write_child(f, indent + 1, Some(key), item)?;
            }
            for name in instance.methods().keys() {
                write_indent(f, indent + 1)?;
                writeln!(f, "method: {name}")?;
            }
            Ok(())
        }
        Value::Dict(map) => {
            writeln!(f, "Dict length={}", map.len())?;
            for (key, item) in map.iter() {
                write_child(f, indent + 1, Some(key), item)?;
            }
            Ok(())
        }
        Value::Array(array) => {
            writeln!(f, "Array length={}", array.len())?;
            for item in array.iter() {
                write_child(f, indent + 1, None, item)?;
            }
            Ok(())
        }
    })
}

fn write_child(
    f: &mut fmt::Formatter<'_>,
    indent: usize,
    key: Option<&str>,
    value: &Value,
) -> fmt::Result {
    write_indent(f, indent)?;
    if let Some(key) = key {
        write!(f, "{key}: ")?;
    }
    write_value(f, value, indent)
}

fn write_indent(f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = indent * 2)
}
