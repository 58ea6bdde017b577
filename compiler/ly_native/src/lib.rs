//! Lyron Native - the native-function bridge for Lyron values.
//!
//! Native functions share one signature, [`NativeFn`]: they borrow their
//! arguments and hand back a freshly owned [`Value`]. A [`NativeRegistry`]
//! binds them to names with an [`Arity`], checks argument counts before
//! every call, and turns entries into `Value::Function` references that
//! can be stored inside other values and invoked later.
//!
//! ```text
//! let registry = NativeRegistry::with_builtins();
//! let n = registry.call("len", &[Value::string("héllo")])?;   // Int(5)
//! ```
//!
//! # Tracing
//!
//! Registry calls are instrumented at debug level. Call [`init_tracing`]
//! once at startup to install a subscriber controlled by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=ly_native=debug,ly_value=trace my-host
//! ```

mod arity;
pub mod builtins;
mod errors;
mod registry;

pub use arity::Arity;
pub use errors::{NativeError, NativeResult};
pub use ly_value::{FunctionRef, NativeFn, Value};
pub use registry::{call_function, NativeEntry, NativeRegistry};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing from `RUST_LOG`.
///
/// Safe to call more than once; only the first call has any effect, and
/// nothing is installed when `RUST_LOG` is unset.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
