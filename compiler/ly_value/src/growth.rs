//! Fixed-step growth policy shared by `Array` and `Map`.

use tracing::trace;

use crate::errors::{ValueError, ValueResult};

/// Slots reserved by a freshly created container.
pub const INITIAL_CAPACITY: usize = 256;

/// Slots added each time an append finds a container full.
pub const CAPACITY_STEP: usize = 256;

/// Grow `items` by one step if it is full.
///
/// Allocation failure here is fatal, as with any `Vec` growth.
pub(crate) fn grow_if_full<T>(items: &mut Vec<T>) {
    if items.len() == items.capacity() {
        let old = items.capacity();
        items.reserve_exact(CAPACITY_STEP);
        trace!(old, new = items.capacity(), "container grown");
    }
}

/// Fallible variant of [`grow_if_full`].
pub(crate) fn try_grow_if_full<T>(items: &mut Vec<T>) -> ValueResult<()> {
    if items.len() == items.capacity() {
        let old = items.capacity();
        items
            .try_reserve_exact(CAPACITY_STEP)
            .map_err(|_| ValueError::AllocationFailure {
                requested: old.saturating_add(CAPACITY_STEP),
            })?;
        trace!(old, new = items.capacity(), "container grown");
    }
    Ok(())
}
