//! Render adapters: pure payload-to-view transforms, one per widget.
//!
//! Each adapter keeps its last rendered view behind a mutex so that
//! re-applying the same payload reproduces the same visible state. A payload
//! that fails to deserialize is logged and leaves the previous view intact.

use std::sync::{Mutex, MutexGuard};

pub mod chart;
pub mod cold_deals;
pub mod deadlines;
pub mod deals_table;
pub mod kpi;
pub mod performance;
pub mod sectors;
pub mod velocity;

/// Locks a widget's view state, recovering from a poisoned mutex: a panic in
/// one render must not permanently wedge the widget.
pub(crate) fn lock_view<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
