//! Persistent Filter Store: durable client-side storage for the active
//! filter predicate.
//!
//! One fixed key holds the serialized [`FilterState`]. Saving `None` deletes
//! the key, so "no filter" stays distinguishable from "never saved".

use crate::domain::filter::FilterState;
use crate::storage::errors::StorageResult;

pub mod errors;
pub mod file;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub trait FilterStore {
    /// Writes the state under the fixed key; `None` removes the key.
    fn save(&self, filters: Option<&FilterState>) -> StorageResult<()>;

    /// Loads the saved state.
    ///
    /// Returns `None` when the key is absent or its content is malformed.
    /// Corruption is logged and swallowed so that startup never crashes on a
    /// bad saved filter.
    fn load(&self) -> Option<FilterState>;
}
