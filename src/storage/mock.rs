//! Mock filter store for isolating services in tests.

use mockall::mock;

use crate::domain::filter::FilterState;
use crate::storage::FilterStore;
use crate::storage::errors::StorageResult;

mock! {
    pub FilterStore {}

    impl FilterStore for FilterStore {
        fn save<'a>(&self, filters: Option<&'a FilterState>) -> StorageResult<()>;
        fn load(&self) -> Option<FilterState>;
    }
}
