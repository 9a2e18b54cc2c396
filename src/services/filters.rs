//! Filter sidebar controller: explicit state-transition functions for the
//! apply/reset/restore actions, bound to UI events at the boundary.

use chrono::NaiveDate;

use crate::dashboard::RefreshCoordinator;
use crate::domain::filter::FilterState;
use crate::storage::FilterStore;

/// The three checkbox groups of the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterGroup {
    Statut,
    Secteur,
    Assignee,
}

/// Boundary seam over the sidebar controls. The services read and write the
/// UI exclusively through this trait; the DOM (or any other surface) binds
/// it on the outside.
pub trait FilterControls {
    /// Checked values of a group, in display order.
    fn checked_values(&self, group: FilterGroup) -> Vec<String>;
    fn date_from(&self) -> Option<NaiveDate>;
    fn date_to(&self) -> Option<NaiveDate>;
    fn search(&self) -> String;

    /// Checks the control carrying `value`. Returns `false` when no such
    /// control exists (e.g. an option removed server-side); callers skip it
    /// silently.
    fn set_checked(&mut self, group: FilterGroup, value: &str) -> bool;
    fn set_date_from(&mut self, date: Option<NaiveDate>);
    fn set_date_to(&mut self, date: Option<NaiveDate>);
    fn set_search(&mut self, value: &str);

    /// Unchecks every checkbox and empties the date and search inputs.
    fn clear(&mut self);
}

/// Reads the current sidebar selection into the canonical model. Pure read:
/// `None` when nothing is selected.
pub fn read_selection(controls: &dyn FilterControls) -> Option<FilterState> {
    FilterState {
        statut: controls.checked_values(FilterGroup::Statut),
        secteur: controls.checked_values(FilterGroup::Secteur),
        assignee: controls.checked_values(FilterGroup::Assignee),
        date_from: controls.date_from(),
        date_to: controls.date_to(),
        search: Some(controls.search()),
    }
    .normalized()
}

/// Applies a loaded state back onto the sidebar controls. Checkbox values
/// whose control disappeared are skipped, never an error.
pub fn restore_filters(controls: &mut dyn FilterControls, state: &FilterState) {
    for (group, values) in [
        (FilterGroup::Statut, &state.statut),
        (FilterGroup::Secteur, &state.secteur),
        (FilterGroup::Assignee, &state.assignee),
    ] {
        for value in values {
            if !controls.set_checked(group, value) {
                log::debug!("Saved filter value without a matching control: {value}");
            }
        }
    }
    controls.set_date_from(state.date_from);
    controls.set_date_to(state.date_to);
    if let Some(search) = &state.search {
        controls.set_search(search);
    }
}

/// "Apply" button: persist the current selection and refresh every widget
/// under it. Storage failures are logged and do not block the refresh.
pub async fn apply_filters<S>(
    store: &S,
    coordinator: &RefreshCoordinator,
    controls: &dyn FilterControls,
) -> Option<FilterState>
where
    S: FilterStore + ?Sized,
{
    let filters = read_selection(controls);
    if let Err(err) = store.save(filters.as_ref()) {
        log::error!("Failed to persist filters: {err}");
    }
    coordinator.refresh(filters.clone()).await;
    filters
}

/// "Reset" button: clear the sidebar, delete the saved key, and refresh
/// without any predicate.
pub async fn reset_filters<S>(
    store: &S,
    coordinator: &RefreshCoordinator,
    controls: &mut dyn FilterControls,
) where
    S: FilterStore + ?Sized,
{
    controls.clear();
    if let Err(err) = store.save(None) {
        log::error!("Failed to delete saved filters: {err}");
    }
    coordinator.refresh(None).await;
}

/// Page-load sequence: restore the saved predicate onto the sidebar, then
/// run the initial coordinated refresh under it.
pub async fn start_dashboard<S>(
    store: &S,
    coordinator: &RefreshCoordinator,
    controls: &mut dyn FilterControls,
) -> Option<FilterState>
where
    S: FilterStore + ?Sized,
{
    let saved = store.load();
    if let Some(state) = &saved {
        restore_filters(controls, state);
    }
    coordinator.refresh(saved.clone()).await;
    saved
}

#[cfg(all(test, feature = "test-mocks"))]
mod mock_tests {
    use super::*;
    use crate::storage::mock::MockFilterStore;

    #[derive(Default)]
    struct NoControls;

    impl FilterControls for NoControls {
        fn checked_values(&self, _group: FilterGroup) -> Vec<String> {
            Vec::new()
        }
        fn date_from(&self) -> Option<NaiveDate> {
            None
        }
        fn date_to(&self) -> Option<NaiveDate> {
            None
        }
        fn search(&self) -> String {
            String::new()
        }
        fn set_checked(&mut self, _group: FilterGroup, _value: &str) -> bool {
            false
        }
        fn set_date_from(&mut self, _date: Option<NaiveDate>) {}
        fn set_date_to(&mut self, _date: Option<NaiveDate>) {}
        fn set_search(&mut self, _value: &str) {}
        fn clear(&mut self) {}
    }

    #[tokio::test]
    async fn test_apply_with_empty_selection_deletes_key() {
        let mut store = MockFilterStore::new();
        store
            .expect_save()
            .withf(|filters| filters.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let coordinator = RefreshCoordinator::new();
        let applied = apply_filters(&store, &coordinator, &NoControls).await;
        assert_eq!(applied, None);
        assert_eq!(coordinator.generation(), 1);
    }
}
