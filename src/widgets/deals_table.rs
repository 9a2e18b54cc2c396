//! Deals table widget: the only owner of the in-memory deal cache.
//!
//! The cache is replaced wholesale on every coordinated refresh, which
//! implicitly resets the sort state: a fresh fetch redisplays in the server's
//! default order until the user re-sorts. Header clicks re-order the cache
//! locally without touching the network.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::deal::DealRecord;
use crate::domain::filter::FilterState;
use crate::sort::{SortColumn, SortState, sort_deals};
use crate::widgets::lock_view;

#[derive(Default)]
struct TableState {
    /// Records in server order, as fetched.
    deals: Vec<DealRecord>,
    /// Records in display order.
    visible: Vec<DealRecord>,
    sort: SortState,
    failed: bool,
}

#[derive(Default)]
pub struct DealsTable {
    state: Mutex<TableState>,
}

impl DealsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows in their current display order.
    pub fn rows(&self) -> Vec<DealRecord> {
        lock_view(&self.state).visible.clone()
    }

    pub fn sort_state(&self) -> SortState {
        lock_view(&self.state).sort
    }

    /// Whether the last refresh for this widget failed.
    pub fn failed(&self) -> bool {
        lock_view(&self.state).failed
    }

    /// Header click: toggles or switches the sort and re-orders the cached
    /// records. Purely local, no fetch involved.
    pub fn sort_by(&self, column: SortColumn) {
        let mut state = lock_view(&self.state);
        state.sort.click(column);
        state.visible = sort_deals(&state.deals, column, state.sort.direction);
    }

    /// Entry point for the raw `data-sort` header identifier. Unknown
    /// identifiers are a no-op rather than an error.
    pub fn sort_by_header(&self, raw: &str) {
        match SortColumn::parse(raw) {
            Some(column) => self.sort_by(column),
            None => log::warn!("Ignoring unknown sort column: {raw}"),
        }
    }
}

impl WidgetRenderer for DealsTable {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let deals: Vec<DealRecord> = match serde_json::from_value(payload) {
            Ok(deals) => deals,
            Err(err) => {
                log::error!("Failed to decode deals payload: {err}");
                return;
            }
        };

        let mut state = lock_view(&self.state);
        state.visible = deals.clone();
        state.deals = deals;
        state.sort = SortState::default();
        state.failed = false;
    }

    fn render_failed(&self) {
        lock_view(&self.state).failed = true;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::sort::SortDirection;

    fn render_three(table: &DealsTable) {
        let payload = json!([
            {"id": 1, "client": "Zeta", "statut": "Prospect", "montant_brut": 10.0},
            {"id": 2, "client": "Acme", "statut": "Gagné", "montant_brut": 30.0},
            {"id": 3, "client": "Mids", "statut": "Qualifié", "montant_brut": 20.0},
        ]);
        table.render(payload, None);
    }

    #[test]
    fn test_render_replaces_cache_and_resets_sort() {
        let table = DealsTable::new();
        render_three(&table);
        table.sort_by(SortColumn::Client);
        assert_eq!(table.sort_state().column, Some(SortColumn::Client));

        render_three(&table);
        assert_eq!(table.sort_state(), SortState::default());
        let ids: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_sort_by_toggles_direction() {
        let table = DealsTable::new();
        render_three(&table);

        table.sort_by(SortColumn::Montant);
        let asc: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
        assert_eq!(asc, [1, 3, 2]);

        table.sort_by(SortColumn::Montant);
        assert_eq!(table.sort_state().direction, SortDirection::Desc);
        let desc: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
        assert_eq!(desc, [2, 3, 1]);
    }

    #[test]
    fn test_unknown_header_is_noop() {
        let table = DealsTable::new();
        render_three(&table);
        table.sort_by_header("notes");
        assert_eq!(table.sort_state(), SortState::default());
        let ids: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn test_malformed_payload_keeps_previous_view() {
        let table = DealsTable::new();
        render_three(&table);
        table.render(json!({"not": "a list"}), None);
        assert_eq!(table.rows().len(), 3);
    }
}
