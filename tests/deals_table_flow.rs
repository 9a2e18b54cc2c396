use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::json;

use crm_dashboard::client::errors::ApiResult;
use crm_dashboard::dashboard::{RefreshCoordinator, WidgetFetcher, WidgetPayload};
use crm_dashboard::domain::filter::FilterState;
use crm_dashboard::sort::{SortColumn, SortDirection, SortState};
use crm_dashboard::widgets::deals_table::DealsTable;

struct DealsFetcher;

impl WidgetFetcher for DealsFetcher {
    fn fetch<'a>(
        &'a self,
        _filters: Option<&'a FilterState>,
    ) -> BoxFuture<'a, ApiResult<WidgetPayload>> {
        async move {
            Ok(json!([
                {"id": 1, "client": "A", "statut": "Prospect", "montant_brut": 10.0},
                {"id": 2, "client": "B", "statut": "Gagné", "montant_brut": 10.0},
                {"id": 3, "client": "C", "statut": "Qualifié", "montant_brut": 7.0,
                 "date_echeance": "2025-04-01"},
            ]))
        }
        .boxed()
    }
}

fn dashboard() -> (RefreshCoordinator, Arc<DealsTable>) {
    let table = Arc::new(DealsTable::new());
    let mut coordinator = RefreshCoordinator::new();
    coordinator.register_widget("deals", Arc::new(DealsFetcher), table.clone());
    (coordinator, table)
}

#[tokio::test]
async fn test_header_clicks_sort_without_refetching() {
    let (coordinator, table) = dashboard();
    coordinator.refresh(None).await;
    let generation_before = coordinator.generation();

    // Equal montants keep their fetch order on the first click, and a second
    // click on the same column only flips the direction.
    table.sort_by(SortColumn::Montant);
    let asc: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
    assert_eq!(asc, [3, 1, 2]);

    table.sort_by(SortColumn::Montant);
    let desc: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
    assert_eq!(desc, [1, 2, 3]);

    assert_eq!(coordinator.generation(), generation_before);
}

#[tokio::test]
async fn test_refresh_resets_sort_to_server_order() {
    let (coordinator, table) = dashboard();
    coordinator.refresh(None).await;

    table.sort_by(SortColumn::Statut);
    assert_eq!(table.sort_state().column, Some(SortColumn::Statut));

    coordinator.refresh(Some(FilterState::default())).await;

    assert_eq!(
        table.sort_state(),
        SortState {
            column: None,
            direction: SortDirection::Asc
        }
    );
    let ids: Vec<i64> = table.rows().iter().map(|d| d.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}
