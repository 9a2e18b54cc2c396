//! Sector analysis panel: two charts and a recap table.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::analytics::{SectorAnalytics, SectorRow};
use crate::widgets::chart::{ChartBackend, ChartKind, ChartSlot, ChartSpec};
use crate::widgets::lock_view;

pub struct SectorPanel<B: ChartBackend> {
    montants: Mutex<ChartSlot<B>>,
    panier_moyen: Mutex<ChartSlot<B>>,
    tableau: Mutex<Vec<SectorRow>>,
}

impl<B: ChartBackend> SectorPanel<B> {
    pub fn new(montants_backend: B, panier_backend: B) -> Self {
        Self {
            montants: Mutex::new(ChartSlot::new(montants_backend)),
            panier_moyen: Mutex::new(ChartSlot::new(panier_backend)),
            tableau: Mutex::new(Vec::new()),
        }
    }

    pub fn table_rows(&self) -> Vec<SectorRow> {
        lock_view(&self.tableau).clone()
    }

    pub fn charts_drawn(&self) -> (bool, bool) {
        (
            lock_view(&self.montants).is_drawn(),
            lock_view(&self.panier_moyen).is_drawn(),
        )
    }
}

impl<B: ChartBackend + 'static> WidgetRenderer for SectorPanel<B> {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let analytics: SectorAnalytics = match serde_json::from_value(payload) {
            Ok(analytics) => analytics,
            Err(err) => {
                log::error!("Failed to decode sector payload: {err}");
                return;
            }
        };

        if analytics.chart_montants.labels.is_empty() {
            lock_view(&self.montants).clear();
            lock_view(&self.panier_moyen).clear();
        } else {
            lock_view(&self.montants).replace(&ChartSpec {
                kind: ChartKind::HorizontalBar,
                data: analytics.chart_montants,
            });
            lock_view(&self.panier_moyen).replace(&ChartSpec {
                kind: ChartKind::HorizontalBar,
                data: analytics.chart_panier_moyen,
            });
        }
        *lock_view(&self.tableau) = analytics.tableau;
    }
}
