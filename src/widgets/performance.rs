//! Per-assignee performance panel: mixed bar/rate chart plus a table.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::analytics::{PerformanceAnalytics, PerformanceRow};
use crate::widgets::chart::{ChartBackend, ChartKind, ChartSlot, ChartSpec};
use crate::widgets::lock_view;

pub struct PerformancePanel<B: ChartBackend> {
    chart: Mutex<ChartSlot<B>>,
    rows: Mutex<Vec<PerformanceRow>>,
}

impl<B: ChartBackend> PerformancePanel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            chart: Mutex::new(ChartSlot::new(backend)),
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn rows(&self) -> Vec<PerformanceRow> {
        lock_view(&self.rows).clone()
    }

    pub fn chart_drawn(&self) -> bool {
        lock_view(&self.chart).is_drawn()
    }
}

impl<B: ChartBackend + 'static> WidgetRenderer for PerformancePanel<B> {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let analytics: PerformanceAnalytics = match serde_json::from_value(payload) {
            Ok(analytics) => analytics,
            Err(err) => {
                log::error!("Failed to decode performance payload: {err}");
                return;
            }
        };

        // No assignees at all: hide the chart, show the empty table state.
        if analytics.performance.is_empty() {
            lock_view(&self.chart).clear();
        } else {
            lock_view(&self.chart).replace(&ChartSpec {
                kind: ChartKind::Bar,
                data: analytics.chart_data,
            });
        }
        *lock_view(&self.rows) = analytics.performance;
    }
}
