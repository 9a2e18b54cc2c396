//! KPI tile panel and the what-if projection it feeds.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::kpi::KpiSummary;
use crate::widgets::lock_view;

#[derive(Default)]
pub struct KpiPanel {
    summary: Mutex<Option<KpiSummary>>,
}

/// Projected figures for a simulated average-basket variation.
#[derive(Clone, Debug, PartialEq)]
pub struct WhatIfProjection {
    pub percent: i32,
    pub panier_moyen: f64,
    pub pipeline_pondere: f64,
    /// Signed difference against the current weighted pipeline.
    pub delta: f64,
}

impl KpiPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> Option<KpiSummary> {
        lock_view(&self.summary).clone()
    }

    /// Simulates a ±percent variation of the average basket over the last
    /// rendered KPIs. `None` until a summary has been rendered.
    pub fn project_what_if(&self, percent: i32) -> Option<WhatIfProjection> {
        let summary = lock_view(&self.summary).clone()?;
        let variation = f64::from(percent) / 100.0;
        let pipeline = summary.pipeline_pondere * (1.0 + variation);
        Some(WhatIfProjection {
            percent,
            panier_moyen: summary.panier_moyen * (1.0 + variation),
            pipeline_pondere: pipeline,
            delta: pipeline - summary.pipeline_pondere,
        })
    }
}

impl WidgetRenderer for KpiPanel {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        match serde_json::from_value::<KpiSummary>(payload) {
            Ok(summary) => *lock_view(&self.summary) = Some(summary),
            Err(err) => log::error!("Failed to decode KPI payload: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_render_then_project() {
        let panel = KpiPanel::new();
        panel.render(
            json!({
                "pipeline_pondere": 1000.0,
                "panier_moyen": 200.0,
                "nombre_deals": 5,
                "deals_gagnes": 1,
                "taux_conversion": 20.0
            }),
            None,
        );

        let projection = panel.project_what_if(10).unwrap();
        assert!((projection.panier_moyen - 220.0).abs() < 1e-9);
        assert!((projection.pipeline_pondere - 1100.0).abs() < 1e-9);
        assert!((projection.delta - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_projection_without_summary() {
        assert_eq!(KpiPanel::new().project_what_if(5), None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let panel = KpiPanel::new();
        let payload = json!({"pipeline_pondere": 50.0, "panier_moyen": 10.0});
        panel.render(payload.clone(), None);
        let first = panel.summary();
        panel.render(payload, None);
        assert_eq!(panel.summary(), first);
    }
}
