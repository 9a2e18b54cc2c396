//! Sales velocity panel: mean conversion time and per-sector breakdown.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::analytics::{ChartData, ChartDataset, VelocityAnalytics};
use crate::widgets::chart::{ChartBackend, ChartKind, ChartSlot, ChartSpec};
use crate::widgets::lock_view;

pub struct VelocityPanel<B: ChartBackend> {
    chart: Mutex<ChartSlot<B>>,
    view: Mutex<VelocityView>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VelocityView {
    pub kpi: String,
    /// Empty-state text when the chart carries no usable data.
    pub empty_state: Option<String>,
}

impl<B: ChartBackend> VelocityPanel<B> {
    pub fn new(backend: B) -> Self {
        Self {
            chart: Mutex::new(ChartSlot::new(backend)),
            view: Mutex::new(VelocityView::default()),
        }
    }

    pub fn view(&self) -> VelocityView {
        lock_view(&self.view).clone()
    }

    pub fn chart_drawn(&self) -> bool {
        lock_view(&self.chart).is_drawn()
    }
}

impl<B: ChartBackend + 'static> WidgetRenderer for VelocityPanel<B> {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let analytics: VelocityAnalytics = match serde_json::from_value(payload) {
            Ok(analytics) => analytics,
            Err(err) => {
                log::error!("Failed to decode velocity payload: {err}");
                return;
            }
        };

        let kpi = analytics
            .vitesse_moyenne_formatted
            .unwrap_or_else(|| "N/A".to_string());

        // Sectors sorted by decreasing mean days; the chart is only worth
        // drawing when at least one sector took a measurable day or more.
        let mut sectors: Vec<(String, f64)> = analytics.velocity_by_sector.into_iter().collect();
        sectors.sort_by(|a, b| b.1.total_cmp(&a.1));
        let has_chart_data = sectors.iter().any(|(_, days)| *days > 0.0);

        if has_chart_data {
            let data = ChartData {
                labels: sectors.iter().map(|(label, _)| label.clone()).collect(),
                datasets: vec![ChartDataset {
                    label: "Jours moyens".to_string(),
                    data: sectors.iter().map(|(_, days)| *days).collect(),
                }],
            };
            lock_view(&self.chart).replace(&ChartSpec {
                kind: ChartKind::HorizontalBar,
                data,
            });
            *lock_view(&self.view) = VelocityView {
                kpi,
                empty_state: None,
            };
        } else {
            lock_view(&self.chart).clear();
            let empty_state = (analytics.has_won_deals || !sectors.is_empty()).then(|| {
                "Conversions trop rapides (< 1 jour) pour afficher la ventilation par secteur"
                    .to_string()
            });
            *lock_view(&self.view) = VelocityView { kpi, empty_state };
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    struct NullBackend;

    impl ChartBackend for NullBackend {
        type Handle = ();

        fn create(&self, _spec: &ChartSpec) {}
        fn destroy(&self, _handle: ()) {}
    }

    #[test]
    fn test_draws_chart_with_positive_values() {
        let panel = VelocityPanel::new(NullBackend);
        panel.render(
            json!({
                "vitesse_moyenne_formatted": "12 jours",
                "velocity_by_sector": {"Tech": 15.0, "Retail": 8.0},
                "has_won_deals": true
            }),
            None,
        );
        assert!(panel.chart_drawn());
        assert_eq!(panel.view().kpi, "12 jours");
        assert_eq!(panel.view().empty_state, None);
    }

    #[test]
    fn test_sub_day_conversions_show_empty_state() {
        let panel = VelocityPanel::new(NullBackend);
        panel.render(
            json!({
                "velocity_by_sector": {"Tech": 0.0},
                "has_won_deals": true
            }),
            None,
        );
        assert!(!panel.chart_drawn());
        assert_eq!(panel.view().kpi, "N/A");
        assert!(panel.view().empty_state.is_some());
    }

    #[test]
    fn test_no_won_deals_no_empty_state_text() {
        let panel = VelocityPanel::new(NullBackend);
        panel.render(
            json!({"velocity_by_sector": {}, "has_won_deals": false}),
            None,
        );
        assert!(!panel.chart_drawn());
        assert_eq!(panel.view().empty_state, None);
    }
}
