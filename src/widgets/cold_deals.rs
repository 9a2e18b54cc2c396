//! Cold deals panel: active deals without recent activity.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::analytics::{ColdDealRow, ColdDealsAnalytics};
use crate::widgets::lock_view;

/// Urgency tone of a badge, decided client-side from the counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Orange,
    Red,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColdDealsView {
    pub rows: Vec<ColdDealRow>,
    /// Counter badge next to the panel title; absent when nothing is cold.
    pub badge: Option<(u64, BadgeTone)>,
}

#[derive(Default)]
pub struct ColdDealsPanel {
    view: Mutex<ColdDealsView>,
}

impl ColdDealsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ColdDealsView {
        lock_view(&self.view).clone()
    }

    /// Row badge tone: red past 20 inactive days, orange otherwise.
    pub fn row_tone(row: &ColdDealRow) -> BadgeTone {
        if row.jours_inactifs > 20 {
            BadgeTone::Red
        } else {
            BadgeTone::Orange
        }
    }
}

impl WidgetRenderer for ColdDealsPanel {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let analytics: ColdDealsAnalytics = match serde_json::from_value(payload) {
            Ok(analytics) => analytics,
            Err(err) => {
                log::error!("Failed to decode cold-deals payload: {err}");
                return;
            }
        };

        let nb_cold = analytics.stats.nb_cold_deals;
        let badge = (nb_cold > 0).then(|| {
            let tone = if nb_cold > 5 {
                BadgeTone::Red
            } else {
                BadgeTone::Orange
            };
            (nb_cold, tone)
        });

        *lock_view(&self.view) = ColdDealsView {
            rows: analytics.cold_deals,
            badge,
        };
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_badge_tiers() {
        let panel = ColdDealsPanel::new();
        panel.render(
            json!({"cold_deals": [], "stats": {"nb_cold_deals": 3}}),
            None,
        );
        assert_eq!(panel.view().badge, Some((3, BadgeTone::Orange)));

        panel.render(
            json!({"cold_deals": [], "stats": {"nb_cold_deals": 7}}),
            None,
        );
        assert_eq!(panel.view().badge, Some((7, BadgeTone::Red)));

        panel.render(
            json!({"cold_deals": [], "stats": {"nb_cold_deals": 0}}),
            None,
        );
        assert_eq!(panel.view().badge, None);
    }

    #[test]
    fn test_row_tone() {
        let row = |days: i64| ColdDealRow {
            client: "Acme".into(),
            jours_inactifs: days,
            ..ColdDealRow::default()
        };
        assert_eq!(ColdDealsPanel::row_tone(&row(10)), BadgeTone::Orange);
        assert_eq!(ColdDealsPanel::row_tone(&row(21)), BadgeTone::Red);
    }
}
