//! Deadlines panel: overdue and 30-day upcoming deals, plus the overdue
//! alert banner.

use std::sync::Mutex;

use crate::dashboard::{WidgetPayload, WidgetRenderer};
use crate::domain::filter::FilterState;
use crate::dto::analytics::{DeadlineRow, DeadlinesAnalytics};
use crate::widgets::lock_view;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeadlinesView {
    pub overdue: Vec<DeadlineRow>,
    pub upcoming: Vec<DeadlineRow>,
    /// Banner text, shown only when at least one deal is overdue.
    pub alert: Option<String>,
}

#[derive(Default)]
pub struct DeadlinesPanel {
    view: Mutex<DeadlinesView>,
}

impl DeadlinesPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> DeadlinesView {
        lock_view(&self.view).clone()
    }
}

impl WidgetRenderer for DeadlinesPanel {
    fn render(&self, payload: WidgetPayload, _filters: Option<&FilterState>) {
        let analytics: DeadlinesAnalytics = match serde_json::from_value(payload) {
            Ok(analytics) => analytics,
            Err(err) => {
                log::error!("Failed to decode deadlines payload: {err}");
                return;
            }
        };

        let alert = (analytics.stats.nb_overdue > 0)
            .then(|| format!("{} deal(s) en retard !", analytics.stats.nb_overdue));

        *lock_view(&self.view) = DeadlinesView {
            overdue: analytics.overdue,
            upcoming: analytics.upcoming,
            alert,
        };
    }
}
