//! Canonical representation of the active filter predicate.
//!
//! A [`FilterState`] holds only the dimensions the user actually selected;
//! empty fields are normalized away so that "no filter" is always the absence
//! of a value, never an empty collection. Every widget fetch derives its
//! query string from this one type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The user's active filtering predicate.
///
/// Multi-valued fields keep the order the values were read from the sidebar,
/// which makes the derived parameter sequence deterministic. Equality is
/// structural.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterState {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub statut: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub secteur: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignee: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl FilterState {
    /// Returns `true` when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.statut.is_empty()
            && self.secteur.is_empty()
            && self.assignee.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
            && self.search.is_none()
    }

    /// Drops blank entries and trims the search term, collapsing an entirely
    /// empty state to `None` ("show everything").
    pub fn normalized(mut self) -> Option<Self> {
        self.statut.retain(|s| !s.trim().is_empty());
        self.secteur.retain(|s| !s.trim().is_empty());
        self.assignee.retain(|s| !s.trim().is_empty());
        self.search = self
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if self.is_empty() { None } else { Some(self) }
    }

    /// Derives the ordered query parameter sequence for a widget fetch.
    ///
    /// Multi-valued fields contribute one pair per selected value in UI
    /// order; scalar fields at most one pair each; absent fields contribute
    /// nothing. The same state always serializes to the same sequence.
    pub fn to_query_parameters(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        for statut in &self.statut {
            params.push(("statut", statut.clone()));
        }
        for secteur in &self.secteur {
            params.push(("secteur", secteur.clone()));
        }
        for assignee in &self.assignee {
            params.push(("assignee", assignee.clone()));
        }
        if let Some(date_from) = self.date_from {
            params.push(("date_from", date_from.to_string()));
        }
        if let Some(date_to) = self.date_to {
            params.push(("date_to", date_to.to_string()));
        }
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalized_collapses_empty_state() {
        let state = FilterState {
            statut: vec!["  ".into()],
            search: Some("   ".into()),
            ..FilterState::default()
        };
        assert_eq!(state.normalized(), None);
    }

    #[test]
    fn test_normalized_keeps_non_empty_fields() {
        let state = FilterState {
            statut: vec!["Gagné".into(), "".into()],
            search: Some(" acme ".into()),
            ..FilterState::default()
        };
        let normalized = state.normalized().unwrap();
        assert_eq!(normalized.statut, vec!["Gagné".to_string()]);
        assert_eq!(normalized.search.as_deref(), Some("acme"));
    }

    #[test]
    fn test_query_parameters_order_and_omission() {
        let state = FilterState {
            statut: vec!["Prospect".into(), "Gagné".into()],
            secteur: vec!["Tech".into()],
            assignee: vec![],
            date_from: Some(date("2025-01-01")),
            date_to: None,
            search: Some("acme".into()),
        };
        let params = state.to_query_parameters();
        assert_eq!(
            params,
            vec![
                ("statut", "Prospect".to_string()),
                ("statut", "Gagné".to_string()),
                ("secteur", "Tech".to_string()),
                ("date_from", "2025-01-01".to_string()),
                ("search", "acme".to_string()),
            ]
        );
    }

    #[test]
    fn test_query_parameters_deterministic() {
        let state = FilterState {
            statut: vec!["Qualifié".into()],
            date_to: Some(date("2025-06-30")),
            ..FilterState::default()
        };
        assert_eq!(state.to_query_parameters(), state.to_query_parameters());
    }

    #[test]
    fn test_serde_round_trip_omits_empty_fields() {
        let state = FilterState {
            secteur: vec!["Finance".into()],
            ..FilterState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(!json.contains("statut"));
        assert!(!json.contains("search"));
        let back: FilterState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
