//! Client-side sort engine for the deals table.
//!
//! Sorting operates on the already-fetched record cache and never touches the
//! network. The sort is stable: records that compare equal keep their prior
//! relative order, so repeated clicks on a tied column do not shuffle ties.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::deal::{DealRecord, statut_rank};

/// Sortable columns of the deals table, named after the `data-sort`
/// identifiers carried by the table headers.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortColumn {
    Client,
    Statut,
    Montant,
    Secteur,
    Commercial,
    Echeance,
}

impl SortColumn {
    /// Parses a header identifier. Unknown identifiers yield `None` and the
    /// caller treats the click as a no-op.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Self::Client),
            "statut" => Some(Self::Statut),
            "montant" => Some(Self::Montant),
            "secteur" => Some(Self::Secteur),
            "commercial" => Some(Self::Commercial),
            "echeance" => Some(Self::Echeance),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Transient sort state of the deals table. Reset whenever the record cache
/// is replaced by a fresh fetch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub direction: SortDirection,
}

impl SortState {
    /// Applies the header-click rule: clicking the active column toggles the
    /// direction, clicking a different column resets to ascending.
    pub fn click(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.column = Some(column);
            self.direction = SortDirection::Asc;
        }
    }
}

/// Returns a fresh copy of `deals` ordered by `column` in `direction`.
///
/// The input sequence is never mutated. Comparison semantics per column:
/// textual columns compare case-insensitively with missing values as the
/// empty string, statut goes through the fixed rank table, montant compares
/// numerically, and echeance compares chronologically with dateless records
/// always after dated ones regardless of direction.
pub fn sort_deals(deals: &[DealRecord], column: SortColumn, direction: SortDirection) -> Vec<DealRecord> {
    let mut sorted = deals.to_vec();
    sorted.sort_by(|a, b| compare(a, b, column, direction));
    sorted
}

fn compare(a: &DealRecord, b: &DealRecord, column: SortColumn, direction: SortDirection) -> Ordering {
    let ordering = match column {
        SortColumn::Client => text_key(Some(&a.client)).cmp(&text_key(Some(&b.client))),
        SortColumn::Secteur => text_key(a.secteur.as_deref()).cmp(&text_key(b.secteur.as_deref())),
        SortColumn::Commercial => {
            text_key(a.assignee.as_deref()).cmp(&text_key(b.assignee.as_deref()))
        }
        SortColumn::Statut => statut_rank(&a.statut).cmp(&statut_rank(&b.statut)),
        SortColumn::Montant => montant_key(a).total_cmp(&montant_key(b)),
        // Dateless records stay last in both directions; the direction only
        // reorders the dated group.
        SortColumn::Echeance => {
            return match (a.date_echeance, b.date_echeance) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(da), Some(db)) => apply_direction(da.cmp(&db), direction),
            };
        }
    };
    apply_direction(ordering, direction)
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

fn text_key(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

fn montant_key(deal: &DealRecord) -> f64 {
    if deal.montant_brut.is_finite() {
        deal.montant_brut
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(client: &str, montant: f64) -> DealRecord {
        DealRecord {
            client: client.into(),
            montant_brut: montant,
            ..DealRecord::default()
        }
    }

    fn clients(deals: &[DealRecord]) -> Vec<&str> {
        deals.iter().map(|d| d.client.as_str()).collect()
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let deals = vec![deal("B", 2.0), deal("A", 1.0)];
        let _ = sort_deals(&deals, SortColumn::Client, SortDirection::Asc);
        assert_eq!(clients(&deals), ["B", "A"]);
    }

    #[test]
    fn test_client_sort_case_insensitive() {
        let deals = vec![deal("banque", 0.0), deal("Acme", 0.0), deal("CAFE", 0.0)];
        let sorted = sort_deals(&deals, SortColumn::Client, SortDirection::Asc);
        assert_eq!(clients(&sorted), ["Acme", "banque", "CAFE"]);
    }

    #[test]
    fn test_montant_ties_preserve_relative_order() {
        let deals = vec![deal("A", 10.0), deal("B", 10.0), deal("C", 5.0)];
        let asc = sort_deals(&deals, SortColumn::Montant, SortDirection::Asc);
        assert_eq!(clients(&asc), ["C", "A", "B"]);
        let desc = sort_deals(&deals, SortColumn::Montant, SortDirection::Desc);
        assert_eq!(clients(&desc), ["A", "B", "C"]);
    }

    #[test]
    fn test_statut_ranking() {
        let mut deals: Vec<DealRecord> = ["Gagné", "Prospect", "Négociation"]
            .iter()
            .map(|s| DealRecord {
                statut: (*s).into(),
                ..DealRecord::default()
            })
            .collect();
        deals = sort_deals(&deals, SortColumn::Statut, SortDirection::Asc);
        let statuts: Vec<&str> = deals.iter().map(|d| d.statut.as_str()).collect();
        assert_eq!(statuts, ["Prospect", "Négociation", "Gagné"]);
    }

    #[test]
    fn test_echeance_nulls_last_both_directions() {
        let dated = |client: &str, date: &str| DealRecord {
            client: client.into(),
            date_echeance: Some(date.parse().unwrap()),
            ..DealRecord::default()
        };
        let deals = vec![deal("none", 0.0), dated("late", "2025-09-01"), dated("soon", "2025-03-01")];

        let asc = sort_deals(&deals, SortColumn::Echeance, SortDirection::Asc);
        assert_eq!(clients(&asc), ["soon", "late", "none"]);

        let desc = sort_deals(&deals, SortColumn::Echeance, SortDirection::Desc);
        assert_eq!(clients(&desc), ["late", "soon", "none"]);
    }

    #[test]
    fn test_sort_state_click_toggles_and_resets() {
        let mut state = SortState::default();
        state.click(SortColumn::Montant);
        assert_eq!(state.column, Some(SortColumn::Montant));
        assert_eq!(state.direction, SortDirection::Asc);

        state.click(SortColumn::Montant);
        assert_eq!(state.direction, SortDirection::Desc);

        state.click(SortColumn::Client);
        assert_eq!(state.column, Some(SortColumn::Client));
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_unknown_column() {
        assert_eq!(SortColumn::parse("echeance"), Some(SortColumn::Echeance));
        assert_eq!(SortColumn::parse("probabilite"), None);
    }
}
