use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pipeline stage labels accepted by the backend, case-insensitive.
pub const ACCEPTED_STATUTS: [&str; 5] = [
    "prospect",
    "qualifié",
    "négociation",
    "gagné",
    "gagné - en cours",
];

/// Rank of a statut label in the pipeline progression.
///
/// Unknown labels rank 0 so that they group before every known stage when
/// sorting ascending. The match is exact: the backend stores the canonical
/// capitalized labels.
pub fn statut_rank(statut: &str) -> u8 {
    match statut {
        "Prospect" => 1,
        "Qualifié" => 2,
        "Négociation" => 3,
        "Gagné" => 4,
        _ => 0,
    }
}

/// One aggregated deal row as served by the `/deals` endpoint.
///
/// The deals-table widget owns the only cache of these; it is replaced
/// wholesale on every coordinated refresh and never patched in place.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct DealRecord {
    pub id: i64,
    pub client: String,
    pub statut: String,
    #[serde(default)]
    pub montant_brut: f64,
    pub secteur: Option<String>,
    pub assignee: Option<String>,
    pub date_echeance: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Payload for `POST /deals`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NewDeal {
    pub client: String,
    pub statut: String,
    pub montant_brut: f64,
    pub secteur: Option<String>,
    pub assignee: Option<String>,
    pub date_echeance: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl NewDeal {
    #[must_use]
    pub fn new(
        client: String,
        statut: String,
        montant_brut: f64,
        secteur: Option<String>,
        assignee: Option<String>,
        date_echeance: Option<NaiveDate>,
        notes: Option<String>,
    ) -> Self {
        Self {
            client: client.trim().to_string(),
            statut: statut.trim().to_string(),
            montant_brut,
            secteur: secteur
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            assignee: assignee
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            date_echeance,
            notes: notes.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
        }
    }
}

/// Payload for `PUT /deals/{id}`. Same shape as [`NewDeal`]; the backend
/// recomputes probability and weighted value on every write.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpdateDeal {
    pub client: String,
    pub statut: String,
    pub montant_brut: f64,
    pub secteur: Option<String>,
    pub assignee: Option<String>,
    pub date_echeance: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statut_rank_order() {
        assert!(statut_rank("Prospect") < statut_rank("Qualifié"));
        assert!(statut_rank("Qualifié") < statut_rank("Négociation"));
        assert!(statut_rank("Négociation") < statut_rank("Gagné"));
    }

    #[test]
    fn test_statut_rank_unknown_is_zero() {
        assert_eq!(statut_rank("Perdu"), 0);
        assert_eq!(statut_rank("prospect"), 0);
        assert_eq!(statut_rank(""), 0);
    }

    #[test]
    fn test_new_deal_normalizes_optional_fields() {
        let deal = NewDeal::new(
            "  Acme  ".into(),
            "Prospect".into(),
            1000.0,
            Some("  ".into()),
            Some(" Alice ".into()),
            None,
            None,
        );
        assert_eq!(deal.client, "Acme");
        assert_eq!(deal.secteur, None);
        assert_eq!(deal.assignee.as_deref(), Some("Alice"));
    }
}
