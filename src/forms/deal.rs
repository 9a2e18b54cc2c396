use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::deal::{ACCEPTED_STATUTS, NewDeal, UpdateDeal};

#[derive(Clone, Debug, Deserialize, Validate)]
/// Form data for creating or editing a deal through the modal.
pub struct DealForm {
    /// Client name shown in the table.
    #[validate(length(min = 1, message = "Le nom du client ne peut pas être vide"))]
    pub client: String,
    /// Pipeline stage label.
    #[validate(custom(function = validate_statut))]
    pub statut: String,
    /// Gross deal amount in euros.
    #[validate(range(min = 0.0, message = "Le montant doit être positif"))]
    pub montant_brut: f64,
    pub secteur: Option<String>,
    pub assignee: Option<String>,
    pub date_echeance: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Accepts the known stage labels, case-insensitive.
fn validate_statut(statut: &str) -> Result<(), ValidationError> {
    let normalized = statut.trim().to_lowercase();
    if ACCEPTED_STATUTS.contains(&normalized.as_str()) {
        Ok(())
    } else {
        Err(ValidationError::new("statut"))
    }
}

impl DealForm {
    pub fn to_new_deal(&self) -> NewDeal {
        NewDeal::new(
            self.client.clone(),
            self.statut.clone(),
            self.montant_brut,
            self.secteur.clone(),
            self.assignee.clone(),
            self.date_echeance,
            self.notes.clone(),
        )
    }

    pub fn to_update_deal(&self) -> UpdateDeal {
        let new_deal = self.to_new_deal();
        UpdateDeal {
            client: new_deal.client,
            statut: new_deal.statut,
            montant_brut: new_deal.montant_brut,
            secteur: new_deal.secteur,
            assignee: new_deal.assignee,
            date_echeance: new_deal.date_echeance,
            notes: new_deal.notes,
        }
    }
}
