//! KPI payload served by `/kpis`.

use serde::Deserialize;

/// Aggregated pipeline figures computed server-side.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct KpiSummary {
    /// Weighted pipeline total in euros.
    #[serde(default)]
    pub pipeline_pondere: f64,
    #[serde(default)]
    pub pipeline_pondere_formatted: String,
    /// Mean deal amount in euros.
    #[serde(default)]
    pub panier_moyen: f64,
    #[serde(default)]
    pub panier_moyen_formatted: String,
    #[serde(default)]
    pub nombre_deals: u64,
    #[serde(default)]
    pub deals_gagnes: u64,
    /// Conversion rate in percent.
    #[serde(default)]
    pub taux_conversion: f64,
}
