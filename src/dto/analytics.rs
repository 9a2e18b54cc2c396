//! Analytics payloads served by the `/analytics/*` endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// Chart.js-style dataset block: labels plus one or more data series.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<ChartDataset>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ChartDataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// `/analytics/sectors` payload: two chart blocks and a recap table.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SectorAnalytics {
    #[serde(default)]
    pub chart_montants: ChartData,
    #[serde(default)]
    pub chart_panier_moyen: ChartData,
    #[serde(default)]
    pub tableau: Vec<SectorRow>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SectorRow {
    pub secteur: String,
    #[serde(default)]
    pub montant_total: f64,
    #[serde(default)]
    pub montant_total_formatted: String,
    #[serde(default)]
    pub panier_moyen: f64,
    #[serde(default)]
    pub panier_moyen_formatted: String,
    #[serde(default)]
    pub nb_deals: u64,
    #[serde(default)]
    pub valeur_ponderee: f64,
    #[serde(default)]
    pub valeur_ponderee_formatted: String,
}

/// `/analytics/performance` payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PerformanceAnalytics {
    #[serde(default)]
    pub chart_data: ChartData,
    #[serde(default)]
    pub performance: Vec<PerformanceRow>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PerformanceRow {
    pub assignee: String,
    #[serde(default)]
    pub nb_deals: u64,
    #[serde(default)]
    pub deals_gagnes: u64,
    #[serde(default)]
    pub taux_conversion: f64,
}

/// `/analytics/deadlines` payload: overdue and 30-day upcoming deals.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct DeadlinesAnalytics {
    #[serde(default)]
    pub overdue: Vec<DeadlineRow>,
    #[serde(default)]
    pub upcoming: Vec<DeadlineRow>,
    #[serde(default)]
    pub stats: DeadlineStats,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeadlineRow {
    pub client: String,
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub montant_brut: f64,
    #[serde(default)]
    pub montant_formatted: String,
    pub date_echeance: Option<NaiveDate>,
    /// Days overdue; only present on `overdue` rows.
    #[serde(default)]
    pub jours_retard: Option<i64>,
    /// Days remaining; only present on `upcoming` rows.
    #[serde(default)]
    pub jours_restants: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeadlineStats {
    #[serde(default)]
    pub nb_overdue: u64,
    #[serde(default)]
    pub nb_upcoming: u64,
    #[serde(default)]
    pub montant_upcoming: f64,
}

/// `/analytics/velocity` payload: mean days from creation to won, overall
/// and per sector.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct VelocityAnalytics {
    #[serde(default)]
    pub vitesse_moyenne_formatted: Option<String>,
    /// Mean conversion days keyed by sector. BTreeMap keeps decoding order
    /// independent of backend hash order.
    #[serde(default)]
    pub velocity_by_sector: BTreeMap<String, f64>,
    #[serde(default)]
    pub has_won_deals: bool,
}

/// `/analytics/cold-deals` payload: active deals without recent activity.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ColdDealsAnalytics {
    #[serde(default)]
    pub cold_deals: Vec<ColdDealRow>,
    #[serde(default)]
    pub stats: ColdDealStats,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ColdDealRow {
    pub client: String,
    #[serde(default)]
    pub statut: String,
    #[serde(default)]
    pub montant_formatted: String,
    pub secteur: Option<String>,
    pub assignee: Option<String>,
    #[serde(default)]
    pub jours_inactifs: i64,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ColdDealStats {
    #[serde(default)]
    pub nb_cold_deals: u64,
}
