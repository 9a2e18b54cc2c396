use std::sync::Arc;

use crm_dashboard::client::{
    ApiClient, COLD_DEALS_ENDPOINT, DEADLINES_ENDPOINT, DEALS_ENDPOINT, KPIS_ENDPOINT,
    PERFORMANCE_ENDPOINT, SECTORS_ENDPOINT, VELOCITY_ENDPOINT, fetchers::EndpointFetcher,
};
use crm_dashboard::dashboard::RefreshCoordinator;
use crm_dashboard::models::config::DashboardConfig;
use crm_dashboard::storage::FilterStore;
use crm_dashboard::storage::file::JsonFilterStore;
use crm_dashboard::widgets::chart::{ChartBackend, ChartSpec};
use crm_dashboard::widgets::cold_deals::ColdDealsPanel;
use crm_dashboard::widgets::deadlines::DeadlinesPanel;
use crm_dashboard::widgets::deals_table::DealsTable;
use crm_dashboard::widgets::kpi::KpiPanel;
use crm_dashboard::widgets::performance::PerformancePanel;
use crm_dashboard::widgets::sectors::SectorPanel;
use crm_dashboard::widgets::velocity::VelocityPanel;

/// Headless chart backend: charts are logged instead of drawn.
#[derive(Clone, Copy)]
struct LogChartBackend(&'static str);

impl ChartBackend for LogChartBackend {
    type Handle = ();

    fn create(&self, spec: &ChartSpec) {
        log::info!("Chart {} redrawn with {} labels", self.0, spec.data.labels.len());
    }

    fn destroy(&self, _handle: ()) {
        log::debug!("Chart {} disposed", self.0);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = DashboardConfig::load()?;
    let api = Arc::new(ApiClient::new(&config.api_base_url));
    let store = JsonFilterStore::new(&config.filters_path);

    let kpis = Arc::new(KpiPanel::new());
    let table = Arc::new(DealsTable::new());
    let deadlines = Arc::new(DeadlinesPanel::new());
    let cold = Arc::new(ColdDealsPanel::new());
    let sectors = Arc::new(SectorPanel::new(
        LogChartBackend("sectors/montants"),
        LogChartBackend("sectors/panier"),
    ));
    let performance = Arc::new(PerformancePanel::new(LogChartBackend("performance")));
    let velocity = Arc::new(VelocityPanel::new(LogChartBackend("velocity")));

    let mut coordinator = RefreshCoordinator::new();
    coordinator.register_widget(
        "kpis",
        Arc::new(EndpointFetcher::new(api.clone(), KPIS_ENDPOINT)),
        kpis.clone(),
    );
    coordinator.register_widget(
        "deals",
        Arc::new(EndpointFetcher::new(api.clone(), DEALS_ENDPOINT)),
        table.clone(),
    );
    coordinator.register_widget(
        "sectors",
        Arc::new(EndpointFetcher::new(api.clone(), SECTORS_ENDPOINT)),
        sectors.clone(),
    );
    coordinator.register_widget(
        "performance",
        Arc::new(EndpointFetcher::new(api.clone(), PERFORMANCE_ENDPOINT)),
        performance.clone(),
    );
    coordinator.register_widget(
        "deadlines",
        Arc::new(EndpointFetcher::new(api.clone(), DEADLINES_ENDPOINT)),
        deadlines.clone(),
    );
    coordinator.register_widget(
        "velocity",
        Arc::new(EndpointFetcher::new(api.clone(), VELOCITY_ENDPOINT)),
        velocity.clone(),
    );
    coordinator.register_widget(
        "cold-deals",
        Arc::new(EndpointFetcher::new(api.clone(), COLD_DEALS_ENDPOINT)),
        cold.clone(),
    );

    // The sidebar groups come from the backend before any restore.
    match api.fetch_filter_options().await {
        Ok(options) => log::info!(
            "Options de filtre: {} statuts, {} secteurs, {} assignees",
            options.statuts.len(),
            options.secteurs.len(),
            options.assignees.len(),
        ),
        Err(err) => log::warn!("Failed to load filter options: {err}"),
    }

    // Page-load sequence: restore the saved predicate, refresh under it.
    let saved = store.load();
    if let Some(filters) = &saved {
        log::info!("Restored saved filters: {filters:?}");
    }
    coordinator.refresh(saved).await;

    if let Some(summary) = kpis.summary() {
        println!(
            "Pipeline pondéré: {} | Panier moyen: {} | Deals: {} | Gagnés: {} | Conversion: {}%",
            summary.pipeline_pondere_formatted,
            summary.panier_moyen_formatted,
            summary.nombre_deals,
            summary.deals_gagnes,
            summary.taux_conversion,
        );
    }

    let rows = table.rows();
    println!("{} deal(s) affichés", rows.len());
    for deal in rows.iter().take(10) {
        println!(
            "  {} | {} | {:.0} € | {}",
            deal.client,
            deal.statut,
            deal.montant_brut,
            deal.assignee.as_deref().unwrap_or("-"),
        );
    }

    if let Some(alert) = deadlines.view().alert {
        println!("⚠ {alert}");
    }
    if let Some((count, _)) = cold.view().badge {
        println!("{count} deal(s) froid(s)");
    }

    Ok(())
}
