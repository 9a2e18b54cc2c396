//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::FILTERS_STORAGE_KEY;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across the dashboard runtime.
pub struct DashboardConfig {
    /// Base URL of the backend API, e.g. `http://localhost:5000/api`.
    pub api_base_url: String,
    /// Path of the JSON file persisting the filter state.
    pub filters_path: String,
}

impl DashboardConfig {
    /// Loads configuration from an optional `dashboard.yaml` file overlaid
    /// with `DASHBOARD_*` environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("api_base_url", "http://localhost:5000/api")?
            .set_default("filters_path", format!("{FILTERS_STORAGE_KEY}.json"))?
            .add_source(config::File::with_name("dashboard").required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD"))
            .build()?
            .try_deserialize()
    }
}
