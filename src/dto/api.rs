//! Response envelope shared by every backend endpoint.

use serde::Deserialize;

use crate::client::errors::{ApiError, ApiResult};

/// `{ success, data, error }` wrapper returned by all `/api` endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, mapping `success = false` to the server-reported
    /// error message.
    pub fn into_result(self) -> ApiResult<T> {
        if self.success {
            self.data
                .ok_or_else(|| ApiError::Backend("missing data in successful response".to_string()))
        } else {
            Err(ApiError::Backend(
                self.error.unwrap_or_else(|| "unknown backend error".to_string()),
            ))
        }
    }
}

/// Options served by `/filters/options` to populate the sidebar groups.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub statuts: Vec<String>,
    #[serde(default)]
    pub secteurs: Vec<String>,
    #[serde(default)]
    pub assignees: Vec<String>,
}
