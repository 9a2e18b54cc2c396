//! Thin HTTP wrappers over the backend `/api` endpoints.
//!
//! Each wrapper is a request/response pass-through: it attaches the derived
//! filter parameters, unwraps the `{ success, data, error }` envelope, and
//! hands the raw payload back. All dashboard logic lives upstream.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::errors::ApiResult;
use crate::domain::deal::{NewDeal, UpdateDeal};
use crate::domain::filter::FilterState;
use crate::dto::api::{ApiResponse, FilterOptions};

pub mod errors;
pub mod fetchers;

/// Widget data endpoints, relative to the API base. All of them accept the
/// same optional filter parameters.
pub const DEALS_ENDPOINT: &str = "/deals";
pub const KPIS_ENDPOINT: &str = "/kpis";
pub const SECTORS_ENDPOINT: &str = "/analytics/sectors";
pub const PERFORMANCE_ENDPOINT: &str = "/analytics/performance";
pub const DEADLINES_ENDPOINT: &str = "/analytics/deadlines";
pub const VELOCITY_ENDPOINT: &str = "/analytics/velocity";
pub const COLD_DEALS_ENDPOINT: &str = "/analytics/cold-deals";

/// Unwraps a raw response body into the payload of its envelope.
///
/// A body that is not a valid envelope surfaces as
/// [`ApiError::Decode`](crate::client::errors::ApiError::Decode), distinct
/// from transport failures.
fn decode_envelope<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    let envelope: ApiResponse<T> = serde_json::from_slice(bytes)?;
    envelope.into_result()
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET a widget resource, carrying the filter predicate when present.
    ///
    /// An absent filter contributes no parameters at all: the backend treats
    /// missing dimensions as unfiltered, never an empty-list sentinel.
    pub async fn get_data(&self, path: &str, filters: Option<&FilterState>) -> ApiResult<Value> {
        let mut request = self.http.get(self.url(path));
        if let Some(filters) = filters {
            request = request.query(&filters.to_query_parameters());
        }
        let body = request.send().await?.bytes().await?;
        decode_envelope(&body)
    }

    pub async fn fetch_filter_options(&self) -> ApiResult<FilterOptions> {
        let body = self
            .http
            .get(self.url("/filters/options"))
            .send()
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    pub async fn create_deal(&self, deal: &NewDeal) -> ApiResult<Value> {
        let body = self
            .http
            .post(self.url(DEALS_ENDPOINT))
            .json(deal)
            .send()
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    pub async fn update_deal(&self, id: i64, deal: &UpdateDeal) -> ApiResult<Value> {
        let body = self
            .http
            .put(self.url(&format!("{DEALS_ENDPOINT}/{id}")))
            .json(deal)
            .send()
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    pub async fn delete_deal(&self, id: i64) -> ApiResult<Value> {
        let body = self
            .http
            .delete(self.url(&format!("{DEALS_ENDPOINT}/{id}")))
            .send()
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }

    /// Uploads a deals CSV as multipart form data.
    pub async fn upload_csv(&self, file_name: String, bytes: Vec<u8>) -> ApiResult<Value> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);
        let body = self
            .http
            .post(self.url("/upload/csv"))
            .multipart(form)
            .send()
            .await?
            .bytes()
            .await?;
        decode_envelope(&body)
    }
}
