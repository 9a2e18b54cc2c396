//! [`WidgetFetcher`] adapters over the [`ApiClient`] GET endpoints.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::client::ApiClient;
use crate::client::errors::ApiResult;
use crate::dashboard::{WidgetFetcher, WidgetPayload};
use crate::domain::filter::FilterState;

/// Fetches one widget resource; every widget endpoint takes the same filter
/// parameters, so a path is all that distinguishes them.
pub struct EndpointFetcher {
    client: Arc<ApiClient>,
    path: &'static str,
}

impl EndpointFetcher {
    pub fn new(client: Arc<ApiClient>, path: &'static str) -> Self {
        Self { client, path }
    }
}

impl WidgetFetcher for EndpointFetcher {
    fn fetch<'a>(
        &'a self,
        filters: Option<&'a FilterState>,
    ) -> BoxFuture<'a, ApiResult<WidgetPayload>> {
        self.client.get_data(self.path, filters).boxed()
    }
}
