//! Widget registry and coordinated refresh.
//!
//! The coordinator owns the canonical filter state and the refresh
//! generation. Widgets plug in through two object-safe seams: a fetcher that
//! loads the widget's payload for a filter predicate, and a renderer that
//! applies it. The coordinator never inspects payload shape.

use futures::future::BoxFuture;
use serde_json::Value;

use crate::client::errors::ApiResult;
use crate::domain::filter::FilterState;

pub mod coordinator;

pub use coordinator::RefreshCoordinator;

/// Opaque widget payload: the `data` half of the backend envelope.
pub type WidgetPayload = Value;

/// Loads one widget's payload for the given filter predicate.
pub trait WidgetFetcher: Send + Sync {
    fn fetch<'a>(&'a self, filters: Option<&'a FilterState>)
    -> BoxFuture<'a, ApiResult<WidgetPayload>>;
}

/// Applies a fetched payload to one widget's visible state.
///
/// Implementations must be idempotent: re-applying the same payload yields
/// the same visible state, and any owned graphics handle is disposed before
/// its replacement is created.
pub trait WidgetRenderer: Send + Sync {
    fn render(&self, payload: WidgetPayload, filters: Option<&FilterState>);

    /// Shows the widget's own degraded affordance after a failed fetch. The
    /// default leaves the last successfully rendered state.
    fn render_failed(&self) {}
}
