//! Client engine of the CRM sales dashboard.
//!
//! One canonical [`domain::filter::FilterState`] drives every widget: the
//! [`dashboard::RefreshCoordinator`] fans a filter change out to all
//! registered widgets with render-generation consistency, the
//! [`storage::FilterStore`] persists the predicate across sessions, and the
//! [`sort`] engine re-orders the fetched deal set locally.

pub mod client;
pub mod dashboard;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod services;
pub mod sort;
pub mod storage;
pub mod widgets;

/// Fixed durable-storage key holding the serialized filter state.
pub const FILTERS_STORAGE_KEY: &str = "crm_filters";
