//! DTO modules mirroring the backend payload shapes.

pub mod analytics;
pub mod api;
pub mod kpi;
