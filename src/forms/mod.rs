//! Validated input forms bound to the UI boundary.

pub mod deal;
