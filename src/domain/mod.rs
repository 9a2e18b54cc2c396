//! Plain data types shared by the dashboard core.

pub mod deal;
pub mod filter;
