//! Core domain types and logic.

pub mod baseline;
pub mod config_validation;
pub mod engine;
pub mod error;
pub mod lump_sum;
pub mod market_day;
pub mod metrics;
pub mod params;
pub mod policy;
pub mod recommendation;
pub mod state;
pub mod variable_policy;
pub mod zone;
