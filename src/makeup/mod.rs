//! Caller-facing product and override records, plus the per-category rendering constants.

pub mod config;
pub mod model;
