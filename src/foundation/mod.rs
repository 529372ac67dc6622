//! Shared value types, the crate error, and small numeric helpers.

pub mod core;
pub mod error;
pub mod math;
