//! Hex color parsing, brightness adjustment and per-product color resolution.

pub mod hex;
pub mod resolve;
