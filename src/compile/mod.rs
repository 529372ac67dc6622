//! Product list to effect plan.

pub mod plan;
