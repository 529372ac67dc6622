//! The 468-point face mesh: landmark storage, feature index tables and the detector seam.

pub mod detector;
pub mod features;
pub mod model;
pub mod synthetic;
