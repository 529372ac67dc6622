//! CPU raster surface, blend kernels and per-pixel paints.

pub mod blend;
pub mod paint;
pub mod surface;
