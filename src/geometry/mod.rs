//! Point-chain geometry: normals, bounding boxes and path construction.

pub mod bounds;
pub mod normals;
pub mod path;
