//! Facepaint is a landmark-driven virtual makeup compositor.
//!
//! Given a portrait (PNG or JPEG bytes), a list of cosmetic products and optional per-category
//! overrides, it locates the face through a caller-supplied [`LandmarkDetector`], renders each
//! product as a blended raster layer anchored to the 468-point face mesh, and returns the
//! composited image re-encoded.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: image bytes to premultiplied RGBA8 ([`decode_image`])
//! 2. **Detect**: one [`LandmarkSet`] per image, or none
//! 3. **Compile**: `products + overrides -> EffectPlan` ([`compile_plan`])
//! 4. **Render**: fold the plan over a CPU [`Surface`], one layer per instruction
//! 5. **Encode**: PNG or JPEG ([`encode_image`])
//!
//! [`MakeupPipeline`] drives all five steps.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: identical inputs (including the brow seed) produce identical bytes.
//! - **Premultiplied RGBA8** end-to-end inside the renderer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod color;
mod compile;
mod foundation;
mod geometry;
mod landmarks;
mod makeup;
mod render;
mod session;

pub(crate) mod effects;

pub use crate::landmarks::synthetic;

pub use crate::assets::codec::{DecodedImage, OutputFormat, decode_image, encode_image};
pub use crate::color::hex::{FALLBACK_TONE, HexColor, Rgba, adjust_brightness, hex_to_channel};
pub use crate::color::resolve::resolve_color;
pub use crate::compile::plan::{ApplicationOrder, EffectOp, EffectPlan, compile_plan};
pub use crate::effects::apply_plan;
pub use crate::foundation::core::{BezPath, CropRect, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{FacepaintError, FacepaintResult};
pub use crate::geometry::bounds::{
    FACE_CROP_PADDING, bounding_box, bounding_box_with_padding, face_crop,
};
pub use crate::geometry::normals::{compute_eyeliner_normals, compute_normals};
pub use crate::landmarks::detector::{Detection, FixedDetector, LandmarkDetector, NoFaceDetector};
pub use crate::landmarks::features::Feature;
pub use crate::landmarks::model::{FaceGeometry, LANDMARK_COUNT, Landmark, LandmarkSet};
pub use crate::makeup::config::EyelinerStyle;
pub use crate::makeup::model::{Category, EffectOverride, MakeupProduct, ProductAttributes};
pub use crate::render::blend::BlendMode;
pub use crate::render::surface::Surface;
pub use crate::session::pipeline::{MakeupPipeline, PipelineOpts, RenderResult};
