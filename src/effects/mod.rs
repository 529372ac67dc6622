//! One renderer per cosmetic category, each painting onto the shared [`Surface`].
//!
//! Renderers never fail: degenerate geometry simply draws nothing.

pub mod blush;
pub mod brows;
pub mod contour;
pub mod eyeliner;
pub mod eyeshadow;
pub mod foundation;
pub mod kajal;
pub mod lips;

use tracing::debug;

use crate::{
    color::hex::HexColor,
    compile::plan::{EffectOp, EffectPlan},
    foundation::core::Point,
    geometry::normals::centroid,
    landmarks::{
        features::{EyeIndices, FACE_SIDES, LEFT_EYE, RIGHT_EYE},
        model::FaceGeometry,
    },
    makeup::{config::EyelinerStyle, model::Category},
    render::{
        paint::{GradientStop, Paint},
        surface::Surface,
    },
};

pub(crate) const EYES: [EyeIndices; 2] = [RIGHT_EYE, LEFT_EYE];

/// Run every instruction of `plan` in order.
pub fn apply_plan(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    plan: &EffectPlan,
    brow_seed: u64,
) {
    for op in plan.iter() {
        apply_effect(surface, face, op, brow_seed);
    }
}

/// Dispatch one instruction to its renderer.
pub fn apply_effect(surface: &mut Surface, face: &FaceGeometry<'_>, op: &EffectOp, brow_seed: u64) {
    debug!(category = %op.category, opacity = op.opacity, style = ?op.style, "apply effect");
    let style = op.style.as_deref();
    match op.category {
        Category::Foundation | Category::Primer => {
            foundation::render_foundation(surface, face, op.color, op.opacity)
        }
        Category::Contour => contour::render_contour(surface, face, op.color, op.opacity),
        Category::Bronzer => contour::render_bronzer(surface, face, op.color, op.opacity),
        Category::Blush => blush::render_blush(surface, face, op.color, op.opacity),
        Category::Eyeshadow => eyeshadow::render_eyeshadow(surface, face, op.color, op.opacity),
        Category::Eyeliner => eyeliner::render_eyeliner(
            surface,
            face,
            op.color,
            op.opacity,
            EyelinerStyle::parse(style),
        ),
        Category::Kajal => kajal::render_kajal(surface, face, op.color, op.opacity),
        Category::BrowPencil => {
            brows::render_brows(surface, face, op.color, op.opacity, brow_seed)
        }
        Category::LipLiner => lips::render_lip_liner(surface, face, op.color, op.opacity),
        Category::Lipstick => {
            lips::render_lips(surface, face, op.color, op.opacity);
            if lips::wants_liner(style) {
                lips::render_lip_liner(surface, face, op.color, op.opacity);
            }
        }
    }
}

/// Widest horizontal span of the face oval.
pub(crate) fn face_width(face: &FaceGeometry<'_>) -> f64 {
    face.distance(FACE_SIDES[0], FACE_SIDES[1])
}

/// Forehead-top to chin distance.
pub(crate) fn face_height(face: &FaceGeometry<'_>) -> f64 {
    face.distance(10, 152)
}

/// Inner-to-outer canthus distance.
pub(crate) fn eye_width(face: &FaceGeometry<'_>, eye: &EyeIndices) -> f64 {
    face.distance(eye.inner_corner, eye.outer_corner)
}

/// Centroid of both lids, standing in for the iris center.
pub(crate) fn eye_center(face: &FaceGeometry<'_>, eye: &EyeIndices) -> Point {
    centroid(&face.points(&eye.contour()))
}

/// Radial gradient from `alpha` at the center to transparent at `radius`.
pub(crate) fn fading_radial(center: Point, radius: f64, color: HexColor, alpha: f32) -> Paint {
    Paint::Radial {
        center,
        radius,
        stops: vec![
            GradientStop::new(0.0, color.with_alpha(alpha)),
            GradientStop::new(1.0, color.with_alpha(0.0)),
        ],
    }
}

/// Linear gradient from `alpha` at `start` to `end_alpha` at `end`.
pub(crate) fn fading_linear(
    start: Point,
    end: Point,
    color: HexColor,
    alpha: f32,
    end_alpha: f32,
) -> Paint {
    Paint::Linear {
        start,
        end,
        stops: vec![
            GradientStop::new(0.0, color.with_alpha(alpha)),
            GradientStop::new(1.0, color.with_alpha(end_alpha)),
        ],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
