use crate::{
    color::hex::HexColor,
    effects::{EYES, eye_width},
    geometry::path::{smooth_open, stroke},
    landmarks::model::FaceGeometry,
    makeup::config::kajal,
    render::{
        blend::BlendMode,
        surface::{ColoredPath, Surface},
    },
};

/// Stroke width for an eye of width `eye_w`, in pixels.
pub fn kajal_width(eye_w: f64) -> f64 {
    (eye_w * kajal::WIDTH_RATIO).clamp(kajal::MIN_PX, kajal::MAX_PX)
}

/// Plain stroke along both lower lash lines.
pub fn render_kajal(surface: &mut Surface, face: &FaceGeometry<'_>, color: HexColor, opacity: f32) {
    let shapes: Vec<ColoredPath> = EYES
        .iter()
        .map(|eye| ColoredPath {
            path: stroke(
                &smooth_open(&face.points(eye.lower_lid)),
                kajal_width(eye_width(face, eye)),
            ),
            color: color.with_alpha(1.0),
        })
        .collect();
    surface.fill_shapes(&shapes, BlendMode::Multiply, opacity);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/kajal.rs"]
mod tests;
