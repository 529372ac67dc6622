use crate::{
    color::hex::HexColor,
    effects::{face_width, fading_radial},
    foundation::math::is_positive,
    geometry::path::circle,
    landmarks::{features::CHEEKS, model::FaceGeometry},
    makeup::config::BLUSH_RADIUS,
    render::{blend::BlendMode, surface::Surface},
};

/// Two independent radial washes, one per cheek.
pub fn render_blush(surface: &mut Surface, face: &FaceGeometry<'_>, color: HexColor, opacity: f32) {
    let radius = BLUSH_RADIUS * face_width(face);
    if !is_positive(radius) {
        return;
    }
    for index in CHEEKS {
        let center = face.point(index);
        surface.fill_masked(
            &circle(center, radius),
            None,
            &fading_radial(center, radius, color, 1.0),
            BlendMode::Overlay,
            opacity,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blush.rs"]
mod tests;
