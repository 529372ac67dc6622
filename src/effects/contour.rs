use crate::{
    color::hex::HexColor,
    effects::{face_width, fading_radial},
    foundation::math::is_positive,
    geometry::path::{circle, smooth_closed},
    landmarks::{
        features::{CHEEK_HOLLOWS, CHEEKBONES, FACE_OVAL, JAW_SIDES, TEMPLES},
        model::FaceGeometry,
    },
    makeup::config::contour,
    render::{blend::BlendMode, surface::Surface},
};

/// Darkened multiply shading under the cheekbones and along the jaw, clipped to the face.
pub fn render_contour(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
) {
    let shade = color.adjust_brightness(contour::DARKEN_PERCENT);
    let centers = CHEEK_HOLLOWS.into_iter().chain(JAW_SIDES);
    shade_spots(
        surface,
        face,
        centers,
        contour::RADIUS,
        shade,
        BlendMode::Multiply,
        opacity,
    );
}

/// Warm soft-light tint on temples and cheekbones, clipped to the face.
pub fn render_bronzer(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
) {
    let centers = TEMPLES.into_iter().chain(CHEEKBONES);
    shade_spots(
        surface,
        face,
        centers,
        contour::BRONZER_RADIUS,
        color,
        BlendMode::SoftLight,
        opacity,
    );
}

fn shade_spots(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    centers: impl Iterator<Item = usize>,
    radius_ratio: f64,
    color: HexColor,
    blend: BlendMode,
    opacity: f32,
) {
    let radius = radius_ratio * face_width(face);
    if !is_positive(radius) {
        return;
    }
    let oval = smooth_closed(&face.points(FACE_OVAL));
    for index in centers {
        let center = face.point(index);
        surface.fill_masked(
            &circle(center, radius),
            Some(&oval),
            &fading_radial(center, radius, color, 1.0),
            blend,
            opacity,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/contour.rs"]
mod tests;
