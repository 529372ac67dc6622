use crate::{
    color::hex::HexColor,
    effects::{EYES, fading_linear},
    foundation::core::Point,
    geometry::{normals::centroid, path::polygon},
    landmarks::model::FaceGeometry,
    makeup::config::eyeshadow::{END_ALPHA, GRADIENT_PX},
    render::{blend::BlendMode, surface::Surface},
};

/// Lid color fading upward from the lash line over a fixed screen distance.
pub fn render_eyeshadow(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
) {
    for eye in &EYES {
        let area = face.points(&eye.eyelid_area());
        if area.len() < 3 {
            continue;
        }
        let lash_y = face
            .points(eye.upper_lid)
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max);
        let x = centroid(&area).x;
        let start = Point::new(x, lash_y);
        let end = Point::new(x, lash_y - GRADIENT_PX);
        surface.fill_masked(
            &polygon(&area),
            None,
            &fading_linear(start, end, color, 1.0, END_ALPHA),
            BlendMode::Multiply,
            opacity,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/eyeshadow.rs"]
mod tests;
