use crate::{
    color::hex::HexColor,
    effects::{EYES, eye_width, face_height, fading_linear, fading_radial},
    foundation::{
        core::{Point, Vec2},
        math::is_positive,
    },
    geometry::{
        normals::centroid,
        path::{chain_band, polygon, smooth_closed, smooth_open, stroke},
    },
    landmarks::{
        features::{FACE_OVAL, FOREHEAD_ARC, JAW_ARC, NOSE_BRIDGE, NOSE_TIP, T_ZONE_FOREHEAD},
        model::FaceGeometry,
    },
    makeup::config::foundation as cfg,
    render::{
        blend::BlendMode,
        paint::{GradientStop, Paint},
        surface::Surface,
    },
};

const WHITE: HexColor = HexColor::rgb(255, 255, 255);

/// Base tint over the face oval, then white brightening zones.
///
/// The base, under-eye and T-zone layers are clipped to the oval; the hairline and neck blends
/// extend past it.
pub fn render_foundation(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
) {
    let oval_pts = face.points(FACE_OVAL);
    let oval = smooth_closed(&oval_pts);
    let nose = face.point(NOSE_TIP);
    let radius = oval_pts
        .iter()
        .map(|p| p.distance(nose))
        .fold(0.0, f64::max);
    if !is_positive(radius) {
        return;
    }

    let base = Paint::Radial {
        center: nose,
        radius,
        stops: cfg::BASE_STOPS
            .iter()
            .map(|&(offset, alpha)| GradientStop::new(offset, color.with_alpha(alpha)))
            .collect(),
    };
    surface.fill_masked(&oval, None, &base, BlendMode::SoftLight, opacity);

    for eye in &EYES {
        let tri = [
            face.point(eye.inner_corner),
            face.point(eye.outer_corner),
            face.point(eye.under_eye_apex),
        ];
        let c = centroid(&tri);
        let r = tri.iter().map(|p| p.distance(c)).fold(0.0, f64::max);
        surface.fill_masked(
            &polygon(&tri),
            Some(&oval),
            &fading_radial(c, r, WHITE, cfg::UNDER_EYE_ALPHA),
            BlendMode::Screen,
            opacity,
        );
    }

    let forehead = face.points(T_ZONE_FOREHEAD);
    let top_y = forehead.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let t_zone = fading_linear(
        Point::new(nose.x, top_y),
        nose,
        WHITE,
        cfg::T_ZONE_ALPHA,
        0.0,
    );
    surface.fill_masked(
        &smooth_closed(&forehead),
        Some(&oval),
        &t_zone,
        BlendMode::Screen,
        opacity,
    );
    let bridge_w = cfg::NOSE_BRIDGE_WIDTH * eye_width(face, &EYES[0]);
    surface.fill_masked(
        &stroke(&smooth_open(&face.points(NOSE_BRIDGE)), bridge_w),
        Some(&oval),
        &t_zone,
        BlendMode::Screen,
        opacity,
    );

    let face_h = face_height(face);
    edge_blend(
        surface,
        &face.points(FOREHEAD_ARC),
        -cfg::HAIRLINE_EXTENSION * face_h,
        opacity,
    );
    edge_blend(
        surface,
        &face.points(JAW_ARC),
        cfg::NECK_EXTENSION * face_h,
        opacity,
    );
}

/// Band between `arc` and `arc` shifted vertically by `shift`, fading out away from the face.
fn edge_blend(surface: &mut Surface, arc: &[Point], shift: f64, opacity: f32) {
    if arc.len() < 2 || shift == 0.0 {
        return;
    }
    let moved: Vec<Point> = arc.iter().map(|&p| p + Vec2::new(0.0, shift)).collect();
    // Fade starts at the arc's extreme in the shift direction.
    let edge_y = if shift < 0.0 {
        arc.iter().map(|p| p.y).fold(f64::INFINITY, f64::min)
    } else {
        arc.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max)
    };
    let x = centroid(arc).x;
    surface.fill_masked(
        &chain_band(&moved, arc),
        None,
        &fading_linear(
            Point::new(x, edge_y),
            Point::new(x, edge_y + shift),
            WHITE,
            cfg::EDGE_ALPHA,
            0.0,
        ),
        BlendMode::Screen,
        opacity,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/effects/foundation.rs"]
mod tests;
