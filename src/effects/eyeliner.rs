use crate::{
    color::hex::HexColor,
    effects::{EYES, eye_center, eye_width},
    foundation::{
        core::{BezPath, Point, Vec2},
        math::is_positive,
    },
    geometry::{
        normals::{compute_eyeliner_normals, offset_chain},
        path::{chain_band, polygon},
    },
    landmarks::model::FaceGeometry,
    makeup::config::{EyelinerGeometry, EyelinerStyle, WingGeometry},
    render::{
        blend::BlendMode,
        surface::{ColoredPath, Surface},
    },
};

/// Upper lash-line liner for both eyes in one style.
pub fn render_eyeliner(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
    style: EyelinerStyle,
) {
    let geometry = style.geometry();
    for eye in &EYES {
        let lid = face.points(eye.upper_lid);
        let eye_w = eye_width(face, eye);
        if lid.len() < 2 || !is_positive(eye_w) {
            continue;
        }
        let reference = eye_center(face, eye);
        for shapes in liner_passes(&lid, reference, eye_w, &geometry, color) {
            surface.fill_shapes(&shapes, BlendMode::SourceOver, opacity);
        }
    }
}

/// Shapes for each pass of one eye; the wing rides on the first pass.
pub(crate) fn liner_passes(
    lid: &[Point],
    reference: Point,
    eye_w: f64,
    geometry: &EyelinerGeometry,
    color: HexColor,
) -> Vec<Vec<ColoredPath>> {
    let normals = compute_eyeliner_normals(lid, reference);
    let thickness = |t: f64| eye_w * geometry.thickness * geometry.profile(t);

    geometry
        .passes
        .iter()
        .enumerate()
        .map(|(k, pass)| {
            let top = offset_chain(lid, &normals, |t| thickness(t) * pass.band_end);
            let base = offset_chain(lid, &normals, |t| thickness(t) * pass.band_start);
            let fill = color.with_alpha(pass.alpha);
            let mut shapes = vec![ColoredPath {
                path: chain_band(&top, &base),
                color: fill,
            }];
            if k == 0
                && let Some(wing) = geometry.wing
            {
                shapes.push(ColoredPath {
                    path: wing_path(lid, &top, reference, eye_w, wing),
                    color: fill,
                });
            }
            shapes
        })
        .collect()
}

/// Triangular flick from the outer corner, rising away from the eye.
fn wing_path(
    lid: &[Point],
    top: &[Point],
    reference: Point,
    eye_w: f64,
    wing: WingGeometry,
) -> BezPath {
    let n = lid.len().min(top.len());
    if n < 2 {
        return BezPath::new();
    }
    let corner = lid[n - 1];
    let outward = if corner.x >= reference.x { 1.0 } else { -1.0 };
    let length = eye_w * wing.length;
    let tip = corner + Vec2::new(outward * length, -length * wing.height);
    polygon(&[corner, tip, top[n - 1], top[n - 2]])
}

#[cfg(test)]
#[path = "../../tests/unit/effects/eyeliner.rs"]
mod tests;
