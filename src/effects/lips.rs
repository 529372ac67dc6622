use crate::{
    color::hex::HexColor,
    foundation::{
        core::Point,
        math::{is_positive, smoothstep},
    },
    geometry::{
        normals::{arc_positions, centroid, compute_normals},
        path::{chain_band, circle, smooth_open, stroke},
    },
    landmarks::{
        features::{
            LIPS_LOWER_INNER, LIPS_LOWER_OUTER, LIPS_UPPER_INNER, LIPS_UPPER_OUTER,
            MOUTH_CORNER_LEFT_IMAGE, MOUTH_CORNER_RIGHT_IMAGE,
        },
        model::FaceGeometry,
    },
    makeup::config::lip_liner,
    render::{
        blend::BlendMode,
        paint::Paint,
        surface::{ColoredPath, Surface},
    },
};

/// Style tokens that request a liner pass after the lip fill.
const LINER_TOKENS: [&str; 5] = ["liner", "lip-liner", "lipliner", "lined", "with-liner"];

/// Fill both lips, leaving the inner mouth untouched.
pub fn render_lips(surface: &mut Surface, face: &FaceGeometry<'_>, color: HexColor, opacity: f32) {
    let upper = chain_band(
        &face.points(LIPS_UPPER_OUTER),
        &face.points(LIPS_UPPER_INNER),
    );
    let lower = chain_band(
        &face.points(LIPS_LOWER_OUTER),
        &face.points(LIPS_LOWER_INNER),
    );
    let fill = color.with_alpha(1.0);
    surface.fill_shapes(
        &[
            ColoredPath {
                path: upper,
                color: fill,
            },
            ColoredPath {
                path: lower,
                color: fill,
            },
        ],
        BlendMode::Multiply,
        opacity,
    );
}

/// Whether a lipstick style token asks for the liner pass.
pub fn wants_liner(style: Option<&str>) -> bool {
    style.is_some_and(|s| {
        s.split(|c: char| c.is_whitespace() || c == ',' || c == '+')
            .map(|tok| tok.trim().to_ascii_lowercase().replace('_', "-"))
            .any(|tok| LINER_TOKENS.contains(&tok.as_str()))
    })
}

/// Thickness and intensity profile along a lip contour: 0 at the corners, 1 across the middle.
pub fn liner_profile(t: f64) -> f64 {
    let folded = t.clamp(0.0, 1.0).min(1.0 - t.clamp(0.0, 1.0));
    let ramp_end = (lip_liner::PEAK_AT - lip_liner::PLATEAU) as f32;
    f64::from(smoothstep(0.0, ramp_end, folded as f32))
}

/// Variable-width outline of both lips with an inner shadow and corner dots.
pub fn render_lip_liner(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
) {
    let mouth_w = face.distance(MOUTH_CORNER_LEFT_IMAGE, MOUTH_CORNER_RIGHT_IMAGE);
    if !is_positive(mouth_w) {
        return;
    }
    let liner = color.adjust_brightness(lip_liner::DARKEN_PERCENT);
    let mut outline = face.points(LIPS_UPPER_OUTER);
    outline.extend(face.points(LIPS_LOWER_OUTER));
    let center = centroid(&outline);
    let (lo, hi) = lip_liner::ALPHA_RANGE;

    let mut accents = Vec::new();
    for chain in [LIPS_UPPER_OUTER, LIPS_LOWER_OUTER] {
        let pts = face.points(chain);
        let ts = arc_positions(&pts);
        let normals = compute_normals(&pts, center);
        let widths: Vec<f64> = ts
            .iter()
            .map(|&t| mouth_w * (lip_liner::MIN_WIDTH + lip_liner::EXTRA_WIDTH * liner_profile(t)))
            .collect();

        let offset = |k: f64| -> Vec<Point> {
            pts.iter()
                .zip(&normals)
                .zip(&widths)
                .map(|((&p, &n), &w)| p + n * (w * k))
                .collect()
        };
        let band = chain_band(&offset(0.5), &offset(-0.5));
        let colors = ts
            .iter()
            .map(|&t| liner.with_alpha(lo + (hi - lo) * liner_profile(t) as f32))
            .collect();
        surface.fill_masked(
            &band,
            None,
            &Paint::Chain {
                points: pts.clone(),
                colors,
            },
            BlendMode::Multiply,
            opacity,
        );

        accents.push(ColoredPath {
            path: stroke(
                &smooth_open(&offset(-lip_liner::SHADOW_OFFSET)),
                mouth_w * lip_liner::MIN_WIDTH,
            ),
            color: liner.with_alpha(lip_liner::SHADOW_ALPHA),
        });
    }

    let dot_r = lip_liner::CORNER_DOT_RADIUS * mouth_w * lip_liner::MIN_WIDTH;
    for corner in [MOUTH_CORNER_LEFT_IMAGE, MOUTH_CORNER_RIGHT_IMAGE] {
        accents.push(ColoredPath {
            path: circle(face.point(corner), dot_r),
            color: liner.with_alpha(lip_liner::CORNER_DOT_ALPHA),
        });
    }
    surface.fill_shapes(&accents, BlendMode::Multiply, opacity);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/lips.rs"]
mod tests;
