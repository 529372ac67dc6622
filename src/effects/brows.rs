use crate::{
    color::hex::HexColor,
    effects::face_width,
    foundation::{
        core::{Point, Vec2},
        math::{SeededRng, lerp},
    },
    geometry::{
        normals::{compute_tangents, normalize_or_zero},
        path::{segment, smooth_closed, stroke},
    },
    landmarks::{
        features::{BrowIndices, LEFT_BROW, RIGHT_BROW},
        model::FaceGeometry,
    },
    makeup::config::brow,
    render::{
        blend::BlendMode,
        surface::{ColoredPath, Surface},
    },
};

/// Tint fill, seeded hair strokes and a faint contour for both brows.
pub fn render_brows(
    surface: &mut Surface,
    face: &FaceGeometry<'_>,
    color: HexColor,
    opacity: f32,
    seed: u64,
) {
    let scale = (face_width(face) / brow::REFERENCE_FACE_WIDTH).max(0.5);
    for indices in [&RIGHT_BROW, &LEFT_BROW] {
        let outline = smooth_closed(&face.points(&indices.outline()));
        if outline.elements().is_empty() {
            continue;
        }
        surface.fill(
            &outline,
            color.with_alpha(brow::FILL_ALPHA),
            BlendMode::Multiply,
            opacity,
        );
        surface.fill_shapes(
            &brow_hairs(face, indices, color, scale, seed),
            BlendMode::SourceOver,
            opacity,
        );
        surface.fill(
            &stroke(&outline, brow::CONTOUR_WIDTH * scale),
            color.with_alpha(brow::CONTOUR_ALPHA),
            BlendMode::SourceOver,
            opacity,
        );
    }
}

/// Hair strokes for one brow.
///
/// Hairs cluster toward the tail, grow thicker there and lean further along the brow. Each brow
/// draws from its own stream keyed by its first landmark, so the output depends only on `seed`
/// and the landmarks.
pub fn brow_hairs(
    face: &FaceGeometry<'_>,
    indices: &BrowIndices,
    color: HexColor,
    scale: f64,
    seed: u64,
) -> Vec<ColoredPath> {
    let upper = face.points(indices.upper);
    let lower = face.points(indices.lower);
    let n = upper.len().min(lower.len());
    if n < 2 {
        return Vec::new();
    }
    let spine: Vec<Point> = (0..n).map(|i| upper[i].midpoint(lower[i])).collect();
    let heights: Vec<f64> = (0..n).map(|i| upper[i].distance(lower[i])).collect();
    let tangents = compute_tangents(&spine);
    let mut rng = SeededRng::new(seed, indices.upper[0] as u64);

    (0..brow::HAIRS)
        .map(|_| {
            let u = rng.next_unit().sqrt();
            let pos = u * (n - 1) as f64;
            let i = (pos.floor() as usize).min(n - 2);
            let f = pos - i as f64;

            let base = spine[i].lerp(spine[i + 1], f);
            let height = lerp(heights[i], heights[i + 1], f);
            let tangent = normalize_or_zero(tangents[i].lerp(tangents[i + 1], f));
            let mut up = Vec2::new(tangent.y, -tangent.x);
            if up.y > 0.0 {
                up = -up;
            }

            let lean = lerp(brow::LEAN.0, brow::LEAN.1, u);
            let dir = rotate(
                normalize_or_zero(up * (1.0 - lean) + tangent * lean),
                rng.range(-brow::ANGLE_JITTER, brow::ANGLE_JITTER),
            );
            let center = base + up * (rng.range(-0.35, 0.35) * height);
            let half = 0.5 * height * rng.range(brow::HAIR_LENGTH.0, brow::HAIR_LENGTH.1);
            let width = lerp(brow::HAIR_WIDTH.0, brow::HAIR_WIDTH.1, u) * scale;
            let alpha = rng.range(
                f64::from(brow::HAIR_ALPHA.0),
                f64::from(brow::HAIR_ALPHA.1),
            ) as f32;

            ColoredPath {
                path: segment(center - dir * half, center + dir * half, width),
                color: color.with_alpha(alpha),
            }
        })
        .collect()
}

fn rotate(v: Vec2, angle: f64) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/brows.rs"]
mod tests;
