use crate::foundation::core::{Point, Vec2};

/// Arithmetic mean of `points`; the origin for an empty slice.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sx / n, sy / n)
}

/// Unit tangent at each point of an ordered chain.
///
/// Forward difference at the first point, backward difference at the last, central difference
/// elsewhere. Degenerate (zero-length) tangents are returned as zero vectors.
pub fn compute_tangents(points: &[Point]) -> Vec<Vec2> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let t = match (i, n) {
                (_, 0 | 1) => Vec2::ZERO,
                (0, _) => points[1] - points[0],
                (i, n) if i == n - 1 => points[n - 1] - points[n - 2],
                (i, _) => (points[i + 1] - points[i - 1]) * 0.5,
            };
            normalize_or_zero(t)
        })
        .collect()
}

/// Unit normals along an ordered chain, oriented away from `reference`.
///
/// Each tangent is rotated 90 degrees and flipped whenever it points toward `reference`, so the
/// dot product of every returned normal with `reference - point` is never positive. Where the chain
/// is degenerate the normal falls back to the direction from `reference` to the point.
pub fn compute_normals(points: &[Point], reference: Point) -> Vec<Vec2> {
    compute_tangents(points)
        .into_iter()
        .zip(points)
        .map(|(t, &p)| {
            let toward = reference - p;
            let mut n = Vec2::new(-t.y, t.x);
            if n.hypot2() == 0.0 {
                n = normalize_or_zero(-toward);
                if n.hypot2() == 0.0 {
                    return Vec2::new(0.0, -1.0);
                }
            }
            if n.dot(toward) > 0.0 { -n } else { n }
        })
        .collect()
}

/// Normals for eyeliner bands: straight up toward the brow, tilting outward near the outer corner.
///
/// `points` must run from the inner corner to the outer corner. Over the outer 30% of the chain a
/// lateral component pointing away from `reference` grows linearly up to `max_lateral`, which lets
/// the liner taper into the wing. A chain lying below `reference` (a lower lash line) gets
/// downward normals instead, so the band always sits on the lid side away from the eye.
pub fn compute_eyeliner_normals(points: &[Point], reference: Point) -> Vec<Vec2> {
    compute_eyeliner_normals_with(points, reference, OUTER_TAPER_START, OUTER_TAPER_LATERAL)
}

const OUTER_TAPER_START: f64 = 0.7;
const OUTER_TAPER_LATERAL: f64 = 0.35;

pub(crate) fn compute_eyeliner_normals_with(
    points: &[Point],
    reference: Point,
    taper_start: f64,
    max_lateral: f64,
) -> Vec<Vec2> {
    let n = points.len();
    let last = (n.max(2) - 1) as f64;
    // Orientation is decided once per chain; corner points level with the reference would
    // otherwise flip individually and fold the band.
    let vertical = if centroid(points).y > reference.y {
        1.0
    } else {
        -1.0
    };
    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            let t = i as f64 / last;
            let outward = if p.x >= reference.x { 1.0 } else { -1.0 };
            let lateral = if t > taper_start && taper_start < 1.0 {
                outward * max_lateral * (t - taper_start) / (1.0 - taper_start)
            } else {
                0.0
            };
            normalize_or_zero(Vec2::new(lateral, vertical))
        })
        .collect()
}

/// Cumulative arc-length fraction of each point along the chain, in `[0, 1]`.
pub fn arc_positions(points: &[Point]) -> Vec<f64> {
    let mut acc = Vec::with_capacity(points.len());
    let mut total = 0.0;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            total += p.distance(points[i - 1]);
        }
        acc.push(total);
    }
    if total <= 0.0 {
        let last = (points.len().max(2) - 1) as f64;
        return (0..points.len()).map(|i| i as f64 / last).collect();
    }
    acc.into_iter().map(|d| d / total).collect()
}

/// Offset every point along its normal by `distance(t)` where `t` is the point's chain position.
pub fn offset_chain(
    points: &[Point],
    normals: &[Vec2],
    distance: impl Fn(f64) -> f64,
) -> Vec<Point> {
    let last = (points.len().max(2) - 1) as f64;
    points
        .iter()
        .zip(normals)
        .enumerate()
        .map(|(i, (&p, &n))| p + n * distance(i as f64 / last))
        .collect()
}

pub(crate) fn normalize_or_zero(v: Vec2) -> Vec2 {
    let len = v.hypot();
    if len > 1e-12 && len.is_finite() {
        v / len
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/normals.rs"]
mod tests;
