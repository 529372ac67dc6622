use kurbo::{Cap, Circle, Join, Shape, Stroke, StrokeOpts};

use crate::foundation::{
    core::{BezPath, Point},
    math::is_positive,
};

/// Flattening tolerance, in pixels, for strokes and circles.
pub const TOLERANCE: f64 = 0.1;

/// Closed polygon through `points`; empty when fewer than three points.
pub fn polygon(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if points.len() < 3 {
        return path;
    }
    path.move_to(points[0]);
    for &p in &points[1..] {
        path.line_to(p);
    }
    path.close_path();
    path
}

/// Closed curve using each point as a quadratic control, passing through edge midpoints.
pub fn smooth_closed(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let n = points.len();
    if n < 3 {
        return path;
    }
    path.move_to(points[n - 1].midpoint(points[0]));
    for i in 0..n {
        let ctrl = points[i];
        let next = points[(i + 1) % n];
        path.quad_to(ctrl, ctrl.midpoint(next));
    }
    path.close_path();
    path
}

/// Open curve from the first to the last point, smoothed through interior midpoints.
pub fn smooth_open(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    if rest.is_empty() {
        return path;
    }
    for i in 0..rest.len() - 1 {
        path.quad_to(rest[i], rest[i].midpoint(rest[i + 1]));
    }
    path.line_to(rest[rest.len() - 1]);
    path
}

/// Straight open polyline.
pub fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let Some((&first, rest)) = points.split_first() else {
        return path;
    };
    path.move_to(first);
    for &p in rest {
        path.line_to(p);
    }
    path
}

/// Fillable outline of `path` stroked at `width` with round caps and joins.
pub fn stroke(path: &BezPath, width: f64) -> BezPath {
    if !is_positive(width) || path.elements().is_empty() {
        return BezPath::new();
    }
    let style = Stroke::new(width)
        .with_caps(Cap::Round)
        .with_join(Join::Round);
    kurbo::stroke(path.iter(), &style, &StrokeOpts::default(), TOLERANCE)
}

/// Round-capped segment from `a` to `b`.
pub fn segment(a: Point, b: Point, width: f64) -> BezPath {
    stroke(&polyline(&[a, b]), width)
}

/// Filled disc.
pub fn circle(center: Point, radius: f64) -> BezPath {
    if !is_positive(radius) {
        return BezPath::new();
    }
    Circle::new(center, radius).to_path(TOLERANCE)
}

/// Band enclosed by an outer chain and an inner chain that share end points.
pub fn chain_band(outer: &[Point], inner: &[Point]) -> BezPath {
    let mut pts: Vec<Point> = outer.to_vec();
    pts.extend(inner.iter().rev().copied());
    polygon(&pts)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path.rs"]
mod tests;
