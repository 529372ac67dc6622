use crate::color::hex::Rgba;
use crate::foundation::core::Point;

/// Gradient stop in straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Color at that position.
    pub color: Rgba,
}

impl GradientStop {
    /// Stop at `offset` with `color`.
    pub fn new(offset: f32, color: Rgba) -> Self {
        Self { offset, color }
    }
}

/// Per-pixel color source for a masked layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    /// One color everywhere.
    Solid(Rgba),
    /// Gradient along `start -> end`, padded beyond both ends.
    Linear {
        /// Where `t = 0`.
        start: Point,
        /// Where `t = 1`.
        end: Point,
        /// Ascending stops.
        stops: Vec<GradientStop>,
    },
    /// Gradient by distance from `center`, reaching the last stop at `radius`.
    Radial {
        /// Where `t = 0`.
        center: Point,
        /// Distance at which `t = 1`.
        radius: f64,
        /// Ascending stops.
        stops: Vec<GradientStop>,
    },
    /// Color varying along a polyline: one color per vertex, sampled at the nearest chain point.
    Chain {
        /// Polyline vertices.
        points: Vec<Point>,
        /// One color per vertex.
        colors: Vec<Rgba>,
    },
}

impl Paint {
    /// Color at pixel-space position `p`.
    pub fn sample(&self, p: Point) -> Rgba {
        match self {
            Self::Solid(c) => *c,
            Self::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len2 = axis.hypot2();
                let t = if len2 > 0.0 {
                    (p - *start).dot(axis) / len2
                } else {
                    0.0
                };
                eval_stops(stops, t as f32)
            }
            Self::Radial {
                center,
                radius,
                stops,
            } => {
                let t = if *radius > 0.0 {
                    (p - *center).hypot() / radius
                } else {
                    1.0
                };
                eval_stops(stops, t as f32)
            }
            Self::Chain { points, colors } => sample_chain(points, colors, p),
        }
    }
}

fn sample_chain(points: &[Point], colors: &[Rgba], p: Point) -> Rgba {
    let n = points.len().min(colors.len());
    match n {
        0 => return Rgba::white(0.0),
        1 => return colors[0],
        _ => {}
    }
    let mut best = (f64::INFINITY, 0usize, 0.0f64);
    for i in 0..n - 1 {
        let (a, b) = (points[i], points[i + 1]);
        let ab = b - a;
        let len2 = ab.hypot2();
        let s = if len2 > 0.0 {
            ((p - a).dot(ab) / len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let d2 = (a + ab * s - p).hypot2();
        if d2 < best.0 {
            best = (d2, i, s);
        }
    }
    let (_, i, s) = best;
    colors[i].lerp(colors[i + 1], s as f32)
}

/// Piecewise-linear evaluation with pad extension; stops are assumed sorted by offset.
pub fn eval_stops(stops: &[GradientStop], t: f32) -> Rgba {
    let Some(first) = stops.first() else {
        return Rgba::white(0.0);
    };
    let t = t.clamp(0.0, 1.0);
    if t <= first.offset {
        return first.color;
    }
    for w in stops.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let k = if span > 0.0 { (t - a.offset) / span } else { 1.0 };
            return a.color.lerp(b.color, k);
        }
    }
    stops[stops.len() - 1].color
}

#[cfg(test)]
#[path = "../../tests/unit/render/paint.rs"]
mod tests;
