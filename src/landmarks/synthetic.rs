//! A procedurally placed frontal face.
//!
//! Every index referenced by the feature tables gets an anatomically ordered position; all other
//! mesh points collapse onto the nose tip. Useful for previews and tests that need a deterministic
//! landmark set without running a detector.

use crate::foundation::math::lerp;
use crate::landmarks::features::{
    self, BrowIndices, CHEEK_HOLLOWS, CHEEKBONES, CHEEKS, EyeIndices, FACE_OVAL,
};
use crate::landmarks::model::{LANDMARK_COUNT, Landmark, LandmarkSet};
use std::f64::consts::PI;

/// Build the synthetic frontal face.
pub fn frontal_face() -> LandmarkSet {
    let mut pts = [Landmark::new(0.5, 0.6); LANDMARK_COUNT];

    for (k, &i) in FACE_OVAL.iter().enumerate() {
        let a = (-90.0 + (k as f64) * 360.0 / (FACE_OVAL.len() as f64)).to_radians();
        pts[i] = Landmark::new(0.5 + 0.30 * a.cos(), 0.5 + 0.40 * a.sin());
    }

    place_eye(&mut pts, &features::RIGHT_EYE, false);
    place_eye(&mut pts, &features::LEFT_EYE, true);
    place_brow(&mut pts, &features::RIGHT_BROW, false);
    place_brow(&mut pts, &features::LEFT_BROW, true);

    chain(&mut pts, features::LIPS_UPPER_OUTER, |t| {
        let bow = 0.008 * (-((t - 0.5) / 0.07).powi(2)).exp();
        (lerp(0.43, 0.57, t), 0.72 - 0.03 * (PI * t).sin() + bow)
    });
    chain(&mut pts, features::LIPS_LOWER_OUTER, |t| {
        (lerp(0.43, 0.57, t), 0.72 + 0.035 * (PI * t).sin())
    });
    chain(&mut pts, features::LIPS_UPPER_INNER, |t| {
        (lerp(0.44, 0.56, t), 0.72 - 0.004 * (PI * t).sin())
    });
    chain(&mut pts, features::LIPS_LOWER_INNER, |t| {
        (lerp(0.44, 0.56, t), 0.72 + 0.004 * (PI * t).sin())
    });

    chain(&mut pts, features::NOSE_BRIDGE, |t| (0.5, lerp(0.43, 0.585, t)));
    pts[features::NOSE_TIP] = Landmark::new(0.5, 0.6);

    mirrored(&mut pts, CHEEKS, 0.36, 0.62);
    mirrored(&mut pts, CHEEKBONES, 0.34, 0.55);
    mirrored(&mut pts, CHEEK_HOLLOWS, 0.33, 0.66);

    LandmarkSet::from_mesh(pts)
}

fn place_eye(pts: &mut [Landmark], eye: &EyeIndices, mirror: bool) {
    let mx = |x: f64| if mirror { 1.0 - x } else { x };
    chain(pts, eye.upper_lid, |t| {
        (mx(lerp(0.43, 0.33, t)), 0.42 - 0.022 * (PI * t).sin())
    });
    chain(pts, eye.lower_lid, |t| {
        (mx(lerp(0.43, 0.33, t)), 0.42 + 0.014 * (PI * t).sin())
    });
    chain(pts, eye.crease, |t| {
        (mx(lerp(0.425, 0.335, t)), 0.378 - 0.012 * (PI * t).sin())
    });
    pts[eye.under_eye_apex] = Landmark::new(mx(0.38), 0.48);
}

fn place_brow(pts: &mut [Landmark], brow: &BrowIndices, mirror: bool) {
    let mx = |x: f64| if mirror { 1.0 - x } else { x };
    chain(pts, brow.upper, |t| {
        (mx(lerp(0.44, 0.31, t)), 0.335 - 0.02 * (PI * t * 0.9).sin())
    });
    chain(pts, brow.lower, |t| {
        let top = 0.335 - 0.02 * (PI * t * 0.9).sin();
        (mx(lerp(0.44, 0.31, t)), top + 0.02 - 0.008 * t)
    });
}

fn mirrored(pts: &mut [Landmark], pair: [usize; 2], x: f64, y: f64) {
    pts[pair[0]] = Landmark::new(x, y);
    pts[pair[1]] = Landmark::new(1.0 - x, y);
}

fn chain(pts: &mut [Landmark], indices: &[usize], f: impl Fn(f64) -> (f64, f64)) {
    let last = (indices.len().max(2) - 1) as f64;
    for (k, &i) in indices.iter().enumerate() {
        let (x, y) = f(k as f64 / last);
        pts[i] = Landmark::new(x, y);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/synthetic.rs"]
mod tests;
