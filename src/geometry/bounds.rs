use crate::foundation::core::{CropRect, Point, Rect};
use crate::landmarks::model::{FaceGeometry, LandmarkSet};

/// Padding applied on each side of the face box, as a fraction of its own size.
pub const FACE_CROP_PADDING: f64 = 0.15;

/// Tight axis-aligned box around `points`; an empty rect at the origin for no points.
pub fn bounding_box(points: &[Point]) -> Rect {
    let Some(first) = points.first() else {
        return Rect::ZERO;
    };
    points
        .iter()
        .skip(1)
        .fold(Rect::from_points(*first, *first), |r, p| {
            Rect::new(r.x0.min(p.x), r.y0.min(p.y), r.x1.max(p.x), r.y1.max(p.y))
        })
}

/// Bounding box expanded by `padding_fraction` of its own width/height on each side, clamped to
/// the `[0, width] x [0, height]` image frame.
pub fn bounding_box_with_padding(
    points: &[Point],
    padding_fraction: f64,
    width: f64,
    height: f64,
) -> Rect {
    let b = bounding_box(points);
    let pad = padding_fraction.max(0.0);
    let px = b.width() * pad;
    let py = b.height() * pad;
    Rect::new(
        (b.x0 - px).clamp(0.0, width),
        (b.y0 - py).clamp(0.0, height),
        (b.x1 + px).clamp(0.0, width),
        (b.y1 + py).clamp(0.0, height),
    )
}

/// Padded face framing rectangle for display.
///
/// Covers every landmark's pixel position and never leaves the image. Does not influence
/// rendering.
pub fn face_crop(landmarks: &LandmarkSet, image_width: u32, image_height: u32) -> CropRect {
    let geo = FaceGeometry::new(landmarks, image_width, image_height);
    let r = bounding_box_with_padding(
        &geo.all_points(),
        FACE_CROP_PADDING,
        f64::from(image_width),
        f64::from(image_height),
    );
    let x0 = r.x0.floor().max(0.0) as u32;
    let y0 = r.y0.floor().max(0.0) as u32;
    let x1 = (r.x1.ceil() as u32).min(image_width).max(x0);
    let y1 = (r.y1.ceil() as u32).min(image_height).max(y0);
    CropRect {
        x: x0,
        y: y0,
        width: x1 - x0,
        height: y1 - y0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/bounds.rs"]
mod tests;
