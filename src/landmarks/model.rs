use crate::foundation::core::Point;
use crate::foundation::error::{FacepaintError, FacepaintResult};
use serde::{Deserialize, Serialize};

/// Number of points in one detected face mesh.
pub const LANDMARK_COUNT: usize = 468;

/// One detected facial reference point in normalized image coordinates.
///
/// `x` and `y` are fractions of the image width/height; `z` is carried through but unused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position as a fraction of image width.
    pub x: f64,
    /// Vertical position as a fraction of image height.
    pub y: f64,
    /// Relative depth; not used by the compositor.
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Build a landmark with `z = 0`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// Exactly [`LANDMARK_COUNT`] landmarks for one face, indexed by the fixed mesh numbering.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Validate the point count and wrap the landmarks.
    pub fn new(points: Vec<Landmark>) -> FacepaintResult<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(FacepaintError::detection(format!(
                "expected {LANDMARK_COUNT} landmarks, got {}",
                points.len()
            )));
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(FacepaintError::detection("landmark coordinates must be finite"));
        }
        Ok(Self { points })
    }

    /// Wrap a full mesh whose length is fixed by its type.
    ///
    /// Callers guarantee finite coordinates; [`new`](Self::new) is the checked path.
    pub(crate) fn from_mesh(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self {
            points: points.to_vec(),
        }
    }

    /// Landmark at mesh index `index`.
    ///
    /// Indices come from the fixed feature tables, so an out-of-range index is a programming error.
    pub fn get(&self, index: usize) -> Landmark {
        self.points[index]
    }

    /// All landmarks in mesh order.
    pub fn as_slice(&self) -> &[Landmark] {
        &self.points
    }
}

impl<'de> Deserialize<'de> for LandmarkSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<Landmark>::deserialize(deserializer)?;
        Self::new(points).map_err(serde::de::Error::custom)
    }
}

/// A landmark set projected onto a concrete pixel grid.
///
/// Renderers work exclusively in pixel space through this view.
#[derive(Clone, Copy, Debug)]
pub struct FaceGeometry<'a> {
    landmarks: &'a LandmarkSet,
    width: f64,
    height: f64,
}

impl<'a> FaceGeometry<'a> {
    /// Project `landmarks` onto a `width` x `height` surface.
    pub fn new(landmarks: &'a LandmarkSet, width: u32, height: u32) -> Self {
        Self {
            landmarks,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Underlying landmarks.
    pub fn landmarks(&self) -> &'a LandmarkSet {
        self.landmarks
    }

    /// Pixel position of one landmark, clamped to the surface.
    pub fn point(&self, index: usize) -> Point {
        let lm = self.landmarks.get(index);
        Point::new(
            lm.x.clamp(0.0, 1.0) * self.width,
            lm.y.clamp(0.0, 1.0) * self.height,
        )
    }

    /// Pixel positions for an ordered index chain.
    pub fn points(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().map(|&i| self.point(i)).collect()
    }

    /// Pixel positions of every landmark.
    pub fn all_points(&self) -> Vec<Point> {
        (0..LANDMARK_COUNT).map(|i| self.point(i)).collect()
    }

    /// Distance between two landmarks in pixels.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.point(a).distance(self.point(b))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/model.rs"]
mod tests;
