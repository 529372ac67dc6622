use crate::assets::codec::DecodedImage;
use crate::foundation::error::FacepaintResult;
use crate::landmarks::model::LandmarkSet;

/// Outcome of one detector invocation.
#[derive(Clone, Debug, PartialEq)]
pub enum Detection {
    /// Exactly one face was found.
    Face(LandmarkSet),
    /// No face in the image. This is a defined outcome, not an error.
    NoFace,
}

/// A face-mesh landmark detector.
///
/// The compositor owns one detector handle per pipeline and drives its lifecycle explicitly:
/// [`initialize`](LandmarkDetector::initialize) once before the first detection,
/// [`close`](LandmarkDetector::close) on teardown. Detection takes `&mut self`, so a stateful
/// model is never entered concurrently through one pipeline.
pub trait LandmarkDetector {
    /// Load models or warm up. Called at most once before the first [`detect`](Self::detect).
    fn initialize(&mut self) -> FacepaintResult<()> {
        Ok(())
    }

    /// Detect one face in `image`.
    fn detect(&mut self, image: &DecodedImage) -> FacepaintResult<Detection>;

    /// Release model resources.
    fn close(&mut self) {}
}

impl<D: LandmarkDetector + ?Sized> LandmarkDetector for Box<D> {
    fn initialize(&mut self) -> FacepaintResult<()> {
        (**self).initialize()
    }

    fn detect(&mut self, image: &DecodedImage) -> FacepaintResult<Detection> {
        (**self).detect(image)
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Detector returning a fixed, precomputed result.
///
/// Used when landmarks come from elsewhere (a sidecar JSON file, a remote service) and in tests.
#[derive(Clone, Debug)]
pub struct FixedDetector {
    detection: Detection,
    calls: u64,
}

impl FixedDetector {
    /// Always report `landmarks`.
    pub fn face(landmarks: LandmarkSet) -> Self {
        Self {
            detection: Detection::Face(landmarks),
            calls: 0,
        }
    }

    /// Report `landmarks` when present, otherwise no face.
    pub fn from_option(landmarks: Option<LandmarkSet>) -> Self {
        match landmarks {
            Some(l) => Self::face(l),
            None => Self::no_face(),
        }
    }

    /// Always report no face.
    pub fn no_face() -> Self {
        Self {
            detection: Detection::NoFace,
            calls: 0,
        }
    }

    /// Number of completed `detect` calls.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl LandmarkDetector for FixedDetector {
    fn detect(&mut self, _image: &DecodedImage) -> FacepaintResult<Detection> {
        self.calls += 1;
        Ok(self.detection.clone())
    }
}

/// Detector that never finds a face.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFaceDetector;

impl LandmarkDetector for NoFaceDetector {
    fn detect(&mut self, _image: &DecodedImage) -> FacepaintResult<Detection> {
        Ok(Detection::NoFace)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/detector.rs"]
mod tests;
