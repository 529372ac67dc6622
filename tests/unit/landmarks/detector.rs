use super::*;
use crate::landmarks::synthetic::frontal_face;

fn tiny_image() -> DecodedImage {
    DecodedImage {
        width: 1,
        height: 1,
        rgba8_premul: vec![0, 0, 0, 255],
    }
}

#[test]
fn fixed_detector_counts_calls() {
    let mut d = FixedDetector::face(frontal_face());
    assert_eq!(d.calls(), 0);
    let img = tiny_image();
    assert!(matches!(d.detect(&img).unwrap(), Detection::Face(_)));
    assert!(matches!(d.detect(&img).unwrap(), Detection::Face(_)));
    assert_eq!(d.calls(), 2);
}

#[test]
fn from_option_none_is_no_face() {
    let mut d = FixedDetector::from_option(None);
    assert_eq!(d.detect(&tiny_image()).unwrap(), Detection::NoFace);
}

#[test]
fn boxed_detector_forwards() {
    let mut d: Box<dyn LandmarkDetector> = Box::new(NoFaceDetector);
    d.initialize().unwrap();
    assert_eq!(d.detect(&tiny_image()).unwrap(), Detection::NoFace);
    d.close();
}
