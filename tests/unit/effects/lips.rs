use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::landmarks::synthetic::frontal_face;

const LIP: HexColor = HexColor::rgb(0xC4, 0x1E, 0x3A);

#[test]
fn fill_covers_lips_but_not_the_mouth_opening() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_lips(&mut s, &geo, LIP, 0.7);

    let upper = pixel(&s, 200, 282);
    let lower = pixel(&s, 200, 295);
    assert!(upper[1] < SKIN[1] && lower[1] < SKIN[1]);
    assert_eq!(pixel(&s, 200, 288), SKIN);
    assert_eq!(pixel(&s, 20, 20), SKIN);
    assert_eq!(pixel(&s, 200, 320), SKIN);
}

#[test]
fn liner_traces_the_outer_contour_only() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_lip_liner(&mut s, &geo, LIP, 0.7);

    assert_ne!(pixel(&s, 200, 279), SKIN);
    assert_eq!(pixel(&s, 200, 288), SKIN);
    assert_eq!(pixel(&s, 20, 20), SKIN);
}

#[test]
fn liner_profile_peaks_in_the_middle() {
    assert_eq!(liner_profile(0.0), 0.0);
    assert_eq!(liner_profile(1.0), 0.0);
    assert_eq!(liner_profile(0.5), 1.0);
    assert_eq!(liner_profile(0.3), 1.0);
    assert_eq!(liner_profile(0.7), 1.0);
    let mid = liner_profile(0.15);
    assert!(mid > 0.0 && mid < 1.0);
    assert!(liner_profile(0.1) < liner_profile(0.2));
}

#[test]
fn liner_tokens() {
    assert!(wants_liner(Some("liner")));
    assert!(wants_liner(Some("Matte, WITH_LINER")));
    assert!(wants_liner(Some("gloss + lined")));
    assert!(!wants_liner(Some("gloss")));
    assert!(!wants_liner(Some("linerless")));
    assert!(!wants_liner(None));
}
