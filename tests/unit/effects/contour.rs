use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::landmarks::synthetic::frontal_face;

#[test]
fn contour_darkens_hollows_inside_the_face_only() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_contour(&mut s, &geo, HexColor::rgb(0x8B, 0x5E, 0x4A), 1.0);

    let hollow = pixel(&s, 132, 264);
    assert!(hollow[0] < SKIN[0] && hollow[1] < SKIN[1]);
    assert!(pixel(&s, 267, 264)[1] < SKIN[1]);
    assert_eq!(pixel(&s, 200, 200), SKIN);
    assert_eq!(pixel(&s, 5, 264), SKIN);
}

#[test]
fn bronzer_warms_cheekbones() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_bronzer(&mut s, &geo, HexColor::rgb(0xB0, 0x7A, 0x4F), 1.0);

    assert_ne!(pixel(&s, 136, 220), SKIN);
    assert_ne!(pixel(&s, 263, 220), SKIN);
    assert_eq!(pixel(&s, 200, 300), SKIN);
}
