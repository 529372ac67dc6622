use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::landmarks::synthetic::frontal_face;

#[test]
fn width_is_clamped_to_pixel_bounds() {
    assert_eq!(kajal_width(40.0), 2.0);
    assert!((kajal_width(100.0) - 3.0).abs() < 1e-9);
    assert_eq!(kajal_width(1000.0), 4.0);
    assert_eq!(kajal_width(0.0), 2.0);
}

#[test]
fn stroke_follows_the_lower_lash_line() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_kajal(&mut s, &geo, HexColor::rgb(0x1A, 0x1A, 0x1A), 0.8);

    let lash = pixel(&s, 152, 173);
    assert!(lash[0] < SKIN[0]);
    assert_ne!(pixel(&s, 247, 173), SKIN);
    assert_eq!(pixel(&s, 152, 180), SKIN);
    assert_eq!(pixel(&s, 152, 160), SKIN);
}
