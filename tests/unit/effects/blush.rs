use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::landmarks::synthetic::frontal_face;

#[test]
fn both_cheeks_are_tinted_within_the_radius() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_blush(&mut s, &geo, HexColor::rgb(0xF4, 0x84, 0x8C), 0.4);

    assert_ne!(pixel(&s, 144, 248), SKIN);
    assert_ne!(pixel(&s, 256, 248), SKIN);
    assert_eq!(pixel(&s, 200, 248), SKIN);
    assert_eq!(pixel(&s, 144, 300), SKIN);
}

#[test]
fn cheeks_are_mirror_images() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_blush(&mut s, &geo, HexColor::rgb(0xF4, 0x84, 0x8C), 0.4);
    for dx in [0u32, 10, 20] {
        let l = pixel(&s, 144 - dx, 250);
        let r = pixel(&s, 255 + dx, 250);
        for c in 0..4 {
            assert!((i32::from(l[c]) - i32::from(r[c])).abs() <= 1);
        }
    }
}
