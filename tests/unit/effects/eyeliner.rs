use kurbo::Shape;

use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::foundation::core::Rect;
use crate::landmarks::{features::RIGHT_EYE, synthetic::frontal_face};

const INK: HexColor = HexColor::rgb(0x1A, 0x1A, 0x1A);

fn right_eye_bounds(style: EyelinerStyle) -> (Rect, usize, Vec<Point>) {
    let set = frontal_face();
    let geo = face(&set, 400);
    let lid = geo.points(RIGHT_EYE.upper_lid);
    let reference = eye_center(&geo, &RIGHT_EYE);
    let passes = liner_passes(&lid, reference, 40.0, &style.geometry(), INK);
    let mut bounds: Option<Rect> = None;
    for shape in passes.iter().flatten() {
        let bb = shape.path.bounding_box();
        bounds = Some(bounds.map_or(bb, |b| b.union(bb)));
    }
    (bounds.unwrap(), passes.len(), lid)
}

#[test]
fn basic_band_sits_on_the_lid_without_a_wing() {
    let (bb, passes, lid) = right_eye_bounds(EyelinerStyle::Basic);
    assert_eq!(passes, 1);
    let lid_top = lid.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let outer_x = lid.last().unwrap().x;
    assert!(bb.y0 < lid_top);
    assert!(bb.y1 <= 168.0 + 1e-6);
    assert!(bb.x0 > outer_x - 1.5);
}

#[test]
fn winged_extends_past_the_outer_corner() {
    let (bb, _, lid) = right_eye_bounds(EyelinerStyle::Winged);
    let outer = *lid.last().unwrap();
    // Wing reach is 20% of the 40 px eye width, rising half that.
    assert!((bb.x0 - (outer.x - 8.0)).abs() < 1e-6);
    assert!(bb.y0 <= outer.y - 4.0 + 1e-6);
}

#[test]
fn cat_eye_wing_is_longer_than_winged() {
    let (winged, _, _) = right_eye_bounds(EyelinerStyle::Winged);
    let (cat, _, _) = right_eye_bounds(EyelinerStyle::CatEye);
    assert!(cat.x0 < winged.x0);
    assert!(cat.y0 < winged.y0);
}

#[test]
fn smokey_draws_two_passes() {
    let (_, passes, _) = right_eye_bounds(EyelinerStyle::Smokey);
    assert_eq!(passes, 2);
}

#[test]
fn render_touches_the_upper_lid_only() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_eyeliner(&mut s, &geo, INK, 0.9, EyelinerStyle::Classic);
    // Classic band is ~1 px deep at mid-lid, fully covering the row just above it.
    assert_ne!(pixel(&s, 152, 158), SKIN);
    assert_ne!(pixel(&s, 247, 158), SKIN);
    assert_eq!(pixel(&s, 152, 170), SKIN);
    assert_eq!(pixel(&s, 152, 140), SKIN);
}
