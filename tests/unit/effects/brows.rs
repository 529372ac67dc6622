use super::*;
use crate::effects::tests::{SKIN, face, pixel, skin_surface};
use crate::landmarks::synthetic::frontal_face;

const BROWN: HexColor = HexColor::rgb(0x4A, 0x37, 0x28);

#[test]
fn same_seed_is_reproducible() {
    let set = frontal_face();
    let geo = face(&set, 300);
    let mut a = skin_surface(300);
    let mut b = skin_surface(300);
    render_brows(&mut a, &geo, BROWN, 0.6, 42);
    render_brows(&mut b, &geo, BROWN, 0.6, 42);
    assert_eq!(a.data(), b.data());
}

#[test]
fn different_seeds_move_the_hairs() {
    let set = frontal_face();
    let geo = face(&set, 300);
    let a = brow_hairs(&geo, &RIGHT_BROW, BROWN, 1.0, 1);
    let b = brow_hairs(&geo, &RIGHT_BROW, BROWN, 1.0, 2);
    assert_eq!(a.len(), brow::HAIRS);
    assert!(
        a.iter()
            .zip(&b)
            .any(|(x, y)| x.path.elements() != y.path.elements())
    );
}

#[test]
fn hairs_stay_near_the_brow() {
    use kurbo::Shape;

    let set = frontal_face();
    let geo = face(&set, 400);
    let brow_box = crate::geometry::bounds::bounding_box(&geo.points(&LEFT_BROW.outline()))
        .inflate(8.0, 8.0);
    for hair in brow_hairs(&geo, &LEFT_BROW, BROWN, 1.0, brow::DEFAULT_SEED) {
        let bb = hair.path.bounding_box();
        assert!(brow_box.contains(Point::new(bb.x0, bb.y0)));
        assert!(brow_box.contains(Point::new(bb.x1, bb.y1)));
        let (lo, hi) = brow::HAIR_ALPHA;
        assert!(hair.color.a >= lo && hair.color.a <= hi);
    }
}

#[test]
fn render_tints_the_brow_region_only() {
    let set = frontal_face();
    let geo = face(&set, 400);
    let mut s = skin_surface(400);
    render_brows(&mut s, &geo, BROWN, 0.6, brow::DEFAULT_SEED);
    // Mid-brow on the spine, inside the fill.
    assert!(pixel(&s, 150, 130)[0] < SKIN[0]);
    assert_eq!(pixel(&s, 200, 130), SKIN);
    assert_eq!(pixel(&s, 150, 170), SKIN);
}
