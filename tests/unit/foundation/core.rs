use super::*;

#[test]
fn premul_from_straight_rounds() {
    let c = Rgba8Premul::from_straight_rgba(255, 128, 0, 128);
    assert_eq!(c.a, 128);
    assert_eq!(c.r, 128);
    assert_eq!(c.g, 64);
    assert_eq!(c.b, 0);
}

#[test]
fn scaled_by_zero_is_transparent() {
    let c = Rgba8Premul::from_straight_rgba(200, 100, 50, 255).scaled(0.0);
    assert_eq!([c.r, c.g, c.b, c.a], [0, 0, 0, 0]);
}

#[test]
fn crop_rect_contains_edges() {
    let r = CropRect {
        x: 10,
        y: 20,
        width: 30,
        height: 40,
    };
    assert!(r.contains(Point::new(10.0, 20.0)));
    assert!(r.contains(Point::new(40.0, 60.0)));
    assert!(!r.contains(Point::new(40.5, 30.0)));
    assert_eq!(r.right(), 40);
    assert_eq!(r.bottom(), 60);
}
