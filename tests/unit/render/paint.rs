use super::*;
use crate::color::hex::HexColor;

fn stops() -> Vec<GradientStop> {
    let c = HexColor::rgb(200, 100, 50);
    vec![
        GradientStop::new(0.0, c.with_alpha(1.0)),
        GradientStop::new(1.0, c.with_alpha(0.0)),
    ]
}

#[test]
fn solid_is_constant() {
    let c = HexColor::rgb(1, 2, 3).with_alpha(0.5);
    assert_eq!(Paint::Solid(c).sample(Point::new(99.0, -4.0)), c);
}

#[test]
fn linear_pads_and_interpolates() {
    let p = Paint::Linear {
        start: Point::new(0.0, 100.0),
        end: Point::new(0.0, 0.0),
        stops: stops(),
    };
    assert!((p.sample(Point::new(5.0, 200.0)).a - 1.0).abs() < 1e-6);
    assert!((p.sample(Point::new(5.0, 50.0)).a - 0.5).abs() < 1e-6);
    assert!(p.sample(Point::new(5.0, -10.0)).a.abs() < 1e-6);
    assert_eq!(p.sample(Point::new(5.0, 50.0)).r, 200);
}

#[test]
fn radial_fades_with_distance() {
    let p = Paint::Radial {
        center: Point::new(10.0, 10.0),
        radius: 10.0,
        stops: stops(),
    };
    assert!((p.sample(Point::new(10.0, 10.0)).a - 1.0).abs() < 1e-6);
    assert!((p.sample(Point::new(15.0, 10.0)).a - 0.5).abs() < 1e-6);
    assert!(p.sample(Point::new(40.0, 10.0)).a.abs() < 1e-6);
}

#[test]
fn empty_stops_are_transparent() {
    assert_eq!(eval_stops(&[], 0.3).a, 0.0);
}

#[test]
fn interior_stop_is_hit_exactly() {
    let c = HexColor::rgb(0, 0, 0);
    let s = [
        GradientStop::new(0.0, c.with_alpha(1.0)),
        GradientStop::new(0.7, c.with_alpha(0.75)),
        GradientStop::new(1.0, c.with_alpha(0.0)),
    ];
    assert!((eval_stops(&s, 0.7).a - 0.75).abs() < 1e-6);
    assert!((eval_stops(&s, 0.85).a - 0.375).abs() < 1e-5);
}

#[test]
fn chain_interpolates_by_nearest_segment() {
    let c = HexColor::rgb(10, 20, 30);
    let p = Paint::Chain {
        points: vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ],
        colors: vec![c.with_alpha(0.0), c.with_alpha(1.0), c.with_alpha(0.0)],
    };
    assert!((p.sample(Point::new(10.0, 3.0)).a - 1.0).abs() < 1e-6);
    assert!((p.sample(Point::new(5.0, -2.0)).a - 0.5).abs() < 1e-6);
    assert!(p.sample(Point::new(-5.0, 0.0)).a.abs() < 1e-6);
}
