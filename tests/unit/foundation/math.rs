use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(0, 200), 0);
    assert_eq!(mul_div255_u8(255, 128), 128);
}

#[test]
fn seeded_rng_is_reproducible() {
    let mut a = SeededRng::new(42, 7);
    let mut b = SeededRng::new(42, 7);
    for _ in 0..32 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn seeded_rng_streams_diverge() {
    let mut a = SeededRng::new(42, 0);
    let mut b = SeededRng::new(42, 1);
    let sa: Vec<u64> = (0..8).map(|_| a.next_u64()).collect();
    let sb: Vec<u64> = (0..8).map(|_| b.next_u64()).collect();
    assert_ne!(sa, sb);
}

#[test]
fn unit_draws_stay_in_range() {
    let mut r = SeededRng::new(1, 2);
    for _ in 0..1000 {
        let v = r.next_unit();
        assert!((0.0..1.0).contains(&v));
        let w = r.range(-0.5, 0.5);
        assert!((-0.5..0.5).contains(&w));
    }
}

#[test]
fn smoothstep_endpoints() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn nan_is_not_positive() {
    assert!(is_positive(0.5));
    assert!(!is_positive(0.0));
    assert!(!is_positive(-1.0));
    assert!(!is_positive(f64::NAN));
}
