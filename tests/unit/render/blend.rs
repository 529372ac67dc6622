use super::*;

fn px(c: [u8; 4]) -> Vec<u8> {
    c.to_vec()
}

#[test]
fn transparent_layer_leaves_surface_untouched() {
    for mode in [
        BlendMode::SourceOver,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::SoftLight,
    ] {
        let mut dst = px([200, 150, 100, 255]);
        composite_in_place(&mut dst, &px([0, 0, 0, 0]), 1.0, mode);
        assert_eq!(dst, px([200, 150, 100, 255]), "{mode:?}");
    }
}

#[test]
fn zero_opacity_is_identity() {
    let mut dst = px([10, 20, 30, 255]);
    composite_in_place(&mut dst, &px([255, 0, 0, 255]), 0.0, BlendMode::Multiply);
    assert_eq!(dst, px([10, 20, 30, 255]));
}

#[test]
fn source_over_opaque_replaces() {
    let mut dst = px([10, 20, 30, 255]);
    composite_in_place(&mut dst, &px([255, 0, 0, 255]), 1.0, BlendMode::SourceOver);
    assert_eq!(dst, px([255, 0, 0, 255]));
}

#[test]
fn multiply_darkens_opaque_backdrop() {
    let mut dst = px([200, 200, 200, 255]);
    composite_in_place(&mut dst, &px([128, 255, 0, 255]), 1.0, BlendMode::Multiply);
    assert_eq!(dst[3], 255);
    assert_eq!(dst[1], 200);
    assert_eq!(dst[2], 0);
    assert!((i32::from(dst[0]) - 100).abs() <= 1);
}

#[test]
fn screen_with_white_is_white() {
    let mut dst = px([40, 80, 120, 255]);
    composite_in_place(&mut dst, &px([255, 255, 255, 255]), 1.0, BlendMode::Screen);
    assert_eq!(dst, px([255, 255, 255, 255]));
}

#[test]
fn soft_light_with_mid_gray_is_identity() {
    let mut dst = px([40, 128, 220, 255]);
    composite_in_place(&mut dst, &px([128, 128, 128, 255]), 1.0, BlendMode::SoftLight);
    for (got, want) in dst.iter().zip([40u8, 128, 220, 255]) {
        assert!((i32::from(*got) - i32::from(want)).abs() <= 2);
    }
}

#[test]
fn half_opacity_multiply_lands_between() {
    let mut dst = px([200, 200, 200, 255]);
    composite_in_place(&mut dst, &px([0, 0, 0, 255]), 0.5, BlendMode::Multiply);
    assert!((i32::from(dst[0]) - 100).abs() <= 1);
}
