use super::*;
use crate::landmarks::model::LANDMARK_COUNT;

fn all_tables() -> Vec<&'static [usize]> {
    vec![
        FACE_OVAL,
        FOREHEAD_ARC,
        JAW_ARC,
        LIPS_UPPER_OUTER,
        LIPS_LOWER_OUTER,
        LIPS_UPPER_INNER,
        LIPS_LOWER_INNER,
        NOSE_BRIDGE,
        T_ZONE_FOREHEAD,
        RIGHT_EYE.upper_lid,
        RIGHT_EYE.lower_lid,
        RIGHT_EYE.crease,
        LEFT_EYE.upper_lid,
        LEFT_EYE.lower_lid,
        LEFT_EYE.crease,
        RIGHT_BROW.upper,
        RIGHT_BROW.lower,
        LEFT_BROW.upper,
        LEFT_BROW.lower,
    ]
}

#[test]
fn every_index_is_inside_the_mesh() {
    for table in all_tables() {
        assert!(table.iter().all(|&i| i < LANDMARK_COUNT));
    }
}

#[test]
fn lid_chains_start_and_end_at_the_corners() {
    for eye in [RIGHT_EYE, LEFT_EYE] {
        assert_eq!(eye.upper_lid.first(), Some(&eye.inner_corner));
        assert_eq!(eye.upper_lid.last(), Some(&eye.outer_corner));
        assert_eq!(eye.lower_lid.first(), Some(&eye.inner_corner));
        assert_eq!(eye.lower_lid.last(), Some(&eye.outer_corner));
    }
}

#[test]
fn lip_chains_share_corners() {
    assert_eq!(LIPS_UPPER_OUTER.first(), LIPS_LOWER_OUTER.first());
    assert_eq!(LIPS_UPPER_OUTER.last(), LIPS_LOWER_OUTER.last());
    assert_eq!(LIPS_UPPER_INNER.first(), LIPS_LOWER_INNER.first());
    assert_eq!(LIPS_UPPER_INNER.last(), LIPS_LOWER_INNER.last());
}

#[test]
fn eye_contour_has_no_duplicate_corners() {
    let c = RIGHT_EYE.contour();
    let lids = RIGHT_EYE.upper_lid.len() + RIGHT_EYE.lower_lid.len();
    assert_eq!(c.len(), lids - 2);
    let mut sorted = c.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), c.len());
}

#[test]
fn feature_lookup_matches_tables() {
    assert_eq!(Feature::FaceOval.indices(), FACE_OVAL);
    assert_eq!(Feature::LeftUpperLid.indices(), LEFT_EYE.upper_lid);
    assert_eq!(Feature::RightBrow.indices(), RIGHT_BROW.upper);
}
