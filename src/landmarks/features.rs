//! Fixed landmark index tables for the 468-point face mesh.
//!
//! "Right" and "left" are the subject's sides: in an unmirrored frontal photo the right eye sits on
//! the image's left half. Every chain is ordered consistently so renderers can rely on direction:
//! eye and brow chains run inner (nose side) to outer, lip chains run from the image-left mouth
//! corner to the image-right one, and the face oval runs clockwise from the top of the forehead.

/// Face oval, clockwise from the forehead top (index 10).
pub const FACE_OVAL: &[usize] = &[
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
];

/// Upper edge of the face oval, image-left to image-right.
pub const FOREHEAD_ARC: &[usize] = &[162, 21, 54, 103, 67, 109, 10, 338, 297, 332, 284, 251, 389];

/// Lower edge of the face oval (jawline), image-left to image-right through the chin.
pub const JAW_ARC: &[usize] = &[
    234, 93, 132, 58, 172, 136, 150, 149, 176, 148, 152, 377, 400, 378, 379, 365, 397, 288, 361,
    323, 454,
];

/// Upper outer lip contour, corner to corner through the cupid's bow.
pub const LIPS_UPPER_OUTER: &[usize] = &[61, 185, 40, 39, 37, 0, 267, 269, 270, 409, 291];
/// Lower outer lip contour, corner to corner.
pub const LIPS_LOWER_OUTER: &[usize] = &[61, 146, 91, 181, 84, 17, 314, 405, 321, 375, 291];
/// Upper inner lip edge (top of the mouth opening).
pub const LIPS_UPPER_INNER: &[usize] = &[78, 191, 80, 81, 82, 13, 312, 311, 310, 415, 308];
/// Lower inner lip edge (bottom of the mouth opening).
pub const LIPS_LOWER_INNER: &[usize] = &[78, 95, 88, 178, 87, 14, 317, 402, 318, 324, 308];
/// Image-left mouth corner.
pub const MOUTH_CORNER_LEFT_IMAGE: usize = 61;
/// Image-right mouth corner.
pub const MOUTH_CORNER_RIGHT_IMAGE: usize = 291;

/// Nose tip.
pub const NOSE_TIP: usize = 1;
/// Nose bridge midline, top to bottom.
pub const NOSE_BRIDGE: &[usize] = &[168, 6, 197, 195, 5, 4];
/// Forehead part of the T-zone: forehead arc, then across both brow heads.
pub const T_ZONE_FOREHEAD: &[usize] = &[
    103, 67, 109, 10, 338, 297, 332, 334, 296, 336, 107, 66, 105,
];

/// Landmark indices describing one eye and its surroundings.
#[derive(Clone, Copy, Debug)]
pub struct EyeIndices {
    /// Upper lash line, inner corner to outer corner.
    pub upper_lid: &'static [usize],
    /// Lower lash line, inner corner to outer corner.
    pub lower_lid: &'static [usize],
    /// Lid crease, inner to outer.
    pub crease: &'static [usize],
    /// Inner canthus.
    pub inner_corner: usize,
    /// Outer canthus.
    pub outer_corner: usize,
    /// Apex of the under-eye brightening triangle.
    pub under_eye_apex: usize,
}

impl EyeIndices {
    /// Closed eyelid area: the upper lash line forward, then the crease back.
    pub fn eyelid_area(&self) -> Vec<usize> {
        let mut out = self.upper_lid.to_vec();
        out.extend(self.crease.iter().rev());
        out
    }

    /// Every contour point of the eye opening (both lash lines).
    pub fn contour(&self) -> Vec<usize> {
        let mut out = self.upper_lid.to_vec();
        let lower = self.lower_lid;
        if lower.len() > 2 {
            out.extend(lower[1..lower.len() - 1].iter().rev());
        }
        out
    }
}

/// Subject's right eye (image left).
pub const RIGHT_EYE: EyeIndices = EyeIndices {
    upper_lid: &[133, 173, 157, 158, 159, 160, 161, 246, 33],
    lower_lid: &[133, 155, 154, 153, 145, 144, 163, 7, 33],
    crease: &[189, 221, 222, 223, 224, 225, 113],
    inner_corner: 133,
    outer_corner: 33,
    under_eye_apex: 119,
};

/// Subject's left eye (image right).
pub const LEFT_EYE: EyeIndices = EyeIndices {
    upper_lid: &[362, 398, 384, 385, 386, 387, 388, 466, 263],
    lower_lid: &[362, 382, 381, 380, 374, 373, 390, 249, 263],
    crease: &[413, 441, 442, 443, 444, 445, 342],
    inner_corner: 362,
    outer_corner: 263,
    under_eye_apex: 348,
};

/// Landmark indices for one eyebrow.
#[derive(Clone, Copy, Debug)]
pub struct BrowIndices {
    /// Upper brow edge, head (inner) to tail (outer).
    pub upper: &'static [usize],
    /// Lower brow edge, head to tail.
    pub lower: &'static [usize],
}

impl BrowIndices {
    /// Closed brow outline: upper edge forward, lower edge back.
    pub fn outline(&self) -> Vec<usize> {
        let mut out = self.upper.to_vec();
        out.extend(self.lower.iter().rev());
        out
    }
}

/// Subject's right eyebrow.
pub const RIGHT_BROW: BrowIndices = BrowIndices {
    upper: &[107, 66, 105, 63, 70],
    lower: &[55, 65, 52, 53, 46],
};

/// Subject's left eyebrow.
pub const LEFT_BROW: BrowIndices = BrowIndices {
    upper: &[336, 296, 334, 293, 300],
    lower: &[285, 295, 282, 283, 276],
};

/// Cheek centers used for blush, (right, left).
pub const CHEEKS: [usize; 2] = [205, 425];
/// Cheekbone points used for bronzer, (right, left).
pub const CHEEKBONES: [usize; 2] = [50, 280];
/// Temple points used for bronzer, (right, left).
pub const TEMPLES: [usize; 2] = [54, 284];
/// Cheek hollows used for contour, (right, left).
pub const CHEEK_HOLLOWS: [usize; 2] = [187, 411];
/// Jaw-side points used for contour, (right, left).
pub const JAW_SIDES: [usize; 2] = [172, 397];
/// Widest face points, (image left, image right).
pub const FACE_SIDES: [usize; 2] = [234, 454];

/// Named facial features, for callers that want to look tables up by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// [`FACE_OVAL`].
    FaceOval,
    /// [`LIPS_UPPER_OUTER`].
    UpperLipOuter,
    /// [`LIPS_LOWER_OUTER`].
    LowerLipOuter,
    /// [`LIPS_UPPER_INNER`].
    UpperLipInner,
    /// [`LIPS_LOWER_INNER`].
    LowerLipInner,
    /// Right upper lash line.
    RightUpperLid,
    /// Right lower lash line.
    RightLowerLid,
    /// Left upper lash line.
    LeftUpperLid,
    /// Left lower lash line.
    LeftLowerLid,
    /// Right brow upper edge.
    RightBrow,
    /// Left brow upper edge.
    LeftBrow,
    /// [`NOSE_BRIDGE`].
    NoseBridge,
}

impl Feature {
    /// The fixed ordered index chain for this feature.
    pub fn indices(self) -> &'static [usize] {
        match self {
            Self::FaceOval => FACE_OVAL,
            Self::UpperLipOuter => LIPS_UPPER_OUTER,
            Self::LowerLipOuter => LIPS_LOWER_OUTER,
            Self::UpperLipInner => LIPS_UPPER_INNER,
            Self::LowerLipInner => LIPS_LOWER_INNER,
            Self::RightUpperLid => RIGHT_EYE.upper_lid,
            Self::RightLowerLid => RIGHT_EYE.lower_lid,
            Self::LeftUpperLid => LEFT_EYE.upper_lid,
            Self::LeftLowerLid => LEFT_EYE.lower_lid,
            Self::RightBrow => RIGHT_BROW.upper,
            Self::LeftBrow => LEFT_BROW.upper,
            Self::NoseBridge => NOSE_BRIDGE,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/landmarks/features.rs"]
mod tests;
