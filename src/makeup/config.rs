//! Every tunable rendering constant, in one table.
//!
//! Ratios are relative to a feature measured on the face (eye width is the inner-to-outer canthus
//! distance, face width is the distance between the widest oval points) so results scale with the
//! photo.

use crate::color::hex::HexColor;
use crate::makeup::model::Category;

/// Base layer opacity for a category, before the override intensity is applied.
pub fn base_opacity(category: Category) -> f32 {
    match category {
        Category::Lipstick | Category::LipLiner => 0.7,
        Category::Blush => 0.4,
        Category::Eyeliner => 0.9,
        Category::Foundation | Category::Primer => 0.2,
        Category::Bronzer | Category::Contour => 0.3,
        Category::Kajal => 0.8,
        Category::Eyeshadow => 0.5,
        Category::BrowPencil => 0.6,
    }
}

/// Color used when neither override, product color nor shade yields a valid hex string.
pub fn default_color(category: Category) -> HexColor {
    match category {
        Category::Lipstick | Category::LipLiner => HexColor::rgb(0xC4, 0x1E, 0x3A),
        Category::Blush => HexColor::rgb(0xF4, 0x84, 0x8C),
        Category::Eyeliner | Category::Kajal => HexColor::rgb(0x1A, 0x1A, 0x1A),
        Category::Foundation | Category::Primer => HexColor::rgb(0xE0, 0xB8, 0x9A),
        Category::Bronzer => HexColor::rgb(0xB0, 0x7A, 0x4F),
        Category::Contour => HexColor::rgb(0x8B, 0x5E, 0x4A),
        Category::Eyeshadow => HexColor::rgb(0x8E, 0x6C, 0x8A),
        Category::BrowPencil => HexColor::rgb(0x4A, 0x37, 0x28),
    }
}

/// Position of a category in the canonical application order (lower draws first).
pub fn stage(category: Category) -> usize {
    Category::ALL
        .iter()
        .position(|&c| c == category)
        .unwrap_or(Category::ALL.len())
}

/// Eyeliner look. Unrecognised tokens fall back to [`EyelinerStyle::Basic`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EyelinerStyle {
    /// Thin tight line.
    #[default]
    Basic,
    /// Slightly bolder tapered line.
    Classic,
    /// Line with a short flick.
    Winged,
    /// Bold line with a long, lifted wing.
    CatEye,
    /// Two soft overlapping passes.
    Smokey,
}

impl EyelinerStyle {
    /// Parse a style token; anything unknown is the baseline style.
    pub fn parse(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return Self::Basic;
        };
        match token
            .trim()
            .to_ascii_lowercase()
            .replace([' ', '_'], "-")
            .as_str()
        {
            "classic" => Self::Classic,
            "winged" | "wing" => Self::Winged,
            "cat-eye" | "cateye" | "cat" => Self::CatEye,
            "smokey" | "smoky" => Self::Smokey,
            _ => Self::Basic,
        }
    }

    /// Fixed geometry for this style.
    pub fn geometry(self) -> EyelinerGeometry {
        match self {
            Self::Basic => EyelinerGeometry {
                thickness: 0.020,
                inner_ratio: 0.6,
                wing: None,
                passes: SOLID_PASS,
            },
            Self::Classic => EyelinerGeometry {
                thickness: 0.042,
                inner_ratio: 0.35,
                wing: None,
                passes: SOLID_PASS,
            },
            Self::Winged => EyelinerGeometry {
                thickness: 0.038,
                inner_ratio: 0.35,
                wing: Some(WingGeometry {
                    length: 0.20,
                    height: 0.50,
                }),
                passes: SOLID_PASS,
            },
            Self::CatEye => EyelinerGeometry {
                thickness: 0.09,
                inner_ratio: 0.3,
                wing: Some(WingGeometry {
                    length: 0.38,
                    height: 0.70,
                }),
                passes: SOLID_PASS,
            },
            Self::Smokey => EyelinerGeometry {
                thickness: 0.07,
                inner_ratio: 0.5,
                wing: None,
                passes: SMOKEY_PASSES,
            },
        }
    }
}

/// One filled band of an eyeliner stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinerPass {
    /// Alpha multiplier for this pass.
    pub alpha: f32,
    /// Start of the band as a fraction of the full thickness (0 = lash line).
    pub band_start: f64,
    /// End of the band as a fraction of the full thickness.
    pub band_end: f64,
}

const SOLID_PASS: &[LinerPass] = &[LinerPass {
    alpha: 1.0,
    band_start: 0.0,
    band_end: 1.0,
}];

const SMOKEY_PASSES: &[LinerPass] = &[
    LinerPass {
        alpha: 0.5,
        band_start: 0.0,
        band_end: 1.0,
    },
    LinerPass {
        alpha: 0.25,
        band_start: 0.3,
        band_end: 0.7,
    },
];

/// Wing flick dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WingGeometry {
    /// Horizontal reach beyond the outer corner, relative to eye width.
    pub length: f64,
    /// Rise of the tip, relative to the wing length.
    pub height: f64,
}

/// Eyeliner shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EyelinerGeometry {
    /// Maximum band thickness (at the outer corner), relative to eye width.
    pub thickness: f64,
    /// Thickness at the inner corner relative to the maximum.
    pub inner_ratio: f64,
    /// Optional wing.
    pub wing: Option<WingGeometry>,
    /// Filled passes, drawn in order.
    pub passes: &'static [LinerPass],
}

impl EyelinerGeometry {
    /// Thickness profile at chain position `t` (0 = inner corner), as a fraction of the maximum.
    pub fn profile(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        self.inner_ratio + (1.0 - self.inner_ratio) * t
    }
}

/// Lip liner stroke constants, relative to mouth width (corner to corner).
pub mod lip_liner {
    /// Stroke width at the mouth corners.
    pub const MIN_WIDTH: f64 = 0.008;
    /// Additional width reached at the peak of the profile.
    pub const EXTRA_WIDTH: f64 = 0.014;
    /// Arc position where the profile peaks on the upper lip (cupid's bow center).
    pub const PEAK_AT: f64 = 0.4;
    /// Half-width of the plateau around the peak.
    pub const PLATEAU: f64 = 0.1;
    /// Stroke alpha at the corners and at the peak.
    pub const ALPHA_RANGE: (f32, f32) = (0.55, 1.0);
    /// Inner shadow alpha.
    pub const SHADOW_ALPHA: f32 = 0.18;
    /// Inner shadow offset toward the mouth center, in stroke widths.
    pub const SHADOW_OFFSET: f64 = 1.2;
    /// Corner dot radius relative to the corner stroke width.
    pub const CORNER_DOT_RADIUS: f64 = 1.1;
    /// Corner dot alpha.
    pub const CORNER_DOT_ALPHA: f32 = 0.5;
    /// Liner tone relative to the lip color, in brightness percent.
    pub const DARKEN_PERCENT: f64 = -20.0;
}

/// Blush radius relative to face width.
pub const BLUSH_RADIUS: f64 = 0.14;

/// Eyeshadow gradient: full opacity at the lash line, fading over a fixed screen distance.
pub mod eyeshadow {
    /// Gradient length in pixels, measured straight up from the lash line.
    pub const GRADIENT_PX: f64 = 30.0;
    /// Alpha at the far end of the gradient.
    pub const END_ALPHA: f32 = 0.3;
}

/// Kajal stroke width bounds in pixels, and the width relative to eye width.
pub mod kajal {
    /// Width relative to eye width before clamping.
    pub const WIDTH_RATIO: f64 = 0.03;
    /// Minimum width in pixels.
    pub const MIN_PX: f64 = 2.0;
    /// Maximum width in pixels.
    pub const MAX_PX: f64 = 4.0;
}

/// Foundation layers.
pub mod foundation {
    /// Alpha stops of the base radial gradient, `(position, alpha)`.
    pub const BASE_STOPS: [(f32, f32); 3] = [(0.0, 1.0), (0.7, 0.75), (1.0, 0.0)];
    /// White alpha of the under-eye brightening triangles.
    pub const UNDER_EYE_ALPHA: f32 = 0.16;
    /// White alpha of the T-zone brightening.
    pub const T_ZONE_ALPHA: f32 = 0.12;
    /// White alpha of the hairline and neck blends.
    pub const EDGE_ALPHA: f32 = 0.10;
    /// Nose bridge band width relative to eye width.
    pub const NOSE_BRIDGE_WIDTH: f64 = 0.35;
    /// Hairline extension height relative to face height.
    pub const HAIRLINE_EXTENSION: f64 = 0.08;
    /// Neck transition depth relative to face height.
    pub const NECK_EXTENSION: f64 = 0.10;
}

/// Contour and bronzer.
pub mod contour {
    /// Shading radius relative to face width.
    pub const RADIUS: f64 = 0.12;
    /// Contour tone relative to the product color.
    pub const DARKEN_PERCENT: f64 = -10.0;
    /// Bronzer radius relative to face width.
    pub const BRONZER_RADIUS: f64 = 0.16;
}

/// Brow pencil.
pub mod brow {
    /// Alpha multiplier of the base tint fill.
    pub const FILL_ALPHA: f32 = 0.25;
    /// Hair strokes per brow.
    pub const HAIRS: usize = 48;
    /// Hair length range relative to brow height.
    pub const HAIR_LENGTH: (f64, f64) = (0.45, 0.85);
    /// Hair stroke width range in pixels (head, tail), scaled by face size.
    pub const HAIR_WIDTH: (f64, f64) = (0.6, 1.2);
    /// Maximum angular jitter in radians.
    pub const ANGLE_JITTER: f64 = 0.35;
    /// How far hairs lean from perpendicular toward the tangent, head to tail.
    pub const LEAN: (f64, f64) = (0.25, 0.85);
    /// Hair alpha range.
    pub const HAIR_ALPHA: (f32, f32) = (0.35, 0.65);
    /// Contour stroke alpha.
    pub const CONTOUR_ALPHA: f32 = 0.22;
    /// Contour stroke width in pixels (before face scaling).
    pub const CONTOUR_WIDTH: f64 = 0.8;
    /// Face width at which pixel widths are used unscaled.
    pub const REFERENCE_FACE_WIDTH: f64 = 400.0;
    /// Default seed for the hair generator.
    pub const DEFAULT_SEED: u64 = 0x6272_6f77;
}

#[cfg(test)]
#[path = "../../tests/unit/makeup/config.rs"]
mod tests;
