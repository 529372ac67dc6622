use serde::{Deserialize, Serialize};
use std::fmt;

/// Cosmetic effect type targeted by a product or override.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Full-face base tint plus brightening zones.
    Foundation,
    /// Rendered like foundation.
    Primer,
    /// Shading under the cheekbones and along the jaw.
    Contour,
    /// Warm tint on temples and cheekbones.
    Bronzer,
    /// Cheek color.
    Blush,
    /// Lid color.
    Eyeshadow,
    /// Upper lash-line liner.
    Eyeliner,
    /// Lower lash-line stroke.
    Kajal,
    /// Brow fill and hair strokes.
    BrowPencil,
    /// Lip contour stroke only.
    LipLiner,
    /// Lip fill, optionally followed by a liner pass.
    Lipstick,
}

impl Category {
    /// Every category, in canonical application order.
    pub const ALL: [Category; 11] = [
        Category::Foundation,
        Category::Primer,
        Category::Contour,
        Category::Bronzer,
        Category::Blush,
        Category::Eyeshadow,
        Category::Eyeliner,
        Category::Kajal,
        Category::BrowPencil,
        Category::LipLiner,
        Category::Lipstick,
    ];

    /// Parse an application-area tag case-insensitively; unknown tags are `None`.
    pub fn parse(tag: &str) -> Option<Self> {
        let norm = tag.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        let c = match norm.as_str() {
            "lipstick" | "lips" | "lip" | "lip-color" | "lip-colour" => Self::Lipstick,
            "lip-liner" | "lipliner" => Self::LipLiner,
            "blush" | "blusher" => Self::Blush,
            "eyeliner" | "eye-liner" => Self::Eyeliner,
            "foundation" => Self::Foundation,
            "primer" => Self::Primer,
            "bronzer" => Self::Bronzer,
            "contour" => Self::Contour,
            "kajal" | "kohl" => Self::Kajal,
            "eyeshadow" | "eye-shadow" => Self::Eyeshadow,
            "brow-pencil" | "browpencil" | "eyebrow" | "brow" | "eyebrow-pencil" => {
                Self::BrowPencil
            }
            _ => return None,
        };
        Some(c)
    }

    /// Canonical tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "foundation",
            Self::Primer => "primer",
            Self::Contour => "contour",
            Self::Bronzer => "bronzer",
            Self::Blush => "blush",
            Self::Eyeshadow => "eyeshadow",
            Self::Eyeliner => "eyeliner",
            Self::Kajal => "kajal",
            Self::BrowPencil => "brow-pencil",
            Self::LipLiner => "lip-liner",
            Self::Lipstick => "lipstick",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional product attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAttributes {
    /// Shade, honoured when it is a `#RRGGBB` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<String>,
    /// Finish (matte, satin, gloss); informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish: Option<String>,
    /// Style token, used when no override supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One requested cosmetic product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeupProduct {
    /// Application-area tag, e.g. `"lipstick"`.
    pub application_area: String,
    /// Attribute bag.
    #[serde(default)]
    pub attributes: ProductAttributes,
    /// Explicit product color, honoured when it is a `#RRGGBB` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Recommendation text; passed through, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl MakeupProduct {
    /// Product for `application_area` with no color, attributes or reason.
    pub fn new(application_area: impl Into<String>) -> Self {
        Self {
            application_area: application_area.into(),
            attributes: ProductAttributes::default(),
            color: None,
            reason: None,
        }
    }

    /// Set the explicit color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the shade attribute.
    pub fn with_shade(mut self, shade: impl Into<String>) -> Self {
        self.attributes.shade = Some(shade.into());
        self
    }

    /// Set the style attribute.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.attributes.style = Some(style.into());
        self
    }

    /// Parsed category, if recognised.
    pub fn category(&self) -> Option<Category> {
        Category::parse(&self.application_area)
    }
}

/// Caller adjustment for one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectOverride {
    /// Category tag, matched case-insensitively against product areas.
    pub category: String,
    /// Disabled overrides suppress the category entirely.
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// Opacity multiplier; clamped into `[0, 1]` when used.
    #[serde(default = "intensity_default")]
    pub intensity: f64,
    /// Explicit color, honoured when it is a `#RRGGBB` string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Style token (eyeliner style, lip liner request).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

fn enabled_default() -> bool {
    true
}

fn intensity_default() -> f64 {
    1.0
}

impl EffectOverride {
    /// Enabled override at full intensity.
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            enabled: true,
            intensity: 1.0,
            color: None,
            style: None,
        }
    }

    /// Disabled override.
    pub fn disabled(category: impl Into<String>) -> Self {
        Self {
            enabled: false,
            ..Self::new(category)
        }
    }

    /// Set the intensity.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Set the explicit color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the style token.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Intensity clamped into `[0, 1]`; non-finite values count as 0.
    pub fn clamped_intensity(&self) -> f64 {
        if self.intensity.is_finite() {
            self.intensity.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Whether this override targets `area` (case-insensitive, whitespace-trimmed).
    pub fn matches(&self, area: &str) -> bool {
        self.category.trim().eq_ignore_ascii_case(area.trim())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/makeup/model.rs"]
mod tests;
