use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{FacepaintError, FacepaintResult};
use std::fmt;
use std::str::FromStr;

/// Opaque sRGB color written as `#RRGGBB`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

/// Muted rose used whenever a color string cannot be parsed.
pub const FALLBACK_TONE: HexColor = HexColor::rgb(0xB7, 0x6E, 0x79);

impl HexColor {
    /// Build from channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse exactly `#` followed by six hex digits; anything else is `None`.
    pub fn parse_strict(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        parse_digits(digits)
    }

    /// Parse six hex digits with an optional leading `#` and surrounding whitespace.
    pub fn parse_lenient(s: &str) -> Option<Self> {
        let s = s.trim();
        parse_digits(s.strip_prefix('#').unwrap_or(s))
    }

    /// Shift every channel by `round(2.55 * percent)`, clamped to `[0, 255]`.
    ///
    /// Negative percentages darken, positive ones lighten, zero is the identity.
    pub fn adjust_brightness(self, percent: f64) -> Self {
        let delta = (2.55 * percent).round();
        let shift = |c: u8| -> u8 { (f64::from(c) + delta).clamp(0.0, 255.0) as u8 };
        Self::rgb(shift(self.r), shift(self.g), shift(self.b))
    }

    /// Attach a straight alpha in `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha.clamp(0.0, 1.0),
        }
    }
}

fn parse_digits(digits: &str) -> Option<HexColor> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(HexColor::rgb(byte(0)?, byte(2)?, byte(4)?))
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = FacepaintError;

    fn from_str(s: &str) -> FacepaintResult<Self> {
        Self::parse_lenient(s).ok_or_else(|| {
            FacepaintError::validation(format!("hex color must be #RRGGBB, got \"{s}\""))
        })
    }
}

/// Straight-alpha color: 8-bit channels plus a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f32,
}

impl Rgba {
    /// White at `alpha`.
    pub fn white(alpha: f32) -> Self {
        HexColor::rgb(255, 255, 255).with_alpha(alpha)
    }

    /// Alpha quantized to 8 bits.
    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// Premultiplied 8-bit form.
    pub fn to_premul(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.alpha_u8())
    }

    /// Linear interpolation of all channels (straight alpha).
    pub fn lerp(self, other: Rgba, t: f32) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgba {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Parse a six-digit hex string into channels plus the caller's alpha.
///
/// Never fails: unparseable input yields [`FALLBACK_TONE`] at `alpha`.
pub fn hex_to_channel(hex: &str, alpha: f32) -> Rgba {
    HexColor::parse_lenient(hex)
        .unwrap_or(FALLBACK_TONE)
        .with_alpha(alpha)
}

/// String form of [`HexColor::adjust_brightness`]; unparseable input adjusts [`FALLBACK_TONE`].
pub fn adjust_brightness(hex: &str, percent: f64) -> String {
    HexColor::parse_lenient(hex)
        .unwrap_or(FALLBACK_TONE)
        .adjust_brightness(percent)
        .to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/color/hex.rs"]
mod tests;
