use crate::color::hex::{FALLBACK_TONE, HexColor};
use crate::makeup::config::default_color;
use crate::makeup::model::{EffectOverride, MakeupProduct};

/// Resolve the concrete color for one product.
///
/// Precedence: the override color, the product color, the product shade, then the per-category
/// default. Each candidate must be a strict `#RRGGBB` string; anything else falls through to the
/// next level. Products with an unrecognised category end at [`FALLBACK_TONE`].
pub fn resolve_color(product: &MakeupProduct, override_: Option<&EffectOverride>) -> HexColor {
    let candidates = [
        override_.and_then(|o| o.color.as_deref()),
        product.color.as_deref(),
        product.attributes.shade.as_deref(),
    ];
    candidates
        .into_iter()
        .flatten()
        .find_map(HexColor::parse_strict)
        .unwrap_or_else(|| product.category().map_or(FALLBACK_TONE, default_color))
}

#[cfg(test)]
#[path = "../../tests/unit/color/resolve.rs"]
mod tests;
