use tracing::debug;

use crate::{
    color::{hex::HexColor, resolve::resolve_color},
    makeup::{
        config::{base_opacity, stage},
        model::{Category, EffectOverride, MakeupProduct},
    },
};

/// How the compiled plan is ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationOrder {
    /// Base products first, lips last; caller order is kept within one category.
    #[default]
    Canonical,
    /// Exactly the caller's product order.
    AsListed,
}

impl ApplicationOrder {
    /// Parse `canonical` / `as-listed` (case-insensitive, `_` accepted for `-`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "canonical" => Some(Self::Canonical),
            "as-listed" | "aslisted" | "listed" => Some(Self::AsListed),
            _ => None,
        }
    }
}

/// One resolved effect instruction.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectOp {
    /// Renderer to run.
    pub category: Category,
    /// Resolved color.
    pub color: HexColor,
    /// Layer opacity: category base opacity times override intensity.
    pub opacity: f32,
    /// Style token, from the override first, then the product.
    pub style: Option<String>,
}

/// Ordered instruction list folded over the surface.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EffectPlan {
    /// Instructions in execution order.
    pub ops: Vec<EffectOp>,
}

impl EffectPlan {
    /// Whether the plan paints nothing.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Instructions in execution order.
    pub fn iter(&self) -> std::slice::Iter<'_, EffectOp> {
        self.ops.iter()
    }

    /// Categories in execution order.
    pub fn categories(&self) -> Vec<Category> {
        self.ops.iter().map(|op| op.category).collect()
    }
}

/// Resolve products and overrides into an ordered plan.
///
/// Unknown categories and products suppressed by a disabled override produce no instruction.
#[tracing::instrument(
    skip(products, overrides),
    fields(products = products.len(), overrides = overrides.len())
)]
pub fn compile_plan(
    products: &[MakeupProduct],
    overrides: &[EffectOverride],
    order: ApplicationOrder,
) -> EffectPlan {
    let mut ops = Vec::with_capacity(products.len());
    for product in products {
        let Some(category) = product.category() else {
            debug!(area = %product.application_area, "skipping unknown category");
            continue;
        };

        let override_ = find_override(overrides, &product.application_area, category);
        if override_.is_some_and(|o| !o.enabled) {
            debug!(%category, "category disabled by override");
            continue;
        }

        let intensity = override_.map_or(1.0, EffectOverride::clamped_intensity) as f32;
        let style = override_
            .and_then(|o| o.style.clone())
            .or_else(|| product.attributes.style.clone());
        ops.push(EffectOp {
            category,
            color: resolve_color(product, override_),
            opacity: base_opacity(category) * intensity,
            style,
        });
    }

    if order == ApplicationOrder::Canonical {
        ops.sort_by_key(|op| stage(op.category));
    }
    EffectPlan { ops }
}

fn find_override<'a>(
    overrides: &'a [EffectOverride],
    area: &str,
    category: Category,
) -> Option<&'a EffectOverride> {
    overrides
        .iter()
        .find(|o| o.matches(area) || Category::parse(&o.category) == Some(category))
}

#[cfg(test)]
#[path = "../../tests/unit/compile/plan.rs"]
mod tests;
