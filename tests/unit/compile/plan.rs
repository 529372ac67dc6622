use super::*;

fn products(json: serde_json::Value) -> Vec<MakeupProduct> {
    serde_json::from_value(json).unwrap()
}

fn overrides(json: serde_json::Value) -> Vec<EffectOverride> {
    serde_json::from_value(json).unwrap()
}

#[test]
fn empty_products_compile_to_empty_plan() {
    let plan = compile_plan(&[], &[], ApplicationOrder::Canonical);
    assert!(plan.is_empty());
    assert_eq!(plan.len(), 0);
}

#[test]
fn canonical_order_puts_foundation_first_and_lips_last() {
    let p = products(serde_json::json!([
        {"applicationArea": "lipstick"},
        {"applicationArea": "eyeliner"},
        {"applicationArea": "foundation"},
        {"applicationArea": "blush"}
    ]));
    let plan = compile_plan(&p, &[], ApplicationOrder::Canonical);
    assert_eq!(
        plan.categories(),
        vec![
            Category::Foundation,
            Category::Blush,
            Category::Eyeliner,
            Category::Lipstick
        ]
    );

    let listed = compile_plan(&p, &[], ApplicationOrder::AsListed);
    assert_eq!(
        listed.categories(),
        vec![
            Category::Lipstick,
            Category::Eyeliner,
            Category::Foundation,
            Category::Blush
        ]
    );
}

#[test]
fn canonical_sort_is_stable_within_a_stage() {
    let p = vec![
        MakeupProduct::new("blush").with_color("#111111"),
        MakeupProduct::new("foundation"),
        MakeupProduct::new("blush").with_color("#222222"),
    ];
    let plan = compile_plan(&p, &[], ApplicationOrder::Canonical);
    assert_eq!(plan.ops[1].color, HexColor::rgb(0x11, 0x11, 0x11));
    assert_eq!(plan.ops[2].color, HexColor::rgb(0x22, 0x22, 0x22));
}

#[test]
fn unknown_category_is_skipped() {
    let p = products(serde_json::json!([
        {"applicationArea": "nail-polish"},
        {"applicationArea": "kajal"}
    ]));
    let plan = compile_plan(&p, &[], ApplicationOrder::Canonical);
    assert_eq!(plan.categories(), vec![Category::Kajal]);
}

#[test]
fn disabled_override_suppresses_case_insensitively() {
    let p = vec![MakeupProduct::new("Lipstick"), MakeupProduct::new("blush")];
    let o = overrides(serde_json::json!([
        {"category": "LIPSTICK", "enabled": false}
    ]));
    let plan = compile_plan(&p, &o, ApplicationOrder::Canonical);
    assert_eq!(plan.categories(), vec![Category::Blush]);
}

#[test]
fn alias_override_matches_by_category() {
    let p = vec![MakeupProduct::new("lips")];
    let o = vec![EffectOverride::disabled("lipstick")];
    assert!(compile_plan(&p, &o, ApplicationOrder::Canonical).is_empty());
}

#[test]
fn opacity_is_base_times_clamped_intensity() {
    let p = vec![
        MakeupProduct::new("eyeliner"),
        MakeupProduct::new("blush"),
        MakeupProduct::new("kajal"),
    ];
    let o = vec![
        EffectOverride::new("eyeliner").with_intensity(0.5),
        EffectOverride::new("blush").with_intensity(7.0),
        EffectOverride::new("kajal").with_intensity(-1.0),
    ];
    let plan = compile_plan(&p, &o, ApplicationOrder::AsListed);
    assert!((plan.ops[0].opacity - 0.45).abs() < 1e-6);
    assert!((plan.ops[1].opacity - 0.4).abs() < 1e-6);
    assert_eq!(plan.ops[2].opacity, 0.0);
}

#[test]
fn no_override_uses_base_opacity_and_product_style() {
    let p = vec![MakeupProduct::new("eyeliner").with_style("cat-eye")];
    let plan = compile_plan(&p, &[], ApplicationOrder::Canonical);
    assert!((plan.ops[0].opacity - 0.9).abs() < 1e-6);
    assert_eq!(plan.ops[0].style.as_deref(), Some("cat-eye"));
}

#[test]
fn override_style_and_color_win() {
    let p = vec![
        MakeupProduct::new("eyeliner")
            .with_style("classic")
            .with_color("#000000"),
    ];
    let o = vec![
        EffectOverride::new("eyeliner")
            .with_style("winged")
            .with_color("#123456"),
    ];
    let plan = compile_plan(&p, &o, ApplicationOrder::Canonical);
    assert_eq!(plan.ops[0].style.as_deref(), Some("winged"));
    assert_eq!(plan.ops[0].color, HexColor::rgb(0x12, 0x34, 0x56));
}

#[test]
fn application_order_parse() {
    assert_eq!(
        ApplicationOrder::parse("As_Listed"),
        Some(ApplicationOrder::AsListed)
    );
    assert_eq!(
        ApplicationOrder::parse("canonical"),
        Some(ApplicationOrder::Canonical)
    );
    assert_eq!(ApplicationOrder::parse("random"), None);
}
