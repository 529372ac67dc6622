use super::*;
use serde_json::json;

#[test]
fn category_parse_is_case_insensitive_with_aliases() {
    assert_eq!(Category::parse("LIPSTICK"), Some(Category::Lipstick));
    assert_eq!(Category::parse("Lips"), Some(Category::Lipstick));
    assert_eq!(Category::parse("brow_pencil"), Some(Category::BrowPencil));
    assert_eq!(Category::parse("Brow Pencil"), Some(Category::BrowPencil));
    assert_eq!(Category::parse("eye-shadow"), Some(Category::Eyeshadow));
    assert_eq!(Category::parse(" kohl "), Some(Category::Kajal));
    assert_eq!(Category::parse("mascara"), None);
}

#[test]
fn canonical_tags_round_trip_through_parse() {
    for c in Category::ALL {
        assert_eq!(Category::parse(c.as_str()), Some(c));
    }
}

#[test]
fn product_json_is_camel_case_with_defaults() {
    let p: MakeupProduct = serde_json::from_value(json!({
        "applicationArea": "eyeliner",
        "attributes": { "style": "winged" },
        "reason": "suits almond eyes"
    }))
    .unwrap();
    assert_eq!(p.category(), Some(Category::Eyeliner));
    assert_eq!(p.attributes.style.as_deref(), Some("winged"));
    assert_eq!(p.color, None);

    let bare: MakeupProduct = serde_json::from_value(json!({"applicationArea": "blush"})).unwrap();
    assert_eq!(bare, MakeupProduct::new("blush"));
}

#[test]
fn override_defaults_to_enabled_full_intensity() {
    let o: EffectOverride = serde_json::from_value(json!({"category": "blush"})).unwrap();
    assert!(o.enabled);
    assert_eq!(o.intensity, 1.0);
}

#[test]
fn override_intensity_is_clamped() {
    let clamp = |v: f64| {
        let o = EffectOverride::new("x").with_intensity(v);
        o.clamped_intensity()
    };
    assert_eq!(clamp(3.0), 1.0);
    assert_eq!(clamp(-1.0), 0.0);
    assert_eq!(clamp(f64::NAN), 0.0);
    assert_eq!(clamp(0.25), 0.25);
}

#[test]
fn override_matching_ignores_case() {
    let o = EffectOverride::new("LipStick");
    assert!(o.matches("lipstick"));
    assert!(!o.matches("lips"));
}
