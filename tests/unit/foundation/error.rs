use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FacepaintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FacepaintError::decode("x")
            .to_string()
            .contains("decode error:")
    );
    assert!(
        FacepaintError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        FacepaintError::detection("x")
            .to_string()
            .contains("detection error:")
    );
    assert!(
        FacepaintError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FacepaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
