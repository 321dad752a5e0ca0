use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        DatapaintError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        DatapaintError::input("x")
            .to_string()
            .contains("input error:")
    );
    assert!(
        DatapaintError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        DatapaintError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DatapaintError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
