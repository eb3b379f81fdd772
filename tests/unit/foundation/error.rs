use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ShotframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ShotframeError::decode("x").to_string().contains("decode error:"));
    assert!(ShotframeError::encode("x").to_string().contains("encode error:"));
    assert!(
        ShotframeError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ShotframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn io_errors_convert() {
    let err: ShotframeError = std::io::Error::other("disk full").into();
    assert!(matches!(err, ShotframeError::Io(_)));
    assert!(err.to_string().contains("disk full"));
}
