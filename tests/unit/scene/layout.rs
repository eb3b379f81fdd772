use super::*;

const LAYOUT: &str = r#"{
    "background": "background.jpeg",
    "output": "output/triple.png",
    "entries": [
        { "image": "screenshot1.png", "relative_width": 0.54, "relative_position": [0.34, 0.47], "z_order": 0 },
        { "image": "screenshot2.png", "relative_width": "wide", "relative_position": [0.5, 0.55] },
        { "image": "/abs/screenshot3.png", "relative_width": 0.54, "relative_position": [0.66, 0.63], "z_order": 2 },
        { "relative_width": 0.5 }
    ]
}"#;

#[test]
fn parses_entries_and_rejects_malformed_ones() {
    let layout = Layout::from_reader(LAYOUT.as_bytes(), Path::new("/shots")).unwrap();

    assert_eq!(layout.background.describe(), "/shots/background.jpeg");
    assert_eq!(layout.output, Some(PathBuf::from("/shots/output/triple.png")));

    assert_eq!(layout.entries.len(), 3);
    assert_eq!(
        layout.entries[0].image.as_ref().unwrap().describe(),
        "/shots/screenshot1.png"
    );
    assert_eq!(
        layout.entries[1].image.as_ref().unwrap().describe(),
        "/abs/screenshot3.png"
    );
    assert_eq!(layout.entries[1].z(), 2);
    // Decodes, but will be skipped at compose time for the missing image.
    assert!(layout.entries[2].image.is_none());

    assert_eq!(layout.rejected.len(), 1);
    assert_eq!(layout.rejected[0].index, 1);
    assert!(matches!(
        layout.rejected[0].reason,
        SkipReason::MalformedEntry(_)
    ));
}

#[test]
fn output_is_optional() {
    let layout =
        Layout::from_reader(r#"{ "background": "bg.png" }"#.as_bytes(), Path::new(".")).unwrap();
    assert!(layout.output.is_none());
    assert!(layout.entries.is_empty());
}

#[test]
fn missing_background_is_fatal() {
    let err = Layout::from_reader(r#"{ "entries": [] }"#.as_bytes(), Path::new(".")).unwrap_err();
    assert!(matches!(err, ShotframeError::Validation(_)));
}

#[test]
fn missing_file_is_fatal() {
    assert!(Layout::from_path("target/no/such/layout.json").is_err());
}

#[test]
fn file_indices_skip_rejected_positions() {
    let layout = Layout::from_reader(LAYOUT.as_bytes(), Path::new("/shots")).unwrap();
    assert_eq!(layout.file_indices(), vec![0, 2, 3]);
}
