use image::Rgba;

use super::*;

fn solid(w: u32, h: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(w, h, Rgba(rgba))
}

#[test]
fn paint_entry_fills_content_and_frame() {
    let mut canvas = solid(200, 200, [0, 0, 255, 255]);
    let entry = ScreenshotEntry::new(solid(10, 10, [255, 0, 0, 255]), 0.5, (0.5, 0.5))
        .with_border_width(0.1)
        .with_corner_radius(0.2)
        .with_frame_color([0, 255, 0, 255]);
    let mut warnings = Vec::new();
    let g = paint_entry(&mut canvas, &entry, &mut warnings).unwrap();
    assert!(warnings.is_empty());

    assert_eq!(g.device, crate::PixelSize::new(100, 100));
    assert_eq!(g.border, 10);
    assert_eq!(g.frame_origin, crate::PixelPoint::new(50, 50));

    // Center shows content, straight border edge shows frame, corner shows background.
    let center = canvas.get_pixel(100, 100).0;
    assert!(center[0] > 250 && center[1] < 5 && center[2] < 5);
    assert_eq!(center[3], 255);
    assert_eq!(canvas.get_pixel(100, 52).0, [0, 255, 0, 255]);
    assert_eq!(canvas.get_pixel(50, 50).0, [0, 0, 255, 255]);
    assert_eq!(canvas.get_pixel(10, 10).0, [0, 0, 255, 255]);
}

#[test]
fn missing_screenshot_file_is_reported() {
    let mut canvas = solid(10, 10, [0, 0, 0, 255]);
    let entry = ScreenshotEntry::new("target/nope/missing.png", 0.5, (0.5, 0.5));
    let mut warnings = Vec::new();
    let err = paint_entry(&mut canvas, &entry, &mut warnings).unwrap_err();
    assert_eq!(
        err,
        SkipReason::ImageNotFound("target/nope/missing.png".to_string())
    );
}

#[test]
fn compose_onto_reports_in_paint_order() {
    let mut canvas = solid(50, 50, [0, 0, 0, 255]);
    let shot = solid(4, 4, [255, 255, 255, 255]);
    let entries = vec![
        ScreenshotEntry::new(shot.clone(), 0.2, (0.5, 0.5)).with_z_order(3),
        ScreenshotEntry::new(shot.clone(), -1.0, (0.5, 0.5)),
        ScreenshotEntry::new(shot.clone(), 0.2, (0.2, 0.2)).with_z_order(-1),
        ScreenshotEntry::new(shot, 0.2, (0.8, 0.8)),
    ];
    let reports = compose_onto(&mut canvas, &entries);
    let order: Vec<usize> = reports.iter().map(|r| r.index).collect();
    assert_eq!(order, vec![2, 1, 3, 0]);
    assert_eq!(
        reports[1].skip_reason(),
        Some(&SkipReason::NonPositiveWidth(-1.0))
    );
    assert_eq!(reports.iter().filter(|r| r.geometry().is_some()).count(), 3);
}

#[test]
fn report_accessors() {
    let report = ComposeReport {
        output: Output::InMemory(solid(1, 1, [0, 0, 0, 255])),
        entries: vec![EntryReport {
            index: 4,
            z_order: 0,
            outcome: EntryOutcome::Skipped(SkipReason::MissingImage),
            warnings: Vec::new(),
        }],
    };
    assert_eq!(report.placed(), 0);
    assert_eq!(report.skipped(), 1);
    assert!(!report.is_saved());
    assert!(report.entry(4).is_some());
    assert!(report.entry(0).is_none());
    assert!(report.image().is_some());
    assert_eq!(report.into_image().unwrap().dimensions(), (1, 1));
}
