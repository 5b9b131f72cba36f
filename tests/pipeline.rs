mod common;

use box_detector::hough::EraseOptions;
use box_detector::image::{BLACK, WHITE};
use box_detector::{BoxDetector, BoxParams};
use common::synthetic_image::{box_outline, uniform};

#[test]
fn all_white_image_produces_empty_output() {
    let image = uniform(120, 90, WHITE);
    let detector = BoxDetector::new(BoxParams::default());
    let result = detector.process(&image);

    assert_eq!(result.report.edge_count, 0);
    assert!(result.report.lines.is_empty());
    assert!(result.report.thin_converged);
    assert!(result.canvas.data.iter().all(|&v| v == WHITE));
}

#[test]
fn box_outline_yields_horizontal_and_vertical_lines() {
    let image = box_outline(200, 150, 40, 30, 160, 120);

    let mut params = BoxParams::default();
    params.hough.threshold = 60;
    let detector = BoxDetector::new(params);
    let result = detector.process(&image);

    assert!(result.report.edge_count > 0, "outline must produce edges");
    assert!(result.report.thin_converged);
    assert!(
        result.report.lines.len() >= 4,
        "expected at least the four box sides, got {}",
        result.report.lines.len()
    );

    let has_horizontal = result
        .report
        .lines
        .iter()
        .any(|l| (88..=92).contains(&l.theta_deg));
    let has_vertical = result
        .report
        .lines
        .iter()
        .any(|l| l.theta_deg <= 2 || l.theta_deg >= 177);
    assert!(has_horizontal, "missing near-horizontal line");
    assert!(has_vertical, "missing near-vertical line");

    assert_eq!(result.canvas.w, image.w);
    assert_eq!(result.canvas.h, image.h);
    assert!(result.canvas.data.iter().any(|&v| v == BLACK));
}

#[test]
fn pipeline_output_is_deterministic() {
    let image = box_outline(160, 160, 30, 30, 130, 130);
    let mut params = BoxParams::default();
    params.hough.threshold = 60;
    let detector = BoxDetector::new(params);

    let first = detector.process(&image);
    let second = detector.process(&image);

    assert_eq!(first.canvas, second.canvas);
    assert_eq!(first.report.edge_count, second.report.edge_count);
    assert_eq!(first.report.lines.len(), second.report.lines.len());
    assert_eq!(first.report.thin_iterations, second.report.thin_iterations);
}

#[test]
fn local_filter_keeps_strongly_supported_lines() {
    let image = box_outline(200, 150, 40, 30, 160, 120);

    let mut params = BoxParams::default();
    params.hough.threshold = 60;
    params.local_filter = Some(EraseOptions {
        window: 100,
        min_votes: 10,
    });
    let detector = BoxDetector::new(params);
    let result = detector.process(&image);

    let has_horizontal = result
        .report
        .lines
        .iter()
        .any(|l| (88..=92).contains(&l.theta_deg));
    assert!(has_horizontal, "box sides must survive the direction filter");
}

#[test]
fn disabled_thinning_skips_the_stage() {
    let image = box_outline(120, 120, 20, 20, 100, 100);
    let params = BoxParams {
        enable_thinning: false,
        ..Default::default()
    };
    let detector = BoxDetector::new(params);
    let result = detector.process(&image);
    assert_eq!(result.report.thin_iterations, 0);
    assert!(result.report.thin_converged);
}
