use box_detector::image::{PixelGrid, BLACK, WHITE};
use box_detector::{BoxDetector, BoxParams};

fn main() {
    env_logger::init();

    // Demo stub: draws a synthetic box outline and runs the detector
    let w = 320usize;
    let h = 240usize;
    let mut gray = PixelGrid::new(w, h, WHITE);
    for x in 60..260 {
        gray.set(x, 60, BLACK);
        gray.set(x, 180, BLACK);
    }
    for y in 60..180 {
        gray.set(60, y, BLACK);
        gray.set(260, y, BLACK);
    }

    let detector = BoxDetector::new(BoxParams::default());
    let result = detector.process(&gray);
    println!(
        "edges={} lines={} latency_ms={:.3}",
        result.report.edge_count,
        result.report.lines.len(),
        result.report.total_latency_ms
    );
}
