#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod image;

// “Expert” modules – still public, but considered unstable internals.
pub mod angle;
pub mod edges;
pub mod hough;
pub mod thin;
pub mod tone;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{BoxDetector, BoxParams, BoxResult, ToneParams};
pub use crate::diagnostics::DetectionReport;

// The buffer type every stage exchanges.
pub use crate::image::{PixelGrid, BLACK, WHITE};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use box_detector::prelude::*;
///
/// let gray = PixelGrid::new(640, 480, WHITE);
/// let detector = BoxDetector::new(BoxParams::default());
/// let result = detector.process(&gray);
/// println!(
///     "edges={} lines={} latency_ms={:.3}",
///     result.report.edge_count,
///     result.report.lines.len(),
///     result.report.total_latency_ms
/// );
/// ```
pub mod prelude {
    pub use crate::image::{PixelGrid, BLACK, WHITE};
    pub use crate::{BoxDetector, BoxParams, BoxResult, DetectionReport};
}
