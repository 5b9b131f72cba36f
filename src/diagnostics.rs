//! Structured diagnostics emitted by the detector pipeline.

use crate::hough::HoughLine;
use serde::Serialize;

/// Per-stage counters and timings for one pipeline run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub input_width: usize,
    pub input_height: usize,
    /// Pixels marked by the compass edge pass.
    pub edge_count: usize,
    /// Phase iterations spent in the thinning loop (0 if disabled).
    pub thin_iterations: usize,
    /// False only if thinning hit its iteration cap.
    pub thin_converged: bool,
    /// Pixels erased by the optional windowed direction filter.
    pub erased_count: usize,
    pub lines: Vec<HoughLine>,
    pub tone_ms: f64,
    pub edge_ms: f64,
    pub thin_ms: f64,
    pub hough_ms: f64,
    pub total_latency_ms: f64,
}

impl DetectionReport {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
