//! Detector pipeline orchestrating end-to-end box-line detection.
//!
//! The [`BoxDetector`] exposes a simple API: feed a grayscale grid and get
//! back a canvas with the detected lines plus detailed diagnostics.
//! Internally it sequences tonal normalization, the compass edge pass,
//! contour thinning and the global Hough search; every stage consumes the
//! previous stage's grid and the stages never run concurrently.
//!
//! Typical usage:
//! ```no_run
//! use box_detector::{BoxDetector, BoxParams};
//! use box_detector::image::{PixelGrid, WHITE};
//!
//! let gray = PixelGrid::new(640, 480, WHITE);
//! let detector = BoxDetector::new(BoxParams::default());
//! let result = detector.process(&gray);
//! println!("lines: {}", result.report.lines.len());
//! ```

mod options;

pub use options::{BoxParams, ToneParams};

use crate::diagnostics::DetectionReport;
use crate::edges::detect_edges;
use crate::hough::{detect_lines, erase_sparse_directions};
use crate::image::PixelGrid;
use crate::thin::{thin, ThinOutcome};
use crate::tone;
use log::debug;
use std::time::Instant;

/// Box detector orchestrating tone mapping, edge detection, thinning and the
/// global line search.
pub struct BoxDetector {
    params: BoxParams,
}

/// Output of one pipeline run: the rasterized line canvas plus diagnostics.
pub struct BoxResult {
    /// Fresh canvas of the input's dimensions holding the detected lines.
    pub canvas: PixelGrid,
    pub report: DetectionReport,
}

impl BoxDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: BoxParams) -> Self {
        Self { params }
    }

    /// Run the full pipeline on `input` and capture diagnostics.
    pub fn process(&self, input: &PixelGrid) -> BoxResult {
        let total_start = Instant::now();

        let tone_start = Instant::now();
        let mut working = input.clone();
        self.apply_tone(&mut working);
        let tone_ms = tone_start.elapsed().as_secs_f64() * 1000.0;

        let edge_result = detect_edges(&working, &self.params.edge);
        let mut working = edge_result.image;
        debug!("edge stage marked {} pixels", edge_result.edge_count);

        let thin_start = Instant::now();
        let thin_outcome = if self.params.enable_thinning {
            thin(&mut working, &self.params.thin)
        } else {
            ThinOutcome {
                iterations: 0,
                converged: true,
            }
        };
        let thin_ms = thin_start.elapsed().as_secs_f64() * 1000.0;

        let erased_count = match &self.params.local_filter {
            Some(filter) => erase_sparse_directions(&mut working, filter),
            None => 0,
        };

        let hough_result = detect_lines(&working, &self.params.hough);

        let total_latency_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "pipeline finished: {} lines in {total_latency_ms:.3} ms",
            hough_result.lines.len()
        );

        BoxResult {
            canvas: hough_result.canvas,
            report: DetectionReport {
                input_width: input.w,
                input_height: input.h,
                edge_count: edge_result.edge_count,
                thin_iterations: thin_outcome.iterations,
                thin_converged: thin_outcome.converged,
                erased_count,
                lines: hough_result.lines,
                tone_ms,
                edge_ms: edge_result.elapsed_ms,
                thin_ms,
                hough_ms: hough_result.elapsed_ms,
                total_latency_ms,
            },
        }
    }

    fn apply_tone(&self, grid: &mut PixelGrid) {
        let params = &self.params.tone;
        if params.equalize {
            tone::equalize_histogram(grid);
        }
        if params.brightness != 0 {
            tone::adjust_brightness(grid, params.brightness);
        }
        if (params.contrast - 1.0).abs() > f32::EPSILON {
            tone::adjust_contrast(grid, params.contrast);
        }
        if let Some(tile_size) = params.tile_size {
            tone::tile_average(grid, tile_size);
        }
    }

    /// Update the edge threshold without rebuilding the detector.
    pub fn set_edge_threshold(&mut self, threshold: u32) {
        self.params.edge.threshold = threshold;
    }

    /// Update the Hough vote threshold without rebuilding the detector.
    pub fn set_hough_threshold(&mut self, threshold: u32) {
        self.params.hough.threshold = threshold;
    }
}
