//! Global polar Hough accumulator with local-maximum peak extraction.
//!
//! Every black pixel votes for all 180 whole-degree angles; the radius is
//! measured from the grid center, `r = (x−cx)·cosθ + (y−cy)·sinθ`. Peaks at
//! or above the vote threshold survive only if no cell in a square
//! accumulator neighborhood holds a strictly greater count; the first such
//! neighbor found in scan order discards the candidate, which makes the
//! tie-break deterministic. Surviving peaks are extended to the grid borders
//! and rasterized onto a fresh white canvas.

use crate::angle::{TrigTable, DEG_STEPS};
use crate::hough::raster::draw_line;
use crate::image::{PixelGrid, BLACK, WHITE};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Parameters of the global line search.
#[derive(Clone, Copy, Debug)]
pub struct GlobalHoughOptions {
    /// Minimum accumulator votes for a peak candidate.
    pub threshold: u32,
    /// Half-side of the square peak-suppression neighborhood.
    pub nms_radius: usize,
}

impl Default for GlobalHoughOptions {
    fn default() -> Self {
        Self {
            threshold: 100,
            nms_radius: 4,
        }
    }
}

/// A detected line: polar cell plus the rasterized boundary segment.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoughLine {
    /// Angle bucket in whole degrees, 0..180.
    pub theta_deg: usize,
    /// Signed radius from the grid center in pixels.
    pub radius: i32,
    /// Accumulator votes for this cell.
    pub votes: u32,
    /// Segment start, may lie outside the grid.
    pub p0: (i32, i32),
    /// Segment end, may lie outside the grid.
    pub p1: (i32, i32),
}

/// Output of [`detect_lines`].
pub struct GlobalHoughResult {
    /// Fresh canvas holding only the rasterized lines.
    pub canvas: PixelGrid,
    pub lines: Vec<HoughLine>,
    pub elapsed_ms: f64,
}

/// Vote table over (θ, radius bucket) with a center-referenced radius offset.
struct PolarAccumulator {
    data: Vec<u32>,
    /// Largest absolute radius; buckets span [−bound, +bound].
    bound: i32,
    buckets: usize,
}

impl PolarAccumulator {
    /// The half-diagonal bounds |(x−cx)cosθ + (y−cy)sinθ| for every pixel,
    /// so bucket indices can never leave the table.
    fn new(w: usize, h: usize) -> Self {
        let half_diag = ((w as f64).powi(2) + (h as f64).powi(2)).sqrt() / 2.0;
        let bound = half_diag.ceil() as i32;
        let buckets = 2 * bound as usize + 1;
        Self {
            data: vec![0u32; DEG_STEPS * buckets],
            bound,
            buckets,
        }
    }

    #[inline]
    fn index(&self, theta: usize, bucket: usize) -> usize {
        theta * self.buckets + bucket
    }

    #[inline]
    fn vote(&mut self, theta: usize, radius: f64) {
        let bucket = (radius.round() as i32 + self.bound) as usize;
        let idx = self.index(theta, bucket);
        self.data[idx] += 1;
    }

    #[inline]
    fn votes(&self, theta: usize, bucket: usize) -> u32 {
        self.data[self.index(theta, bucket)]
    }
}

/// Runs the accumulator over `edges` and rasterizes surviving peaks.
pub fn detect_lines(edges: &PixelGrid, options: &GlobalHoughOptions) -> GlobalHoughResult {
    let start = Instant::now();
    let trig = TrigTable::degrees();
    let mut acc = PolarAccumulator::new(edges.w, edges.h);

    let cx = (edges.w / 2) as f64;
    let cy = (edges.h / 2) as f64;

    for y in 0..edges.h {
        for x in 0..edges.w {
            if edges.get(x, y) == BLACK {
                let dx = x as f64 - cx;
                let dy = y as f64 - cy;
                for theta in 0..DEG_STEPS {
                    acc.vote(theta, dx * trig.cos[theta] + dy * trig.sin[theta]);
                }
            }
        }
    }

    let mut lines = Vec::new();
    for theta in 0..DEG_STEPS {
        for bucket in 0..acc.buckets {
            let votes = acc.votes(theta, bucket);
            if votes < options.threshold {
                continue;
            }
            if !is_local_maximum(&acc, theta, bucket, votes, options.nms_radius) {
                continue;
            }

            let radius = bucket as i32 - acc.bound;
            let (p0, p1) = line_endpoints(edges.w, edges.h, theta, radius as f64, &trig);
            lines.push(HoughLine {
                theta_deg: theta,
                radius,
                votes,
                p0,
                p1,
            });
        }
    }

    let mut canvas = PixelGrid::new(edges.w, edges.h, WHITE);
    for line in &lines {
        draw_line(&mut canvas, line.p0.0, line.p0.1, line.p1.0, line.p1.1);
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "global hough found {} lines above threshold {}",
        lines.len(),
        options.threshold
    );

    GlobalHoughResult {
        canvas,
        lines,
        elapsed_ms,
    }
}

/// True if no neighborhood cell holds strictly more votes. The scan aborts at
/// the first greater neighbor, radius offsets outer and angle offsets inner.
fn is_local_maximum(
    acc: &PolarAccumulator,
    theta: usize,
    bucket: usize,
    votes: u32,
    radius: usize,
) -> bool {
    let radius = radius as isize;
    for db in -radius..=radius {
        for dt in -radius..=radius {
            if db == 0 && dt == 0 {
                continue;
            }
            let nb = bucket as isize + db;
            let nt = theta as isize + dt;
            if nb < 0 || nb >= acc.buckets as isize || nt < 0 || nt >= DEG_STEPS as isize {
                continue;
            }
            if acc.votes(nt as usize, nb as usize) > votes {
                return false;
            }
        }
    }
    true
}

/// Extends a polar cell to a segment spanning the grid.
///
/// Near-horizontal lines (45° ≤ θ ≤ 135°) are parametrized at x = 0 and
/// x = width; the rest at y = 0 and y = height.
fn line_endpoints(
    w: usize,
    h: usize,
    theta: usize,
    radius: f64,
    trig: &TrigTable,
) -> ((i32, i32), (i32, i32)) {
    let cx = (w / 2) as f64;
    let cy = (h / 2) as f64;
    let sin = trig.sin[theta];
    let cos = trig.cos[theta];

    if (45..=135).contains(&theta) {
        let x1 = 0.0;
        let y1 = (radius - (x1 - cx) * cos) / sin + cy;
        let x2 = w as f64;
        let y2 = (radius - (x2 - cx) * cos) / sin + cy;
        (
            (x1 as i32, y1.round() as i32),
            (x2 as i32, y2.round() as i32),
        )
    } else {
        let y1 = 0.0;
        let x1 = (radius - (y1 - cy) * sin) / cos + cx;
        let y2 = h as f64;
        let x2 = (radius - (y2 - cy) * sin) / cos + cx;
        (
            (x1.round() as i32, y1 as i32),
            (x2.round() as i32, y2 as i32),
        )
    }
}
