//! Compass-mask edge detection.
//!
//! For every window position fully inside the grid, four directional
//! responses are computed as absolute differences between opposing partition
//! sums of the window's outer ring (see [`mask`]). If any response exceeds
//! the threshold, the window's center pixel is marked as an edge (black) in
//! the output; otherwise it becomes background (white). The input grid is
//! only read, never written, so neighboring windows always observe the
//! original intensities.

pub mod mask;

pub use mask::{CompassMask, MaskSize};

use crate::image::{ImageView, PixelGrid, BLACK, WHITE};
use log::debug;
use std::time::Instant;

/// Parameters of the compass edge pass.
#[derive(Clone, Copy, Debug)]
pub struct EdgeDetectOptions {
    /// Side of the square window (3, 5 or 7).
    pub mask: MaskSize,
    /// Minimum directional response required to mark an edge.
    pub threshold: u32,
}

impl Default for EdgeDetectOptions {
    fn default() -> Self {
        Self {
            mask: MaskSize::Three,
            threshold: 300,
        }
    }
}

/// Output of [`detect_edges`].
pub struct EdgeDetectResult {
    /// Binary edge map of the input's dimensions (black = edge).
    pub image: PixelGrid,
    /// Number of pixels marked as edges.
    pub edge_count: usize,
    pub elapsed_ms: f64,
}

/// Runs the compass masks over `grid` and returns a fresh binary edge map.
///
/// Border pixels inside the window margin have no fully-contained window and
/// stay background.
pub fn detect_edges(grid: &PixelGrid, options: &EdgeDetectOptions) -> EdgeDetectResult {
    let start = Instant::now();
    let mask = options.mask.mask();
    let margin = options.mask.margin();
    let size = mask.size;

    let mut out = PixelGrid::new(grid.w, grid.h, WHITE);
    let mut edge_count = 0usize;

    if grid.w >= size && grid.h >= size {
        for cy in margin..grid.h - margin {
            for cx in margin..grid.w - margin {
                let x0 = cx - margin;
                let y0 = cy - margin;
                let is_edge = mask.pairs.iter().any(|(a, b)| {
                    let diff = partition_sum(grid, x0, y0, size, a)
                        - partition_sum(grid, x0, y0, size, b);
                    diff.unsigned_abs() > options.threshold
                });
                if is_edge {
                    out.set(cx, cy, BLACK);
                    edge_count += 1;
                }
            }
        }
    }

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!(
        "compass edge pass ({size}×{size}, threshold {}) marked {edge_count} pixels",
        options.threshold
    );

    EdgeDetectResult {
        image: out,
        edge_count,
        elapsed_ms,
    }
}

#[inline]
fn partition_sum(grid: &PixelGrid, x0: usize, y0: usize, size: usize, indices: &[usize]) -> i32 {
    let mut sum = 0i32;
    for &k in indices {
        let wx = k % size;
        let wy = k / size;
        sum += i32::from(grid.row(y0 + wy)[x0 + wx]);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_white_input_yields_no_edges() {
        let grid = PixelGrid::new(17, 11, WHITE);
        for mask in [MaskSize::Three, MaskSize::Five, MaskSize::Seven] {
            let result = detect_edges(&grid, &EdgeDetectOptions { mask, threshold: 1 });
            assert_eq!(result.edge_count, 0);
            assert!(result.image.data.iter().all(|&v| v == WHITE));
        }
    }

    #[test]
    fn horizontal_step_is_marked() {
        // Top half black, bottom half white: the top/bottom partition sums
        // differ by 3*255 along the step.
        let mut grid = PixelGrid::new(9, 9, WHITE);
        for y in 0..4 {
            for x in 0..9 {
                grid.set(x, y, BLACK);
            }
        }
        let result = detect_edges(
            &grid,
            &EdgeDetectOptions {
                mask: MaskSize::Three,
                threshold: 400,
            },
        );
        assert!(result.edge_count > 0);
        assert_eq!(result.image.get(4, 4), BLACK);
        assert_eq!(result.image.get(4, 7), WHITE);
    }

    #[test]
    fn output_replaces_interior_and_borders() {
        let grid = PixelGrid::new(5, 5, 40);
        let result = detect_edges(&grid, &EdgeDetectOptions::default());
        // Uniform input: no responses anywhere, everything background.
        assert!(result.image.data.iter().all(|&v| v == WHITE));
    }
}
