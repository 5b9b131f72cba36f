//! Windowed direction voting over 16 quantized angles.
//!
//! Both variants scan the grid in fixed-size non-overlapping windows and
//! histogram the directions supported by each black pixel (buckets at 11.25°
//! steps from 0° to 168.75°). Windows that would extend past the grid edge
//! are skipped entirely, matching the tiling policy of the tone stage.
//!
//! - [`erase_sparse_directions`] probes two hand-coded offsets per direction
//!   and erases the voters of under-populated buckets in place.
//! - [`confirm_ray_lines`] walks longer angle-proportional ray templates and
//!   paints confirmed rays onto a fresh canvas, leaving the input untouched.

use crate::angle::deg_to_rad;
use crate::hough::raster::draw_line;
use crate::image::{PixelGrid, BLACK, WHITE};
use log::debug;

/// Number of quantized direction buckets.
pub const DIRECTIONS: usize = 16;
/// Angular step between adjacent buckets, in degrees.
pub const DIRECTION_STEP_DEG: f64 = 180.0 / DIRECTIONS as f64;

/// Hand-coded probe offsets approximating the 16 directions (y grows down).
/// Each entry holds a near and a far probe along the bucket's angle.
const PROBE_OFFSETS: [[(i32, i32); 2]; DIRECTIONS] = [
    [(3, 0), (6, 0)],   // 0.00°
    [(3, 1), (6, 1)],   // 11.25°
    [(3, 1), (6, 2)],   // 22.50°
    [(2, 2), (5, 3)],   // 33.75°
    [(2, 2), (4, 4)],   // 45.00°
    [(2, 2), (3, 5)],   // 56.25°
    [(1, 3), (2, 6)],   // 67.50°
    [(1, 3), (1, 6)],   // 78.75°
    [(0, 3), (0, 6)],   // 90.00°
    [(-1, 3), (-1, 6)], // 101.25°
    [(-1, 3), (-2, 6)], // 112.50°
    [(-2, 2), (-3, 5)], // 123.75°
    [(-2, 2), (-4, 4)], // 135.00°
    [(-2, 2), (-5, 3)], // 146.25°
    [(-3, 1), (-6, 2)], // 157.50°
    [(-3, 1), (-6, 1)], // 168.75°
];

/// Fixed 16-bucket vote histogram, reset once per scan window.
#[derive(Clone, Debug, Default)]
pub struct DirectionHistogram {
    bins: [u32; DIRECTIONS],
}

impl DirectionHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.bins = [0; DIRECTIONS];
    }

    #[inline]
    pub fn accumulate(&mut self, direction: usize) {
        self.bins[direction] += 1;
    }

    #[inline]
    pub fn count(&self, direction: usize) -> u32 {
        self.bins[direction]
    }

    pub fn max(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }

    pub fn mean(&self) -> f64 {
        let total: u64 = self.bins.iter().map(|&b| u64::from(b)).sum();
        total as f64 / DIRECTIONS as f64
    }

    /// Population standard deviation over the 16 buckets.
    pub fn std_dev(&self) -> f64 {
        let mean = self.mean();
        let variance = self
            .bins
            .iter()
            .map(|&b| {
                let diff = f64::from(b) - mean;
                diff * diff
            })
            .sum::<f64>()
            / DIRECTIONS as f64;
        variance.sqrt()
    }
}

#[inline]
fn is_black_at(grid: &PixelGrid, x: usize, y: usize, offset: (i32, i32)) -> bool {
    let px = x as i32 + offset.0;
    let py = y as i32 + offset.1;
    px >= 0
        && (px as usize) < grid.w
        && py >= 0
        && (py as usize) < grid.h
        && grid.get(px as usize, py as usize) == BLACK
}

/// Parameters of the probe-and-erase variant.
#[derive(Clone, Copy, Debug)]
pub struct EraseOptions {
    /// Side of the square scan window in pixels.
    pub window: usize,
    /// Buckets with fewer votes have their voters erased.
    pub min_votes: u32,
}

impl Default for EraseOptions {
    fn default() -> Self {
        Self {
            window: 100,
            min_votes: 20,
        }
    }
}

/// Erases pixels that only vote into sparsely populated direction buckets.
///
/// A black pixel votes for every direction whose two probe offsets are also
/// black. After a window is fully scanned, each bucket below `min_votes` has
/// all of its voters set to white in the input grid. Pixels that never voted
/// are left alone. Returns the number of erased pixels.
pub fn erase_sparse_directions(grid: &mut PixelGrid, options: &EraseOptions) -> usize {
    assert!(options.window > 0, "window size must be positive");
    let tiles_x = grid.w / options.window;
    let tiles_y = grid.h / options.window;

    let mut histogram = DirectionHistogram::new();
    let mut voters: [Vec<(usize, usize)>; DIRECTIONS] = Default::default();
    let mut erased = 0usize;

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            histogram.reset();
            for list in voters.iter_mut() {
                list.clear();
            }

            let x0 = tx * options.window;
            let y0 = ty * options.window;
            for y in y0..y0 + options.window {
                for x in x0..x0 + options.window {
                    if grid.get(x, y) != BLACK {
                        continue;
                    }
                    for (direction, probes) in PROBE_OFFSETS.iter().enumerate() {
                        if probes.iter().all(|&p| is_black_at(grid, x, y, p)) {
                            histogram.accumulate(direction);
                            voters[direction].push((x, y));
                        }
                    }
                }
            }

            for (direction, list) in voters.iter().enumerate() {
                if histogram.count(direction) >= options.min_votes {
                    continue;
                }
                for &(x, y) in list {
                    if grid.get(x, y) != WHITE {
                        grid.set(x, y, WHITE);
                        erased += 1;
                    }
                }
            }
        }
    }

    debug!("direction filter erased {erased} pixels");
    erased
}

/// Parameters of the ray-confirmation variant.
#[derive(Clone, Copy, Debug)]
pub struct RayConfirmOptions {
    /// Side of the square scan window in pixels.
    pub window: usize,
    /// Windows whose bucket spread stays at or below this are skipped.
    pub std_dev_threshold: f64,
    /// Dynamic per-window bucket threshold is (max votes − reduction).
    pub reduction: u32,
    /// Minimum black pixels along a ray to confirm it.
    pub presence_threshold: u32,
    /// Ray template length in steps.
    pub ray_len: usize,
    /// Draw each processed window's outline into the canvas.
    pub draw_window_bounds: bool,
}

impl Default for RayConfirmOptions {
    fn default() -> Self {
        Self {
            window: 100,
            std_dev_threshold: 5.0,
            reduction: 2,
            presence_threshold: 5,
            ray_len: 10,
            draw_window_bounds: false,
        }
    }
}

/// Builds the angle-proportional ray templates, one per direction bucket.
fn ray_templates(len: usize) -> Vec<Vec<(i32, i32)>> {
    (0..DIRECTIONS)
        .map(|direction| {
            let angle = deg_to_rad(direction as f64 * DIRECTION_STEP_DEG);
            let (sin, cos) = (angle.sin(), angle.cos());
            let mut template: Vec<(i32, i32)> = Vec::with_capacity(len);
            for t in 1..=len {
                let offset = (
                    (t as f64 * cos).round() as i32,
                    (t as f64 * sin).round() as i32,
                );
                if template.last() != Some(&offset) {
                    template.push(offset);
                }
            }
            template
        })
        .collect()
}

/// Counts black pixels along a ray template anchored at (x, y).
fn ray_presence(grid: &PixelGrid, x: usize, y: usize, template: &[(i32, i32)]) -> u32 {
    template
        .iter()
        .filter(|&&offset| is_black_at(grid, x, y, offset))
        .count() as u32
}

/// Confirms dominant-direction rays per window and paints them onto a fresh
/// white canvas; the input grid is never mutated.
///
/// A window is processed only if the bucket population spread (standard
/// deviation) indicates a dominant direction. Within such a window, a ray is
/// confirmed when its bucket beats the dynamic threshold and enough of its
/// template pixels are black.
pub fn confirm_ray_lines(grid: &PixelGrid, options: &RayConfirmOptions) -> PixelGrid {
    assert!(options.window > 0, "window size must be positive");
    assert!(options.ray_len > 0, "ray length must be positive");

    let templates = ray_templates(options.ray_len);
    let mut canvas = PixelGrid::new(grid.w, grid.h, WHITE);
    let mut histogram = DirectionHistogram::new();

    let tiles_x = grid.w / options.window;
    let tiles_y = grid.h / options.window;
    let mut processed = 0usize;

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * options.window;
            let y0 = ty * options.window;

            histogram.reset();
            for y in y0..y0 + options.window {
                for x in x0..x0 + options.window {
                    if grid.get(x, y) != BLACK {
                        continue;
                    }
                    for (direction, template) in templates.iter().enumerate() {
                        let presence = ray_presence(grid, x, y, template);
                        if presence as usize * 2 >= template.len() {
                            histogram.accumulate(direction);
                        }
                    }
                }
            }

            if histogram.std_dev() <= options.std_dev_threshold {
                continue;
            }
            processed += 1;

            let dynamic_threshold = histogram.max().saturating_sub(options.reduction);
            for y in y0..y0 + options.window {
                for x in x0..x0 + options.window {
                    if grid.get(x, y) != BLACK {
                        continue;
                    }
                    for (direction, template) in templates.iter().enumerate() {
                        if histogram.count(direction) <= dynamic_threshold {
                            continue;
                        }
                        if ray_presence(grid, x, y, template) <= options.presence_threshold {
                            continue;
                        }
                        canvas.set(x, y, BLACK);
                        for &(dx, dy) in template {
                            let px = x as i32 + dx;
                            let py = y as i32 + dy;
                            if px >= 0 && (px as usize) < grid.w && py >= 0 && (py as usize) < grid.h
                            {
                                canvas.set(px as usize, py as usize, BLACK);
                            }
                        }
                    }
                }
            }

            if options.draw_window_bounds {
                let (x0, y0) = (x0 as i32, y0 as i32);
                let side = options.window as i32;
                draw_line(&mut canvas, x0, y0, x0 + side, y0);
                draw_line(&mut canvas, x0, y0 + side - 1, x0 + side, y0 + side - 1);
                draw_line(&mut canvas, x0, y0, x0, y0 + side);
                draw_line(&mut canvas, x0 + side - 1, y0, x0 + side - 1, y0 + side);
            }
        }
    }

    debug!("ray confirmation processed {processed}/{} windows", tiles_x * tiles_y);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_statistics() {
        let mut hist = DirectionHistogram::new();
        for _ in 0..32 {
            hist.accumulate(0);
        }
        assert_eq!(hist.max(), 32);
        assert!((hist.mean() - 2.0).abs() < 1e-12);
        // variance = ((32-2)^2 + 15*(0-2)^2)/16 = 960/16 = 60
        assert!((hist.std_dev() - 60f64.sqrt()).abs() < 1e-9);
        hist.reset();
        assert_eq!(hist.max(), 0);
        assert_eq!(hist.std_dev(), 0.0);
    }

    #[test]
    fn probe_offsets_cover_half_turn_without_duplicates() {
        for pair in PROBE_OFFSETS.iter() {
            assert_ne!(pair[0], pair[1]);
        }
        for (i, a) in PROBE_OFFSETS.iter().enumerate() {
            for b in PROBE_OFFSETS.iter().skip(i + 1) {
                assert_ne!(a, b, "probe pairs must be distinct per direction");
            }
        }
    }

    #[test]
    fn erase_removes_sparse_voters_and_keeps_the_line() {
        let mut grid = PixelGrid::new(20, 20, WHITE);
        for x in 2..18 {
            grid.set(x, 10, BLACK);
        }
        // A short 45° run: only its first pixel can vote, so its bucket stays
        // far below the threshold and that voter is erased.
        grid.set(14, 2, BLACK);
        grid.set(16, 4, BLACK);
        grid.set(18, 6, BLACK);

        let erased = erase_sparse_directions(
            &mut grid,
            &EraseOptions {
                window: 20,
                min_votes: 5,
            },
        );

        assert_eq!(erased, 1);
        assert_eq!(grid.get(14, 2), WHITE);
        // Non-voters are left in place.
        assert_eq!(grid.get(16, 4), BLACK);
        assert_eq!(grid.get(18, 6), BLACK);
        for x in 2..18 {
            assert_eq!(grid.get(x, 10), BLACK, "line pixel ({x},10) must survive");
        }
    }

    #[test]
    fn ray_templates_grow_with_length() {
        let templates = ray_templates(10);
        assert_eq!(templates.len(), DIRECTIONS);
        assert_eq!(templates[0].last(), Some(&(10, 0)));
        assert_eq!(templates[8].last(), Some(&(0, 10)));
        for template in &templates {
            assert!(!template.is_empty());
        }
    }

    #[test]
    fn confirm_paints_dominant_ray_onto_fresh_canvas() {
        let mut grid = PixelGrid::new(40, 40, WHITE);
        for x in 0..40 {
            grid.set(x, 20, BLACK);
        }
        let input_copy = grid.clone();
        let canvas = confirm_ray_lines(
            &grid,
            &RayConfirmOptions {
                window: 40,
                ..Default::default()
            },
        );
        assert_eq!(grid, input_copy, "input must not be mutated");
        assert_eq!(canvas.get(20, 20), BLACK);
        assert_eq!(canvas.get(20, 10), WHITE);
    }

    #[test]
    fn quiet_windows_leave_the_canvas_white() {
        let mut grid = PixelGrid::new(40, 40, WHITE);
        grid.set(5, 5, BLACK);
        grid.set(30, 12, BLACK);
        grid.set(17, 33, BLACK);
        let canvas = confirm_ray_lines(
            &grid,
            &RayConfirmOptions {
                window: 40,
                ..Default::default()
            },
        );
        assert!(canvas.data.iter().all(|&v| v == WHITE));
    }
}
