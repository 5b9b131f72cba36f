//! Tonal adjustments applied before edge detection.
//!
//! All operations mutate the grid in place and touch every pixel exactly once.
//! `tile_average` and `equalize_histogram` normalize exposure ahead of the
//! compass masks; brightness/contrast are straightforward per-pixel remaps.

use crate::image::{ImageViewMut, PixelGrid};

/// Shifts every pixel by `delta`, clamping to [0, 255].
pub fn adjust_brightness(grid: &mut PixelGrid, delta: i32) {
    for row in grid.rows_mut() {
        for px in row.iter_mut() {
            *px = (i32::from(*px) + delta).clamp(0, 255) as u8;
        }
    }
}

/// Rescales every pixel around the 127 midpoint by `factor`, clamping to [0, 255].
pub fn adjust_contrast(grid: &mut PixelGrid, factor: f32) {
    for row in grid.rows_mut() {
        for px in row.iter_mut() {
            let scaled = 127.0 + factor * (f32::from(*px) - 127.0);
            *px = scaled.clamp(0.0, 255.0) as u8;
        }
    }
}

/// Replaces each full `tile_size × tile_size` tile with its truncated mean.
///
/// Tiles are laid out from (0, 0); a tile that would extend past the grid
/// edge is skipped entirely, leaving the remainder strip untouched. This is
/// the documented policy for dimensions not divisible by `tile_size`.
pub fn tile_average(grid: &mut PixelGrid, tile_size: usize) {
    assert!(tile_size > 0, "tile size must be positive");
    let tiles_x = grid.w / tile_size;
    let tiles_y = grid.h / tile_size;
    let area = (tile_size * tile_size) as u64;

    for ty in 0..tiles_y {
        for tx in 0..tiles_x {
            let x0 = tx * tile_size;
            let y0 = ty * tile_size;

            let mut sum = 0u64;
            for y in y0..y0 + tile_size {
                for x in x0..x0 + tile_size {
                    sum += u64::from(grid.get(x, y));
                }
            }
            let mean = (sum / area) as u8;

            for y in y0..y0 + tile_size {
                for x in x0..x0 + tile_size {
                    grid.set(x, y, mean);
                }
            }
        }
    }
}

/// Histogram equalization with the legacy cumulative mapping.
///
/// Builds a 256-bucket histogram, locates the highest occupied intensity
/// `max`, and maps value `v` to `floor(cdf(v) * max / pixel_count)`. The
/// scale factor is the highest occupied level rather than the canonical 255,
/// and the division truncates; both properties are kept intact because they
/// are observable in the output.
pub fn equalize_histogram(grid: &mut PixelGrid) {
    let mut hist = [0u64; 256];
    for &px in &grid.data {
        hist[px as usize] += 1;
    }

    let max_level = hist
        .iter()
        .rposition(|&count| count > 0)
        .expect("grid holds at least one pixel") as u64;
    let pixel_count = grid.data.len() as u64;

    let mut mapping = [0u8; 256];
    let mut cumulative = 0u64;
    for (level, entry) in mapping.iter_mut().enumerate() {
        cumulative += hist[level];
        *entry = (cumulative * max_level / pixel_count) as u8;
    }

    for px in &mut grid.data {
        *px = mapping[*px as usize];
    }
}
