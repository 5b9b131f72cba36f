//! Integer Bresenham line rasterization.

use crate::image::{PixelGrid, BLACK};

/// Draws the segment from (x1, y1) to (x2, y2) onto `canvas` in black.
///
/// The walk is half-open: the trailing endpoint on the major axis is not
/// plotted. Coordinates outside the canvas are skipped silently, so segments
/// may extend past the borders without faulting.
pub fn draw_line(canvas: &mut PixelGrid, x1: i32, y1: i32, x2: i32, y2: i32) {
    let steep = (y2 - y1).abs() > (x2 - x1).abs();

    let (mut x1, mut y1, mut x2, mut y2) = if steep {
        (y1, x1, y2, x2)
    } else {
        (x1, y1, x2, y2)
    };
    if x1 > x2 {
        std::mem::swap(&mut x1, &mut x2);
        std::mem::swap(&mut y1, &mut y2);
    }

    let dx = x2 - x1;
    let dy = (y2 - y1).abs();
    let ystep = if y1 < y2 { 1 } else { -1 };

    let mut error = dx / 2;
    let mut y = y1;

    for x in x1..x2 {
        let (px, py) = if steep { (y, x) } else { (x, y) };
        if px >= 0 && (px as usize) < canvas.w && py >= 0 && (py as usize) < canvas.h {
            canvas.set(px as usize, py as usize, BLACK);
        }
        error -= dy;
        if error < 0 {
            y += ystep;
            error += dx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::WHITE;

    fn black_pixels(canvas: &PixelGrid) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..canvas.h {
            for x in 0..canvas.w {
                if canvas.get(x, y) == BLACK {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn horizontal_walk_is_half_open() {
        let mut canvas = PixelGrid::new(8, 3, WHITE);
        draw_line(&mut canvas, 0, 0, 4, 0);
        assert_eq!(black_pixels(&canvas), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn swapped_endpoints_cover_the_same_pixels() {
        let mut forward = PixelGrid::new(12, 12, WHITE);
        let mut backward = PixelGrid::new(12, 12, WHITE);
        draw_line(&mut forward, 1, 2, 9, 7);
        draw_line(&mut backward, 9, 7, 1, 2);
        assert_eq!(forward, backward);
    }

    #[test]
    fn steep_lines_walk_the_vertical_axis() {
        let mut canvas = PixelGrid::new(5, 10, WHITE);
        draw_line(&mut canvas, 2, 1, 2, 8);
        let pixels = black_pixels(&canvas);
        assert_eq!(pixels.len(), 7);
        assert!(pixels.iter().all(|&(x, _)| x == 2));
        assert!(pixels.contains(&(2, 1)) && pixels.contains(&(2, 7)));
    }

    #[test]
    fn out_of_bounds_segments_are_clipped_silently() {
        let mut canvas = PixelGrid::new(4, 4, WHITE);
        draw_line(&mut canvas, -10, -2, 20, 2);
        assert!(!black_pixels(&canvas).is_empty());
    }

    #[test]
    fn diagonal_covers_each_column_once() {
        let mut canvas = PixelGrid::new(10, 10, WHITE);
        draw_line(&mut canvas, 0, 0, 8, 8);
        let pixels = black_pixels(&canvas);
        assert_eq!(pixels.len(), 8);
        for (i, &(x, y)) in pixels.iter().enumerate() {
            assert_eq!((x, y), (i, i));
        }
    }
}
