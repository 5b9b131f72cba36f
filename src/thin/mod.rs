//! Iterative contour thinning toward one-pixel-wide skeletons.
//!
//! The loop cycles through four phases, each eroding the contour exposed on
//! one side (west, east, north, south) while a monotonically growing mask of
//! final points protects corners and thin-line elements from removal. Two
//! convergence checks terminate the loop: the working image consisting only
//! of final points, or a full phase cycle leaving the image unchanged.
//!
//! The base algorithm has no iteration cap; `max_iterations` bounds
//! pathological inputs and reports non-convergence instead of spinning.

mod patterns;

use crate::image::{PixelGrid, BLACK, WHITE};
use log::{debug, warn};
use patterns::{is_contour_point, is_final_point, Neighbors};

/// Parameters of the thinning loop.
#[derive(Clone, Copy, Debug)]
pub struct ThinOptions {
    /// Upper bound on phase iterations before giving up.
    pub max_iterations: usize,
}

impl Default for ThinOptions {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

/// Outcome of a thinning run.
#[derive(Clone, Copy, Debug)]
pub struct ThinOutcome {
    /// Number of phase iterations executed.
    pub iterations: usize,
    /// False if the loop hit `max_iterations` before reaching a fixed point.
    pub converged: bool,
}

/// Thins the black structures of `image` in place.
pub fn thin(image: &mut PixelGrid, options: &ThinOptions) -> ThinOutcome {
    let mut final_points = PixelGrid::new(image.w, image.h, WHITE);
    let mut contour = PixelGrid::new(image.w, image.h, WHITE);
    let mut check_image = image.clone();

    let mut phase = 0u8;
    let mut iterations = 0usize;

    while iterations < options.max_iterations {
        iterations += 1;

        if phase == 0 {
            check_image = image.clone();
        }

        // Accumulate final points; once stamped a pixel is never released.
        for_each_interior(image, |grid, x, y| {
            if grid.get(x, y) == BLACK {
                let nb = Neighbors::sample(grid, x, y);
                if is_final_point(&nb, phase) {
                    final_points.set(x, y, BLACK);
                }
            }
        });

        if interior_eq(&final_points, image) {
            debug!("thinning converged after {iterations} iterations (final-point cover)");
            return ThinOutcome {
                iterations,
                converged: true,
            };
        }

        // Fresh contour for this phase.
        contour.fill_all(WHITE);
        for_each_interior(image, |grid, x, y| {
            if grid.get(x, y) == BLACK {
                let nb = Neighbors::sample(grid, x, y);
                if is_contour_point(&nb, phase) {
                    contour.set(x, y, BLACK);
                }
            }
        });

        // Erode the contour, then restore protected points.
        for i in 0..image.data.len() {
            if contour.data[i] == BLACK {
                image.data[i] = WHITE;
            }
        }
        for i in 0..image.data.len() {
            if final_points.data[i] == BLACK {
                image.data[i] = BLACK;
            }
        }

        phase = (phase + 1) % 4;

        if *image == check_image {
            debug!("thinning converged after {iterations} iterations (stable cycle)");
            return ThinOutcome {
                iterations,
                converged: true,
            };
        }
    }

    warn!(
        "thinning did not converge within {} iterations",
        options.max_iterations
    );
    ThinOutcome {
        iterations,
        converged: false,
    }
}

/// Visits every interior pixel (border excluded) of `grid`.
fn for_each_interior(grid: &PixelGrid, mut visit: impl FnMut(&PixelGrid, usize, usize)) {
    if grid.w < 3 || grid.h < 3 {
        return;
    }
    for y in 1..grid.h - 1 {
        for x in 1..grid.w - 1 {
            visit(grid, x, y);
        }
    }
}

/// Pixel-wise equality over the interior, borders excluded.
fn interior_eq(a: &PixelGrid, b: &PixelGrid) -> bool {
    debug_assert_eq!((a.w, a.h), (b.w, b.h));
    if a.w < 3 || a.h < 3 {
        return true;
    }
    for y in 1..a.h - 1 {
        let start = y * a.stride + 1;
        let end = y * a.stride + a.w - 1;
        if a.data[start..end] != b.data[start..end] {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_white_image_converges_immediately() {
        let mut image = PixelGrid::new(10, 10, WHITE);
        let outcome = thin(&mut image, &ThinOptions::default());
        assert!(outcome.converged);
        assert_eq!(outcome.iterations, 1);
        assert!(image.data.iter().all(|&v| v == WHITE));
    }

    #[test]
    fn one_pixel_stroke_is_a_fixed_point() {
        let mut image = PixelGrid::new(20, 9, WHITE);
        for x in 2..18 {
            image.set(x, 4, BLACK);
        }
        let before = image.clone();
        let outcome = thin(&mut image, &ThinOptions::default());
        assert!(outcome.converged);
        assert_eq!(image, before);
    }

    #[test]
    fn solid_block_erodes_to_protected_points() {
        let mut image = PixelGrid::new(16, 16, WHITE);
        for y in 3..12 {
            for x in 3..12 {
                image.set(x, y, BLACK);
            }
        }
        let black_before = image.data.iter().filter(|&&v| v == BLACK).count();
        let outcome = thin(&mut image, &ThinOptions::default());
        let black_after = image.data.iter().filter(|&&v| v == BLACK).count();
        assert!(outcome.converged);
        assert!(black_after < black_before);
        assert!(black_after > 0, "protected structure must survive");
    }

    #[test]
    fn iteration_cap_reports_non_convergence() {
        let mut image = PixelGrid::new(32, 32, WHITE);
        for y in 4..28 {
            for x in 4..28 {
                image.set(x, y, BLACK);
            }
        }
        let outcome = thin(&mut image, &ThinOptions { max_iterations: 1 });
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 1);
    }

    #[test]
    fn borders_are_never_touched() {
        let mut image = PixelGrid::new(12, 12, WHITE);
        for y in 2..10 {
            for x in 2..10 {
                image.set(x, y, BLACK);
            }
        }
        thin(&mut image, &ThinOptions::default());
        for x in 0..12 {
            assert_eq!(image.get(x, 0), WHITE);
            assert_eq!(image.get(x, 11), WHITE);
        }
        for y in 0..12 {
            assert_eq!(image.get(0, y), WHITE);
            assert_eq!(image.get(11, y), WHITE);
        }
    }
}
