//! 8-neighborhood tests used by the contour thinning loop.
//!
//! All predicates assume the center pixel is black and located in the grid
//! interior so every neighbor exists. The corner tests are the four 90°
//! rotations of a three-neighbor sector check; the line tests recognize
//! one-pixel-wide strokes by a pair of opposing white neighbors.

use crate::image::{PixelGrid, WHITE};

/// Snapshot of the eight neighbors around an interior pixel, as
/// "is the neighbor white" flags.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Neighbors {
    pub n: bool,
    pub s: bool,
    pub e: bool,
    pub w: bool,
    pub nw: bool,
    pub ne: bool,
    pub sw: bool,
    pub se: bool,
}

impl Neighbors {
    /// Samples the neighborhood of interior pixel (x, y).
    pub(crate) fn sample(grid: &PixelGrid, x: usize, y: usize) -> Self {
        debug_assert!(x >= 1 && y >= 1 && x + 1 < grid.w && y + 1 < grid.h);
        let white = |px, py| grid.get(px, py) == WHITE;
        Self {
            n: white(x, y - 1),
            s: white(x, y + 1),
            e: white(x + 1, y),
            w: white(x - 1, y),
            nw: white(x - 1, y - 1),
            ne: white(x + 1, y - 1),
            sw: white(x - 1, y + 1),
            se: white(x + 1, y + 1),
        }
    }
}

/// Corner test: a full white 90° sector (two orthogonal neighbors plus the
/// included diagonal) in any of the four rotations.
pub(crate) fn matches_corner(nb: &Neighbors) -> bool {
    (nb.n && nb.nw && nb.w)
        || (nb.w && nb.sw && nb.s)
        || (nb.s && nb.se && nb.e)
        || (nb.e && nb.ne && nb.n)
}

/// Thin-line element tests, one per stroke orientation.
///
/// b1: vertical stroke (white on both horizontal sides)
/// b2: horizontal stroke (white above and below)
/// b3: falling diagonal stroke (white on the rising diagonal)
/// b4: rising diagonal stroke (white on the falling diagonal)
#[inline]
fn line_b1(nb: &Neighbors) -> bool {
    nb.w && nb.e
}
#[inline]
fn line_b2(nb: &Neighbors) -> bool {
    nb.n && nb.s
}
#[inline]
fn line_b3(nb: &Neighbors) -> bool {
    nb.nw && nb.se
}
#[inline]
fn line_b4(nb: &Neighbors) -> bool {
    nb.ne && nb.sw
}

/// Phase-selected pair of thin-line tests.
pub(crate) fn matches_phase_line(nb: &Neighbors, phase: u8) -> bool {
    match phase {
        0 => line_b1(nb) || line_b2(nb),
        1 => line_b3(nb) || line_b4(nb),
        2 => line_b1(nb) || line_b4(nb),
        3 => line_b2(nb) || line_b3(nb),
        _ => unreachable!("phase cycles 0..4"),
    }
}

/// A black pixel qualifies as structurally final if it is a corner or a
/// phase-selected thin-line element.
pub(crate) fn is_final_point(nb: &Neighbors, phase: u8) -> bool {
    matches_corner(nb) || matches_phase_line(nb, phase)
}

/// Contour membership: the phase decides which white neighbor exposes the
/// pixel to erosion (phase 0: west, 1: east, 2: north, 3: south).
pub(crate) fn is_contour_point(nb: &Neighbors, phase: u8) -> bool {
    match phase {
        0 => nb.w,
        1 => nb.e,
        2 => nb.n,
        3 => nb.s,
        _ => unreachable!("phase cycles 0..4"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{BLACK, WHITE};

    fn grid_with_black(coords: &[(usize, usize)]) -> PixelGrid {
        let mut grid = PixelGrid::new(7, 7, WHITE);
        for &(x, y) in coords {
            grid.set(x, y, BLACK);
        }
        grid
    }

    #[test]
    fn horizontal_stroke_pixels_are_line_elements() {
        let grid = grid_with_black(&[(1, 3), (2, 3), (3, 3), (4, 3), (5, 3)]);
        let nb = Neighbors::sample(&grid, 3, 3);
        assert!(matches_phase_line(&nb, 0));
        assert!(matches_phase_line(&nb, 3));
        assert!(!matches_corner(&nb));
    }

    #[test]
    fn stroke_endpoint_is_a_corner() {
        let grid = grid_with_black(&[(2, 3), (3, 3), (4, 3)]);
        let nb = Neighbors::sample(&grid, 2, 3);
        assert!(matches_corner(&nb));
    }

    #[test]
    fn block_interior_is_neither_corner_nor_line() {
        let mut grid = PixelGrid::new(7, 7, WHITE);
        for y in 1..6 {
            for x in 1..6 {
                grid.set(x, y, BLACK);
            }
        }
        let nb = Neighbors::sample(&grid, 3, 3);
        assert!(!matches_corner(&nb));
        for phase in 0..4 {
            assert!(!matches_phase_line(&nb, phase));
        }
    }

    #[test]
    fn block_corner_matches_corner_pattern() {
        let mut grid = PixelGrid::new(7, 7, WHITE);
        for y in 2..5 {
            for x in 2..5 {
                grid.set(x, y, BLACK);
            }
        }
        let nb = Neighbors::sample(&grid, 2, 2);
        assert!(matches_corner(&nb));
    }

    #[test]
    fn contour_side_follows_phase() {
        let grid = grid_with_black(&[(3, 3), (4, 3)]);
        let nb = Neighbors::sample(&grid, 3, 3);
        assert!(is_contour_point(&nb, 0)); // west neighbor white
        assert!(!is_contour_point(&nb, 1)); // east neighbor black
        assert!(is_contour_point(&nb, 2));
        assert!(is_contour_point(&nb, 3));
    }
}
