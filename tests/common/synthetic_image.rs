use box_detector::image::{PixelGrid, BLACK, WHITE};

/// Generates a uniform grid of the given intensity.
pub fn uniform(width: usize, height: usize, value: u8) -> PixelGrid {
    PixelGrid::new(width, height, value)
}

/// White grid with a single black horizontal line at `y`.
pub fn horizontal_line(width: usize, height: usize, y: usize) -> PixelGrid {
    let mut img = PixelGrid::new(width, height, WHITE);
    for x in 0..width {
        img.set(x, y, BLACK);
    }
    img
}

/// High-contrast rectangle outline on a light background, a stand-in for a
/// photographed box.
pub fn box_outline(
    width: usize,
    height: usize,
    left: usize,
    top: usize,
    right: usize,
    bottom: usize,
) -> PixelGrid {
    assert!(left < right && right < width && top < bottom && bottom < height);
    let mut img = PixelGrid::new(width, height, 220);
    for x in left..=right {
        img.set(x, top, 20);
        img.set(x, bottom, 20);
    }
    for y in top..=bottom {
        img.set(left, y, 20);
        img.set(right, y, 20);
    }
    img
}
