//! I/O helpers for grayscale images and JSON.
//!
//! The container format (header layout, palette, row padding, byte order) is
//! entirely the `image` crate's concern; the pipeline only ever sees a fully
//! populated [`PixelGrid`].
//!
//! - `load_grayscale_image`: read a PNG/BMP/JPEG/etc. into a [`PixelGrid`].
//! - `save_grayscale_image`: write a [`PixelGrid`] to disk, format by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::PixelGrid;
use image::{DynamicImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to an 8-bit grayscale grid.
pub fn load_grayscale_image(path: &Path) -> Result<PixelGrid, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    if width == 0 || height == 0 {
        return Err(format!("Image {} has zero dimensions", path.display()));
    }
    Ok(PixelGrid::from_raw(width, height, img.into_raw()))
}

/// Save a grid to disk; the container format follows the file extension.
pub fn save_grayscale_image(grid: &PixelGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(grid.w as u32, grid.h as u32, grid.data.clone())
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    DynamicImage::ImageLuma8(buffer)
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
