//! Line extraction by Hough voting, plus the Bresenham rasterizer.
//!
//! Edge polarity: throughout this module an edge pixel is black
//! ([`crate::image::BLACK`]); white is background. The global voter and both
//! local variants share this convention.

pub mod global;
pub mod local;
pub mod raster;

pub use global::{detect_lines, GlobalHoughOptions, GlobalHoughResult, HoughLine};
pub use local::{
    confirm_ray_lines, erase_sparse_directions, DirectionHistogram, EraseOptions,
    RayConfirmOptions, DIRECTIONS,
};
pub use raster::draw_line;
