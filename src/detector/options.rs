//! Parameter types configuring the detector stages.
//!
//! This module groups knobs for tonal normalization, the compass edge pass,
//! contour thinning, and the global line search. Defaults aim for sensible
//! behaviour on well-exposed photographs; for tuning, start with the edge
//! threshold and the Hough vote threshold.

use crate::edges::EdgeDetectOptions;
use crate::hough::{EraseOptions, GlobalHoughOptions};
use crate::thin::ThinOptions;

/// Detector-wide parameters controlling the multi-stage pipeline.
#[derive(Clone, Debug)]
pub struct BoxParams {
    /// Tonal normalization applied before edge detection.
    pub tone: ToneParams,
    /// Compass-mask edge detection.
    pub edge: EdgeDetectOptions,
    /// Contour thinning toward one-pixel skeletons.
    pub thin: ThinOptions,
    /// Enables or disables the thinning stage.
    pub enable_thinning: bool,
    /// Optional windowed direction filter applied to the thinned edge map
    /// before the global search (None disables).
    pub local_filter: Option<EraseOptions>,
    /// Global polar line search over the (thinned) edge map.
    pub hough: GlobalHoughOptions,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            tone: ToneParams::default(),
            edge: EdgeDetectOptions::default(),
            thin: ThinOptions::default(),
            enable_thinning: true,
            local_filter: None,
            hough: GlobalHoughOptions::default(),
        }
    }
}

/// Tone stage configuration. Operations run in the order: equalization,
/// brightness, contrast, tile averaging; each is skipped at its neutral
/// setting.
#[derive(Clone, Copy, Debug)]
pub struct ToneParams {
    /// Histogram equalization toggle.
    pub equalize: bool,
    /// Brightness shift in intensity levels (0 disables).
    pub brightness: i32,
    /// Contrast factor around the 127 midpoint (1.0 disables).
    pub contrast: f32,
    /// Optional tile side for block averaging (None disables).
    pub tile_size: Option<usize>,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            equalize: true,
            brightness: 0,
            contrast: 1.0,
            tile_size: None,
        }
    }
}
