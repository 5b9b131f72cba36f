use box_detector::hough::HoughLine;
use box_detector::image::io::{load_grayscale_image, save_grayscale_image, write_json_file};
use box_detector::image::PixelGrid;
use box_detector::{BoxDetector, BoxParams, ToneParams};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BoxToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub tone: ToneConfig,
    #[serde(default)]
    pub edge: EdgeConfig,
    #[serde(default)]
    pub thinning: ThinningConfig,
    #[serde(default)]
    pub local_filter: LocalFilterConfig,
    #[serde(default)]
    pub hough: HoughConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ToneConfig {
    pub equalize: bool,
    pub brightness: i32,
    pub contrast: f32,
    pub tile_size: Option<usize>,
}

impl Default for ToneConfig {
    fn default() -> Self {
        Self {
            equalize: true,
            brightness: 0,
            contrast: 1.0,
            tile_size: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Compass window side: 3, 5 or 7.
    pub mask_size: usize,
    pub threshold: u32,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            mask_size: 3,
            threshold: 300,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ThinningConfig {
    pub enabled: bool,
    pub max_iterations: usize,
}

impl Default for ThinningConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_iterations: 1000,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LocalFilterConfig {
    pub enabled: bool,
    pub window: usize,
    pub min_votes: u32,
}

impl Default for LocalFilterConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            window: 100,
            min_votes: 20,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HoughConfig {
    pub threshold: u32,
    pub nms_radius: usize,
}

impl Default for HoughConfig {
    fn default() -> Self {
        Self {
            threshold: 100,
            nms_radius: 4,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(rename = "lines_image")]
    pub lines_image: PathBuf,
    #[serde(rename = "summary_json")]
    pub summary_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<BoxToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray: PixelGrid = load_grayscale_image(&config.input)?;
    let params = build_params(&config)?;

    let detector = BoxDetector::new(params);
    let result = detector.process(&gray);

    let summary = DetectionSummary {
        width: gray.w,
        height: gray.h,
        edge_count: result.report.edge_count,
        thin_iterations: result.report.thin_iterations,
        thin_converged: result.report.thin_converged,
        erased_count: result.report.erased_count,
        line_count: result.report.lines.len(),
        total_latency_ms: result.report.total_latency_ms,
        lines: result.report.lines.clone(),
    };

    save_grayscale_image(&result.canvas, &config.output.lines_image)?;
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved line canvas to {}",
        config.output.lines_image.display()
    );
    println!(
        "Saved summary ({} lines, {} edge pixels) to {}",
        summary.line_count,
        summary.edge_count,
        config.output.summary_json.display()
    );

    Ok(())
}

fn build_params(config: &BoxToolConfig) -> Result<BoxParams, String> {
    use box_detector::edges::{EdgeDetectOptions, MaskSize};
    use box_detector::hough::{EraseOptions, GlobalHoughOptions};
    use box_detector::thin::ThinOptions;

    let mask = match config.edge.mask_size {
        3 => MaskSize::Three,
        5 => MaskSize::Five,
        7 => MaskSize::Seven,
        other => return Err(format!("Unsupported mask size {other}, expected 3, 5 or 7")),
    };

    Ok(BoxParams {
        tone: ToneParams {
            equalize: config.tone.equalize,
            brightness: config.tone.brightness,
            contrast: config.tone.contrast,
            tile_size: config.tone.tile_size,
        },
        edge: EdgeDetectOptions {
            mask,
            threshold: config.edge.threshold,
        },
        thin: ThinOptions {
            max_iterations: config.thinning.max_iterations,
        },
        enable_thinning: config.thinning.enabled,
        local_filter: config.local_filter.enabled.then_some(EraseOptions {
            window: config.local_filter.window,
            min_votes: config.local_filter.min_votes,
        }),
        hough: GlobalHoughOptions {
            threshold: config.hough.threshold,
            nms_radius: config.hough.nms_radius,
        },
    })
}

fn usage() -> String {
    "Usage: find_boxes <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectionSummary {
    width: usize,
    height: usize,
    edge_count: usize,
    thin_iterations: usize,
    thin_converged: bool,
    erased_count: usize,
    line_count: usize,
    total_latency_ms: f64,
    lines: Vec<HoughLine>,
}
