use crate::detector::LaneParams;
use crate::error::{LaneError, Result};
use crate::overlay::OverlayOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration of the `lane_demo` binary.
#[derive(Debug, Deserialize)]
pub struct LaneDemoConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub params: LaneParams,
    #[serde(default)]
    pub overlay: OverlayOptions,
    pub output: LaneDemoOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LaneDemoOutputConfig {
    pub overlay_image: PathBuf,
    pub report_json: PathBuf,
    /// Color mask before edge detection.
    #[serde(default)]
    pub color_mask: Option<PathBuf>,
    /// Edge mask after the region-of-interest restriction.
    #[serde(default)]
    pub roi_mask: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<LaneDemoConfig> {
    let data = fs::read_to_string(path).map_err(|source| LaneError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(path, &data)
}

fn parse_config(path: &Path, data: &str) -> Result<LaneDemoConfig> {
    serde_json::from_str(data).map_err(|source| LaneError::Json {
        path: path.to_path_buf(),
        source,
    })
}
