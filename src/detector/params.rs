//! Parameter types configuring the detector stages.
//!
//! Every constant of the pipeline lives here with its default: color and
//! Canny thresholds, the ROI inset, the Hough transform resolution and vote
//! limits, and the slope cutoff / lookahead row used by the lane fit. All
//! structs deserialize with per-field defaults, so a JSON config only needs
//! the values it overrides.

use crate::features::FeatureOptions;
use crate::lanes::LaneFitOptions;
use crate::roi::RoiOptions;
use crate::segments::HoughOptions;
use serde::{Deserialize, Serialize};

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneParams {
    /// Frames narrower or shorter than this are rejected as invalid.
    pub min_frame_side: u32,
    pub features: FeatureOptions,
    pub roi: RoiOptions,
    pub hough: HoughOptions,
    pub lanes: LaneFitOptions,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            // Smallest frame the 3×3 edge operator can process.
            min_frame_side: 3,
            features: FeatureOptions::default(),
            roi: RoiOptions::default(),
            hough: HoughOptions::default(),
            lanes: LaneFitOptions::default(),
        }
    }
}
