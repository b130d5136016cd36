#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod overlay;
pub mod types;

// Stage modules – public so tools can run stages in isolation.
pub mod config;
pub mod features;
pub mod lanes;
pub mod roi;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{detect_lanes, LaneDetector, LaneParams};
pub use crate::error::{LaneError, Result};
pub use crate::types::{LaneResult, Side};

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Overlay rendering for visual inspection.
pub use crate::overlay::{draw_lanes, OverlayOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() -> lane_detector::Result<()> {
/// let frame = image::RgbImage::new(640, 480);
/// let detector = LaneDetector::new(LaneParams::default());
///
/// let report = detector.process(&frame)?;
/// println!(
///     "found={} latency_ms={:.3}",
///     report.lanes.is_found(),
///     report.trace.timings.total_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::{draw_lanes, LaneDetector, LaneError, LaneParams, LaneResult, OverlayOptions};
}

// --- Stage-level API (for tools & advanced users) --------------------------

pub mod stages {
    // Stage functions in pipeline order.
    pub use crate::detector::StageMasks;
    pub use crate::features::{extract_feature_maps, extract_features, FeatureMaps};
    pub use crate::lanes::{find_lanes, LaneFit};
    pub use crate::roi::restrict_to_roi;
    pub use crate::segments::detect_segments;

    // Structured diagnostics types.
    pub use crate::diagnostics::{
        FeatureStage, InputDescriptor, LaneStage, RoiStage, SegmentStage, StageTiming,
        TimingBreakdown,
    };
}
