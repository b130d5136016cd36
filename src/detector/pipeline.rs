//! Detector pipeline orchestrating the five lane-detection stages.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{LaneDetector, LaneParams};
//!
//! # fn example(frame: image::RgbImage) -> lane_detector::Result<()> {
//! let detector = LaneDetector::new(LaneParams::default());
//! let report = detector.process(&frame)?;
//! if report.lanes.is_found() {
//!     println!("right lane starts at {:?}", report.lanes.right_near);
//! }
//! # Ok(())
//! # }
//! ```

// Stages
// - Validate: reject frames below `min_frame_side` before touching pixels.
// - Features: yellow/white color mask, masked luma, blur, Canny.
// - ROI: zero everything outside the road triangle.
// - Segments: probabilistic Hough transform on the restricted mask.
// - Lanes: slope filter, side classification, L2 fit, gate and projection.

use super::params::LaneParams;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    DetectionReport, FeatureStage, InputDescriptor, LaneStage, PipelineTrace, RoiStage,
    SegmentStage, TimingBreakdown,
};
use crate::error::Result;
use crate::features::{extract_feature_maps, FeatureOptions};
use crate::image::{count_nonzero, validate_frame};
use crate::lanes::{find_lanes, LaneFitOptions};
use crate::roi::{restrict_to_roi, roi_vertices, RoiOptions};
use crate::segments::{detect_segments, HoughOptions};
use crate::types::LaneResult;
use image::{GrayImage, RgbImage};
use log::debug;
use std::time::Instant;

/// Masks produced on the way to the segment detector.
#[derive(Clone, Debug)]
pub struct StageMasks {
    /// Yellow/white color mask.
    pub color_mask: GrayImage,
    /// Canny edges of the color-filtered frame.
    pub edges: GrayImage,
    /// Edges left inside the region of interest.
    pub restricted: GrayImage,
}

/// Single-frame lane detector.
///
/// Holds only its parameters; every call to [`process`](Self::process) is
/// independent of previous frames, so one detector can be shared across
/// threads.
#[derive(Clone, Debug, Default)]
pub struct LaneDetector {
    params: LaneParams,
}

impl LaneDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: LaneParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &LaneParams {
        &self.params
    }

    /// Lane points only; see [`process`](Self::process) for the full trace.
    pub fn detect(&self, frame: &RgbImage) -> Result<LaneResult> {
        self.process(frame).map(|report| report.lanes)
    }

    /// Run all stages on one frame and capture per-stage diagnostics.
    pub fn process(&self, frame: &RgbImage) -> Result<DetectionReport> {
        self.process_with_masks(frame).map(|(report, _)| report)
    }

    /// Like [`process`](Self::process), also returning the intermediate masks.
    pub fn process_with_masks(&self, frame: &RgbImage) -> Result<(DetectionReport, StageMasks)> {
        let total_start = Instant::now();
        validate_frame(frame, self.params.min_frame_side)?;
        let (width, height) = frame.dimensions();

        let mut timings = TimingBreakdown::default();
        let maps = timings.time("features", || {
            extract_feature_maps(frame, &self.params.features)
        });
        let restricted = timings.time("roi", || restrict_to_roi(&maps.edges, &self.params.roi));
        let segments = timings.time("segments", || {
            detect_segments(&restricted, &self.params.hough)
        });
        let fit = timings.time("lanes", || {
            find_lanes(
                &segments,
                restricted.width(),
                restricted.height(),
                &self.params.lanes,
            )
        });

        debug!(
            "LaneDetector::process {}x{}: {} segments -> {} left / {} right ({} flat, {} unassigned)",
            width,
            height,
            segments.len(),
            fit.counts.left,
            fit.counts.right,
            fit.counts.rejected_slope,
            fit.counts.unassigned
        );
        if !fit.result.is_found() {
            debug!(
                "LaneDetector::process no lane pair (left fitted: {}, right fitted: {})",
                fit.left.is_some(),
                fit.right.is_some()
            );
        }

        timings.total_ms = elapsed_ms(total_start);
        let trace = PipelineTrace {
            input: InputDescriptor { width, height },
            timings,
            features: FeatureStage {
                color_pixels: count_nonzero(&maps.color_mask),
                edge_pixels: count_nonzero(&maps.edges),
            },
            roi: RoiStage {
                vertices: roi_vertices(width, height, self.params.roi.inset_px),
                edge_pixels: count_nonzero(&restricted),
            },
            segments: SegmentStage { segments },
            lanes: LaneStage {
                counts: fit.counts,
                rows: fit.rows,
                right: fit.right,
                left: fit.left,
            },
        };

        let report = DetectionReport {
            lanes: fit.result,
            trace,
        };
        let masks = StageMasks {
            color_mask: maps.color_mask,
            edges: maps.edges,
            restricted,
        };
        Ok((report, masks))
    }

    /// Process independent frames; results keep the input order.
    #[cfg(feature = "parallel")]
    pub fn process_batch(&self, frames: &[RgbImage]) -> Vec<Result<DetectionReport>> {
        use rayon::prelude::*;

        frames.par_iter().map(|frame| self.process(frame)).collect()
    }

    /// Process independent frames; results keep the input order.
    #[cfg(not(feature = "parallel"))]
    pub fn process_batch(&self, frames: &[RgbImage]) -> Vec<Result<DetectionReport>> {
        frames.iter().map(|frame| self.process(frame)).collect()
    }

    /// Update color and edge thresholds.
    pub fn set_feature_options(&mut self, options: FeatureOptions) {
        self.params.features = options;
    }

    /// Update the region-of-interest inset.
    pub fn set_roi_options(&mut self, options: RoiOptions) {
        self.params.roi = options;
    }

    /// Update Hough transform parameters.
    pub fn set_hough_options(&mut self, options: HoughOptions) {
        self.params.hough = options;
    }

    /// Update the slope cutoff and scan rows.
    pub fn set_lane_fit_options(&mut self, options: LaneFitOptions) {
        self.params.lanes = options;
    }
}

/// Run the default pipeline on one frame.
pub fn detect_lanes(frame: &RgbImage, params: &LaneParams) -> Result<LaneResult> {
    LaneDetector::new(params.clone()).detect(frame)
}
