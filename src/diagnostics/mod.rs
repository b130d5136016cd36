//! Serializable diagnostics returned alongside the lane result.
//!
//! [`DetectionReport`] pairs the [`LaneResult`](crate::types::LaneResult) with a
//! [`PipelineTrace`] holding per-stage counts, the raw Hough segments, the
//! fitted lines and stage timings. The demo binary writes it as JSON.

pub mod pipeline;
pub mod stages;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use stages::{FeatureStage, LaneStage, RoiStage, SegmentStage};
pub use timing::{StageTiming, TimingBreakdown};
