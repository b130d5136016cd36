use super::stages::{FeatureStage, LaneStage, RoiStage, SegmentStage};
use super::timing::TimingBreakdown;
use crate::types::LaneResult;
use serde::Serialize;

/// Result produced by [`LaneDetector::process`](crate::LaneDetector::process).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub lanes: LaneResult,
    pub trace: PipelineTrace,
}

/// Stage-by-stage record of one detector run.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub timings: TimingBreakdown,
    pub features: FeatureStage,
    pub roi: RoiStage,
    pub segments: SegmentStage,
    pub lanes: LaneStage,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: u32,
    pub height: u32,
}
