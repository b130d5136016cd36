use crate::lanes::{ClassificationCounts, FittedLine, ScanRows};
use crate::segments::Segment;
use serde::Serialize;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureStage {
    /// Pixels inside the yellow/white color mask.
    pub color_pixels: usize,
    /// Edge pixels in the feature mask.
    pub edge_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiStage {
    pub vertices: [[i32; 2]; 3],
    /// Edge pixels left after masking.
    pub edge_pixels: usize,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStage {
    pub segments: Vec<Segment>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneStage {
    pub counts: ClassificationCounts,
    pub rows: ScanRows,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<FittedLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<FittedLine>,
}
