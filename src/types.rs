use serde::{Deserialize, Serialize};

/// Lane side relative to the image midline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

/// Final output of the detector: both lane boundaries sampled at the near
/// (frame bottom) and far (lookahead) scan heights.
///
/// Points are `[x, y]` in pixel coordinates and may lie outside the frame.
/// The field order is fixed and independent of which side was fitted first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneResult {
    pub right_near: [i32; 2],
    pub right_far: [i32; 2],
    pub left_near: [i32; 2],
    pub left_far: [i32; 2],
}

impl LaneResult {
    /// Sentinel returned when either side could not be fitted.
    pub const NOT_FOUND: LaneResult = LaneResult {
        right_near: [0, 0],
        right_far: [0, 0],
        left_near: [0, 0],
        left_far: [0, 0],
    };

    pub fn is_found(&self) -> bool {
        *self != Self::NOT_FOUND
    }

    /// Points in output order: right-near, right-far, left-near, left-far.
    pub fn points(&self) -> [[i32; 2]; 4] {
        [self.right_near, self.right_far, self.left_near, self.left_far]
    }

    /// Quadrilateral winding used for the overlay fill.
    pub fn polygon(&self) -> [[i32; 2]; 4] {
        [self.right_near, self.right_far, self.left_far, self.left_near]
    }
}
