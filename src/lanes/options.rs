use serde::{Deserialize, Serialize};

/// Classification and projection constants.
///
/// - `min_abs_slope`: segments with `|slope|` at or below this are treated as
///   horizontal clutter (crosswalks, shadows) and dropped.
/// - `far_row_num` / `far_row_den`: the lookahead row is
///   `(height / far_row_den) * far_row_num` in integer arithmetic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaneFitOptions {
    pub min_abs_slope: f64,
    pub far_row_num: u32,
    pub far_row_den: u32,
}

impl Default for LaneFitOptions {
    fn default() -> Self {
        Self {
            min_abs_slope: 0.3,
            far_row_num: 3,
            far_row_den: 4,
        }
    }
}
