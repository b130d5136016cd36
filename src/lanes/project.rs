//! Projection of the fitted lane lines onto the near and far scan rows.
use super::fit::FittedLine;
use super::options::LaneFitOptions;
use crate::types::LaneResult;
use serde::Serialize;

/// Rows at which both lane lines are sampled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRows {
    /// Bottom of the frame.
    pub near_y: i32,
    /// Lookahead row.
    pub far_y: i32,
}

impl ScanRows {
    pub fn for_height(height: u32, opts: &LaneFitOptions) -> Self {
        let den = opts.far_row_den.max(1);
        Self {
            near_y: height as i32,
            far_y: ((height / den) * opts.far_row_num) as i32,
        }
    }
}

/// Combine both sides into a [`LaneResult`]; any missing side yields
/// [`LaneResult::NOT_FOUND`].
pub fn project_lanes(
    right: Option<&FittedLine>,
    left: Option<&FittedLine>,
    rows: ScanRows,
) -> LaneResult {
    let (Some(right), Some(left)) = (right, left) else {
        return LaneResult::NOT_FOUND;
    };
    LaneResult {
        right_near: sample(right, rows.near_y),
        right_far: sample(right, rows.far_y),
        left_near: sample(left, rows.near_y),
        left_far: sample(left, rows.far_y),
    }
}

fn sample(line: &FittedLine, y: i32) -> [i32; 2] {
    // `as` saturates on overflow and maps NaN to 0.
    [line.x_at(y as f64).round() as i32, y]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(slope: f64, point: [f64; 2]) -> FittedLine {
        let norm = 1.0f64.hypot(slope);
        FittedLine {
            slope,
            point,
            direction: [1.0 / norm, slope / norm],
        }
    }

    #[test]
    fn far_row_uses_integer_quarters() {
        let rows = ScanRows::for_height(201, &LaneFitOptions::default());
        assert_eq!(rows, ScanRows { near_y: 201, far_y: 150 });
    }

    #[test]
    fn missing_side_gives_sentinel() {
        let right = line(0.5, [150.0, 70.0]);
        let rows = ScanRows::for_height(200, &LaneFitOptions::default());
        assert_eq!(project_lanes(Some(&right), None, rows), LaneResult::NOT_FOUND);
        assert_eq!(project_lanes(None, Some(&right), rows), LaneResult::NOT_FOUND);
        assert_eq!(project_lanes(None, None, rows), LaneResult::NOT_FOUND);
    }

    #[test]
    fn horizontal_fit_saturates_instead_of_failing() {
        let flat = line(0.0, [10.0, 5.0]);
        let steep = line(-1.0, [10.0, 5.0]);
        let rows = ScanRows::for_height(100, &LaneFitOptions::default());
        let res = project_lanes(Some(&flat), Some(&steep), rows);
        assert_eq!(res.right_near, [i32::MAX, 100]);
        assert_eq!(res.left_near, [-85, 100]);
    }
}
