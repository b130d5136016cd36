//! Lane geometry: segment classification, per-side fitting and projection.
//!
//! Steps, applied to the segments of one frame:
//!
//! 1. Slope filter — near-horizontal segments (`|slope| <= 0.3` by default)
//!    are discarded.
//! 2. Side classification — with `midpoint = width / 2`, a segment is a right
//!    lane candidate iff its slope is positive and both endpoints lie right
//!    of the midpoint; left candidates mirror that. Everything else is
//!    dropped.
//! 3. Fit — the endpoints of each group are fitted with an L2 line
//!    (see [`fit`]). An empty group has no line.
//! 4. Gate — unless both sides have a line the result is
//!    [`LaneResult::NOT_FOUND`]; partial results are never produced.
//! 5. Projection — each line is sampled at the frame bottom and at the
//!    lookahead row (see [`project`]).
//!
//! The slope-sign convention assumes a forward-facing camera mounted near the
//! vehicle's centreline.

pub mod classify;
pub mod fit;
mod options;
pub mod project;

pub use classify::{
    classify_segments, filter_by_slope, side_of, Classification, ClassificationCounts,
    LaneGroup, LaneGroups, SlopedSegment,
};
pub use fit::{fit_line, FittedLine};
pub use options::LaneFitOptions;
pub use project::{project_lanes, ScanRows};

use crate::segments::Segment;
use crate::types::{LaneResult, Side};

/// Outcome of the lane geometry stage for one frame.
#[derive(Clone, Debug)]
pub struct LaneFit {
    pub result: LaneResult,
    pub right: Option<FittedLine>,
    pub left: Option<FittedLine>,
    pub groups: LaneGroups,
    pub counts: ClassificationCounts,
    pub rows: ScanRows,
}

/// Fit the line of one side; `None` when its group is empty.
///
/// Points are sorted first so the fit does not depend on the order in which
/// segments were detected.
pub fn fit_group(groups: &LaneGroups, side: Side) -> Option<FittedLine> {
    let group = groups.get(side);
    if group.is_empty() {
        return None;
    }
    let mut points = group.points();
    points.sort_by(|a, b| a[0].total_cmp(&b[0]).then(a[1].total_cmp(&b[1])));
    fit_line(&points)
}

/// Classify `segments` detected in a `width`×`height` frame, fit both sides and
/// project them to the scan rows.
pub fn find_lanes(segments: &[Segment], width: u32, height: u32, opts: &LaneFitOptions) -> LaneFit {
    let Classification { groups, counts } = classify_segments(segments, width, opts);
    let right = fit_group(&groups, Side::Right);
    let left = fit_group(&groups, Side::Left);
    let rows = ScanRows::for_height(height, opts);
    let result = project_lanes(right.as_ref(), left.as_ref(), rows);
    LaneFit {
        result,
        right,
        left,
        groups,
        counts,
        rows,
    }
}
