//! Slope filtering and left/right assignment of candidate segments.
use super::options::LaneFitOptions;
use crate::segments::Segment;
use crate::types::Side;
use serde::Serialize;

/// Segment that survived the slope filter, with its slope cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlopedSegment {
    pub segment: Segment,
    pub slope: f64,
}

/// Drop near-horizontal segments (`|slope| <= min_abs_slope`).
pub fn filter_by_slope(segments: &[Segment], min_abs_slope: f64) -> Vec<SlopedSegment> {
    segments
        .iter()
        .filter_map(|&segment| {
            let slope = segment.slope();
            (slope.abs() > min_abs_slope).then_some(SlopedSegment { segment, slope })
        })
        .collect()
}

/// Side a segment belongs to, if any.
///
/// Right lanes rise to the right in image coordinates (positive slope) and
/// lie strictly right of the midline; left lanes mirror that. Segments that
/// touch or cross the midline, or whose slope sign contradicts their
/// position, belong to neither side.
pub fn side_of(seg: &SlopedSegment, midpoint: i32) -> Option<Side> {
    let [p0, p1] = seg.segment.endpoints();
    if seg.slope > 0.0 && p0[0] > midpoint && p1[0] > midpoint {
        Some(Side::Right)
    } else if seg.slope < 0.0 && p0[0] < midpoint && p1[0] < midpoint {
        Some(Side::Left)
    } else {
        None
    }
}

/// Segments assigned to one lane boundary.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LaneGroup {
    pub segments: Vec<Segment>,
}

impl LaneGroup {
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Both endpoints of every member, as floating-point points.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.segments
            .iter()
            .flat_map(|s| s.endpoints())
            .map(|p| [p[0] as f64, p[1] as f64])
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LaneGroups {
    pub left: LaneGroup,
    pub right: LaneGroup,
}

impl LaneGroups {
    pub fn get(&self, side: Side) -> &LaneGroup {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut LaneGroup {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Per-run classification counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationCounts {
    pub total: usize,
    pub rejected_slope: usize,
    pub unassigned: usize,
    pub left: usize,
    pub right: usize,
}

#[derive(Clone, Debug, Default)]
pub struct Classification {
    pub groups: LaneGroups,
    pub counts: ClassificationCounts,
}

/// Filter by slope, then split the survivors around `width / 2`.
pub fn classify_segments(
    segments: &[Segment],
    width: u32,
    opts: &LaneFitOptions,
) -> Classification {
    let midpoint = (width / 2) as i32;
    let sloped = filter_by_slope(segments, opts.min_abs_slope);

    let mut out = Classification::default();
    out.counts.total = segments.len();
    out.counts.rejected_slope = segments.len() - sloped.len();
    for seg in &sloped {
        match side_of(seg, midpoint) {
            Some(side) => out.groups.get_mut(side).push(seg.segment),
            None => out.counts.unassigned += 1,
        }
    }
    out.counts.left = out.groups.left.len();
    out.counts.right = out.groups.right.len();
    out
}
