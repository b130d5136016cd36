//! Candidate segment detection on the restricted feature mask.
//!
//! Segments come from a progressive probabilistic Hough transform (PPHT):
//!
//! - Set pixels are visited in a pseudo-random order. Each visited pixel votes
//!   into a `(θ, ρ)` accumulator.
//! - As soon as one bin reaches `threshold` votes, the line through the pixel
//!   at that angle is traced in both directions, bridging gaps of up to
//!   `max_line_gap_px` unset pixels.
//! - The traced pixels are removed from further consideration. If the traced
//!   extent is at least `min_line_length_px` along x or y, their votes are
//!   retracted and the segment is emitted.
//!
//! The sampling order comes from a seeded generator, so identical masks and
//! options always produce identical segment lists. No filtering by slope or
//! position happens here; see [`crate::lanes`] for that.
//!
//! Complexity: every set pixel votes at most once (O(N·angles)) and is traced
//! at most once per accepted line.

mod hough;
mod options;
mod segment;

pub use options::HoughOptions;
pub use segment::{Segment, SLOPE_EPSILON};

use image::GrayImage;

/// Detect straight segments in a binary mask (non-zero = set).
pub fn detect_segments(mask: &GrayImage, options: &HoughOptions) -> Vec<Segment> {
    if mask.width() == 0 || mask.height() == 0 {
        return Vec::new();
    }
    hough::ProbabilisticHough::new(mask, *options).extract()
}
