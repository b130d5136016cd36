//! Lane detector orchestrating the per-frame pipeline.
//!
//! Overview
//! - Validates the frame and extracts a binary mask of yellow/white edges.
//! - Restricts the mask to the triangular road region in front of the car.
//! - Detects straight segments with a probabilistic Hough transform.
//! - Classifies the segments into left/right groups by slope sign and
//!   position, fits one line per side and samples both at two scan rows.
//!
//! Modules
//! - [`params`] – configuration types used by the detector and the demo.
//! - `pipeline` – the [`LaneDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::LaneParams;
pub use pipeline::{detect_lanes, LaneDetector, StageMasks};
