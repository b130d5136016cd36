use serde::{Deserialize, Serialize};

/// Parameters of the progressive probabilistic Hough transform.
///
/// - `rho_px` / `theta_rad`: accumulator resolution in distance and angle.
/// - `threshold`: minimum number of votes before a line is traced.
/// - `min_line_length_px`: traced segments shorter than this (along their
///   dominant axis) are dropped.
/// - `max_line_gap_px`: longest run of unset pixels bridged while tracing.
/// - `seed`: seed of the pixel sampling order; a fixed seed keeps the output
///   reproducible for identical input.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoughOptions {
    pub rho_px: f32,
    pub theta_rad: f32,
    pub threshold: u32,
    pub min_line_length_px: u32,
    pub max_line_gap_px: u32,
    pub seed: u64,
}

impl Default for HoughOptions {
    fn default() -> Self {
        Self {
            rho_px: 2.0,
            theta_rad: std::f32::consts::PI / 180.0,
            threshold: 20,
            min_line_length_px: 10,
            max_line_gap_px: 20,
            seed: u64::MAX,
        }
    }
}
