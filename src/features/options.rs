use serde::{Deserialize, Serialize};

/// Thresholds for the color and edge masks of the feature extractor.
///
/// - `yellow_low` / `yellow_high`: inclusive per-channel RGB bounds for yellow
///   paint (strong red and green, little blue).
/// - `white_low` / `white_high`: inclusive luma bounds for white paint.
/// - `blur_sigma`: Gaussian smoothing applied before edge detection; `None`
///   skips it. The default matches a 5×5 kernel.
/// - `canny_low` / `canny_high`: hysteresis thresholds on the gradient
///   magnitude.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureOptions {
    pub yellow_low: [u8; 3],
    pub yellow_high: [u8; 3],
    pub white_low: u8,
    pub white_high: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_sigma: Option<f32>,
    pub canny_low: f32,
    pub canny_high: f32,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            yellow_low: [60, 60, 0],
            yellow_high: [255, 255, 30],
            white_low: 200,
            white_high: 255,
            blur_sigma: Some(1.1),
            canny_low: 200.0,
            canny_high: 300.0,
        }
    }
}
