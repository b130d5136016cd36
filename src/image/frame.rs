//! Frame validation and the color conversions shared by the stages.
use crate::error::{LaneError, Result};
use image::{GrayImage, RgbImage};

/// Reject frames too small for the 3×3 edge operator before any stage runs.
pub fn validate_frame(frame: &RgbImage, min_side: u32) -> Result<()> {
    let (width, height) = frame.dimensions();
    if width < min_side.max(1) || height < min_side.max(1) {
        return Err(LaneError::InvalidFrame {
            width,
            height,
            min_side,
        });
    }
    Ok(())
}

/// Luma conversion (Rec. 709 weights, as implemented by `image`).
pub fn to_gray(frame: &RgbImage) -> GrayImage {
    image::imageops::grayscale(frame)
}

/// Number of set (non-zero) pixels in a mask.
pub fn count_nonzero(mask: &GrayImage) -> usize {
    mask.as_raw().iter().filter(|&&v| v != 0).count()
}
