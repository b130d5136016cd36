//! Color range masks and bitwise mask combination.
//!
//! Masks are single-channel images holding `255` for set pixels and `0`
//! elsewhere.
use image::{GrayImage, RgbImage};

pub const MASK_ON: u8 = 255;

/// Bitwise combination applied pixel by pixel to two masks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaskOp {
    And,
    Or,
}

/// Set pixels whose three channels all lie within `[low, high]`.
pub fn yellow_mask(frame: &RgbImage, low: [u8; 3], high: [u8; 3]) -> GrayImage {
    let (w, h) = frame.dimensions();
    let mut out = GrayImage::new(w, h);
    for (dst, src) in out.pixels_mut().zip(frame.pixels()) {
        let inside = src
            .0
            .iter()
            .zip(low.iter().zip(high.iter()))
            .all(|(&v, (&lo, &hi))| v >= lo && v <= hi);
        if inside {
            dst.0[0] = MASK_ON;
        }
    }
    out
}

/// Set pixels whose luma lies within `[low, high]`.
pub fn white_mask(gray: &GrayImage, low: u8, high: u8) -> GrayImage {
    let (w, h) = gray.dimensions();
    let mut out = GrayImage::new(w, h);
    for (dst, src) in out.pixels_mut().zip(gray.pixels()) {
        let v = src.0[0];
        if v >= low && v <= high {
            dst.0[0] = MASK_ON;
        }
    }
    out
}

/// Combine two same-size masks.
pub fn combine_masks(a: &GrayImage, b: &GrayImage, op: MaskOp) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions(), "mask sizes differ");
    let (w, h) = a.dimensions();
    let mut out = GrayImage::new(w, h);
    for (dst, (pa, pb)) in out.pixels_mut().zip(a.pixels().zip(b.pixels())) {
        let (va, vb) = (pa.0[0], pb.0[0]);
        dst.0[0] = match op {
            MaskOp::And => va & vb,
            MaskOp::Or => va | vb,
        };
    }
    out
}

/// Keep `gray` values where `mask` is set, zero elsewhere.
pub fn apply_mask(gray: &GrayImage, mask: &GrayImage) -> GrayImage {
    combine_masks(gray, mask, MaskOp::And)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn yellow_mask_accepts_yellow_and_rejects_blue() {
        let mut frame = RgbImage::new(2, 1);
        frame.put_pixel(0, 0, Rgb([230, 200, 20]));
        frame.put_pixel(1, 0, Rgb([20, 60, 220]));
        let mask = yellow_mask(&frame, [60, 60, 0], [255, 255, 30]);
        assert_eq!(*mask.get_pixel(0, 0), Luma([MASK_ON]));
        assert_eq!(*mask.get_pixel(1, 0), Luma([0]));
    }

    #[test]
    fn white_mask_bounds_are_inclusive() {
        let gray = GrayImage::from_raw(3, 1, vec![199, 200, 255]).unwrap();
        let mask = white_mask(&gray, 200, 255);
        assert_eq!(mask.as_raw(), &vec![0, MASK_ON, MASK_ON]);
    }

    #[test]
    fn or_and_combinations() {
        let a = GrayImage::from_raw(3, 1, vec![255, 0, 0]).unwrap();
        let b = GrayImage::from_raw(3, 1, vec![255, 255, 0]).unwrap();
        assert_eq!(
            combine_masks(&a, &b, MaskOp::Or).as_raw(),
            &vec![255, 255, 0]
        );
        assert_eq!(combine_masks(&a, &b, MaskOp::And).as_raw(), &vec![255, 0, 0]);
    }

    #[test]
    fn apply_mask_keeps_original_intensity() {
        let gray = GrayImage::from_raw(2, 1, vec![123, 210]).unwrap();
        let mask = GrayImage::from_raw(2, 1, vec![MASK_ON, 0]).unwrap();
        assert_eq!(apply_mask(&gray, &mask).as_raw(), &vec![123, 0]);
    }
}
