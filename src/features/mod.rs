//! Feature extraction: color frame → binary mask of lane-like edges.
//!
//! The extractor combines three views of the frame:
//!
//! - a yellow color-range mask evaluated on RGB,
//! - a white brightness mask evaluated on luma,
//! - Canny edges of the luma image restricted to the union of both masks.
//!
//! Pixels outside the yellow/white union are zeroed before edge detection, so
//! the output only holds edges of lane-colored paint.

mod color;
mod edges;
mod options;

pub use color::{apply_mask, combine_masks, white_mask, yellow_mask, MaskOp, MASK_ON};
pub use edges::{detect_edges, smooth};
pub use options::FeatureOptions;

use crate::image::to_gray;
use image::{GrayImage, RgbImage};

/// Intermediate maps produced while extracting features.
#[derive(Clone, Debug)]
pub struct FeatureMaps {
    /// Union of the yellow and white masks.
    pub color_mask: GrayImage,
    /// Final binary edge mask.
    pub edges: GrayImage,
}

/// Run the extractor and keep the intermediate color mask.
pub fn extract_feature_maps(frame: &RgbImage, opts: &FeatureOptions) -> FeatureMaps {
    let gray = to_gray(frame);
    let yellow = yellow_mask(frame, opts.yellow_low, opts.yellow_high);
    let white = white_mask(&gray, opts.white_low, opts.white_high);
    let color_mask = combine_masks(&yellow, &white, MaskOp::Or);
    let lane_colored = apply_mask(&gray, &color_mask);
    let smoothed = smooth(&lane_colored, opts.blur_sigma);
    let edges = detect_edges(&smoothed, opts.canny_low, opts.canny_high);
    FeatureMaps { color_mask, edges }
}

/// Binary feature mask with the same dimensions as `frame`.
pub fn extract_features(frame: &RgbImage, opts: &FeatureOptions) -> GrayImage {
    extract_feature_maps(frame, opts).edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::count_nonzero;
    use image::{Luma, Rgb};

    #[test]
    fn dark_frame_has_no_features() {
        let frame = RgbImage::from_pixel(40, 30, Rgb([40, 40, 40]));
        let mask = extract_features(&frame, &FeatureOptions::default());
        assert_eq!(mask.dimensions(), (40, 30));
        assert_eq!(count_nonzero(&mask), 0);
    }

    #[test]
    fn grey_paint_is_ignored_but_white_paint_is_kept() {
        let mut frame = RgbImage::from_pixel(64, 64, Rgb([30, 30, 30]));
        for y in 10..54 {
            for x in 10..20 {
                frame.put_pixel(x, y, Rgb([140, 140, 140]));
            }
            for x in 40..50 {
                frame.put_pixel(x, y, Rgb([250, 250, 250]));
            }
        }
        let maps = extract_feature_maps(&frame, &FeatureOptions::default());
        assert_eq!(*maps.color_mask.get_pixel(15, 30), Luma([0]));
        assert_eq!(*maps.color_mask.get_pixel(45, 30), Luma([MASK_ON]));

        let left_half = (0..64)
            .flat_map(|y| (0..30).map(move |x| (x, y)))
            .filter(|&(x, y)| maps.edges.get_pixel(x, y)[0] != 0)
            .count();
        assert_eq!(left_half, 0, "grey stripe must not produce edges");
        assert!(count_nonzero(&maps.edges) > 0, "white stripe must produce edges");
    }
}
