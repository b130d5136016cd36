//! Region-of-interest restriction.
//!
//! Lane markings seen by a forward-facing camera occupy a wedge that starts at
//! the bottom corners of the frame and narrows toward the image centre. The
//! restrictor keeps mask pixels inside the triangle
//!
//! ```text
//! (inset, h - inset)  →  (w / 2, h / 2)  →  (w - inset, h - inset)
//! ```
//!
//! and zeroes everything else. Frames too small for the inset produce a
//! degenerate triangle; the output is then empty rather than an error.
use crate::features::{apply_mask, MASK_ON};
use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use log::warn;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiOptions {
    /// Distance in pixels from the left/right/bottom borders to the base
    /// vertices of the triangle.
    pub inset_px: i32,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self { inset_px: 50 }
    }
}

/// Triangle vertices: bottom-left, apex, bottom-right.
pub fn roi_vertices(width: u32, height: u32, inset: i32) -> [[i32; 2]; 3] {
    let w = width as i32;
    let h = height as i32;
    [[inset, h - inset], [w / 2, h / 2], [w - inset, h - inset]]
}

/// Filled region mask (`255` inside the triangle, `0` outside).
pub fn roi_mask(width: u32, height: u32, opts: &RoiOptions) -> GrayImage {
    let mut mask = GrayImage::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }
    let vertices = roi_vertices(width, height, opts.inset_px);
    if twice_area(&vertices) == 0 {
        warn!(
            "ROI triangle {:?} is degenerate for a {}x{} frame; masking everything",
            vertices, width, height
        );
        return mask;
    }
    let poly: Vec<Point<i32>> = vertices.iter().map(|v| Point::new(v[0], v[1])).collect();
    draw_polygon_mut(&mut mask, &poly, Luma([MASK_ON]));
    mask
}

/// Zero every pixel of `mask` outside the region of interest.
pub fn restrict_to_roi(mask: &GrayImage, opts: &RoiOptions) -> GrayImage {
    let region = roi_mask(mask.width(), mask.height(), opts);
    apply_mask(mask, &region)
}

fn twice_area(v: &[[i32; 2]; 3]) -> i64 {
    let (ax, ay) = (v[0][0] as i64, v[0][1] as i64);
    let (bx, by) = (v[1][0] as i64, v[1][1] as i64);
    let (cx, cy) = (v[2][0] as i64, v[2][1] as i64);
    ((bx - ax) * (cy - ay) - (by - ay) * (cx - ax)).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::count_nonzero;

    #[test]
    fn vertices_follow_frame_dimensions() {
        assert_eq!(
            roi_vertices(640, 480, 50),
            [[50, 430], [320, 240], [590, 430]]
        );
    }

    #[test]
    fn pixels_outside_triangle_are_zeroed() {
        let full = GrayImage::from_pixel(200, 200, Luma([MASK_ON]));
        let restricted = restrict_to_roi(&full, &RoiOptions::default());
        assert_eq!(restricted.dimensions(), (200, 200));
        // Apex region and bottom centre are inside.
        assert_eq!(restricted.get_pixel(100, 110)[0], MASK_ON);
        assert_eq!(restricted.get_pixel(100, 145)[0], MASK_ON);
        // Sky, corners and the strip below the base are outside.
        assert_eq!(restricted.get_pixel(100, 20)[0], 0);
        assert_eq!(restricted.get_pixel(5, 195)[0], 0);
        assert_eq!(restricted.get_pixel(195, 195)[0], 0);
        assert_eq!(restricted.get_pixel(100, 190)[0], 0);
    }

    #[test]
    fn input_values_inside_region_are_preserved() {
        let src = GrayImage::from_pixel(200, 200, Luma([77]));
        let restricted = restrict_to_roi(&src, &RoiOptions::default());
        assert_eq!(restricted.get_pixel(100, 130)[0], 77);
    }

    #[test]
    fn degenerate_triangle_masks_everything() {
        // 100x100 with a 50 px inset collapses all three vertices onto (50, 50).
        let full = GrayImage::from_pixel(100, 100, Luma([MASK_ON]));
        let restricted = restrict_to_roi(&full, &RoiOptions::default());
        assert_eq!(restricted.dimensions(), (100, 100));
        assert_eq!(count_nonzero(&restricted), 0);
    }

    #[test]
    fn zero_sized_mask_is_passed_through() {
        let empty = GrayImage::new(0, 0);
        assert_eq!(
            restrict_to_roi(&empty, &RoiOptions::default()).dimensions(),
            (0, 0)
        );
    }
}
