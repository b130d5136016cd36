//! Smoothing and Canny edge detection on the color-filtered gray image.
use image::GrayImage;
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Gaussian smoothing; `None` or a non-positive sigma returns a copy.
pub fn smooth(gray: &GrayImage, sigma: Option<f32>) -> GrayImage {
    match sigma {
        Some(s) if s > 0.0 && s.is_finite() && !is_empty(gray) => gaussian_blur_f32(gray, s),
        _ => gray.clone(),
    }
}

/// Binary edge map (`0`/`255`) with hysteresis thresholds `low`/`high`.
pub fn detect_edges(gray: &GrayImage, low: f32, high: f32) -> GrayImage {
    if is_empty(gray) {
        return GrayImage::new(gray.width(), gray.height());
    }
    canny(gray, low.min(high), high.max(low))
}

fn is_empty(gray: &GrayImage) -> bool {
    gray.width() == 0 || gray.height() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::count_nonzero;
    use image::Luma;

    fn square(size: u32, lo: u32, hi: u32) -> GrayImage {
        GrayImage::from_fn(size, size, |x, y| {
            if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
                Luma([255])
            } else {
                Luma([0])
            }
        })
    }

    #[test]
    fn flat_image_has_no_edges() {
        let gray = GrayImage::from_pixel(32, 32, Luma([90]));
        assert_eq!(count_nonzero(&detect_edges(&gray, 200.0, 300.0)), 0);
    }

    #[test]
    fn square_boundary_is_detected_but_not_its_interior() {
        let gray = square(64, 20, 44);
        let edges = detect_edges(&smooth(&gray, Some(1.1)), 200.0, 300.0);
        assert!(count_nonzero(&edges) > 40);
        assert_eq!(*edges.get_pixel(32, 32), Luma([0]));
        assert_eq!(*edges.get_pixel(5, 5), Luma([0]));
    }

    #[test]
    fn empty_image_yields_empty_mask() {
        let gray = GrayImage::new(0, 0);
        assert_eq!(detect_edges(&gray, 1.0, 2.0).dimensions(), (0, 0));
        assert_eq!(smooth(&gray, Some(1.0)).dimensions(), (0, 0));
    }
}
