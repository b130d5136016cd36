//! Lane overlay rendering.
//!
//! The lane quadrilateral `(right_near, right_far, left_far, left_near)` is
//! filled and alpha-blended over the frame, then both boundary lines are
//! stroked on top with anti-aliased rims. Lane points may lie far outside the
//! frame, so all geometry is clipped to the image rectangle before
//! rasterization.
use crate::types::LaneResult;
use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::pixelops::interpolate;
use imageproc::point::Point;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    pub fill_color: [u8; 3],
    /// Weight of the fill color in the blend, in `[0, 1]`.
    pub alpha: f32,
    pub line_color: [u8; 3],
    pub line_thickness: u32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            fill_color: [0, 0, 0],
            alpha: 0.3,
            line_color: [255, 0, 0],
            line_thickness: 7,
        }
    }
}

/// Copy of `frame` with the lane area and boundaries drawn in.
///
/// [`LaneResult::NOT_FOUND`] leaves the copy untouched.
pub fn draw_lanes(frame: &RgbImage, lanes: &LaneResult, opts: &OverlayOptions) -> RgbImage {
    let mut out = frame.clone();
    if !lanes.is_found() || frame.width() == 0 || frame.height() == 0 {
        return out;
    }
    fill_blended(&mut out, &lanes.polygon(), opts);
    stroke(&mut out, lanes.right_near, lanes.right_far, opts);
    stroke(&mut out, lanes.left_near, lanes.left_far, opts);
    out
}

fn fill_blended(out: &mut RgbImage, polygon: &[[i32; 2]], opts: &OverlayOptions) {
    let (w, h) = out.dimensions();
    let poly: Vec<[f64; 2]> = polygon.iter().map(|p| [p[0] as f64, p[1] as f64]).collect();
    let clipped = clip_polygon(&poly, (w - 1) as f64, (h - 1) as f64);

    let mut vertices: Vec<Point<i32>> = Vec::with_capacity(clipped.len());
    for p in clipped {
        let v = Point::new(p[0].round() as i32, p[1].round() as i32);
        if vertices.last() != Some(&v) {
            vertices.push(v);
        }
    }
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }
    if vertices.len() < 3 {
        return;
    }

    let mut coverage = GrayImage::new(w, h);
    draw_polygon_mut(&mut coverage, &vertices, Luma([255]));

    let alpha = opts.alpha.clamp(0.0, 1.0);
    for (px, cov) in out.pixels_mut().zip(coverage.pixels()) {
        if cov.0[0] == 0 {
            continue;
        }
        for (c, &fill) in px.0.iter_mut().zip(opts.fill_color.iter()) {
            let blended = *c as f32 * (1.0 - alpha) + fill as f32 * alpha;
            *c = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
}

fn stroke(out: &mut RgbImage, from: [i32; 2], to: [i32; 2], opts: &OverlayOptions) {
    let thickness = opts.line_thickness.max(1) as f64;
    let (w, h) = out.dimensions();
    let pad = thickness;
    let Some((a, b)) = clip_segment(
        [from[0] as f64, from[1] as f64],
        [to[0] as f64, to[1] as f64],
        [-pad, -pad],
        [w as f64 - 1.0 + pad, h as f64 - 1.0 + pad],
    ) else {
        return;
    };

    let (dx, dy) = (b[0] - a[0], b[1] - a[1]);
    let len = dx.hypot(dy);
    let normal = if len > 0.0 {
        [-dy / len, dx / len]
    } else {
        [0.0, 0.0]
    };
    let color = Rgb(opts.line_color);
    // Half-pixel steps across the stroke leave no gaps on diagonals.
    let steps = (thickness * 2.0) as usize - 1;
    for k in 0..steps {
        let off = k as f64 * 0.5 - (thickness - 1.0) / 2.0;
        let start = ((a[0] + normal[0] * off) as f32, (a[1] + normal[1] * off) as f32);
        let end = ((b[0] + normal[0] * off) as f32, (b[1] + normal[1] * off) as f32);
        draw_line_segment_mut(out, start, end, color);
    }
    // Anti-aliased rims on both sides of the solid core.
    for side in [-1.0, 1.0] {
        let off = side * thickness / 2.0;
        let start = (
            (a[0] + normal[0] * off).round() as i32,
            (a[1] + normal[1] * off).round() as i32,
        );
        let end = (
            (b[0] + normal[0] * off).round() as i32,
            (b[1] + normal[1] * off).round() as i32,
        );
        draw_antialiased_line_segment_mut(out, start, end, color, interpolate);
    }
}

/// Sutherland–Hodgman clip of a polygon to `[0, max_x] × [0, max_y]`.
fn clip_polygon(poly: &[[f64; 2]], max_x: f64, max_y: f64) -> Vec<[f64; 2]> {
    let mut out = poly.to_vec();
    for (axis, bound, keep_above) in [
        (0, 0.0, true),
        (0, max_x, false),
        (1, 0.0, true),
        (1, max_y, false),
    ] {
        if out.is_empty() {
            break;
        }
        out = clip_half_plane(&out, axis, bound, keep_above);
    }
    out
}

fn clip_half_plane(poly: &[[f64; 2]], axis: usize, bound: f64, keep_above: bool) -> Vec<[f64; 2]> {
    let inside = |p: &[f64; 2]| {
        if keep_above {
            p[axis] >= bound
        } else {
            p[axis] <= bound
        }
    };
    let crossing = |a: &[f64; 2], b: &[f64; 2]| {
        let t = (bound - a[axis]) / (b[axis] - a[axis]);
        [a[0] + t * (b[0] - a[0]), a[1] + t * (b[1] - a[1])]
    };

    let mut out = Vec::with_capacity(poly.len() + 2);
    for (i, cur) in poly.iter().enumerate() {
        let prev = &poly[(i + poly.len() - 1) % poly.len()];
        match (inside(prev), inside(cur)) {
            (true, true) => out.push(*cur),
            (true, false) => out.push(crossing(prev, cur)),
            (false, true) => {
                out.push(crossing(prev, cur));
                out.push(*cur);
            }
            (false, false) => {}
        }
    }
    out
}

/// Liang–Barsky clip of segment `a–b` to the box `[min, max]`.
fn clip_segment(
    a: [f64; 2],
    b: [f64; 2],
    min: [f64; 2],
    max: [f64; 2],
) -> Option<([f64; 2], [f64; 2])> {
    let d = [b[0] - a[0], b[1] - a[1]];
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;
    for axis in 0..2 {
        for (p, q) in [(-d[axis], a[axis] - min[axis]), (d[axis], max[axis] - a[axis])] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }
    }
    Some((
        [a[0] + t0 * d[0], a[1] + t0 * d[1]],
        [a[0] + t1 * d[0], a[1] + t1 * d[1]],
    ))
}
