use image::{Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([250, 250, 250]);
pub const YELLOW: Rgb<u8> = Rgb([255, 230, 20]);
pub const ASPHALT: Rgb<u8> = Rgb([40, 40, 40]);

/// Paints a stroke of half-width `radius` between `a` and `b`.
pub fn paint_stroke(img: &mut RgbImage, a: [f32; 2], b: [f32; 2], radius: f32, color: Rgb<u8>) {
    assert!(radius > 0.0, "stroke radius must be positive");
    let (w, h) = img.dimensions();
    let d = [b[0] - a[0], b[1] - a[1]];
    let len2 = d[0] * d[0] + d[1] * d[1];
    let x0 = (a[0].min(b[0]) - radius).floor().max(0.0) as u32;
    let x1 = ((a[0].max(b[0]) + radius).ceil() as u32).min(w - 1);
    let y0 = (a[1].min(b[1]) - radius).floor().max(0.0) as u32;
    let y1 = ((a[1].max(b[1]) + radius).ceil() as u32).min(h - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = [x as f32 - a[0], y as f32 - a[1]];
            let t = if len2 > 0.0 {
                ((p[0] * d[0] + p[1] * d[1]) / len2).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let q = [p[0] - t * d[0], p[1] - t * d[1]];
            if q[0] * q[0] + q[1] * q[1] <= radius * radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// 640x480 road with a yellow left boundary from (100, 479) to (300, 260)
/// and a white right boundary from (540, 479) to (340, 260).
pub fn two_lane_road() -> RgbImage {
    let mut img = RgbImage::from_pixel(640, 480, ASPHALT);
    paint_stroke(&mut img, [100.0, 479.0], [300.0, 260.0], 4.0, YELLOW);
    paint_stroke(&mut img, [540.0, 479.0], [340.0, 260.0], 4.0, WHITE);
    img
}

/// Expected x of the painted left boundary centreline at row `y`.
pub fn left_centre_x(y: f32) -> f32 {
    100.0 + (479.0 - y) * 200.0 / 219.0
}

/// Expected x of the painted right boundary centreline at row `y`.
pub fn right_centre_x(y: f32) -> f32 {
    540.0 - (479.0 - y) * 200.0 / 219.0
}
