use super::options::HoughOptions;
use super::segment::Segment;
use image::GrayImage;

/// Fixed-point precision used when stepping along a traced line. Walk state
/// is 64-bit so the shifted coordinate cannot overflow on tall or wide masks.
const SHIFT: i64 = 16;

/// Multiply-with-carry generator selecting the next pixel to vote with.
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { u64::MAX } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = (self.state as u32 as u64)
            .wrapping_mul(4_164_903_690)
            .wrapping_add(self.state >> 32);
        self.state as u32
    }

    fn below(&mut self, n: usize) -> usize {
        self.next_u32() as usize % n
    }
}

/// Stepping state along the direction of a detected line. The major axis
/// advances by whole pixels, the minor axis in `SHIFT` fixed point.
#[derive(Clone, Copy)]
struct Walk {
    x0: i64,
    y0: i64,
    dx0: i64,
    dy0: i64,
    x_major: bool,
}

impl Walk {
    #[inline]
    fn pixel(&self, px: i64, py: i64) -> (i64, i64) {
        if self.x_major {
            (px, py >> SHIFT)
        } else {
            (px >> SHIFT, py)
        }
    }

    #[inline]
    fn step(&self, k: usize) -> (i64, i64) {
        if k == 0 {
            (self.dx0, self.dy0)
        } else {
            (-self.dx0, -self.dy0)
        }
    }
}

pub(super) struct ProbabilisticHough {
    width: i64,
    height: i64,
    num_angle: usize,
    num_rho: usize,
    /// `(cos θ / ρ, sin θ / ρ)` per angle bin.
    trig: Vec<(f32, f32)>,
    accum: Vec<i32>,
    /// Pixels still available for voting or tracing.
    mask: Vec<u8>,
    points: Vec<(i64, i64)>,
    threshold: i32,
    line_length: i64,
    line_gap: i64,
    rng: SampleRng,
    segments: Vec<Segment>,
}

impl ProbabilisticHough {
    pub(super) fn new(image: &GrayImage, options: HoughOptions) -> Self {
        let width = i64::from(image.width());
        let height = i64::from(image.height());
        let rho = if options.rho_px.is_finite() && options.rho_px > 0.0 {
            options.rho_px
        } else {
            1.0
        };
        let theta = if options.theta_rad.is_finite() && options.theta_rad > 0.0 {
            options.theta_rad
        } else {
            std::f32::consts::PI / 180.0
        };
        let irho = 1.0 / rho;
        let num_angle = ((std::f32::consts::PI / theta).round() as usize).max(1);
        let num_rho = ((((width + height) * 2 + 1) as f32 / rho).round() as usize).max(1);
        let trig = (0..num_angle)
            .map(|n| {
                let angle = n as f32 * theta;
                (angle.cos() * irho, angle.sin() * irho)
            })
            .collect();

        let mut mask = vec![0u8; image.width() as usize * image.height() as usize];
        let mut points = Vec::new();
        for (x, y, px) in image.enumerate_pixels() {
            if px.0[0] != 0 {
                mask[y as usize * image.width() as usize + x as usize] = 1;
                points.push((i64::from(x), i64::from(y)));
            }
        }

        Self {
            width,
            height,
            num_angle,
            num_rho,
            trig,
            accum: vec![0; num_angle * num_rho],
            mask,
            points,
            threshold: options.threshold.clamp(1, i32::MAX as u32) as i32,
            line_length: i64::from(options.min_line_length_px),
            line_gap: i64::from(options.max_line_gap_px),
            rng: SampleRng::new(options.seed),
            segments: Vec::new(),
        }
    }

    pub(super) fn extract(mut self) -> Vec<Segment> {
        let mut count = self.points.len();
        while count > 0 {
            let idx = self.rng.below(count);
            let (x, y) = self.points[idx];
            self.points[idx] = self.points[count - 1];
            count -= 1;
            self.process_point(x, y);
        }
        self.segments
    }

    fn process_point(&mut self, x: i64, y: i64) {
        if self.mask[self.index(x, y)] == 0 {
            return;
        }
        let Some(best_angle) = self.vote(x, y) else {
            return;
        };

        let walk = self.walk_from(x, y, best_angle);
        let ends = [self.trace_end(&walk, 0), self.trace_end(&walk, 1)];
        let good_line = (ends[1].0 - ends[0].0).abs() >= self.line_length
            || (ends[1].1 - ends[0].1).abs() >= self.line_length;

        for (k, &end) in ends.iter().enumerate() {
            self.consume(&walk, k, end, good_line);
        }

        if good_line {
            self.segments.push(Segment::new(
                [ends[0].0 as i32, ends[0].1 as i32],
                [ends[1].0 as i32, ends[1].1 as i32],
            ));
        }
    }

    /// Add the pixel's votes and return the strongest angle bin once it
    /// reaches the threshold.
    fn vote(&mut self, x: i64, y: i64) -> Option<usize> {
        let mut max_val = self.threshold - 1;
        let mut max_n = 0;
        for n in 0..self.num_angle {
            let cell = n * self.num_rho + self.rho_index(x, y, n);
            self.accum[cell] += 1;
            if max_val < self.accum[cell] {
                max_val = self.accum[cell];
                max_n = n;
            }
        }
        (max_val >= self.threshold).then_some(max_n)
    }

    fn unvote(&mut self, x: i64, y: i64) {
        for n in 0..self.num_angle {
            let cell = n * self.num_rho + self.rho_index(x, y, n);
            self.accum[cell] -= 1;
        }
    }

    #[inline]
    fn rho_index(&self, x: i64, y: i64, n: usize) -> usize {
        let (c, s) = self.trig[n];
        let max = self.num_rho as i64 - 1;
        let r = (x as f32 * c + y as f32 * s).round() as i64 + max / 2;
        r.clamp(0, max) as usize
    }

    fn walk_from(&self, x: i64, y: i64, n: usize) -> Walk {
        let (c, s) = self.trig[n];
        let a = -s;
        let b = c;
        let unit = (1 << SHIFT) as f32;
        if a.abs() > b.abs() {
            Walk {
                x0: x,
                y0: (y << SHIFT) + (1 << (SHIFT - 1)),
                dx0: if a > 0.0 { 1 } else { -1 },
                dy0: (b * unit / a.abs()).round() as i64,
                x_major: true,
            }
        } else {
            Walk {
                x0: (x << SHIFT) + (1 << (SHIFT - 1)),
                y0: y,
                dx0: (a * unit / b.abs()).round() as i64,
                dy0: if b > 0.0 { 1 } else { -1 },
                x_major: false,
            }
        }
    }

    /// Follow the line in direction `k` until the frame border or a gap
    /// longer than `line_gap`; returns the last set pixel.
    fn trace_end(&self, walk: &Walk, k: usize) -> (i64, i64) {
        let (dx, dy) = walk.step(k);
        let (mut px, mut py) = (walk.x0, walk.y0);
        let mut end = walk.pixel(px, py);
        let mut gap = 0;
        loop {
            let (j, i) = walk.pixel(px, py);
            if !self.in_bounds(j, i) {
                break;
            }
            if self.mask[self.index(j, i)] != 0 {
                gap = 0;
                end = (j, i);
            } else {
                gap += 1;
                if gap > self.line_gap {
                    break;
                }
            }
            px += dx;
            py += dy;
        }
        end
    }

    /// Remove the traced pixels from the mask, retracting their votes when
    /// the line is accepted.
    fn consume(&mut self, walk: &Walk, k: usize, end: (i64, i64), good_line: bool) {
        let (dx, dy) = walk.step(k);
        let (mut px, mut py) = (walk.x0, walk.y0);
        loop {
            let (j, i) = walk.pixel(px, py);
            if !self.in_bounds(j, i) {
                break;
            }
            let idx = self.index(j, i);
            if self.mask[idx] != 0 {
                if good_line {
                    self.unvote(j, i);
                }
                self.mask[idx] = 0;
            }
            if (j, i) == end {
                break;
            }
            px += dx;
            py += dy;
        }
    }

    #[inline]
    fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
