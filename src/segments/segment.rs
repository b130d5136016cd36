use serde::{Deserialize, Serialize};

/// Added to a zero run so vertical segments keep a finite slope.
pub const SLOPE_EPSILON: f64 = 1e-6;

/// Straight segment between two integer pixel positions `[x, y]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

impl Segment {
    pub const fn new(p0: [i32; 2], p1: [i32; 2]) -> Self {
        Self { p0, p1 }
    }

    /// `dy / dx` in image coordinates (y grows downwards).
    pub fn slope(&self) -> f64 {
        let rise = (self.p1[1] - self.p0[1]) as f64;
        let mut run = (self.p1[0] - self.p0[0]) as f64;
        if run == 0.0 {
            run = SLOPE_EPSILON;
        }
        rise / run
    }

    pub fn length(&self) -> f64 {
        let dx = (self.p1[0] - self.p0[0]) as f64;
        let dy = (self.p1[1] - self.p0[1]) as f64;
        dx.hypot(dy)
    }

    pub fn endpoints(&self) -> [[i32; 2]; 2] {
        [self.p0, self.p1]
    }
}
