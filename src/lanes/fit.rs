//! L2 line fit through the endpoints of a lane group.
//!
//! Minimizes the sum of squared perpendicular distances: the line passes
//! through the centroid along the principal eigenvector of the 2×2 point
//! covariance.
use nalgebra::{Matrix2, SymmetricEigen};
use serde::{Deserialize, Serialize};

/// Infinite line given by a slope and one point on it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FittedLine {
    /// `dy / dx`; infinite for a vertical fit.
    pub slope: f64,
    /// Reference point: centroid of the fitted points snapped to whole pixels.
    pub point: [f64; 2],
    /// Unit direction returned by the fit.
    pub direction: [f64; 2],
}

impl FittedLine {
    /// `x` where the line crosses row `y`.
    pub fn x_at(&self, y: f64) -> f64 {
        (y - self.point[1]) / self.slope + self.point[0]
    }
}

/// Fit a line through `points`; `None` for an empty set.
///
/// Degenerate inputs (a single point, repeated points) still produce a line:
/// the direction then defaults to the x axis. The centroid is rounded half to
/// even before it becomes the reference point, so projections are taken from a
/// pixel position.
pub fn fit_line(points: &[[f64; 2]]) -> Option<FittedLine> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p[0], sy + p[1]));
    let cx = sx / n;
    let cy = sy / n;

    let (mut cxx, mut cyy, mut cxy) = (0.0, 0.0, 0.0);
    for p in points {
        let dx = p[0] - cx;
        let dy = p[1] - cy;
        cxx += dx * dx;
        cyy += dy * dy;
        cxy += dx * dy;
    }
    let cov = Matrix2::new(cxx / n, cxy / n, cxy / n, cyy / n);
    let eig = SymmetricEigen::new(cov);
    let major = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
        eig.eigenvectors.column(0)
    } else {
        eig.eigenvectors.column(1)
    };

    let norm = major[0].hypot(major[1]);
    let direction = if norm.is_finite() && norm > 0.0 {
        [major[0] / norm, major[1] / norm]
    } else {
        [1.0, 0.0]
    };

    Some(FittedLine {
        slope: direction[1] / direction[0],
        point: [cx.round_ties_even(), cy.round_ties_even()],
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_no_line() {
        assert!(fit_line(&[]).is_none());
    }

    #[test]
    fn exact_line_is_recovered() {
        // y = 0.5 x - 5
        let pts: Vec<[f64; 2]> = (0..10)
            .map(|i| {
                let x = 20.0 + 7.0 * i as f64;
                [x, 0.5 * x - 5.0]
            })
            .collect();
        let line = fit_line(&pts).unwrap();
        assert!((line.slope - 0.5).abs() < 1e-9, "slope {}", line.slope);
        assert!((line.x_at(45.0) - 100.0).abs() < 1e-6);
        let dir_norm = line.direction[0].hypot(line.direction[1]);
        assert!((dir_norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn fit_is_symmetric_for_noisy_points() {
        // Points alternate ±1 around y = -x + 100; the fit must average them out.
        let pts: Vec<[f64; 2]> = (0..20)
            .map(|i| {
                let x = i as f64 * 3.0;
                let noise = if i % 2 == 0 { 1.0 } else { -1.0 };
                [x, -x + 100.0 + noise]
            })
            .collect();
        let line = fit_line(&pts).unwrap();
        assert!((line.slope + 1.0).abs() < 0.02, "slope {}", line.slope);
    }

    #[test]
    fn vertical_points_give_infinite_slope_and_stable_projection() {
        let pts = [[40.0, 0.0], [40.0, 10.0], [40.0, 20.0]];
        let line = fit_line(&pts).unwrap();
        assert!(line.slope.abs() > 1e6 || line.slope.is_infinite());
        assert!((line.x_at(100.0) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn reference_point_is_snapped_to_pixels() {
        // Centroid (50.4, 139.6) on a line of slope 1.
        let pts = [[40.4, 129.6], [60.4, 149.6]];
        let line = fit_line(&pts).unwrap();
        assert_eq!(line.point, [50.0, 140.0]);
        assert!((line.slope - 1.0).abs() < 1e-9);
        assert!((line.x_at(150.0) - 60.0).abs() < 1e-6);

        // Ties go to the even neighbour.
        let tie = fit_line(&[[50.0, 139.0], [51.0, 140.0]]).unwrap();
        assert_eq!(tie.point, [50.0, 140.0]);
    }

    #[test]
    fn single_point_still_fits() {
        let line = fit_line(&[[3.0, 4.0]]).unwrap();
        assert_eq!(line.point, [3.0, 4.0]);
    }
}
