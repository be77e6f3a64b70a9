//! 2D line fitting from point pairs.
//!
//! Capabilities for fitting [`Line`] models to `Point2<f64>` samples: the
//! two-point minimal estimator, the perpendicular point-to-line distance,
//! and a degeneracy test rejecting pairs that would produce a vertical or
//! undefined line. Also provides a total-least-squares fit over a full
//! point set for baseline comparisons.

use nalgebra::Point2;

use crate::core::{DegeneracyTest, Distance, Estimator};
use crate::models::Line;

/// Spread below which two x coordinates count as equal.
const COINCIDENCE_EPSILON: f64 = 1e-10;

/// Minimal two-point line estimator.
///
/// Only defined for pairs that pass [`VerticalOrCoincident`]: a zero x
/// spread would divide by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineEstimator;

impl Estimator<Point2<f64>> for LineEstimator {
    type Model = Line;

    fn sample_size(&self) -> usize {
        2
    }

    fn estimate(&self, data: &[Point2<f64>], sample: &[usize]) -> Line {
        let p0 = data[sample[0]];
        let p1 = data[sample[1]];
        let slope = (p1.y - p0.y) / (p1.x - p0.x);
        Line::new(slope, p0.y - slope * p0.x)
    }
}

/// Perpendicular distance from a point to a line in slope-intercept form:
/// `|y - slope * x - intercept| / sqrt(1 + slope^2)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerpendicularDistance;

impl Distance<Point2<f64>, Line> for PerpendicularDistance {
    fn distance(&self, sample: &Point2<f64>, model: &Line) -> f64 {
        (sample.y - model.slope * sample.x - model.intercept).abs()
            / (1.0 + model.slope * model.slope).sqrt()
    }
}

/// Rejects subsets whose x spread collapses: coincident points or a
/// vertical configuration, neither of which determines a slope-intercept
/// line.
#[derive(Debug, Clone, Copy)]
pub struct VerticalOrCoincident {
    epsilon: f64,
}

impl VerticalOrCoincident {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for VerticalOrCoincident {
    fn default() -> Self {
        Self::new(COINCIDENCE_EPSILON)
    }
}

impl DegeneracyTest<Point2<f64>> for VerticalOrCoincident {
    fn is_degenerate(&self, data: &[Point2<f64>], sample: &[usize]) -> bool {
        for (k, &i) in sample.iter().enumerate() {
            for &j in &sample[k + 1..] {
                if (data[i].x - data[j].x).abs() < self.epsilon {
                    return true;
                }
            }
        }
        false
    }
}

/// Total-least-squares line through all `points`, minimizing perpendicular
/// distances via the smallest-eigenvalue eigenvector of the 2x2 covariance
/// matrix.
///
/// Returns `None` when the best-fit line is vertical (or the points do not
/// determine a line at all), since that has no slope-intercept form.
pub fn least_squares_fit(points: &[Point2<f64>]) -> Option<Line> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let cx = points.iter().map(|p| p.x).sum::<f64>() / n;
    let cy = points.iter().map(|p| p.y).sum::<f64>() / n;

    let mut cov_xx = 0.0;
    let mut cov_xy = 0.0;
    let mut cov_yy = 0.0;
    for p in points {
        let dx = p.x - cx;
        let dy = p.y - cy;
        cov_xx += dx * dx;
        cov_xy += dx * dy;
        cov_yy += dy * dy;
    }

    // Line normal (a, b) is the eigenvector of the smallest eigenvalue of
    // [[cov_xx, cov_xy], [cov_xy, cov_yy]].
    let trace = cov_xx + cov_yy;
    let det = cov_xx * cov_yy - cov_xy * cov_xy;
    let lambda_min = (trace - (trace * trace - 4.0 * det).max(0.0).sqrt()) / 2.0;

    let (a, b) = if cov_xy.abs() > COINCIDENCE_EPSILON {
        (cov_xy, lambda_min - cov_xx)
    } else if cov_xx <= cov_yy {
        // Least variance along x: the fit is a vertical line.
        (1.0, 0.0)
    } else {
        (0.0, 1.0)
    };

    let norm = (a * a + b * b).sqrt();
    if norm < COINCIDENCE_EPSILON {
        return None;
    }
    let a = a / norm;
    let b = b / norm;
    if b.abs() < 1e-9 {
        return None; // vertical, no slope-intercept form
    }

    // a*x + b*y + c = 0 through the centroid, converted to y = mx + k.
    let c = -(a * cx + b * cy);
    Some(Line::new(-a / b, -c / b))
}
