//! High-level entry points for the built-in estimators.

use nalgebra::Point2;

use crate::core::{Consensus, Ransac};
use crate::error::RansacError;
use crate::estimators::line::{LineEstimator, PerpendicularDistance, VerticalOrCoincident};
use crate::models::Line;
use crate::settings::RansacSettings;

/// Fully wired engine for robust 2D line fitting.
pub type LineRansac = Ransac<Point2<f64>, LineEstimator, PerpendicularDistance, VerticalOrCoincident>;

fn line_settings(tolerance: f64, settings: Option<RansacSettings>) -> RansacSettings {
    RansacSettings {
        tolerance,
        sample_size: 2,
        ..settings.unwrap_or_default()
    }
}

/// Robustly fit a line to 2D points.
///
/// Wires the two-point estimator, the perpendicular distance, and the
/// vertical/coincident degeneracy test into a [`Ransac`] engine and runs
/// it. `settings` supplies confidence, iteration cap, and the assumed
/// inlier proportion; `tolerance` and the minimal sample size of 2 are
/// fixed by the call.
///
/// # Example
/// ```
/// use consensus::fit_line;
/// use nalgebra::Point2;
///
/// let points: Vec<_> = (0..50)
///     .map(|i| Point2::new(i as f64, 2.0 * i as f64 + 1.0))
///     .collect();
/// let consensus = fit_line(points, 0.1, None).unwrap();
/// assert_eq!(consensus.inlier_count(), 50);
/// ```
pub fn fit_line(
    points: Vec<Point2<f64>>,
    tolerance: f64,
    settings: Option<RansacSettings>,
) -> Result<Consensus<Line>, RansacError> {
    line_ransac(points, tolerance, settings)?.fit()
}

/// Like [`fit_line`] but reproducible under a fixed seed.
pub fn fit_line_seeded(
    points: Vec<Point2<f64>>,
    tolerance: f64,
    settings: Option<RansacSettings>,
    seed: u64,
) -> Result<Consensus<Line>, RansacError> {
    Ransac::with_seed(
        line_settings(tolerance, settings),
        LineEstimator,
        PerpendicularDistance,
        Some(VerticalOrCoincident::default()),
        points,
        seed,
    )?
    .fit()
}

/// Build a line-fitting engine without running it, for callers that want
/// to inspect the trial budget or fit repeatedly.
pub fn line_ransac(
    points: Vec<Point2<f64>>,
    tolerance: f64,
    settings: Option<RansacSettings>,
) -> Result<LineRansac, RansacError> {
    Ransac::new(
        line_settings(tolerance, settings),
        LineEstimator,
        PerpendicularDistance,
        Some(VerticalOrCoincident::default()),
        points,
    )
}
