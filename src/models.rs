//! Model types for the built-in estimators.

use std::fmt;

/// 2D line in slope-intercept form, `y = slope * x + intercept`.
///
/// Vertical lines are not representable in this form; the line estimator's
/// degeneracy test filters the subsets that would produce them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub slope: f64,
    pub intercept: f64,
}

impl Line {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// The line's y value at `x`.
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.4}x + {:.4}", self.slope, self.intercept)
    }
}
