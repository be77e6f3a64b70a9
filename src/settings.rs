//! RANSAC configuration.

use crate::error::RansacError;

/// Configuration for a [`Ransac`](crate::core::Ransac) engine.
///
/// The probability parameters live in the open interval `(0, 1)`; the
/// boundaries would make the theoretical trial-count formula degenerate
/// (zero or infinitely many trials), so they are rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RansacSettings {
    /// Desired probability that at least one trial draws an all-inlier
    /// minimal subset.
    pub confidence: f64,
    /// Hard cap on the number of trials. May truncate below the theoretical
    /// requirement; the engine then returns the best model found within the
    /// truncated budget.
    pub max_iterations: usize,
    /// Inlier threshold: a sample is an inlier when its residual is
    /// strictly below this value.
    pub tolerance: f64,
    /// Number of samples in a minimal subset.
    pub sample_size: usize,
    /// Assumed proportion of inliers in the dataset, used only to derive
    /// the theoretical trial count.
    pub inlier_proportion: f64,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            confidence: 0.99,
            max_iterations: 1000,
            tolerance: 1.0,
            sample_size: 2,
            inlier_proportion: 0.5,
        }
    }
}

impl RansacSettings {
    /// Check the settings against the dataset they will run over.
    pub fn validate(&self, dataset_len: usize) -> Result<(), RansacError> {
        if self.sample_size == 0 {
            return Err(RansacError::ZeroSampleSize);
        }
        if self.sample_size > dataset_len {
            return Err(RansacError::SampleSizeExceedsData {
                sample_size: self.sample_size,
                dataset_len,
            });
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(RansacError::ConfidenceOutOfRange(self.confidence));
        }
        if !(self.inlier_proportion > 0.0 && self.inlier_proportion < 1.0) {
            return Err(RansacError::InlierProportionOutOfRange(
                self.inlier_proportion,
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(RansacError::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}
