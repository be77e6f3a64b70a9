//! Consensus scoring by inlier count.

use crate::core::Distance;

/// Counts the samples whose residual under a candidate model is strictly
/// below the tolerance.
///
/// Boundary-equal residuals are *not* inliers; with a zero tolerance no
/// sample can qualify.
#[derive(Debug, Clone, Copy)]
pub struct InlierCountScoring {
    tolerance: f64,
}

impl InlierCountScoring {
    pub fn new(tolerance: f64) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Score `model` against the full dataset, filling `inliers_out` with
    /// the indices of the consensus set. Returns the inlier count.
    pub fn score<T, M, D>(
        &self,
        distance: &D,
        data: &[T],
        model: &M,
        inliers_out: &mut Vec<usize>,
    ) -> usize
    where
        D: Distance<T, M>,
    {
        inliers_out.clear();
        for (i, sample) in data.iter().enumerate() {
            if distance.distance(sample, model) < self.tolerance {
                inliers_out.push(i);
            }
        }
        inliers_out.len()
    }
}
