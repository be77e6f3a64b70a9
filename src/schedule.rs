//! Theoretical trial-count derivation.

/// Number of trials needed to draw at least one all-inlier minimal subset
/// with probability `confidence`, assuming `inlier_proportion` of the data
/// are inliers and each subset holds `sample_size` samples.
///
/// The standard formula `ceil(log(1 - p) / log(1 - w^k))`. Callers validate
/// `confidence` and `inlier_proportion` against the open interval `(0, 1)`
/// beforehand; the guards here only catch floating-point underflow of
/// `w^k`, where the formula stops being informative and the answer is
/// clamped to `usize::MAX` (the hard iteration cap takes over).
pub fn required_trials(confidence: f64, inlier_proportion: f64, sample_size: usize) -> usize {
    let p_good_sample = inlier_proportion.powi(sample_size as i32);
    if p_good_sample <= 0.0 {
        return usize::MAX;
    }
    if p_good_sample >= 1.0 {
        return 1;
    }

    let log_one_minus_conf = (1.0 - confidence).ln();
    let log_one_minus_p = (1.0 - p_good_sample).ln();
    if !log_one_minus_conf.is_finite() || !log_one_minus_p.is_finite() {
        return usize::MAX;
    }

    (log_one_minus_conf / log_one_minus_p).ceil().max(1.0) as usize
}
