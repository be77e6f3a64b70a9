//! Error types for RANSAC configuration and fitting.

use thiserror::Error;

/// Errors surfaced by engine construction and fitting.
///
/// Configuration variants are reported at construction time, before any
/// trial runs. [`RansacError::NoConsensus`] is the one fitting-time error:
/// it replaces the ambiguous "default model with zero inliers" outcome with
/// an explicit signal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RansacError {
    #[error("minimal sample size {sample_size} exceeds dataset size {dataset_len}")]
    SampleSizeExceedsData {
        sample_size: usize,
        dataset_len: usize,
    },
    #[error("minimal sample size must be at least 1")]
    ZeroSampleSize,
    #[error("configured sample size {configured} does not match the estimator's minimal size {expected}")]
    SampleSizeMismatch { configured: usize, expected: usize },
    #[error("confidence must lie in the open interval (0, 1), got {0}")]
    ConfidenceOutOfRange(f64),
    #[error("inlier proportion must lie in the open interval (0, 1), got {0}")]
    InlierProportionOutOfRange(f64),
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("no model reached consensus: every trial was degenerate or scored zero inliers")]
    NoConsensus,
}
