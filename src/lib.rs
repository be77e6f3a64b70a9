//! # consensus — robust estimation with RANSAC
//!
//! `consensus` is a generic RANSAC engine: it repeatedly samples minimal
//! subsets of a noisy dataset, fits a candidate model to each subset, scores
//! candidates by counting inliers under a distance tolerance, and returns
//! the model with the largest consensus.
//!
//! ## Quick start
//!
//! ```rust
//! use consensus::fit_line;
//! use nalgebra::Point2;
//!
//! // Points on y = 2x + 1, plus a gross outlier.
//! let mut points: Vec<_> = (0..40)
//!     .map(|i| Point2::new(i as f64 * 0.25, 2.0 * (i as f64 * 0.25) + 1.0))
//!     .collect();
//! points.push(Point2::new(3.0, -50.0));
//!
//! let consensus = fit_line(points, 0.1, None).unwrap();
//! assert_eq!(consensus.inlier_count(), 40);
//! ```
//!
//! ## Extending the engine
//!
//! The engine is generic over the sample type and three injected
//! capabilities; implement them for your own models:
//!
//! - [`Estimator`](core::Estimator): fit a candidate model to a minimal
//!   subset (indices into the dataset).
//! - [`Distance`](core::Distance): non-negative residual of a sample under
//!   a model. Plain closures `Fn(&T, &M) -> f64` work directly.
//! - [`DegeneracyTest`](core::DegeneracyTest): optionally reject subsets
//!   that cannot determine a model; pass `None` to skip the check.
//!
//! Build a [`Ransac`](core::Ransac) from the capabilities, settings, and
//! dataset, then call [`fit`](core::Ransac::fit). A run with no consensus at
//! all (every trial degenerate or zero inliers) returns
//! [`RansacError::NoConsensus`] instead of a meaningless default model.
//!
//! ## Modules
//!
//! - [`core`]: capability traits and the `Ransac` engine
//! - [`repository`]: dataset ownership and subset draws
//! - [`scoring`]: inlier-count consensus scoring
//! - [`schedule`]: theoretical trial-count derivation
//! - [`settings`]: engine configuration
//! - [`estimators`]: built-in 2D line fitting
//! - [`models`]: model types for the built-in estimators
//! - [`api`]: high-level one-call entry points

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod repository;
pub mod schedule;
pub mod scoring;
pub mod settings;

pub use api::{fit_line, fit_line_seeded, line_ransac, LineRansac};
pub use core::{Consensus, DegeneracyTest, Distance, Estimator, NoDegeneracyTest, Ransac};
pub use error::RansacError;
pub use models::Line;
pub use settings::RansacSettings;
