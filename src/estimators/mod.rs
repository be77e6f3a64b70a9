//! Built-in estimators and their companion capabilities.

pub mod line;

pub use line::{least_squares_fit, LineEstimator, PerpendicularDistance, VerticalOrCoincident};
