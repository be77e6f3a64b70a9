//! Core capability traits and the RANSAC engine.
//!
//! The engine is generic over the sample type `T`, the model type (an
//! associated type of the estimator), and three injected capabilities:
//! - [`Estimator`]: minimal subset -> candidate model.
//! - [`Distance`]: (sample, model) -> non-negative residual.
//! - [`DegeneracyTest`]: rejects subsets that cannot determine a model;
//!   optional, absent means "never degenerate".
//!
//! Samples are addressed by index into the repository-owned dataset, so
//! capabilities receive `(&[T], &[usize])` rather than materialized copies.

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::RansacError;
use crate::repository::SampleRepository;
use crate::schedule::required_trials;
use crate::scoring::InlierCountScoring;
use crate::settings::RansacSettings;

/// Redraw attempts per trial while the degeneracy test keeps rejecting.
const DEGENERACY_RETRY_LIMIT: usize = 10;

/// Produces candidate models from minimal subsets.
///
/// `estimate` is only defined for non-degenerate subsets of exactly
/// [`sample_size`](Estimator::sample_size) distinct indices; the engine
/// guarantees both before calling it. Behavior on degenerate input is the
/// estimator's own business (typically garbage-in, garbage-out), which is
/// why degeneracy filtering happens first.
pub trait Estimator<T> {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Size of a minimal subset for this estimator.
    fn sample_size(&self) -> usize;

    /// Fit a model to the subset identified by `sample` indices into `data`.
    fn estimate(&self, data: &[T], sample: &[usize]) -> Self::Model;
}

/// Residual of a sample under a candidate model. Pure; must return a
/// non-negative value.
///
/// Closures `Fn(&T, &M) -> f64` implement this directly.
pub trait Distance<T, M> {
    fn distance(&self, sample: &T, model: &M) -> f64;
}

impl<T, M, F> Distance<T, M> for F
where
    F: Fn(&T, &M) -> f64,
{
    fn distance(&self, sample: &T, model: &M) -> f64 {
        self(sample, model)
    }
}

/// Decides whether a subset is numerically unusable for estimation
/// (coincident points, collinear configurations, and the like).
///
/// Closures `Fn(&[T], &[usize]) -> bool` implement this directly.
pub trait DegeneracyTest<T> {
    fn is_degenerate(&self, data: &[T], sample: &[usize]) -> bool;
}

impl<T, F> DegeneracyTest<T> for F
where
    F: Fn(&[T], &[usize]) -> bool,
{
    fn is_degenerate(&self, data: &[T], sample: &[usize]) -> bool {
        self(data, sample)
    }
}

/// Degeneracy test that accepts every subset. Stands in for "no test" when
/// the engine is built without one.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDegeneracyTest;

impl<T> DegeneracyTest<T> for NoDegeneracyTest {
    fn is_degenerate(&self, _data: &[T], _sample: &[usize]) -> bool {
        false
    }
}

/// The winning consensus of a RANSAC run.
#[derive(Debug, Clone)]
pub struct Consensus<M> {
    /// The minimal-subset model with the largest consensus. Returned raw:
    /// no least-squares polish is applied.
    pub model: M,
    /// Dataset indices of the model's consensus set.
    pub inliers: Vec<usize>,
    /// Trials actually run (after any `max_iterations` truncation).
    pub iterations: usize,
    /// Trials skipped because no non-degenerate subset was found within the
    /// retry bound.
    pub degenerate_skips: usize,
}

impl<M> Consensus<M> {
    pub fn inlier_count(&self) -> usize {
        self.inliers.len()
    }
}

/// Generic RANSAC engine.
///
/// Owns the dataset (through a [`SampleRepository`]) and an explicit random
/// source, so runs are reproducible under [`Ransac::with_seed`]. Construction
/// validates the settings against the dataset and derives the theoretical
/// trial count once; [`fit`](Ransac::fit) then runs
/// `min(max_iterations, required)` trials and returns the best consensus,
/// or [`RansacError::NoConsensus`] if no trial ever produced a model with at
/// least one inlier.
#[derive(Debug)]
pub struct Ransac<T, E, D, G = NoDegeneracyTest>
where
    E: Estimator<T>,
    D: Distance<T, E::Model>,
    G: DegeneracyTest<T>,
{
    settings: RansacSettings,
    estimator: E,
    distance: D,
    degeneracy: Option<G>,
    repository: SampleRepository<T>,
    scoring: InlierCountScoring,
    rng: StdRng,
    required_iterations: usize,
}

impl<T, E, D, G> Ransac<T, E, D, G>
where
    E: Estimator<T>,
    D: Distance<T, E::Model>,
    G: DegeneracyTest<T>,
{
    /// Build an engine with an entropy-seeded random source.
    pub fn new(
        settings: RansacSettings,
        estimator: E,
        distance: D,
        degeneracy: Option<G>,
        data: Vec<T>,
    ) -> Result<Self, RansacError> {
        Self::with_rng(
            settings,
            estimator,
            distance,
            degeneracy,
            data,
            StdRng::from_entropy(),
        )
    }

    /// Build an engine with a fixed seed. Identical seeds and inputs yield
    /// bit-identical fits.
    pub fn with_seed(
        settings: RansacSettings,
        estimator: E,
        distance: D,
        degeneracy: Option<G>,
        data: Vec<T>,
        seed: u64,
    ) -> Result<Self, RansacError> {
        Self::with_rng(
            settings,
            estimator,
            distance,
            degeneracy,
            data,
            StdRng::seed_from_u64(seed),
        )
    }

    fn with_rng(
        settings: RansacSettings,
        estimator: E,
        distance: D,
        degeneracy: Option<G>,
        data: Vec<T>,
        rng: StdRng,
    ) -> Result<Self, RansacError> {
        settings.validate(data.len())?;
        if settings.sample_size != estimator.sample_size() {
            return Err(RansacError::SampleSizeMismatch {
                configured: settings.sample_size,
                expected: estimator.sample_size(),
            });
        }

        let required_iterations = required_trials(
            settings.confidence,
            settings.inlier_proportion,
            settings.sample_size,
        );
        let scoring = InlierCountScoring::new(settings.tolerance);

        Ok(Self {
            settings,
            estimator,
            distance,
            degeneracy,
            repository: SampleRepository::new(data),
            scoring,
            rng,
            required_iterations,
        })
    }

    /// Theoretical trial count derived at construction.
    pub fn required_iterations(&self) -> usize {
        self.required_iterations
    }

    pub fn settings(&self) -> &RansacSettings {
        &self.settings
    }

    /// The dataset, in its original order. Consensus indices refer into
    /// this slice.
    pub fn data(&self) -> &[T] {
        self.repository.samples()
    }

    /// Run the trial loop and return the largest consensus found.
    ///
    /// Per trial: draw a minimal subset, redraw up to ten times while the
    /// degeneracy test rejects it, skip the trial if still degenerate,
    /// otherwise estimate a candidate and score it against the full
    /// dataset. Strictly larger inlier counts replace the running best, so
    /// ties keep the earlier model. No trial fails; the loop always
    /// completes within the trial budget.
    ///
    /// Calling `fit` again continues the engine's random stream, giving an
    /// independent re-run over the same data.
    pub fn fit(&mut self) -> Result<Consensus<E::Model>, RansacError> {
        let sample_size = self.settings.sample_size;
        let trial_budget = self.required_iterations.min(self.settings.max_iterations);

        debug!(
            "ransac: running {} trials (theoretical requirement {}, cap {})",
            trial_budget, self.required_iterations, self.settings.max_iterations
        );

        let mut best_model: Option<E::Model> = None;
        let mut best_inliers: Vec<usize> = Vec::new();
        let mut best_count = 0usize;
        let mut degenerate_skips = 0usize;

        let mut subset: Vec<usize> = Vec::with_capacity(sample_size);
        let mut inlier_buf: Vec<usize> = Vec::new();

        for trial in 0..trial_budget {
            subset.clear();
            subset.extend_from_slice(self.repository.draw_subset(&mut self.rng, sample_size));

            let mut retries = 0;
            while self.subset_is_degenerate(&subset) {
                if retries == DEGENERACY_RETRY_LIMIT {
                    break;
                }
                subset.clear();
                subset.extend_from_slice(self.repository.draw_subset(&mut self.rng, sample_size));
                retries += 1;
            }

            if self.subset_is_degenerate(&subset) {
                trace!("ransac: trial {trial} skipped, degenerate after {retries} redraws");
                degenerate_skips += 1;
                continue;
            }

            let candidate = self.estimator.estimate(self.repository.samples(), &subset);
            let count = self.scoring.score(
                &self.distance,
                self.repository.samples(),
                &candidate,
                &mut inlier_buf,
            );

            if count > best_count {
                trace!("ransac: trial {trial} improved consensus to {count} inliers");
                best_count = count;
                best_model = Some(candidate);
                std::mem::swap(&mut best_inliers, &mut inlier_buf);
            }
        }

        debug!(
            "ransac: done, best consensus {} of {} samples ({} degenerate skips)",
            best_count,
            self.repository.len(),
            degenerate_skips
        );

        match best_model {
            Some(model) => Ok(Consensus {
                model,
                inliers: best_inliers,
                iterations: trial_budget,
                degenerate_skips,
            }),
            None => Err(RansacError::NoConsensus),
        }
    }

    fn subset_is_degenerate(&self, subset: &[usize]) -> bool {
        match &self.degeneracy {
            Some(test) => test.is_degenerate(self.repository.samples(), subset),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Model carrying the trial order it was produced in.
    #[derive(Clone, Debug, PartialEq)]
    struct TaggedModel(usize);

    struct CountingEstimator {
        calls: Cell<usize>,
    }

    impl CountingEstimator {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl Estimator<f64> for CountingEstimator {
        type Model = TaggedModel;

        fn sample_size(&self) -> usize {
            2
        }

        fn estimate(&self, _data: &[f64], _sample: &[usize]) -> TaggedModel {
            let id = self.calls.get();
            self.calls.set(id + 1);
            TaggedModel(id)
        }
    }

    fn settings(max_iterations: usize) -> RansacSettings {
        RansacSettings {
            confidence: 0.99,
            max_iterations,
            tolerance: 1.0,
            sample_size: 2,
            inlier_proportion: 0.5,
        }
    }

    #[test]
    fn construction_rejects_oversized_sample() {
        let result = Ransac::with_seed(
            settings(10),
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 0.0,
            None::<NoDegeneracyTest>,
            vec![1.0],
            0,
        );
        assert!(matches!(
            result,
            Err(RansacError::SampleSizeExceedsData { .. })
        ));
    }

    #[test]
    fn construction_rejects_sample_size_mismatch() {
        let cfg = RansacSettings {
            sample_size: 3,
            ..settings(10)
        };
        let result = Ransac::with_seed(
            cfg,
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 0.0,
            None::<NoDegeneracyTest>,
            vec![0.0; 8],
            0,
        );
        assert_eq!(
            result.err(),
            Some(RansacError::SampleSizeMismatch {
                configured: 3,
                expected: 2
            })
        );
    }

    #[test]
    fn ties_keep_the_earliest_model() {
        // Every candidate scores all samples as inliers, so after the first
        // trial no later candidate strictly improves.
        let mut engine = Ransac::with_seed(
            settings(20),
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 0.0,
            None::<NoDegeneracyTest>,
            vec![0.0; 8],
            3,
        )
        .unwrap();

        let consensus = engine.fit().unwrap();
        assert_eq!(consensus.model, TaggedModel(0));
        assert_eq!(consensus.inlier_count(), 8);
        assert_eq!(consensus.degenerate_skips, 0);
    }

    #[test]
    fn truncation_bounds_the_trial_count() {
        // Theoretical requirement is 17 here (w=0.5, k=2, p=0.99); the cap
        // of 5 wins.
        let mut engine = Ransac::with_seed(
            settings(5),
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 0.0,
            None::<NoDegeneracyTest>,
            vec![0.0; 8],
            3,
        )
        .unwrap();

        assert_eq!(engine.required_iterations(), 17);
        let consensus = engine.fit().unwrap();
        assert_eq!(consensus.iterations, 5);
    }

    #[test]
    fn pure_degeneracy_skips_every_trial_and_reports_no_consensus() {
        let estimator = CountingEstimator::new();
        let mut engine = Ransac::with_seed(
            settings(6),
            estimator,
            |_: &f64, _: &TaggedModel| 0.0,
            Some(|_: &[f64], _: &[usize]| true),
            vec![0.0; 8],
            3,
        )
        .unwrap();

        let result = engine.fit();
        assert_eq!(result.unwrap_err(), RansacError::NoConsensus);
        // The estimator must never see a degenerate subset.
        assert_eq!(engine.estimator.calls.get(), 0);
    }

    #[test]
    fn degenerate_redraws_are_bounded() {
        let checks = std::rc::Rc::new(Cell::new(0usize));
        let seen = checks.clone();
        let guard = move |_: &[f64], _: &[usize]| {
            seen.set(seen.get() + 1);
            true
        };

        let mut engine = Ransac::with_seed(
            settings(4),
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 0.0,
            Some(guard),
            vec![0.0; 8],
            3,
        )
        .unwrap();

        let _ = engine.fit();
        // Per trial: one check for the initial draw, one per redraw, and a
        // final check before the skip decision.
        assert_eq!(checks.get(), 4 * (1 + DEGENERACY_RETRY_LIMIT + 1));
    }

    #[test]
    fn zero_inlier_runs_surface_no_consensus() {
        let mut engine = Ransac::with_seed(
            settings(10),
            CountingEstimator::new(),
            |_: &f64, _: &TaggedModel| 100.0,
            None::<NoDegeneracyTest>,
            vec![0.0; 8],
            3,
        )
        .unwrap();

        assert_eq!(engine.fit().unwrap_err(), RansacError::NoConsensus);
    }
}
