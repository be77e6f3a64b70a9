//! Dataset ownership and minimal-subset draws.

use rand::seq::SliceRandom;
use rand::Rng;

/// Owns the immutable dataset and draws random minimal subsets from it.
///
/// Subsets are drawn as index sets by partially shuffling a scratch buffer
/// and taking its prefix, so each draw selects `n` distinct samples
/// uniformly at random. Draws are independent: there is no
/// without-replacement guarantee *across* calls, only within one.
#[derive(Debug)]
pub struct SampleRepository<T> {
    samples: Vec<T>,
    scratch: Vec<usize>,
}

impl<T> SampleRepository<T> {
    /// Take ownership of the dataset. The samples are fixed for the
    /// repository's lifetime.
    pub fn new(samples: Vec<T>) -> Self {
        let scratch = (0..samples.len()).collect();
        Self { samples, scratch }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The full dataset, in its original order.
    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    /// Draw `n` distinct sample indices uniformly at random.
    ///
    /// Callers must ensure `n <= self.len()`; the engine checks this once
    /// at construction.
    pub fn draw_subset<R: Rng>(&mut self, rng: &mut R, n: usize) -> &[usize] {
        debug_assert!(n <= self.scratch.len());
        // partial_shuffle leaves the n chosen elements in its first return
        // value (the tail of the buffer), not the prefix.
        let (chosen, _) = self.scratch.partial_shuffle(rng, n);
        chosen
    }
}

#[cfg(test)]
mod tests {
    use super::SampleRepository;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn draws_distinct_in_range_indices() {
        let mut repo = SampleRepository::new((0..20).collect::<Vec<i32>>());
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let subset = repo.draw_subset(&mut rng, 3);
            assert_eq!(subset.len(), 3);
            assert!(subset.iter().all(|&i| i < 20));
            let mut sorted = subset.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 3, "indices must be distinct");
        }
    }

    #[test]
    fn first_draw_reaches_every_index_uniformly() {
        // A single draw from a fresh repository must be able to select any
        // index, with no position favored by the shuffle direction.
        let mut counts = [0usize; 3];
        for seed in 0..200 {
            let mut repo = SampleRepository::new(vec![10, 20, 30]);
            let mut rng = StdRng::seed_from_u64(seed);
            counts[repo.draw_subset(&mut rng, 1)[0]] += 1;
        }
        assert!(
            counts.iter().all(|&c| c >= 30),
            "draw counts far from uniform: {counts:?}"
        );
    }

    #[test]
    fn tracks_dataset_length() {
        let repo = SampleRepository::new(vec![1.0f64, 2.0, 3.0]);
        assert_eq!(repo.len(), 3);
        assert!(!repo.is_empty());
        assert!(SampleRepository::<f64>::new(Vec::new()).is_empty());
    }

    #[test]
    fn full_size_draw_is_a_permutation() {
        let mut repo = SampleRepository::new(vec![1.0f64, 2.0, 3.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut drawn = repo.draw_subset(&mut rng, 4).to_vec();
        drawn.sort_unstable();
        assert_eq!(drawn, vec![0, 1, 2, 3]);
    }

    #[test]
    fn seeded_draws_are_reproducible() {
        let data: Vec<i32> = (0..100).collect();

        let mut repo1 = SampleRepository::new(data.clone());
        let mut repo2 = SampleRepository::new(data);
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            assert_eq!(
                repo1.draw_subset(&mut rng1, 5),
                repo2.draw_subset(&mut rng2, 5)
            );
        }
    }
}
