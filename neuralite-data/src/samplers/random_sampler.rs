// neuralite-data/src/samplers/random_sampler.rs

use log::warn;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::traits::Sampler;

/// Visits samples in random order.
///
/// Without replacement the indices are a shuffled permutation (or a prefix of
/// one when `num_samples` is set). With replacement each index is drawn
/// independently. A seeded sampler produces the same sequence on every call to
/// [`iter`](Sampler::iter); an unseeded one draws fresh entropy each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    seed: Option<u64>,
}

impl RandomSampler {
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: Number of indices to draw. Defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            seed: None,
        }
    }

    /// A reproducible full permutation without replacement.
    pub fn seeded(seed: u64) -> Self {
        Self::new(false, None).with_seed(seed)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Sampler for RandomSampler {
    fn iter(&self, dataset_len: usize) -> Box<dyn Iterator<Item = usize> + Send + Sync> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let mut rng = self.rng();
        let count = self.num_samples.unwrap_or(dataset_len);

        if self.replacement {
            let indices: Vec<usize> = (0..count).map(|_| rng.gen_range(0..dataset_len)).collect();
            return Box::new(indices.into_iter());
        }
        if count > dataset_len {
            warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding nothing",
                count, dataset_len
            );
            return Box::new(std::iter::empty());
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut rng);
        indices.truncate(count);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 || (!self.replacement && self.num_samples.map_or(false, |n| n > dataset_len)) {
            return 0;
        }
        self.num_samples.unwrap_or(dataset_len)
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
