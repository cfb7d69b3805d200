//! Wrap-around batch index generation.
//!
//! The sampler turns a dataset length into successive groups of record
//! indices, each of exactly `batch_size` indices. Indices are traversed in
//! order; if the final group comes up short, it is refilled by cycling
//! indices from the start of the dataset. This keeps every batch the same
//! shape without dropping any record, at the cost of repeating a few
//! records once per epoch.
//!
//! The traversal is fully deterministic given `(n, batch_size)`. An
//! optional seeded shuffle permutes the order first; the wrap-fill then
//! cycles the permuted order from its start, so determinism is preserved
//! under a fixed seed.

use crate::{error::RlseqError, BatchConfig};
use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Produces index groups of exact batch size over a dataset.
///
/// The sampler holds no dataset reference and no mutable state; each call
/// to [`index_groups`] starts a fresh traversal, so one sampler can drive
/// any number of epochs.
///
/// [`index_groups`]: WrapAroundBatchSampler::index_groups
///
/// # Examples
///
/// ```rust
/// use rlseq_core::{BatchConfig, WrapAroundBatchSampler};
///
/// let sampler = WrapAroundBatchSampler::build(&BatchConfig::default().batch_size(3)).unwrap();
/// let groups: Vec<_> = sampler.index_groups(7).collect();
/// assert_eq!(groups, vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 0, 1]]);
/// ```
#[derive(Clone, Debug)]
pub struct WrapAroundBatchSampler {
    batch_size: usize,
    shuffle_seed: Option<u64>,
}

impl WrapAroundBatchSampler {
    /// Creates a sampler from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RlseqError::InvalidBatchSize`] if `config.batch_size == 0`.
    pub fn build(config: &BatchConfig) -> Result<Self, RlseqError> {
        if config.batch_size == 0 {
            return Err(RlseqError::InvalidBatchSize(config.batch_size));
        }
        info!(
            "WrapAroundBatchSampler with batch_size = {}, shuffle_seed = {:?}",
            config.batch_size, config.shuffle_seed
        );
        Ok(Self {
            batch_size: config.batch_size,
            shuffle_seed: config.shuffle_seed,
        })
    }

    /// Returns the batch size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Returns the number of groups produced for a dataset of `n` records,
    /// i.e. `ceil(n / batch_size)`.
    pub fn num_groups(&self, n: usize) -> usize {
        (n + self.batch_size - 1) / self.batch_size
    }

    /// Starts a fresh traversal over a dataset of `n` records.
    ///
    /// Produces [`num_groups`]`(n)` groups, each a `Vec<usize>` of length
    /// exactly `batch_size` with indices in `[0, n)`. For `n == 0` the
    /// iterator is empty. If `batch_size > n`, every group is wrap-filled
    /// by cycling the order from its start.
    ///
    /// [`num_groups`]: WrapAroundBatchSampler::num_groups
    pub fn index_groups(&self, n: usize) -> IndexGroups {
        let order = match self.shuffle_seed {
            None => (0..n).collect(),
            Some(seed) => {
                let mut order: Vec<usize> = (0..n).collect();
                let mut rng = StdRng::seed_from_u64(seed);
                order.shuffle(&mut rng);
                order
            }
        };

        IndexGroups {
            order,
            batch_size: self.batch_size,
            pos: 0,
        }
    }
}

/// Lazy iterator over index groups, created by
/// [`WrapAroundBatchSampler::index_groups`].
pub struct IndexGroups {
    /// Traversal order over the dataset, identity unless shuffled.
    order: Vec<usize>,

    /// Exact length of every emitted group.
    batch_size: usize,

    /// Number of order entries consumed so far.
    pos: usize,
}

impl Iterator for IndexGroups {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.pos >= self.order.len() {
            return None;
        }

        let end = (self.pos + self.batch_size).min(self.order.len());
        let mut group = self.order[self.pos..end].to_vec();
        self.pos = end;

        // Refill a short group by cycling the order from its start. The
        // order is non-empty here, otherwise next() returned above.
        if group.len() < self.batch_size {
            let needed = self.batch_size - group.len();
            group.extend(self.order.iter().cycle().take(needed));
        }

        Some(group)
    }
}
