//! Epoch-level batch loading.
//!
//! The loader is the glue the training loop drives: it fixes the dataset
//! length at the start of an epoch, walks the sampler's index groups,
//! fetches the selected records and collates them. It is synchronous and
//! single-threaded; the dataset is only read.

use crate::{
    collate, dataset::ExperienceDataset, error::RlseqError, sampler::IndexGroups, BatchConfig,
    SeqBatch, TrajectoryRecord, WrapAroundBatchSampler,
};
use log::info;

/// Yields collated batches for one epoch at a time.
///
/// # Examples
///
/// ```ignore
/// let loader = BatchLoader::new(&dataset, &config)?;
/// for batch in loader.epoch() {
///     // feed batch into the PPO update
/// }
/// ```
pub struct BatchLoader<'a, D>
where
    D: ExperienceDataset<Item = TrajectoryRecord>,
{
    /// The epoch's records, read-only.
    dataset: &'a D,

    /// Index group generation.
    sampler: WrapAroundBatchSampler,

    /// Fill value for `input_ids` and `actions`.
    pad_token_id: i64,
}

impl<'a, D> BatchLoader<'a, D>
where
    D: ExperienceDataset<Item = TrajectoryRecord>,
{
    /// Creates a loader over the given dataset.
    ///
    /// # Errors
    ///
    /// Returns [`RlseqError::InvalidBatchSize`] if `config.batch_size == 0`.
    pub fn new(dataset: &'a D, config: &BatchConfig) -> Result<Self, RlseqError> {
        let sampler = WrapAroundBatchSampler::build(config)?;
        info!(
            "BatchLoader over {} records, {} batches per epoch",
            dataset.len(),
            sampler.num_groups(dataset.len())
        );
        Ok(Self {
            dataset,
            sampler,
            pad_token_id: config.pad_token_id,
        })
    }

    /// Returns the number of batches per epoch.
    pub fn num_batches(&self) -> usize {
        self.sampler.num_groups(self.dataset.len())
    }

    /// Starts a fresh traversal of the dataset.
    pub fn epoch(&self) -> Epoch<'a, D> {
        Epoch {
            dataset: self.dataset,
            groups: self.sampler.index_groups(self.dataset.len()),
            pad_token_id: self.pad_token_id,
        }
    }
}

/// Iterator over one epoch's batches, created by [`BatchLoader::epoch`].
pub struct Epoch<'a, D>
where
    D: ExperienceDataset<Item = TrajectoryRecord>,
{
    dataset: &'a D,
    groups: IndexGroups,
    pad_token_id: i64,
}

impl<'a, D> Iterator for Epoch<'a, D>
where
    D: ExperienceDataset<Item = TrajectoryRecord>,
{
    type Item = SeqBatch;

    fn next(&mut self) -> Option<SeqBatch> {
        let group = self.groups.next()?;
        let records: Vec<TrajectoryRecord> = group
            .iter()
            .map(|&ix| {
                self.dataset
                    .get(ix)
                    .expect("sampler indices stay within the epoch length")
                    .clone()
            })
            .collect();

        // The group is never empty, so collation cannot fail here.
        Some(collate(&records, self.pad_token_id).expect("non-empty group"))
    }
}
