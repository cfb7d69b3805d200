//! Per-epoch collections of trajectory records.
//!
//! The training loop collects one epoch of rollouts into a
//! [`TrajectoryDataset`], drives the sampler over its length to obtain
//! index groups, and fetches records by index for collation. The dataset
//! is read-only for the duration of the epoch and is replaced wholesale
//! between epochs.

use crate::TrajectoryRecord;
use log::info;

/// An ordered, indexable, read-only collection of records.
///
/// The sampler and loader only need a length and random access, so they
/// work over this trait rather than a concrete storage type.
pub trait ExperienceDataset {
    /// The record type stored in the collection.
    type Item;

    /// Returns the number of records.
    fn len(&self) -> usize;

    /// Returns `true` if the collection holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the record at the given index, or `None` if out of range.
    fn get(&self, ix: usize) -> Option<&Self::Item>;
}

/// A `Vec`-backed dataset of [`TrajectoryRecord`]s for one training epoch.
#[derive(Clone, Debug)]
pub struct TrajectoryDataset {
    records: Vec<TrajectoryRecord>,
}

impl TrajectoryDataset {
    /// Creates a dataset owning the given records.
    pub fn new(records: Vec<TrajectoryRecord>) -> Self {
        info!("TrajectoryDataset with {} records", records.len());
        Self { records }
    }

    /// Iterates over the records in order.
    pub fn iter(&self) -> impl Iterator<Item = &TrajectoryRecord> {
        self.records.iter()
    }
}

impl ExperienceDataset for TrajectoryDataset {
    type Item = TrajectoryRecord;

    fn len(&self) -> usize {
        self.records.len()
    }

    fn get(&self, ix: usize) -> Option<&TrajectoryRecord> {
        self.records.get(ix)
    }
}

impl From<Vec<TrajectoryRecord>> for TrajectoryDataset {
    fn from(records: Vec<TrajectoryRecord>) -> Self {
        Self::new(records)
    }
}
