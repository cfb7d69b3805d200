//! Configuration for batch construction.
//!
//! This module provides the configuration shared by the sampler and the
//! loader, including:
//! - Batch geometry (`batch_size`)
//! - The padding token id used by the collator
//! - Optional seeded shuffling of the sampling order
//! - Serialization and deserialization support

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    default::Default,
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration for batch sampling and collation.
///
/// # Examples
///
/// ```rust
/// use rlseq_core::BatchConfig;
///
/// let config = BatchConfig::default()
///     .batch_size(16)
///     .pad_token_id(50256)
///     .shuffle_seed(Some(42));
/// ```
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct BatchConfig {
    /// Number of records per batch. Every emitted index group has exactly
    /// this length; a short final group is wrap-filled from the start of
    /// the dataset.
    pub batch_size: usize,

    /// Token id used to right-pad `input_ids` and `actions`. Must be an id
    /// the vocabulary reserves for padding; choosing it is the caller's
    /// responsibility.
    pub pad_token_id: i64,

    /// Optional seed for shuffling the sampling order. `None` preserves
    /// the strict in-order wrap-around traversal; `Some(seed)` permutes
    /// the record order deterministically before grouping.
    pub shuffle_seed: Option<u64>,
}

impl Default for BatchConfig {
    /// Creates a default configuration:
    /// - `batch_size = 8`
    /// - `pad_token_id = 0`
    /// - `shuffle_seed = None` (strict wrap-around order)
    fn default() -> Self {
        Self {
            batch_size: 8,
            pad_token_id: 0,
            shuffle_seed: None,
        }
    }
}

impl BatchConfig {
    /// Sets the batch size.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the padding token id.
    pub fn pad_token_id(mut self, pad_token_id: i64) -> Self {
        self.pad_token_id = pad_token_id;
        self
    }

    /// Sets the shuffle seed.
    pub fn shuffle_seed(mut self, shuffle_seed: Option<u64>) -> Self {
        self.shuffle_seed = shuffle_seed;
        self
    }

    /// Loads the configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves the configuration to a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}
