//! Padded collation of trajectory records into fixed-shape batches.
//!
//! Records in a batch have variable-length fields; the collator right-pads
//! each field to the longest sequence in the batch for that field and
//! stacks the results into 2-D arrays. Each field is padded independently,
//! so `input_ids` and `actions` generally end up with different widths.
//!
//! Fill values per field:
//! - `input_ids`, `actions`: the caller's `pad_token_id`
//! - `logprobs`, `values`, `rewards`: `0.0`
//! - `image_ids`: `0`

use crate::{error::RlseqError, TrajectoryRecord};
use log::trace;
use ndarray::Array2;

/// One collated batch, ready for the policy/value update step.
///
/// Every array has `records.len()` rows; the number of columns is the
/// batch's maximum sequence length for that field. The batch is ephemeral:
/// produced per index group, consumed immediately, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct SeqBatch {
    /// Prompt tokens, padded with the pad token id.
    pub input_ids: Array2<i64>,

    /// Response tokens, padded with the pad token id.
    pub actions: Array2<i64>,

    /// Log probabilities, zero-padded.
    pub logprobs: Array2<f32>,

    /// Value estimates, zero-padded.
    pub values: Array2<f32>,

    /// Rewards, zero-padded.
    pub rewards: Array2<f32>,

    /// Visual prompt tokens, zero-padded. Present iff at least one record
    /// in the batch was a vision record.
    pub image_ids: Option<Array2<i64>>,
}

impl SeqBatch {
    /// Returns the number of records in the batch.
    pub fn len(&self) -> usize {
        self.actions.nrows()
    }

    /// Returns `true` if the batch holds no records. Never the case for
    /// batches produced by [`collate`].
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Right-pads each sequence to the longest one and stacks them row-wise.
fn pad_stack<T: Copy>(seqs: &[&[T]], fill: T) -> Array2<T> {
    let rows = seqs.len();
    let max_len = seqs.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut data = vec![fill; rows * max_len];
    for (i, seq) in seqs.iter().enumerate() {
        data[i * max_len..i * max_len + seq.len()].copy_from_slice(seq);
    }
    // data.len() == rows * max_len by construction
    Array2::from_shape_vec((rows, max_len), data).unwrap()
}

fn gather<'a, T: ?Sized>(
    records: &'a [TrajectoryRecord],
    f: impl Fn(&'a TrajectoryRecord) -> &'a T,
) -> Vec<&'a T> {
    records.iter().map(f).collect()
}

/// Collates a list of records into a [`SeqBatch`].
///
/// Record order is preserved; input records are not modified; collating
/// the same list twice yields identical output.
///
/// The `image_ids` array is included iff at least one record is a vision
/// record. In a mixed batch, a text record contributes a zero-length
/// sequence, so its `image_ids` row consists entirely of the fill value
/// `0`; consumers that care which rows carry real visual tokens must
/// track the record kinds themselves.
///
/// # Arguments
///
/// * `records` - Records selected for this batch, in order
/// * `pad_token_id` - Fill value for `input_ids` and `actions`
///
/// # Errors
///
/// Returns [`RlseqError::EmptyBatch`] if `records` is empty; the maximum
/// sequence length would be undefined. The sampler never produces an
/// empty group, so this only guards direct calls.
pub fn collate(records: &[TrajectoryRecord], pad_token_id: i64) -> Result<SeqBatch, RlseqError> {
    if records.is_empty() {
        return Err(RlseqError::EmptyBatch);
    }
    trace!("collating a batch of {} records", records.len());

    let has_image_ids = records.iter().any(|r| r.image_ids().is_some());
    let image_ids = if has_image_ids {
        let seqs = gather(records, |r| r.image_ids().unwrap_or(&[]));
        Some(pad_stack(&seqs, 0))
    } else {
        None
    };

    Ok(SeqBatch {
        input_ids: pad_stack(&gather(records, |r| r.input_ids()), pad_token_id),
        actions: pad_stack(&gather(records, |r| r.actions()), pad_token_id),
        logprobs: pad_stack(&gather(records, |r| r.logprobs()), 0.0),
        values: pad_stack(&gather(records, |r| r.values()), 0.0),
        rewards: pad_stack(&gather(records, |r| r.rewards()), 0.0),
        image_ids,
    })
}
