//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
///
/// All variants are fatal to the record or batch under construction;
/// nothing here is transient, so there are no retry semantics.
#[derive(Error, Debug)]
pub enum RlseqError {
    /// A per-action field of a trajectory record does not match the
    /// length of its `actions` sequence.
    #[error("length mismatch in field `{field}`: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Name of the offending field.
        field: &'static str,
        /// Expected length (the length of `actions`).
        expected: usize,
        /// Actual length of the field.
        actual: usize,
    },

    /// The sampler was configured with a batch size of zero.
    #[error("invalid batch size: {0}")]
    InvalidBatchSize(usize),

    /// Collation was requested for an empty list of records.
    #[error("cannot collate an empty batch")]
    EmptyBatch,
}
