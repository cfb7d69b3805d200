//! Candle tensor batches for `rlseq`.
//!
//! Converts the backend-free [`SeqBatch`] produced by `rlseq-core` into
//! [`candle_core::Tensor`]s for the policy/value update step.
//!
//! [`SeqBatch`]: rlseq_core::SeqBatch
mod tensor_batch;

pub use tensor_batch::SeqTensorBatch;
