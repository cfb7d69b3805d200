use candle_core::{error::Result, Device, Tensor};
use ndarray::Array2;
use rlseq_core::SeqBatch;

/// A collated batch as [`Tensor`]s.
///
/// Shapes match the source [`SeqBatch`]: every tensor is
/// `[batch_size, max_len]` with the per-field maximum length. Token id
/// fields are `DType::I64`, statistics `DType::F32`.
///
/// [`Tensor`]: https://docs.rs/candle-core/0.8.4/candle_core/struct.Tensor.html
/// [`SeqBatch`]: rlseq_core::SeqBatch
#[derive(Clone, Debug)]
pub struct SeqTensorBatch {
    /// Prompt tokens.
    pub input_ids: Tensor,

    /// Response tokens.
    pub actions: Tensor,

    /// Log probabilities.
    pub logprobs: Tensor,

    /// Value estimates.
    pub values: Tensor,

    /// Rewards.
    pub rewards: Tensor,

    /// Visual prompt tokens, present iff the source batch carried them.
    pub image_ids: Option<Tensor>,
}

fn tensor_i64(a: &Array2<i64>, device: &Device) -> Result<Tensor> {
    let data: Vec<i64> = a.iter().copied().collect();
    Tensor::from_vec(data, (a.nrows(), a.ncols()), device)
}

fn tensor_f32(a: &Array2<f32>, device: &Device) -> Result<Tensor> {
    let data: Vec<f32> = a.iter().copied().collect();
    Tensor::from_vec(data, (a.nrows(), a.ncols()), device)
}

impl SeqTensorBatch {
    /// Builds tensors from a collated batch on the given device.
    pub fn from_batch(batch: &SeqBatch, device: &Device) -> Result<Self> {
        let image_ids = match &batch.image_ids {
            Some(a) => Some(tensor_i64(a, device)?),
            None => None,
        };

        Ok(Self {
            input_ids: tensor_i64(&batch.input_ids, device)?,
            actions: tensor_i64(&batch.actions, device)?,
            logprobs: tensor_f32(&batch.logprobs, device)?,
            values: tensor_f32(&batch.values, device)?,
            rewards: tensor_f32(&batch.rewards, device)?,
            image_ids,
        })
    }

    /// Moves all tensors to the given device.
    pub fn to(&mut self, device: &Device) -> Result<()> {
        self.input_ids = self.input_ids.to_device(device)?;
        self.actions = self.actions.to_device(device)?;
        self.logprobs = self.logprobs.to_device(device)?;
        self.values = self.values.to_device(device)?;
        self.rewards = self.rewards.to_device(device)?;
        if let Some(image_ids) = &self.image_ids {
            self.image_ids = Some(image_ids.to_device(device)?);
        }
        Ok(())
    }

    /// Returns the number of records in the batch.
    pub fn batch_size(&self) -> usize {
        self.actions.dims()[0]
    }
}
