#![warn(missing_docs)]
//! Data handling for PPO training of sequence-generation models.
//!
//! This crate provides the in-memory plumbing between an episode rollout
//! component and a PPO policy/value update step:
//! - [`Trajectory`] and [`VisionTrajectory`] records for one completed episode
//! - [`TrajectoryDataset`], an immutable per-epoch collection of records
//! - [`WrapAroundBatchSampler`], which groups record indices into batches of
//!   exact size, recycling indices from the start to fill a short final group
//! - [`collate()`], which right-pads variable-length fields and stacks them
//!   into fixed-shape [`SeqBatch`] arrays
//! - [`BatchLoader`], which drives the three through one epoch
//!
//! Everything here is synchronous and CPU-only; any prefetching or device
//! placement belongs to the surrounding training harness.
pub mod error;

mod collate;
mod config;
mod dataset;
mod loader;
mod sampler;
mod trajectory;

pub use collate::{collate, SeqBatch};
pub use config::BatchConfig;
pub use dataset::{ExperienceDataset, TrajectoryDataset};
pub use loader::BatchLoader;
pub use sampler::{IndexGroups, WrapAroundBatchSampler};
pub use trajectory::{Trajectory, TrajectoryRecord, VisionTrajectory};
