//! Mini-batch gradient descent training.
//!
//! This module provides the core types needed for training:
//!
//! ## Shared Infrastructure
//!
//! - [`BatchSchedule`]: shrinking batch-size schedule and epoch partitioning
//! - [`EpochShuffler`]: seeded per-epoch sample permutation
//! - [`BatchGradient`]: per-batch gradient accumulator (arena slots)
//! - [`MomentumUpdater`]: velocity state and the parameter update step
//! - [`TrainingLogger`], [`Verbosity`]: structured console output
//!
//! ## Trainer
//!
//! - [`MbgdTrainer`] with [`MbgdParams`] runs the epoch loop and returns a
//!   [`TrainReport`] with the model and per-epoch [`EpochStats`].

mod gradient;
mod logger;
mod schedule;
mod shuffle;
mod trainer;
mod updater;

pub use gradient::{accumulate_batch, aggregate, compute_epoch_gradients, BatchGradient};
pub use logger::{TrainingLogger, Verbosity};
pub use schedule::BatchSchedule;
pub use shuffle::EpochShuffler;
pub use trainer::{EpochStats, MbgdParams, MbgdTrainer, TrainReport};
pub use updater::MomentumUpdater;
