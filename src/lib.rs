//! mbgd: parallel mini-batch gradient descent for linear regression.
//!
//! This crate trains a linear regression model with mini-batch gradient
//! descent and momentum, computing per-batch gradients in parallel.
//!
//! # Key Types
//!
//! - [`MbgdTrainer`] / [`MbgdParams`] - Training loop and its configuration
//! - [`LinearModel`] - Learned weights and bias
//! - [`Dataset`] - Immutable feature matrix plus regression targets
//! - [`TrainReport`] - Per-epoch metrics and the final model
//!
//! # Training
//!
//! ```ignore
//! use mbgd::{MbgdParams, MbgdTrainer, run_with_threads};
//!
//! let dataset = mbgd::data::load_csv("dataset.csv")?;
//! let trainer = MbgdTrainer::new(MbgdParams::default());
//! let report = run_with_threads(0, |parallelism| trainer.train(&dataset, parallelism));
//! println!("{}", report.model.equation());
//! ```
//!
//! The trainer never builds a thread pool itself; [`run_with_threads`]
//! installs one at the API boundary and hands the [`Parallelism`] flag down.

pub mod data;
pub mod repr;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{load_csv, Dataset, DatasetError};
pub use repr::LinearModel;
pub use training::{EpochStats, MbgdParams, MbgdTrainer, TrainReport, Verbosity};
pub use utils::{run_with_threads, Parallelism};
