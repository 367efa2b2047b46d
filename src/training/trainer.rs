//! Mini-batch gradient descent trainer for linear regression.
//!
//! Runs a fixed number of epochs. Each epoch reshuffles the sample
//! permutation, partitions it into batches, computes per-batch gradients in
//! parallel against the epoch-start parameter snapshot, aggregates them
//! serially, and applies one momentum update. Epochs are strictly ordered;
//! parallelism exists only inside the gradient phase.

use std::time::{Duration, Instant};

use crate::data::Dataset;
use crate::repr::LinearModel;
use crate::utils::Parallelism;

use super::gradient::{aggregate, compute_epoch_gradients, BatchGradient};
use super::logger::{TrainingLogger, Verbosity};
use super::schedule::BatchSchedule;
use super::shuffle::EpochShuffler;
use super::updater::MomentumUpdater;

// ============================================================================
// MbgdParams
// ============================================================================

/// Parameters for MBGD training.
#[derive(Debug, Clone)]
pub struct MbgdParams {
    /// Initial learning rate.
    pub learning_rate: f64,

    /// Multiplicative learning-rate decay, applied unconditionally at the
    /// end of every epoch.
    pub lr_decay: f64,

    /// Momentum factor for the velocity update.
    pub momentum: f64,

    /// L2 regularization strength. Added once per sample inside the batch
    /// loop, so the penalty scales with batch occupancy (see
    /// [`accumulate_batch`](super::accumulate_batch)).
    pub lambda: f64,

    /// Number of epochs. Training always runs to completion; there is no
    /// early stopping.
    pub n_epochs: u32,

    /// Batch-size schedule.
    pub schedule: BatchSchedule,

    /// Seed for the epoch shuffler.
    pub seed: u64,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for MbgdParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.05,
            lr_decay: 0.98,
            momentum: 0.9,
            lambda: 0.01,
            n_epochs: 10,
            schedule: BatchSchedule::default(),
            seed: 1234,
            verbosity: Verbosity::default(),
        }
    }
}

// ============================================================================
// TrainReport
// ============================================================================

/// Metrics recorded for one epoch.
#[derive(Debug, Clone)]
pub struct EpochStats {
    /// Epoch index (0-based).
    pub epoch: u32,
    /// Mean squared-error loss over the epoch.
    pub loss: f64,
    /// Learning rate in effect during this epoch (before decay).
    pub learning_rate: f64,
    /// Number of batches in this epoch.
    pub n_batches: usize,
    /// Wall time of the parallel gradient phase.
    pub grad_time: Duration,
    /// Wall time of the parameter update.
    pub update_time: Duration,
}

/// Outcome of a training run.
#[derive(Debug, Clone)]
pub struct TrainReport {
    /// The trained model.
    pub model: LinearModel,
    /// Per-epoch metrics, in epoch order.
    pub epochs: Vec<EpochStats>,
    /// Best epoch loss seen, tracked with a `1e-6` improvement tolerance.
    /// Reporting only; it never affects training.
    pub best_loss: f64,
    /// Total wall time of the run.
    pub total_time: Duration,
}

// ============================================================================
// MbgdTrainer
// ============================================================================

/// Mini-batch gradient descent trainer.
#[derive(Debug, Clone)]
pub struct MbgdTrainer {
    params: MbgdParams,
}

impl MbgdTrainer {
    /// Create a new trainer with the given parameters.
    pub fn new(params: MbgdParams) -> Self {
        Self { params }
    }

    /// Create a trainer with default parameters.
    pub fn default_params() -> Self {
        Self::new(MbgdParams::default())
    }

    /// Train a linear regression model.
    ///
    /// **Note:** This method does NOT create a thread pool. Set up
    /// parallelism via [`run_with_threads`](crate::run_with_threads) and
    /// pass the resulting flag in.
    ///
    /// # Panics
    ///
    /// Panics if the dataset has no samples.
    pub fn train(&self, dataset: &Dataset, parallelism: Parallelism) -> TrainReport {
        let n_samples = dataset.n_samples();
        let n_features = dataset.n_features();

        assert!(n_samples > 0, "dataset must contain at least one sample");

        let mut model = LinearModel::zeros(n_features);
        let mut updater = MomentumUpdater::new(n_features, self.params.momentum);
        let mut shuffler = EpochShuffler::new(n_samples, self.params.seed);
        let mut learning_rate = self.params.learning_rate;

        // Epoch totals plus one slot per batch; slots are reused across
        // epochs and resized when the schedule changes the batch count.
        let mut totals = BatchGradient::zeros(n_features);
        let mut partials: Vec<BatchGradient> = Vec::new();

        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_samples, n_features);

        let mut epochs = Vec::with_capacity(self.params.n_epochs as usize);
        let mut best_loss = f64::INFINITY;
        let run_start = Instant::now();

        for epoch in 0..self.params.n_epochs {
            let order = shuffler.reshuffle();
            let batches = self.params.schedule.batches(epoch, n_samples);
            partials.resize_with(batches.len(), || BatchGradient::zeros(n_features));

            // Parallel region; returns once every batch slot has committed.
            let grad_start = Instant::now();
            compute_epoch_gradients(
                parallelism,
                dataset,
                &model,
                order,
                &batches,
                self.params.lambda,
                &mut partials,
            );
            let grad_time = grad_start.elapsed();

            aggregate(&partials, &mut totals);

            let update_start = Instant::now();
            let loss = updater.apply(&mut model, &totals, learning_rate, n_samples);
            let update_time = update_start.elapsed();

            let stats = EpochStats {
                epoch,
                loss,
                learning_rate,
                n_batches: batches.len(),
                grad_time,
                update_time,
            };
            logger.log_epoch(&stats);
            epochs.push(stats);

            if loss < best_loss - 1e-6 {
                best_loss = loss;
            }

            learning_rate *= self.params.lr_decay;
        }

        let total_time = run_start.elapsed();
        logger.finish_training(total_time, &model.equation());

        TrainReport {
            model,
            epochs,
            best_loss,
            total_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::{array, Array1, Array2};

    fn silent_params() -> MbgdParams {
        MbgdParams {
            verbosity: Verbosity::Silent,
            ..Default::default()
        }
    }

    #[test]
    fn test_params_default() {
        let params = MbgdParams::default();
        assert_eq!(params.learning_rate, 0.05);
        assert_eq!(params.lr_decay, 0.98);
        assert_eq!(params.momentum, 0.9);
        assert_eq!(params.lambda, 0.01);
        assert_eq!(params.n_epochs, 10);
        assert_eq!(params.seed, 1234);
        assert_eq!(params.schedule.base_size, 128);
        assert_eq!(params.schedule.min_size, 16);
    }

    #[test]
    fn zero_dataset_stays_at_zero() {
        let dataset = Dataset::new(Array2::zeros((64, 3)), Array1::zeros(64));
        let trainer = MbgdTrainer::new(silent_params());

        let report = trainer.train(&dataset, Parallelism::Sequential);

        assert!(report.epochs.iter().all(|e| e.loss == 0.0));
        assert!(report.model.weights().iter().all(|&w| w == 0.0));
        assert_eq!(report.model.bias(), 0.0);
    }

    #[test]
    fn two_sample_first_epoch() {
        // (x=1, y=3), (x=2, y=5) from a zero model:
        // loss = ((0-3)² + (0-5)²) / 2 = 17.0
        let dataset = Dataset::new(array![[1.0], [2.0]], array![3.0, 5.0]);
        let params = MbgdParams {
            n_epochs: 1,
            ..silent_params()
        };
        let trainer = MbgdTrainer::new(params);

        let report = trainer.train(&dataset, Parallelism::Sequential);

        assert_relative_eq!(report.epochs[0].loss, 17.0, max_relative = 1e-12);
        assert!(report.model.weight(0).is_finite());
        assert!(report.model.bias().is_finite());
        // Errors are negative for both samples, so the update must push the
        // weight and bias upward.
        assert!(report.model.weight(0) > 0.0);
        assert!(report.model.bias() > 0.0);
    }

    #[test]
    fn learning_rate_decays_every_epoch() {
        let dataset = Dataset::new(array![[1.0], [2.0]], array![3.0, 5.0]);
        let trainer = MbgdTrainer::new(silent_params());

        let report = trainer.train(&dataset, Parallelism::Sequential);

        assert_eq!(report.epochs.len(), 10);
        for (k, stats) in report.epochs.iter().enumerate() {
            let expected = 0.05 * 0.98f64.powi(k as i32);
            assert_relative_eq!(stats.learning_rate, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn loss_decreases_on_learnable_data() {
        // y = 2x + 1, exactly representable by the model.
        let features = Array2::from_shape_vec(
            (40, 1),
            (0..40).map(|i| i as f64 / 10.0).collect(),
        )
        .unwrap();
        let targets = Array1::from_iter(features.column(0).iter().map(|&x| 2.0 * x + 1.0));
        let dataset = Dataset::new(features, targets);

        let trainer = MbgdTrainer::new(silent_params());
        let report = trainer.train(&dataset, Parallelism::Sequential);

        let first = report.epochs.first().map(|e| e.loss).unwrap();
        let last = report.epochs.last().map(|e| e.loss).unwrap();
        assert!(last < first, "loss should decrease: {} -> {}", first, last);
        assert!(report.best_loss <= last);
    }

    #[test]
    fn same_seed_is_bit_identical() {
        let features = Array2::from_shape_vec(
            (30, 2),
            (0..60).map(|i| (i as f64 * 0.37).sin()).collect(),
        )
        .unwrap();
        let targets = Array1::from_iter((0..30).map(|i| (i as f64 * 0.11).cos()));
        let dataset = Dataset::new(features, targets);

        let trainer = MbgdTrainer::new(silent_params());
        let a = trainer.train(&dataset, Parallelism::Sequential);
        let b = trainer.train(&dataset, Parallelism::Sequential);

        assert_eq!(a.model, b.model);
        for (ea, eb) in a.epochs.iter().zip(&b.epochs) {
            assert_eq!(ea.loss.to_bits(), eb.loss.to_bits());
        }
    }

    #[test]
    fn single_sample_dataset_trains() {
        let dataset = Dataset::new(array![[1.0]], array![2.0]);
        let trainer = MbgdTrainer::new(silent_params());

        let report = trainer.train(&dataset, Parallelism::Sequential);

        assert_eq!(report.epochs[0].n_batches, 1);
        assert!(report.model.weight(0).is_finite());
    }

    #[test]
    #[should_panic(expected = "at least one sample")]
    fn empty_dataset_panics() {
        let dataset = Dataset::new(Array2::zeros((0, 1)), Array1::zeros(0));
        MbgdTrainer::new(silent_params()).train(&dataset, Parallelism::Sequential);
    }
}
