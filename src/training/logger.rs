//! Structured console logging for training runs.

use std::time::Duration;

use super::trainer::EpochStats;

/// Verbosity level for training output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Per-epoch metrics and the final summary.
    #[default]
    Info,
}

/// Console logger for training progress.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    /// Create a new logger with the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    /// Log the dataset banner at the start of a run.
    pub fn start_training(&self, n_samples: usize, n_features: usize) {
        if self.verbosity >= Verbosity::Info {
            println!(
                "Loaded dataset with {} samples and {} features.",
                n_samples, n_features
            );
        }
    }

    /// Log one epoch's metrics.
    pub fn log_epoch(&self, stats: &EpochStats) {
        if self.verbosity >= Verbosity::Info {
            println!(
                "Epoch {} | Loss = {} | lr = {}",
                stats.epoch + 1,
                stats.loss,
                stats.learning_rate
            );
            println!("Batches: {}", stats.n_batches);
            println!(
                "Gradient Time: {:.6} sec | Update Time: {:.6} sec",
                stats.grad_time.as_secs_f64(),
                stats.update_time.as_secs_f64()
            );
        }
    }

    /// Log the final summary: total wall time and the model equation.
    pub fn finish_training(&self, total_time: Duration, equation: &str) {
        if self.verbosity >= Verbosity::Info {
            println!(
                "\nTotal Execution time (seconds): {}",
                total_time.as_secs_f64()
            );
            println!("\nFinal model: {}", equation);
        }
    }
}
