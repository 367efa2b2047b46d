//! Batch-size schedule and epoch partitioning.

use std::ops::Range;

/// Shrinking batch-size schedule.
///
/// The batch size decays by `decay_step` every `decay_interval` epochs and
/// is floored at `min_size`. It never grows.
#[derive(Debug, Clone)]
pub struct BatchSchedule {
    /// Batch size at epoch 0.
    pub base_size: usize,
    /// Lower bound on the batch size.
    pub min_size: usize,
    /// Amount subtracted from the base size per decay interval.
    pub decay_step: usize,
    /// Number of epochs between decay steps.
    pub decay_interval: u32,
}

impl Default for BatchSchedule {
    fn default() -> Self {
        Self {
            base_size: 128,
            min_size: 16,
            decay_step: 16,
            decay_interval: 10,
        }
    }
}

impl BatchSchedule {
    /// Batch size for the given epoch:
    /// `max(min_size, base_size - decay_step * (epoch / decay_interval))`.
    pub fn batch_size(&self, epoch: u32) -> usize {
        let decay = self.decay_step * (epoch / self.decay_interval) as usize;
        self.base_size.saturating_sub(decay).max(self.min_size)
    }

    /// Contiguous index ranges covering `0..n_samples` for the given epoch.
    ///
    /// The final range may be shorter than the batch size. If `n_samples`
    /// is smaller than the batch size there is exactly one batch.
    pub fn batches(&self, epoch: u32, n_samples: usize) -> Vec<Range<usize>> {
        let size = self.batch_size(epoch);
        let n_batches = n_samples.div_ceil(size);
        (0..n_batches)
            .map(|b| b * size..((b + 1) * size).min(n_samples))
            .collect()
    }
}
