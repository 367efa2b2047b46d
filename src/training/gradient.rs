//! Per-batch gradient computation and epoch aggregation.
//!
//! Each batch accumulates into its own preallocated [`BatchGradient`] slot
//! (one slot per batch index), so the parallel phase needs no locks or
//! atomics: workers share the model, dataset, and permutation read-only and
//! write disjoint slots.

use std::ops::Range;

use ndarray::{Array1, Zip};
use rayon::prelude::*;

use crate::data::Dataset;
use crate::repr::LinearModel;
use crate::utils::Parallelism;

/// Gradient contribution of a single batch.
///
/// Written by exactly one worker during the parallel phase, read once
/// during aggregation.
#[derive(Debug, Clone)]
pub struct BatchGradient {
    /// Gradient over the weight vector.
    pub grad_weights: Array1<f64>,
    /// Gradient over the bias.
    pub grad_bias: f64,
    /// Sum of squared prediction errors in the batch.
    pub sq_error: f64,
}

impl BatchGradient {
    /// Create a zeroed accumulator for `n_features` weights.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            grad_weights: Array1::zeros(n_features),
            grad_bias: 0.0,
            sq_error: 0.0,
        }
    }

    /// Reset all accumulators to zero.
    pub fn reset(&mut self) {
        self.grad_weights.fill(0.0);
        self.grad_bias = 0.0;
        self.sq_error = 0.0;
    }
}

/// Accumulate one batch's gradient against the epoch-start parameter snapshot.
///
/// For every sample id in `ids`:
///
/// ```text
/// err        = bias + dot(weights, x) - target
/// grad_w[j] += err * x[j] + lambda * w[j]
/// grad_b    += err
/// sq_error  += err²
/// ```
///
/// The L2 term `lambda * w[j]` is added once per sample, so the penalty
/// scales with batch occupancy.
pub fn accumulate_batch(
    dataset: &Dataset,
    model: &LinearModel,
    ids: &[usize],
    lambda: f64,
    out: &mut BatchGradient,
) {
    out.reset();
    let weights = model.weights();

    for &id in ids {
        let row = dataset.sample(id);
        let err = model.predict_row(row) - dataset.target(id);

        Zip::from(&mut out.grad_weights)
            .and(row)
            .and(weights)
            .for_each(|g, &x, &w| *g += err * x + lambda * w);

        out.grad_bias += err;
        out.sq_error += err * err;
    }
}

/// Compute all batch gradients for one epoch.
///
/// Batch `b` covers `order[batches[b]]` and writes `partials[b]`. Under
/// [`Parallelism::Parallel`] batches are distributed across the rayon pool
/// with dynamic work-stealing; the call returns only once every batch has
/// committed its slot.
pub fn compute_epoch_gradients(
    parallelism: Parallelism,
    dataset: &Dataset,
    model: &LinearModel,
    order: &[usize],
    batches: &[Range<usize>],
    lambda: f64,
    partials: &mut [BatchGradient],
) {
    debug_assert_eq!(batches.len(), partials.len());

    if parallelism.is_parallel() {
        partials
            .par_iter_mut()
            .zip(batches.par_iter())
            .for_each(|(slot, batch)| {
                accumulate_batch(dataset, model, &order[batch.clone()], lambda, slot);
            });
    } else {
        for (slot, batch) in partials.iter_mut().zip(batches) {
            accumulate_batch(dataset, model, &order[batch.clone()], lambda, slot);
        }
    }
}

/// Sum batch contributions into epoch totals, in batch order.
///
/// The summation order is fixed so repeated runs aggregate identically.
pub fn aggregate(partials: &[BatchGradient], total: &mut BatchGradient) {
    total.reset();
    for partial in partials {
        total.grad_weights += &partial.grad_weights;
        total.grad_bias += partial.grad_bias;
        total.sq_error += partial.sq_error;
    }
}
