//! Momentum parameter update.

use ndarray::{Array1, ArrayView1, Zip};

use crate::repr::LinearModel;

use super::gradient::BatchGradient;

/// Momentum state carried across epochs.
///
/// The velocity vector accumulates exponentially decayed gradient history.
/// It is created once per training run and never reset mid-run.
#[derive(Debug, Clone)]
pub struct MomentumUpdater {
    velocity: Array1<f64>,
    velocity_bias: f64,
    momentum: f64,
}

impl MomentumUpdater {
    /// Create zeroed momentum state for `n_features` weights.
    pub fn new(n_features: usize, momentum: f64) -> Self {
        Self {
            velocity: Array1::zeros(n_features),
            velocity_bias: 0.0,
            momentum,
        }
    }

    /// Apply one momentum step from epoch-aggregated gradients.
    ///
    /// For every weight lane (and the bias):
    ///
    /// ```text
    /// v = momentum * v + learning_rate * grad / n_samples
    /// p -= v
    /// ```
    ///
    /// Returns the mean epoch loss, `sq_error / n_samples`.
    pub fn apply(
        &mut self,
        model: &mut LinearModel,
        totals: &BatchGradient,
        learning_rate: f64,
        n_samples: usize,
    ) -> f64 {
        let n = n_samples as f64;
        let momentum = self.momentum;

        Zip::from(model.weights_mut())
            .and(&mut self.velocity)
            .and(&totals.grad_weights)
            .for_each(|w, v, &g| {
                *v = momentum * *v + learning_rate * g / n;
                *w -= *v;
            });

        self.velocity_bias = momentum * self.velocity_bias + learning_rate * totals.grad_bias / n;
        model.add_bias(-self.velocity_bias);

        totals.sq_error / n
    }

    /// View of the velocity vector.
    pub fn velocity(&self) -> ArrayView1<'_, f64> {
        self.velocity.view()
    }

    /// Current bias velocity.
    pub fn velocity_bias(&self) -> f64 {
        self.velocity_bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn single_step_matches_formula() {
        let mut model = LinearModel::zeros(1);
        let mut updater = MomentumUpdater::new(1, 0.9);
        let totals = BatchGradient {
            grad_weights: array![-13.0],
            grad_bias: -8.0,
            sq_error: 34.0,
        };

        let loss = updater.apply(&mut model, &totals, 0.05, 2);

        // v = 0.05 * -13 / 2 = -0.325; w = 0.325
        assert_relative_eq!(model.weight(0), 0.325, max_relative = 1e-12);
        // v_b = 0.05 * -8 / 2 = -0.2; b = 0.2
        assert_relative_eq!(model.bias(), 0.2, max_relative = 1e-12);
        assert_relative_eq!(loss, 17.0, max_relative = 1e-12);
    }

    #[test]
    fn velocity_accumulates_across_steps() {
        let mut model = LinearModel::zeros(1);
        let mut updater = MomentumUpdater::new(1, 0.9);
        let totals = BatchGradient {
            grad_weights: array![1.0],
            grad_bias: 0.0,
            sq_error: 0.0,
        };

        updater.apply(&mut model, &totals, 1.0, 1);
        // v1 = 1.0
        assert_relative_eq!(updater.velocity()[0], 1.0);

        updater.apply(&mut model, &totals, 1.0, 1);
        // v2 = 0.9 * 1.0 + 1.0 = 1.9; w = -(1.0 + 1.9)
        assert_relative_eq!(updater.velocity()[0], 1.9, max_relative = 1e-12);
        assert_relative_eq!(model.weight(0), -2.9, max_relative = 1e-12);
    }

    #[test]
    fn zero_gradient_with_zero_velocity_is_a_noop() {
        let mut model = LinearModel::new(array![0.5], 0.1);
        let mut updater = MomentumUpdater::new(1, 0.9);
        let totals = BatchGradient::zeros(1);

        updater.apply(&mut model, &totals, 0.05, 4);

        assert_eq!(model.weight(0), 0.5);
        assert_eq!(model.bias(), 0.1);
    }

    #[test]
    fn decayed_velocity_keeps_moving_parameters() {
        let mut model = LinearModel::zeros(1);
        let mut updater = MomentumUpdater::new(1, 0.9);
        let push = BatchGradient {
            grad_weights: array![1.0],
            grad_bias: 0.0,
            sq_error: 0.0,
        };
        updater.apply(&mut model, &push, 1.0, 1);
        let w_after_push = model.weight(0);

        // Zero gradient: momentum alone carries the update.
        let coast = BatchGradient::zeros(1);
        updater.apply(&mut model, &coast, 1.0, 1);

        assert_relative_eq!(updater.velocity()[0], 0.9, max_relative = 1e-12);
        assert!(model.weight(0) < w_after_push);
    }
}
