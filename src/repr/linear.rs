//! Linear model data structure.

use std::fmt::Write as _;

use ndarray::{Array1, ArrayView1, ArrayViewMut1};

/// Linear regression model (weights + bias).
///
/// # Example
///
/// ```
/// use mbgd::repr::LinearModel;
/// use ndarray::array;
///
/// let model = LinearModel::new(array![0.5, 0.3], 0.1);
///
/// assert_eq!(model.weight(0), 0.5);
/// assert_eq!(model.bias(), 0.1);
/// let pred = model.predict_row(array![1.0, 2.0].view());
/// assert!((pred - 1.2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Array1<f64>,
    bias: f64,
}

impl LinearModel {
    /// Create a model from explicit weights and bias.
    pub fn new(weights: Array1<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Create a zero-initialized model.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Array1::zeros(n_features),
            bias: 0.0,
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Get the weight for one feature.
    #[inline]
    pub fn weight(&self, feature: usize) -> f64 {
        self.weights[feature]
    }

    /// View of the weight vector.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Mutable view of the weight vector (for training).
    #[inline]
    pub fn weights_mut(&mut self) -> ArrayViewMut1<'_, f64> {
        self.weights.view_mut()
    }

    /// Get the bias term.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Add to the bias term.
    #[inline]
    pub fn add_bias(&mut self, delta: f64) {
        self.bias += delta;
    }

    /// Predicted value for one feature row: `bias + dot(weights, row)`.
    #[inline]
    pub fn predict_row(&self, row: ArrayView1<'_, f64>) -> f64 {
        self.bias + self.weights.dot(&row)
    }

    /// Render the model as an equation: `y = b + w0*x0 + w1*x1 + ...`.
    pub fn equation(&self) -> String {
        let mut eq = format!("y = {}", self.bias);
        for (j, w) in self.weights.iter().enumerate() {
            let _ = write!(eq, " + {}*x{}", w, j);
        }
        eq
    }
}
