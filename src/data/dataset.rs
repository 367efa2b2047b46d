//! Dataset container.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Immutable training dataset: feature matrix plus regression targets.
///
/// # Storage Layout
///
/// Features are stored **sample-major**: `[n_samples, n_features]`. The
/// gradient step consumes whole rows (one dot product per sample), so each
/// sample's features are contiguous in memory. The matrix is allocated once
/// at load time and never resized during training.
///
/// # Example
///
/// ```
/// use mbgd::data::Dataset;
/// use ndarray::{array, Array1};
///
/// // 3 samples, 2 features
/// let features = array![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]];
/// let targets = Array1::from_vec(vec![0.0, 1.0, 0.0]);
/// let ds = Dataset::new(features, targets);
///
/// assert_eq!(ds.n_samples(), 3);
/// assert_eq!(ds.n_features(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_samples, n_features]` (sample-major).
    features: Array2<f64>,

    /// Target values: length = n_samples.
    targets: Array1<f64>,
}

impl Dataset {
    /// Create a dataset from sample-major feature data and targets.
    ///
    /// # Panics
    ///
    /// Debug-asserts that targets length matches the feature row count.
    pub fn new(features: Array2<f64>, targets: Array1<f64>) -> Self {
        debug_assert_eq!(
            features.nrows(),
            targets.len(),
            "targets must have same sample count as features"
        );
        Self { features, targets }
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Feature row for one sample.
    #[inline]
    pub fn sample(&self, id: usize) -> ArrayView1<'_, f64> {
        self.features.row(id)
    }

    /// Target value for one sample.
    #[inline]
    pub fn target(&self, id: usize) -> f64 {
        self.targets[id]
    }

    /// View of the full feature matrix `[n_samples, n_features]`.
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// View of the target vector.
    pub fn targets(&self) -> ArrayView1<'_, f64> {
        self.targets.view()
    }
}
