// =============================================================================
// Feature Standardization
// =============================================================================
//
// Per-column z-scoring of a design matrix: subtract the column mean, divide
// by the population standard deviation (ddof = 0). Penalized fits are scale
// sensitive — a feature measured in larger units would otherwise see a
// proportionally weaker L1 penalty — so features are standardized before
// fitting.
//
// The fit/transform split matters: the scaler fitted on training data must
// be reused on the test design so both live in the same coordinate system.
// Zero-variance columns are left unscaled (divisor 1.0) rather than
// producing NaNs.
//
// =============================================================================

use ndarray::{Array1, Array2, Axis};

use crate::error::{NetGlmError, Result};

/// Column-wise standardization parameters learned from a training matrix.
#[derive(Debug, Clone)]
pub struct Standardizer {
    /// Per-column means.
    pub mean: Array1<f64>,
    /// Per-column scales (population standard deviation; 1.0 where the
    /// column is constant).
    pub scale: Array1<f64>,
}

impl Standardizer {
    /// Learn means and scales from a training design matrix.
    ///
    /// # Errors
    /// * `EmptyInput` - the matrix has no rows
    pub fn fit(x: &Array2<f64>) -> Result<Self> {
        let n = x.nrows() as f64;
        let mean = x.mean_axis(Axis(0)).ok_or_else(|| {
            NetGlmError::EmptyInput("cannot standardize a matrix with no rows".to_string())
        })?;

        let mut scale = Array1::zeros(x.ncols());
        for j in 0..x.ncols() {
            let var = x.column(j).iter().map(|&v| (v - mean[j]).powi(2)).sum::<f64>() / n;
            let sd = var.sqrt();
            scale[j] = if sd > 0.0 { sd } else { 1.0 };
        }

        Ok(Self { mean, scale })
    }

    /// Apply the learned transform to a matrix with the same column layout.
    ///
    /// # Errors
    /// * `DimensionMismatch` - column count differs from the fitted matrix
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.mean.len() {
            return Err(NetGlmError::DimensionMismatch(format!(
                "matrix has {} columns but the standardizer was fit on {}",
                x.ncols(),
                self.mean.len()
            )));
        }

        Ok(Array2::from_shape_fn(
            (x.nrows(), x.ncols()),
            |(i, j)| (x[[i, j]] - self.mean[j]) / self.scale[j],
        ))
    }

    /// Fit and transform in one step (training-set convenience).
    pub fn fit_transform(x: &Array2<f64>) -> Result<(Self, Array2<f64>)> {
        let scaler = Self::fit(x)?;
        let transformed = scaler.transform(x)?;
        Ok((scaler, transformed))
    }
}

// =============================================================================
// Tests
// =============================================================================
