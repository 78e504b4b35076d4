// =============================================================================
// Prediction
// =============================================================================
//
// Applies a fitted model to new data: linear predictor X_new·B + 1·b0',
// then the family's inverse link element-wise. Pure functions — nothing is
// mutated, and identical inputs produce bit-identical outputs.
//
// =============================================================================

use ndarray::{Array1, Array2};

use crate::error::{NetGlmError, Result};
use crate::families::Family;
use crate::solvers::proximal::{linear_predictor, NetworkGlmFit};

/// Predict expected responses for new samples.
///
/// # Errors
/// * `DimensionMismatch` - `x_new` column count does not match B's row count
pub fn predict(
    coefficients: &Array2<f64>,
    intercept: &Array1<f64>,
    x_new: &Array2<f64>,
    family: &dyn Family,
) -> Result<Array2<f64>> {
    if x_new.ncols() != coefficients.nrows() {
        return Err(NetGlmError::DimensionMismatch(format!(
            "X_new has {} columns but the model has {} coefficient rows",
            x_new.ncols(),
            coefficients.nrows()
        )));
    }
    if intercept.len() != coefficients.ncols() {
        return Err(NetGlmError::DimensionMismatch(format!(
            "intercept has {} entries but the model has {} response columns",
            intercept.len(),
            coefficients.ncols()
        )));
    }

    let eta = linear_predictor(x_new, coefficients, intercept);
    Ok(family.inverse_link(&eta))
}

impl NetworkGlmFit {
    /// Predict from this fitted model; see [`predict`].
    pub fn predict(&self, x_new: &Array2<f64>, family: &dyn Family) -> Result<Array2<f64>> {
        predict(&self.coefficients, &self.intercept, x_new, family)
    }
}

// =============================================================================
// Tests
// =============================================================================
