// =============================================================================
// Closed-Form Network Ridge (Gaussian, λ1 = 0)
// =============================================================================
//
// With a gaussian family and no L1 term, the objective
//
//     0.5·‖Y − X·B − 1·b0'‖² + λG·tr(B'·L·B)
//
// is a penalized least-squares problem with an exact solution. Augment the
// design with an intercept column and give that row/column zero penalty:
//
//     Z = [1 | X],   P = blockdiag(0, λG·L)
//     (Z'Z + P)·Θ = Z'Y,   Θ = [b0' ; B]
//
// This is the direct analogue of solving penalized weighted least squares
// with unpenalized parametric columns, and serves as the exact reference the
// iterative solver converges toward when λ1 = 0.
//
// =============================================================================

use ndarray::{s, Array1, Array2};

use crate::convert::solve_symmetric_system;
use crate::error::{NetGlmError, Result};

/// Solve the gaussian network-ridge problem in closed form.
///
/// Returns `(B, b0)` with B p×k and b0 of length k. The intercept is not
/// penalized.
///
/// # Errors
/// * `DimensionMismatch` - Laplacian is not p×p, or X/Y row counts disagree
/// * `EmptyInput` - no rows or no columns
/// * `InvalidValue` - negative network penalty
/// * `LinearAlgebraError` - the penalized normal equations are singular
pub fn fit_network_ridge(
    x: &Array2<f64>,
    y: &Array2<f64>,
    laplacian: &Array2<f64>,
    network_penalty: f64,
) -> Result<(Array2<f64>, Array1<f64>)> {
    let n = x.nrows();
    let p = x.ncols();
    let k = y.ncols();

    if n == 0 {
        return Err(NetGlmError::EmptyInput("X has no rows".to_string()));
    }
    if p == 0 {
        return Err(NetGlmError::EmptyInput("X has no columns".to_string()));
    }
    if y.nrows() != n {
        return Err(NetGlmError::DimensionMismatch(format!(
            "X has {} rows but Y has {}",
            n,
            y.nrows()
        )));
    }
    if laplacian.nrows() != p || laplacian.ncols() != p {
        return Err(NetGlmError::DimensionMismatch(format!(
            "Laplacian is {}x{} but X has {} columns",
            laplacian.nrows(),
            laplacian.ncols(),
            p
        )));
    }
    if network_penalty < 0.0 {
        return Err(NetGlmError::InvalidValue(format!(
            "network penalty must be nonnegative, got {}",
            network_penalty
        )));
    }

    // Z = [1 | X]
    let mut design = Array2::ones((n, p + 1));
    design.slice_mut(s![.., 1..]).assign(x);

    // Z'Z + blockdiag(0, λG·L); factor 2·λG matches the gradient of
    // 0.5‖·‖² + λG·tr(B'LB) used by the iterative solver.
    let mut system = design.t().dot(&design);
    let penalty = 2.0 * network_penalty * laplacian;
    let mut block = system.slice_mut(s![1.., 1..]);
    block += &penalty;

    let rhs = design.t().dot(y);

    let theta = solve_symmetric_system(&system, &rhs).ok_or_else(|| {
        NetGlmError::LinearAlgebraError(
            "penalized normal equations are singular; check for collinear features".to_string(),
        )
    })?;

    let intercept = theta.row(0).to_owned();
    let coefficients = theta.slice(s![1.., ..]).to_owned();
    Ok((coefficients, intercept))
}

// =============================================================================
// Tests
// =============================================================================
