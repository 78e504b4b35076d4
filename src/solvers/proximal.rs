// =============================================================================
// Proximal Gradient Descent for Network-Regularized GLMs
// =============================================================================
//
// This is the core optimizer. It minimizes, over a coefficient matrix B
// (p×k) and intercept vector b0 (k):
//
//     loss(X·B + 1·b0', Y; family) + λ1·‖B‖₁ + λG·tr(B'·L·B)
//
// where L is the graph Laplacian of the feature-relationship graph. The data
// loss and the network term are smooth; the L1 term is not, so plain
// gradient descent does not apply.
//
// THE ALGORITHM
// -------------
// Each iteration splits the objective:
//
//   1. Gradient step on the smooth part:
//        grad_B  = X'·(μ − Y) + 2·λG·L·B
//        grad_b0 = column sums of (μ − Y)
//   2. Proximal step on the L1 part — element-wise soft-thresholding of B
//      at level η·λ1 (the closed-form proximal operator of the L1 norm).
//      The intercept is never penalized.
//
// When λG > 0, L couples every response column inside the same iteration;
// iterations are strictly sequential. When λ1 = 0 the threshold is zero and
// the scheme reduces to gradient descent on a network-ridge objective; when
// λG = 0 it reduces to independent lasso-style GLM fits per column.
//
// STOPPING
// --------
// The default is a fixed iteration budget: exactly `max_iterations` steps,
// so identical inputs always produce identical outputs. An objective-change
// tolerance can be opted into via `FitConfig::tolerance`.
//
// DIVERGENCE
// ----------
// A learning rate too large for the problem's curvature makes the iterates
// blow up. The first non-finite gradient or coefficient aborts the fit with
// `NonFiniteGradient`; there is no automatic step-size backoff here — that
// policy belongs to the caller.
//
// =============================================================================

use ndarray::{Array1, Array2, Axis};

use crate::error::{NetGlmError, Result};
use crate::families::Family;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a single network-GLM fit.
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// L1 penalty weight λ1 ≥ 0. Zero disables sparsity.
    /// Default: 1.0
    pub l1_penalty: f64,

    /// Network penalty weight λG ≥ 0. Zero disables the Laplacian term.
    /// Default: 1.0
    pub network_penalty: f64,

    /// Gradient step size η > 0.
    /// Default: 0.01
    pub learning_rate: f64,

    /// Iteration budget T ≥ 1. The fit runs exactly this many steps unless
    /// `tolerance` is set.
    /// Default: 100
    pub max_iterations: usize,

    /// Optional early stop: halt when the relative change in objective value
    /// between consecutive iterations falls below this.
    /// Default: None (fixed budget; identical inputs give identical fits)
    pub tolerance: Option<f64>,

    /// Print per-iteration objective progress to stderr.
    /// Default: false
    pub verbose: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            l1_penalty: 1.0,
            network_penalty: 1.0,
            learning_rate: 0.01,
            max_iterations: 100,
            tolerance: None,
            verbose: false,
        }
    }
}

// =============================================================================
// Result Structure
// =============================================================================

/// A fitted network-regularized GLM.
///
/// Immutable once fitting returns; prediction reads from it without
/// mutating anything.
#[derive(Debug, Clone)]
pub struct NetworkGlmFit {
    /// Coefficient matrix B (p×k).
    pub coefficients: Array2<f64>,

    /// Intercept vector b0 (length k), never penalized.
    pub intercept: Array1<f64>,

    /// Objective value at the returned coefficients.
    pub objective: f64,

    /// Iterations actually run.
    pub iterations: usize,

    /// True only when a tolerance was set and triggered the early exit.
    pub converged: bool,

    /// Name of the family the model was fit under.
    pub family_name: String,
}

// =============================================================================
// Main Fitting Function
// =============================================================================

/// Fit a network-regularized GLM by proximal gradient descent.
///
/// # Arguments
/// * `x` - Design matrix (n×p); column order must match the graph's node order
/// * `y` - Response matrix (n×k), k ≥ 1
/// * `laplacian` - Graph Laplacian (p×p) from `build_laplacian`
/// * `family` - Response family (Gaussian, Binomial, Poisson)
/// * `config` - Penalty weights, learning rate, iteration budget
///
/// # Errors
/// * `DimensionMismatch` - Laplacian is not p×p, or X/Y row counts disagree
/// * `EmptyInput` - no rows or no columns
/// * `InvalidValue` - negative penalty, non-positive learning rate, zero budget
/// * `NonFiniteGradient` - divergence during optimization
pub fn fit_network_glm(
    x: &Array2<f64>,
    y: &Array2<f64>,
    laplacian: &Array2<f64>,
    family: &dyn Family,
    config: &FitConfig,
) -> Result<NetworkGlmFit> {
    let n = x.nrows();
    let p = x.ncols();
    let k = y.ncols();

    // -------------------------------------------------------------------------
    // Validate before any iteration runs
    // -------------------------------------------------------------------------
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
    if config.l1_penalty < 0.0 || config.network_penalty < 0.0 {
        return Err(NetGlmError::InvalidValue(format!(
            "penalty weights must be nonnegative, got l1={} network={}",
            config.l1_penalty, config.network_penalty
        )));
    }
    if config.learning_rate <= 0.0 {
        return Err(NetGlmError::InvalidValue(format!(
            "learning rate must be positive, got {}",
            config.learning_rate
        )));
    }
    if config.max_iterations == 0 {
        return Err(NetGlmError::InvalidValue(
            "max_iterations must be at least 1".to_string(),
        ));
    }

    let step = config.learning_rate;
    let threshold = step * config.l1_penalty;

    let mut coefficients: Array2<f64> = Array2::zeros((p, k));
    let mut intercept: Array1<f64> = Array1::zeros(k);

    let mut objective = objective_value(x, y, laplacian, family, config, &coefficients, &intercept);
    let mut converged = false;
    let mut iteration = 0;

    while iteration < config.max_iterations {
        iteration += 1;

        // ---------------------------------------------------------------------
        // Gradient of the smooth part (data loss + network penalty)
        // ---------------------------------------------------------------------
        let eta = linear_predictor(x, &coefficients, &intercept);
        let residual = family.gradient(&eta, y);

        let grad_coef = x.t().dot(&residual) + 2.0 * config.network_penalty * laplacian.dot(&coefficients);
        let grad_intercept = residual.sum_axis(Axis(0));

        if !all_finite(&grad_coef) || !grad_intercept.iter().all(|v| v.is_finite()) {
            return Err(NetGlmError::NonFiniteGradient(format!(
                "gradient became non-finite at iteration {} (learning rate {} may be too large)",
                iteration, step
            )));
        }

        // ---------------------------------------------------------------------
        // Gradient step, then soft-threshold B (intercept left untouched)
        // ---------------------------------------------------------------------
        coefficients = (&coefficients - &(step * &grad_coef)).mapv(|b| soft_threshold(b, threshold));
        intercept -= &(step * &grad_intercept);

        if !all_finite(&coefficients) || !intercept.iter().all(|v| v.is_finite()) {
            return Err(NetGlmError::NonFiniteGradient(format!(
                "coefficients became non-finite at iteration {} (learning rate {} may be too large)",
                iteration, step
            )));
        }

        // ---------------------------------------------------------------------
        // Objective bookkeeping and optional early exit
        // ---------------------------------------------------------------------
        let objective_old = objective;
        objective = objective_value(x, y, laplacian, family, config, &coefficients, &intercept);

        let rel_change = if objective_old.abs() > 1e-10 {
            (objective_old - objective).abs() / objective_old.abs()
        } else {
            (objective_old - objective).abs()
        };

        if config.verbose {
            eprintln!(
                "Iteration {}: objective = {:.6}, rel_change = {:.2e}",
                iteration, objective, rel_change
            );
        }

        if let Some(tol) = config.tolerance {
            if rel_change < tol {
                converged = true;
                break;
            }
        }
    }

    Ok(NetworkGlmFit {
        coefficients,
        intercept,
        objective,
        iterations: iteration,
        converged,
        family_name: family.name().to_string(),
    })
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Linear predictor η = X·B + 1·b0' (n×k).
pub(crate) fn linear_predictor(
    x: &Array2<f64>,
    coefficients: &Array2<f64>,
    intercept: &Array1<f64>,
) -> Array2<f64> {
    let mut eta = x.dot(coefficients);
    eta += intercept;
    eta
}

/// Proximal operator of the L1 norm: shrink toward zero by `threshold`,
/// zeroing anything the shrinkage would push across zero.
pub(crate) fn soft_threshold(value: f64, threshold: f64) -> f64 {
    if value > threshold {
        value - threshold
    } else if value < -threshold {
        value + threshold
    } else {
        0.0
    }
}

/// Full objective: data loss + λ1·‖B‖₁ + λG·tr(B'·L·B).
fn objective_value(
    x: &Array2<f64>,
    y: &Array2<f64>,
    laplacian: &Array2<f64>,
    family: &dyn Family,
    config: &FitConfig,
    coefficients: &Array2<f64>,
    intercept: &Array1<f64>,
) -> f64 {
    let eta = linear_predictor(x, coefficients, intercept);
    let data_loss = family.loss(&eta, y);
    let l1_term = config.l1_penalty * coefficients.mapv(f64::abs).sum();
    // tr(B'LB) = Σ_ij (LB)_ij · B_ij
    let network_term = config.network_penalty * (laplacian.dot(coefficients) * coefficients).sum();
    data_loss + l1_term + network_term
}

fn all_finite(a: &Array2<f64>) -> bool {
    a.iter().all(|v| v.is_finite())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::{family_from_name, GaussianFamily};
    use crate::graph::Graph;
    use crate::laplacian::build_laplacian;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, StandardNormal};

    fn standard_normal_matrix(rng: &mut StdRng, n: usize, p: usize) -> Array2<f64> {
        Array2::from_shape_fn((n, p), |_| StandardNormal.sample(rng))
    }

    #[test]
    fn test_soft_threshold_operator() {
        assert_abs_diff_eq!(soft_threshold(3.0, 1.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(soft_threshold(-3.0, 1.0), -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(soft_threshold(0.5, 1.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(soft_threshold(-0.5, 1.0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(soft_threshold(2.0, 0.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_unpenalized_gaussian_reduces_to_ols() {
        // With λ1 = λG = 0 the fit must match ordinary least squares.
        let x = array![
            [1.0, 0.5],
            [2.0, -0.5],
            [3.0, 1.5],
            [4.0, 0.0],
            [5.0, -1.0],
            [0.5, 2.0],
            [1.5, -2.0],
            [2.5, 0.8],
        ];
        // y = 1 + 2*x0 - 0.5*x1, noise-free
        let y = Array2::from_shape_fn((8, 1), |(i, _)| 1.0 + 2.0 * x[[i, 0]] - 0.5 * x[[i, 1]]);

        let laplacian = Array2::zeros((2, 2));
        let config = FitConfig {
            l1_penalty: 0.0,
            network_penalty: 0.0,
            learning_rate: 0.01,
            max_iterations: 20000,
            tolerance: None,
            verbose: false,
        };

        let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
        assert_abs_diff_eq!(fit.coefficients[[0, 0]], 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(fit.coefficients[[1, 0]], -0.5, epsilon = 1e-3);
        assert_abs_diff_eq!(fit.intercept[0], 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_edgeless_graph_matches_zero_network_penalty() {
        // With L = 0 the network weight is inert: outputs are bit-identical.
        let mut rng = StdRng::seed_from_u64(7);
        let x = standard_normal_matrix(&mut rng, 12, 3);
        let y = Array2::from_shape_fn((12, 1), |(i, _)| x[[i, 0]] - x[[i, 2]]);
        let laplacian = Array2::zeros((3, 3));

        let mut config = FitConfig {
            l1_penalty: 0.1,
            network_penalty: 5.0,
            learning_rate: 0.01,
            max_iterations: 150,
            tolerance: None,
            verbose: false,
        };
        let with_penalty = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();

        config.network_penalty = 0.0;
        let without = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();

        assert_eq!(with_penalty.coefficients, without.coefficients);
        assert_eq!(with_penalty.intercept, without.intercept);
    }

    #[test]
    fn test_network_penalty_shrinks_coefficient_gap() {
        // Features 0 and 1 tied by a single edge: increasing λG must
        // monotonically shrink |B[0] − B[1]|.
        let graph = Graph::parse_edge_list("f0 f1\n").unwrap();
        let (_, laplacian) = build_laplacian(&graph);

        let mut rng = StdRng::seed_from_u64(21);
        let x = standard_normal_matrix(&mut rng, 30, 2);
        // Only feature 0 carries signal, so unregularized B[0] and B[1] differ.
        let y = Array2::from_shape_fn((30, 1), |(i, _)| 2.0 * x[[i, 0]]);

        let mut gaps = Vec::new();
        for &network_penalty in &[0.0, 1.0, 10.0, 50.0] {
            let config = FitConfig {
                l1_penalty: 0.0,
                network_penalty,
                learning_rate: 0.002,
                max_iterations: 8000,
                tolerance: None,
                verbose: false,
            };
            let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
            gaps.push((fit.coefficients[[0, 0]] - fit.coefficients[[1, 0]]).abs());
        }

        for pair in gaps.windows(2) {
            assert!(
                pair[1] < pair[0] + 1e-9,
                "gap did not shrink: {:?}",
                gaps
            );
        }
        // At λG = 50 the two coefficients are nearly fused.
        assert!(gaps[3] < 0.2 * gaps[0]);
    }

    #[test]
    fn test_monotone_sparsification_in_l1() {
        let mut rng = StdRng::seed_from_u64(3);
        let x = standard_normal_matrix(&mut rng, 40, 6);
        let y = Array2::from_shape_fn((40, 1), |(i, _)| 1.5 * x[[i, 0]] - 0.8 * x[[i, 3]]);
        let laplacian = Array2::zeros((6, 6));

        let mut nonzero_counts = Vec::new();
        for &l1_penalty in &[0.0, 0.5, 2.0, 10.0, 100.0] {
            let config = FitConfig {
                l1_penalty,
                network_penalty: 0.0,
                learning_rate: 0.005,
                max_iterations: 2000,
                tolerance: None,
                verbose: false,
            };
            let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
            let nnz = fit.coefficients.iter().filter(|&&b| b != 0.0).count();
            nonzero_counts.push(nnz);
        }

        for pair in nonzero_counts.windows(2) {
            assert!(
                pair[1] <= pair[0],
                "nonzero count increased with l1: {:?}",
                nonzero_counts
            );
        }
        // A large enough penalty kills everything.
        assert_eq!(*nonzero_counts.last().unwrap(), 0);
    }

    #[test]
    fn test_dimension_mismatch_graph_vs_design() {
        // 5-node graph against a 4-column design matrix fails before iterating.
        let graph = Graph::parse_edge_list("a b\nb c\nc d\nd e\n").unwrap();
        let (_, laplacian) = build_laplacian(&graph);
        assert_eq!(laplacian.nrows(), 5);

        let x = Array2::zeros((10, 4));
        let y = Array2::zeros((10, 1));

        let err =
            fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &FitConfig::default()).unwrap_err();
        assert!(matches!(err, NetGlmError::DimensionMismatch(_)));
    }

    #[test]
    fn test_row_count_mismatch() {
        let x = Array2::zeros((10, 2));
        let y = Array2::zeros((9, 1));
        let laplacian = Array2::zeros((2, 2));

        let err =
            fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &FitConfig::default()).unwrap_err();
        assert!(matches!(err, NetGlmError::DimensionMismatch(_)));
    }

    #[test]
    fn test_absurd_learning_rate_diverges() {
        let mut rng = StdRng::seed_from_u64(11);
        let x = standard_normal_matrix(&mut rng, 10, 2);
        let y = Array2::from_shape_fn((10, 1), |(i, _)| x[[i, 0]]);
        let laplacian = Array2::zeros((2, 2));

        let config = FitConfig {
            l1_penalty: 0.0,
            network_penalty: 0.0,
            learning_rate: 1e6,
            max_iterations: 100,
            tolerance: None,
            verbose: false,
        };

        let err = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap_err();
        assert!(matches!(err, NetGlmError::NonFiniteGradient(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let x = Array2::zeros((5, 2));
        let y = Array2::zeros((5, 1));
        let laplacian = Array2::zeros((2, 2));

        let mut config = FitConfig::default();
        config.learning_rate = 0.0;
        assert!(matches!(
            fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap_err(),
            NetGlmError::InvalidValue(_)
        ));

        let mut config = FitConfig::default();
        config.l1_penalty = -1.0;
        assert!(matches!(
            fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap_err(),
            NetGlmError::InvalidValue(_)
        ));

        let mut config = FitConfig::default();
        config.max_iterations = 0;
        assert!(matches!(
            fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap_err(),
            NetGlmError::InvalidValue(_)
        ));
    }

    #[test]
    fn test_fixed_budget_runs_exactly_t_iterations() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![[1.0], [2.0], [3.0]];
        let laplacian = Array2::zeros((1, 1));

        let config = FitConfig {
            l1_penalty: 0.0,
            network_penalty: 0.0,
            learning_rate: 0.01,
            max_iterations: 37,
            tolerance: None,
            verbose: false,
        };
        let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
        assert_eq!(fit.iterations, 37);
        assert!(!fit.converged);
    }

    #[test]
    fn test_tolerance_early_exit() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![[2.0], [4.0], [6.0], [8.0]];
        let laplacian = Array2::zeros((1, 1));

        let config = FitConfig {
            l1_penalty: 0.0,
            network_penalty: 0.0,
            learning_rate: 0.01,
            max_iterations: 50000,
            tolerance: Some(1e-12),
            verbose: false,
        };
        let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
        assert!(fit.converged);
        assert!(fit.iterations < 50000);
        assert_abs_diff_eq!(fit.coefficients[[0, 0]], 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_chain_graph_end_to_end() {
        // 3-node chain, Y driven by feature 0 plus noise. B[0] should
        // dominate, and the network penalty should pull B[1] toward its
        // neighbors relative to an unregularized fit.
        let graph = Graph::parse_edge_list("g0 g1\ng1 g2\n").unwrap();
        let (_, laplacian) = build_laplacian(&graph);

        let mut rng = StdRng::seed_from_u64(42);
        let x = standard_normal_matrix(&mut rng, 10, 3);
        let noise = standard_normal_matrix(&mut rng, 10, 1);
        let y = Array2::from_shape_fn((10, 1), |(i, _)| x[[i, 0]] + 0.1 * noise[[i, 0]]);

        let config = FitConfig {
            l1_penalty: 0.1,
            network_penalty: 0.5,
            learning_rate: 0.01,
            max_iterations: 200,
            tolerance: None,
            verbose: false,
        };
        let fit = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();

        let b: Vec<f64> = fit.coefficients.column(0).to_vec();
        // B[0] closest to 1 among the three coefficients
        let dist_to_one: Vec<f64> = b.iter().map(|&v| (v - 1.0).abs()).collect();
        assert!(dist_to_one[0] < dist_to_one[1]);
        assert!(dist_to_one[0] < dist_to_one[2]);

        // Network penalty pulls B[1] toward B[0] relative to λG = 0
        let config_plain = FitConfig {
            network_penalty: 0.0,
            ..config
        };
        let plain = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config_plain).unwrap();
        let gap_regularized = (fit.coefficients[[0, 0]] - fit.coefficients[[1, 0]]).abs();
        let gap_plain = (plain.coefficients[[0, 0]] - plain.coefficients[[1, 0]]).abs();
        assert!(gap_regularized < gap_plain);
    }

    #[test]
    fn test_binomial_fit_separates_classes() {
        let family = family_from_name("binomial").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let x = standard_normal_matrix(&mut rng, 60, 2);
        let y = Array2::from_shape_fn((60, 1), |(i, _)| {
            if 2.0 * x[[i, 0]] > 0.0 {
                1.0
            } else {
                0.0
            }
        });
        let laplacian = Array2::zeros((2, 2));

        let config = FitConfig {
            l1_penalty: 0.01,
            network_penalty: 0.0,
            learning_rate: 0.05,
            max_iterations: 1500,
            tolerance: None,
            verbose: false,
        };
        let fit = fit_network_glm(&x, &y, &laplacian, family.as_ref(), &config).unwrap();

        // The signal feature gets the large positive weight.
        assert!(fit.coefficients[[0, 0]] > 1.0);
        assert!(fit.coefficients[[0, 0]].abs() > 5.0 * fit.coefficients[[1, 0]].abs());
    }

    #[test]
    fn test_multi_response_decoupled_when_no_network() {
        // With λG = 0, fitting two columns jointly must equal fitting them
        // separately.
        let mut rng = StdRng::seed_from_u64(13);
        let x = standard_normal_matrix(&mut rng, 25, 3);
        let y0 = Array2::from_shape_fn((25, 1), |(i, _)| x[[i, 0]]);
        let y1 = Array2::from_shape_fn((25, 1), |(i, _)| -x[[i, 2]] + 0.5);
        let mut y = Array2::zeros((25, 2));
        y.column_mut(0).assign(&y0.column(0));
        y.column_mut(1).assign(&y1.column(0));
        let laplacian = Array2::zeros((3, 3));

        let config = FitConfig {
            l1_penalty: 0.05,
            network_penalty: 0.0,
            learning_rate: 0.01,
            max_iterations: 500,
            tolerance: None,
            verbose: false,
        };

        let joint = fit_network_glm(&x, &y, &laplacian, &GaussianFamily, &config).unwrap();
        let solo0 = fit_network_glm(&x, &y0, &laplacian, &GaussianFamily, &config).unwrap();
        let solo1 = fit_network_glm(&x, &y1, &laplacian, &GaussianFamily, &config).unwrap();

        for j in 0..3 {
            assert_abs_diff_eq!(
                joint.coefficients[[j, 0]],
                solo0.coefficients[[j, 0]],
                epsilon = 1e-12
            );
            assert_abs_diff_eq!(
                joint.coefficients[[j, 1]],
                solo1.coefficients[[j, 0]],
                epsilon = 1e-12
            );
        }
    }
}
