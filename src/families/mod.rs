// =============================================================================
// Response Families
// =============================================================================
//
// A family bundles everything the optimizer needs to know about the assumed
// response distribution:
//
//   - loss:         negative log-likelihood (up to constants) at a given
//                   linear predictor
//   - gradient:     derivative of that loss with respect to the linear
//                   predictor (the "residual" the solver backpropagates
//                   through X)
//   - inverse_link: maps the linear predictor to the expected response scale
//                   for prediction
//
// All three families use their canonical link, so the loss gradient takes
// the same shape everywhere: μ − y where μ = inverse_link(η). The trait
// provides that as the default and each family only supplies its loss and
// inverse link.
//
// The set is closed: dispatch goes through `&dyn Family` trait objects
// (or `family_from_name` when the caller holds only a name).
//
// =============================================================================

use ndarray::Array2;

use crate::error::{NetGlmError, Result};

/// Response distribution family: loss, gradient, and inverse link.
///
/// `eta` is the linear predictor `X·B + 1·b0'` (n×k), `y` the response
/// matrix with matching shape.
pub trait Family: std::fmt::Debug {
    /// Family name, e.g. "Gaussian".
    fn name(&self) -> &'static str;

    /// Negative log-likelihood (summed over all entries, constants dropped).
    fn loss(&self, eta: &Array2<f64>, y: &Array2<f64>) -> f64;

    /// Inverse link function applied element-wise to the linear predictor.
    fn inverse_link(&self, eta: &Array2<f64>) -> Array2<f64>;

    /// Gradient of the loss with respect to the linear predictor.
    ///
    /// Canonical-link families all reduce to μ − y.
    fn gradient(&self, eta: &Array2<f64>, y: &Array2<f64>) -> Array2<f64> {
        self.inverse_link(eta) - y
    }
}

// =============================================================================
// Gaussian (identity link)
// =============================================================================

/// Gaussian family with identity link: squared-error loss.
#[derive(Debug, Clone, Copy)]
pub struct GaussianFamily;

impl Family for GaussianFamily {
    fn name(&self) -> &'static str {
        "Gaussian"
    }

    fn loss(&self, eta: &Array2<f64>, y: &Array2<f64>) -> f64 {
        // 0.5 Σ (y − η)²
        let diff = y - eta;
        0.5 * diff.mapv(|d| d * d).sum()
    }

    fn inverse_link(&self, eta: &Array2<f64>) -> Array2<f64> {
        eta.clone()
    }
}

// =============================================================================
// Binomial (logit link)
// =============================================================================

/// Binomial family with logit link: logistic loss, sigmoid inverse link.
#[derive(Debug, Clone, Copy)]
pub struct BinomialFamily;

/// Numerically stable log(1 + exp(x)).
fn softplus(x: f64) -> f64 {
    if x > 0.0 {
        x + (-x).exp().ln_1p()
    } else {
        x.exp().ln_1p()
    }
}

/// Numerically stable logistic sigmoid.
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

impl Family for BinomialFamily {
    fn name(&self) -> &'static str {
        "Binomial"
    }

    fn loss(&self, eta: &Array2<f64>, y: &Array2<f64>) -> f64 {
        // Σ [log(1 + exp(η)) − y·η]
        eta.iter()
            .zip(y.iter())
            .map(|(&e, &yi)| softplus(e) - yi * e)
            .sum()
    }

    fn inverse_link(&self, eta: &Array2<f64>) -> Array2<f64> {
        eta.mapv(sigmoid)
    }
}

// =============================================================================
// Poisson (log link)
// =============================================================================

/// Poisson family with log link: exponential inverse link.
#[derive(Debug, Clone, Copy)]
pub struct PoissonFamily;

impl Family for PoissonFamily {
    fn name(&self) -> &'static str {
        "Poisson"
    }

    fn loss(&self, eta: &Array2<f64>, y: &Array2<f64>) -> f64 {
        // Σ [exp(η) − y·η]  (the log y! constant is dropped)
        eta.iter()
            .zip(y.iter())
            .map(|(&e, &yi)| e.exp() - yi * e)
            .sum()
    }

    fn inverse_link(&self, eta: &Array2<f64>) -> Array2<f64> {
        eta.mapv(f64::exp)
    }
}

// =============================================================================
// Name-based dispatch
// =============================================================================

/// Get a `Family` trait object from a family name.
///
/// Matching is case-insensitive and accepts common aliases. Unknown names
/// fail with `UnsupportedFamily` rather than silently defaulting.
pub fn family_from_name(name: &str) -> Result<Box<dyn Family>> {
    match name.to_lowercase().as_str() {
        "gaussian" | "normal" => Ok(Box::new(GaussianFamily)),
        "binomial" | "bernoulli" | "logistic" => Ok(Box::new(BinomialFamily)),
        "poisson" => Ok(Box::new(PoissonFamily)),
        _ => Err(NetGlmError::UnsupportedFamily(format!(
            "Unknown family '{}'. Use 'gaussian', 'binomial', or 'poisson'.",
            name
        ))),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_gaussian_loss_and_gradient() {
        let eta = array![[1.0, 2.0], [0.0, -1.0]];
        let y = array![[1.5, 2.0], [0.0, 1.0]];

        let family = GaussianFamily;
        // 0.5 * (0.25 + 0 + 0 + 4)
        assert_abs_diff_eq!(family.loss(&eta, &y), 2.125, epsilon = 1e-12);

        let grad = family.gradient(&eta, &y);
        assert_abs_diff_eq!(grad[[0, 0]], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[[1, 1]], -2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sigmoid_midpoint_and_extremes() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5, epsilon = 1e-12);
        assert!(sigmoid(40.0) > 1.0 - 1e-12);
        assert!(sigmoid(-40.0) < 1e-12);
        // No overflow at large magnitudes
        assert!(sigmoid(-800.0).is_finite());
        assert!(sigmoid(800.0).is_finite());
    }

    #[test]
    fn test_binomial_loss_matches_closed_form() {
        // Single entry: loss = log(1+exp(η)) − y·η
        let eta = array![[0.7]];
        let y = array![[1.0]];
        let expected = (1.0 + 0.7f64.exp()).ln() - 0.7;
        assert_abs_diff_eq!(BinomialFamily.loss(&eta, &y), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_binomial_gradient_is_mu_minus_y() {
        let eta = array![[0.0, 2.0]];
        let y = array![[1.0, 0.0]];
        let grad = BinomialFamily.gradient(&eta, &y);
        assert_abs_diff_eq!(grad[[0, 0]], -0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[[0, 1]], sigmoid(2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_binomial_loss_stable_at_large_eta() {
        let eta = array![[500.0, -500.0]];
        let y = array![[1.0, 0.0]];
        let loss = BinomialFamily.loss(&eta, &y);
        assert!(loss.is_finite());
        // Perfectly confident and correct: loss near zero
        assert!(loss.abs() < 1e-6);
    }

    #[test]
    fn test_poisson_inverse_link_and_gradient() {
        let eta = array![[0.0, 1.0]];
        let y = array![[1.0, 2.0]];

        let mu = PoissonFamily.inverse_link(&eta);
        assert_abs_diff_eq!(mu[[0, 0]], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(mu[[0, 1]], std::f64::consts::E, epsilon = 1e-12);

        let grad = PoissonFamily.gradient(&eta, &y);
        assert_abs_diff_eq!(grad[[0, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(grad[[0, 1]], std::f64::consts::E - 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_family_from_name_aliases() {
        assert_eq!(family_from_name("Gaussian").unwrap().name(), "Gaussian");
        assert_eq!(family_from_name("normal").unwrap().name(), "Gaussian");
        assert_eq!(family_from_name("BERNOULLI").unwrap().name(), "Binomial");
        assert_eq!(family_from_name("poisson").unwrap().name(), "Poisson");
    }

    #[test]
    fn test_family_from_name_unknown() {
        let err = family_from_name("tweedie").unwrap_err();
        assert!(matches!(err, NetGlmError::UnsupportedFamily(_)));
    }

    #[test]
    fn test_gradient_finite_difference_check() {
        // Numerical gradient of the loss wrt a single η entry should match
        // the analytic μ − y for every family.
        let families: Vec<Box<dyn Family>> = vec![
            Box::new(GaussianFamily),
            Box::new(BinomialFamily),
            Box::new(PoissonFamily),
        ];
        let y = array![[1.0]];
        let h = 1e-6;

        for family in &families {
            let eta0 = array![[0.3]];
            let mut eta_hi = eta0.clone();
            eta_hi[[0, 0]] += h;
            let mut eta_lo = eta0.clone();
            eta_lo[[0, 0]] -= h;

            let numeric = (family.loss(&eta_hi, &y) - family.loss(&eta_lo, &y)) / (2.0 * h);
            let analytic = family.gradient(&eta0, &y)[[0, 0]];
            assert_abs_diff_eq!(numeric, analytic, epsilon = 1e-5);
        }
    }
}
