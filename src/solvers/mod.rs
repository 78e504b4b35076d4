// =============================================================================
// Solvers
// =============================================================================
//
// Two ways to fit a network-regularized model:
//
//   - proximal: the general engine. Proximal gradient descent handles any
//     family and the non-smooth L1 term; runs a fixed iteration budget.
//   - exact: closed-form gaussian network ridge (λ1 = 0 only). One linear
//     solve; useful as a warm reference and for testing the iterative path.
//
// =============================================================================

pub mod exact;
pub mod proximal;

pub use exact::fit_network_ridge;
pub use proximal::{fit_network_glm, FitConfig, NetworkGlmFit};
