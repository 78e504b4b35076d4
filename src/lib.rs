// =============================================================================
// netglm - Network-Regularized Generalized Linear Models
// =============================================================================
//
// Fits GLMs whose coefficients are regularized two ways at once:
//
//   - an L1 penalty inducing sparsity, and
//   - a quadratic penalty built from the Laplacian of a user-supplied
//     feature-relationship graph, pulling coefficients of graph-adjacent
//     features toward each other.
//
// The objective, per response column (columns coupled through L):
//
//     loss(X·B + 1·b0', Y; family) + λ1·‖B‖₁ + λG·tr(B'·L·B)
//
// STRUCTURE:
// ----------
//   - graph:      edge-list parsing into a node/edge representation
//   - laplacian:  dense adjacency + Laplacian construction
//   - families:   response distributions (Gaussian, Binomial, Poisson)
//   - solvers:    proximal gradient descent engine + closed-form ridge
//   - predict:    inverse-link prediction from a fitted model
//   - preprocess: feature standardization
//   - metrics:    ROC / precision-recall evaluation for binary responses
//   - convert:    ndarray ↔ nalgebra bridging
//   - error:      error types used throughout the crate
//
// File I/O, CLI handling, and output formatting live with the caller; this
// crate takes matrices in and hands matrices back.
//
// =============================================================================

pub mod convert;
pub mod error;
pub mod families;
pub mod graph;
pub mod laplacian;
pub mod metrics;
pub mod predict;
pub mod preprocess;
pub mod solvers;

// Re-export the main entry points so users can write `use netglm::fit_network_glm`
// instead of spelling out the module path.
pub use error::{NetGlmError, Result};
pub use families::{family_from_name, BinomialFamily, Family, GaussianFamily, PoissonFamily};
pub use graph::Graph;
pub use laplacian::{build_adjacency, build_laplacian};
pub use predict::predict;
pub use preprocess::Standardizer;
pub use solvers::{fit_network_glm, fit_network_ridge, FitConfig, NetworkGlmFit};

// =============================================================================
// Integration tests: the full pipeline, graph text to predictions
// =============================================================================
