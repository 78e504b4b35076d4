// =============================================================================
// Error Types
// =============================================================================
//
// All fallible operations in this crate return `Result<T>` with the error
// enum below. Every failure is fatal and surfaced synchronously to the
// caller; nothing is swallowed or logged-and-ignored inside the engine.
//
// ERROR CATEGORIES:
// -----------------
//   - Graph parsing:  MalformedEdgeRecord, InvalidWeight
//   - Shape checks:   DimensionMismatch, EmptyInput
//   - Configuration:  UnsupportedFamily, InvalidValue
//   - Optimization:   NonFiniteGradient (divergence — the caller should
//                     reduce the learning rate or penalty weights and retry;
//                     the engine performs no automatic backoff)
//   - Linear algebra: LinearAlgebraError (singular system in the closed-form
//                     solver)
//
// =============================================================================

use thiserror::Error;

/// Errors that can occur while loading graphs or fitting models.
#[derive(Error, Debug)]
pub enum NetGlmError {
    /// An edge record did not contain two node tokens plus an optional weight.
    #[error("Malformed edge record: {0}")]
    MalformedEdgeRecord(String),

    /// An edge weight token could not be parsed as a number.
    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    /// Matrix dimensions don't agree (graph vs. design columns, X vs. Y rows,
    /// or prediction input vs. coefficient rows).
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The requested response family has no registered loss/link.
    #[error("Unsupported family: {0}")]
    UnsupportedFamily(String),

    /// A gradient or coefficient became non-finite during optimization.
    /// Usually means the learning rate is too large for the problem.
    #[error("Non-finite gradient: {0}")]
    NonFiniteGradient(String),

    /// Input data is empty (no rows or no columns).
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A configuration scalar is outside its valid range.
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// A linear system could not be solved (singular matrix).
    #[error("Linear algebra error: {0}")]
    LinearAlgebraError(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NetGlmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = NetGlmError::DimensionMismatch("X has 4 columns but graph has 5 nodes".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Dimension mismatch"));
        assert!(msg.contains("4 columns"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NetGlmError>();
    }
}
