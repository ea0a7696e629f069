//! Error types for the tour heuristics.

use thiserror::Error;

/// Main error type for all solver, initializer, and cache operations.
///
/// The type is `Clone` so that a failure stored in a
/// [`ComputationCache`](crate::cache::ComputationCache) can be re-raised on
/// every later request for the same key.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A construction-time parameter is out of range (k < 2, zero passes,
    /// negative improvement threshold, invalid start vertex, ...).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input graph or tour cannot be solved (directed, incomplete,
    /// too small, non-finite weights, non-Hamiltonian initial tour).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A self-check on internally generated data failed. Indicates a bug,
    /// not a caller mistake.
    #[error("internal invariant violated: {0}")]
    InternalInvariant(String),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
