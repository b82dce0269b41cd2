//! Error types for the driver layer

use primes_core::PrimesError;
use thiserror::Error;

use crate::output::OutputFormat;

/// Errors raised while running, checking, or rendering prime listings
#[derive(Debug, Error)]
pub enum RunError {
    /// A generator rejected its input
    #[error(transparent)]
    Primes(#[from] PrimesError),

    /// Two algorithms produced different primes for the same bound
    #[error("{found} disagrees with {expected} for bound {bound}")]
    Disagreement {
        bound: usize,
        expected: &'static str,
        found: &'static str,
    },

    /// The format needs a feature this build was compiled without
    #[error("{0} output is not available in this build")]
    UnsupportedFormat(OutputFormat),

    /// Reports could not be serialized
    #[cfg(feature = "serde")]
    #[error("failed to render reports: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for driver operations
pub type Result<T> = std::result::Result<T, RunError>;
