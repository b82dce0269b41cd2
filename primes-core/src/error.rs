//! Error types for prime generation

/// Errors that can occur while generating primes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimesError {
    /// Bound is not a natural number (zero), or a bound string did not parse
    InvalidInput,
}

impl core::fmt::Display for PrimesError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            PrimesError::InvalidInput => "this number is not a natural number",
        };
        write!(f, "{msg}")
    }
}

impl core::error::Error for PrimesError {}

/// Result type for prime generation
pub type Result<T> = core::result::Result<T, PrimesError>;
