//! Timed result of a single prime listing

use std::time::Duration;

use primes_core::Algorithm;

/// Primes produced by one algorithm for one bound
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrimeReport {
    /// Algorithm that produced the primes
    pub algorithm: Algorithm,
    /// Upper bound, inclusive
    pub bound: usize,
    /// Number of primes found
    pub count: usize,
    /// The primes, ascending
    pub primes: Vec<usize>,
    /// Wall-clock generation time
    #[cfg_attr(
        feature = "serde",
        serde(rename = "elapsed_us", serialize_with = "serialize_micros")
    )]
    pub elapsed: Duration,
}

impl PrimeReport {
    /// Create a report, deriving the count from the primes
    pub fn new(algorithm: Algorithm, bound: usize, primes: Vec<usize>, elapsed: Duration) -> Self {
        Self {
            algorithm,
            bound,
            count: primes.len(),
            primes,
            elapsed,
        }
    }

}

/// Whole microseconds in `elapsed`, saturating at `u64::MAX`
pub(crate) fn duration_micros(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX)
}

/// `bound=<B> <algorithm>: p1, p2, ...`
impl std::fmt::Display for PrimeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "bound={} {}: ", self.bound, self.algorithm)?;
        for (i, prime) in self.primes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{prime}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
fn serialize_micros<S>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u64(duration_micros(*elapsed))
}
