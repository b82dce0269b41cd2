//! Prime generation algorithms
//!
//! Three independent generators with the same contract: every prime up to
//! and including the bound, ascending, or `InvalidInput` for a zero bound.

pub mod sieve;
pub mod trial;

pub use sieve::sieve_of_eratosthenes;
pub use trial::{bounded_trial_division, naive_trial_division};

use alloc::vec::Vec;

use crate::{PrimesError, Result};

/// Available prime generation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Trial division by every smaller integer
    Naive,
    /// Trial division up to the square root
    Bounded,
    /// Sieve of Eratosthenes
    Sieve,
}

impl Algorithm {
    /// Every algorithm, from least to most efficient
    pub const ALL: [Algorithm; 3] = [Algorithm::Naive, Algorithm::Bounded, Algorithm::Sieve];

    /// Generate the primes up to `bound` with this algorithm
    pub fn generate(self, bound: usize) -> Result<Vec<usize>> {
        match self {
            Algorithm::Naive => naive_trial_division(bound),
            Algorithm::Bounded => bounded_trial_division(bound),
            Algorithm::Sieve => sieve_of_eratosthenes(bound),
        }
    }

    /// Worst-case time complexity in terms of the bound `n`
    pub const fn complexity(self) -> &'static str {
        match self {
            Algorithm::Naive => "O(n^2)",
            Algorithm::Bounded => "O(n sqrt n)",
            Algorithm::Sieve => "O(n log log n)",
        }
    }

    /// Short lowercase name, as accepted by `FromStr`
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::Bounded => "bounded",
            Algorithm::Sieve => "sieve",
        }
    }
}

impl core::str::FromStr for Algorithm {
    type Err = PrimesError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or(PrimesError::InvalidInput)
    }
}

impl core::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_from_str() {
        assert_eq!("naive".parse::<Algorithm>(), Ok(Algorithm::Naive));
        assert_eq!("Bounded".parse::<Algorithm>(), Ok(Algorithm::Bounded));
        assert_eq!(" SIEVE ".parse::<Algorithm>(), Ok(Algorithm::Sieve));
        assert_eq!("wheel".parse::<Algorithm>(), Err(PrimesError::InvalidInput));
        assert_eq!("".parse::<Algorithm>(), Err(PrimesError::InvalidInput));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_generate_dispatch() {
        let expected = alloc::vec![2, 3, 5, 7, 11, 13, 17, 19];
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.generate(20), Ok(expected.clone()));
            assert_eq!(algorithm.generate(0), Err(PrimesError::InvalidInput));
        }
    }
}
