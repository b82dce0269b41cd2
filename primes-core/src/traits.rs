//! Generator abstraction
//!
//! Lets callers hold any of the algorithms behind one interface, either
//! statically through the unit types below or dynamically as
//! `&dyn PrimeGenerator`.

use alloc::vec::Vec;

use crate::algorithms::{
    bounded_trial_division, naive_trial_division, sieve_of_eratosthenes, Algorithm,
};
use crate::Result;

/// Trait for prime generators with a single upper bound
pub trait PrimeGenerator {
    /// Short lowercase name of the algorithm
    fn name(&self) -> &'static str;

    /// All primes `<= bound`, ascending
    ///
    /// Fails with `InvalidInput` when `bound` is zero.
    fn primes_up_to(&self, bound: usize) -> Result<Vec<usize>>;
}

/// Trial division by every integer below the candidate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveTrialDivision;

/// Trial division up to the candidate's square root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedTrialDivision;

/// Sieve of Eratosthenes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SieveOfEratosthenes;

impl PrimeGenerator for NaiveTrialDivision {
    fn name(&self) -> &'static str {
        Algorithm::Naive.name()
    }

    fn primes_up_to(&self, bound: usize) -> Result<Vec<usize>> {
        naive_trial_division(bound)
    }
}

impl PrimeGenerator for BoundedTrialDivision {
    fn name(&self) -> &'static str {
        Algorithm::Bounded.name()
    }

    fn primes_up_to(&self, bound: usize) -> Result<Vec<usize>> {
        bounded_trial_division(bound)
    }
}

impl PrimeGenerator for SieveOfEratosthenes {
    fn name(&self) -> &'static str {
        Algorithm::Sieve.name()
    }

    fn primes_up_to(&self, bound: usize) -> Result<Vec<usize>> {
        sieve_of_eratosthenes(bound)
    }
}

impl PrimeGenerator for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(*self)
    }

    fn primes_up_to(&self, bound: usize) -> Result<Vec<usize>> {
        self.generate(bound)
    }
}
