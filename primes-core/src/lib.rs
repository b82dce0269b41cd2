#![no_std]

//! Primes Core - prime generation up to a natural-number bound
//!
//! This crate provides three prime generators with a shared contract,
//! along with the bound validation and primality table they are built on.
//! Everything here is pure: no I/O, no global state, and every call owns
//! the memory it allocates.

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

pub mod error;
pub mod validation;

#[cfg(feature = "alloc")]
pub mod algorithms;
#[cfg(feature = "alloc")]
pub mod table;
#[cfg(feature = "alloc")]
pub mod traits;

pub use error::*;
pub use validation::{integer_sqrt, parse_bound, validate_bound};

#[cfg(feature = "alloc")]
pub use algorithms::{
    bounded_trial_division, naive_trial_division, sieve_of_eratosthenes, Algorithm,
};
#[cfg(feature = "alloc")]
pub use table::PrimalityTable;
#[cfg(feature = "alloc")]
pub use traits::{BoundedTrialDivision, NaiveTrialDivision, PrimeGenerator, SieveOfEratosthenes};
