//! Primes - prime listings with timing, agreement checks and rendering
//!
//! This library drives the generators from `primes-core` and adds the
//! I/O-facing pieces around them.
//!
//! ## Architecture
//!
//! - **primes-core**: Pure generators, bound validation and the primality table (no I/O)
//! - **primes**: Run configuration, timed reports, cross-checking and output
//!
//! ## Quick Start
//!
//! ```rust
//! use primes::{runner, Algorithm, RunConfig};
//!
//! fn example() -> Result<(), primes::RunError> {
//!     // The three generators must agree for any natural bound
//!     let shared = runner::verify_agreement(100)?;
//!     assert_eq!(shared.len(), 25);
//!
//!     let config = RunConfig::with_bounds([10]).with_algorithms(&[Algorithm::Sieve]);
//!     for report in runner::run_config(&config)? {
//!         println!("{report}");
//!     }
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

// Re-export core generators and validation
pub use primes_core::{
    // Generators
    bounded_trial_division, naive_trial_division, sieve_of_eratosthenes,
    // Abstractions
    Algorithm, BoundedTrialDivision, NaiveTrialDivision, PrimeGenerator, SieveOfEratosthenes,
    // Error handling
    PrimesError,
    // Validation utilities
    parse_bound, validate_bound,
};

pub mod config;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;

pub use config::{RunConfig, DEFAULT_BOUNDS};
pub use error::{Result, RunError};
pub use output::{render, OutputFormat};
pub use report::PrimeReport;
