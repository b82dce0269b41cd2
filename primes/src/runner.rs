//! Timed execution and cross-checking of the prime generators

use std::time::Instant;

use primes_core::{Algorithm, PrimeGenerator};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::{Result, RunError};
use crate::report::{duration_micros, PrimeReport};

/// Run one algorithm for one bound and time it
pub fn run(algorithm: Algorithm, bound: usize) -> Result<PrimeReport> {
    let start = Instant::now();
    let primes = algorithm.generate(bound)?;
    let elapsed = start.elapsed();

    debug!(
        %algorithm,
        bound,
        count = primes.len(),
        elapsed_us = duration_micros(elapsed),
        "generated primes"
    );

    Ok(PrimeReport::new(algorithm, bound, primes, elapsed))
}

/// Run every configured algorithm for every configured bound
///
/// Reports come back bound-major: all algorithms for the first bound, then
/// all algorithms for the second, and so on. With `verify` set, each bound
/// is checked for agreement across every algorithm before anything runs.
pub fn run_config(config: &RunConfig) -> Result<Vec<PrimeReport>> {
    if config.verify {
        for &bound in &config.bounds {
            verify_agreement(bound)?;
        }
    }

    let mut reports = Vec::with_capacity(config.run_count());
    for &bound in &config.bounds {
        for &algorithm in &config.algorithms {
            reports.push(run(algorithm, bound)?);
        }
    }
    Ok(reports)
}

/// Check that all three algorithms agree for `bound`
///
/// Returns the shared primes on success.
pub fn verify_agreement(bound: usize) -> Result<Vec<usize>> {
    let algorithms = Algorithm::ALL;
    let generators: Vec<&dyn PrimeGenerator> = algorithms
        .iter()
        .map(|algorithm| algorithm as &dyn PrimeGenerator)
        .collect();
    verify_generators(bound, &generators)
}

/// Check that every generator agrees with the first one for `bound`
///
/// An empty generator list trivially agrees on an empty result, after the
/// bound itself has been validated.
pub fn verify_generators(bound: usize, generators: &[&dyn PrimeGenerator]) -> Result<Vec<usize>> {
    let Some((reference, rest)) = generators.split_first() else {
        primes_core::validate_bound(bound)?;
        return Ok(Vec::new());
    };

    let expected = reference.primes_up_to(bound)?;
    for generator in rest {
        let found = generator.primes_up_to(bound)?;
        if found != expected {
            warn!(
                bound,
                expected = reference.name(),
                found = generator.name(),
                "prime generators disagree"
            );
            return Err(RunError::Disagreement {
                bound,
                expected: reference.name(),
                found: generator.name(),
            });
        }
    }

    debug!(bound, count = expected.len(), generators = generators.len(), "generators agree");
    Ok(expected)
}
