//! Run configuration for the prime listing driver

use primes_core::Algorithm;

use crate::output::OutputFormat;

/// Bounds listed when none are given
pub const DEFAULT_BOUNDS: [usize; 2] = [10, 100];

/// Configuration for a batch of prime listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Bounds to list primes up to, in order
    pub bounds: Vec<usize>,
    /// Algorithms to run for every bound, in order
    pub algorithms: Vec<Algorithm>,
    /// How reports are rendered
    pub format: OutputFormat,
    /// Check that every algorithm agrees before reporting
    pub verify: bool,
    /// Report only the number of primes, not the primes themselves
    pub count_only: bool,
}

impl RunConfig {
    /// Create config for the given bounds with every algorithm enabled
    pub fn with_bounds(bounds: impl Into<Vec<usize>>) -> Self {
        Self {
            bounds: bounds.into(),
            ..Self::default()
        }
    }

    /// Restrict the run to the given algorithms
    ///
    /// An empty list keeps every algorithm. Duplicates are dropped, keeping
    /// the first occurrence.
    pub fn with_algorithms(mut self, algorithms: &[Algorithm]) -> Self {
        if algorithms.is_empty() {
            self.algorithms = Algorithm::ALL.to_vec();
            return self;
        }

        self.algorithms.clear();
        for &algorithm in algorithms {
            if !self.algorithms.contains(&algorithm) {
                self.algorithms.push(algorithm);
            }
        }
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable agreement checking
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    /// Report counts only
    pub fn with_count_only(mut self, count_only: bool) -> Self {
        self.count_only = count_only;
        self
    }

    /// Total number of algorithm runs this config describes
    pub fn run_count(&self) -> usize {
        self.bounds.len() * self.algorithms.len()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            bounds: DEFAULT_BOUNDS.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            format: OutputFormat::Text,
            verify: false,
            count_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.bounds, vec![10, 100]);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.verify);
        assert!(!config.count_only);
        assert_eq!(config.run_count(), 6);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::with_bounds([50])
            .with_algorithms(&[Algorithm::Sieve, Algorithm::Naive, Algorithm::Sieve])
            .with_format(OutputFormat::Json)
            .with_verify(true)
            .with_count_only(true);

        assert_eq!(config.bounds, vec![50]);
        assert_eq!(config.algorithms, vec![Algorithm::Sieve, Algorithm::Naive]);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.verify);
        assert!(config.count_only);
        assert_eq!(config.run_count(), 2);
    }

    #[test]
    fn test_empty_algorithms_keeps_all() {
        let config = RunConfig::default()
            .with_algorithms(&[Algorithm::Bounded])
            .with_algorithms(&[]);
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
    }
}
