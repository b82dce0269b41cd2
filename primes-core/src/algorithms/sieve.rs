//! Sieve of Eratosthenes
//!
//! Composites are struck out directly instead of testing each candidate, for
//! O(bound·log log bound) work.

use alloc::vec::Vec;

use crate::table::PrimalityTable;
use crate::Result;

/// Primes up to `bound` by the Sieve of Eratosthenes
///
/// For each prime `p` with `p² ≤ bound`, multiples from `p²` upward are
/// marked composite; smaller multiples were already struck by smaller
/// primes. Bounds below 4 run no sieve pass at all.
pub fn sieve_of_eratosthenes(bound: usize) -> Result<Vec<usize>> {
    let mut table = PrimalityTable::new(bound)?;

    let mut p = 2;
    // p <= bound / p is p * p <= bound without the overflow
    while p <= bound / p {
        if table.is_marked(p) {
            strike_multiples(&mut table, p);
        }
        p += 1;
    }

    Ok(table.into_primes())
}

/// One sieve pass: mark `p²`, `p² + p`, … up to the table bound
fn strike_multiples(table: &mut PrimalityTable, p: usize) {
    let bound = table.bound();
    for multiple in (p * p..=bound).step_by(p) {
        table.mark_composite(multiple);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PrimesError;
    use alloc::vec;

    #[test]
    fn test_sieve_boundaries() {
        assert_eq!(sieve_of_eratosthenes(0), Err(PrimesError::InvalidInput));
        assert_eq!(sieve_of_eratosthenes(1), Ok(vec![]));
        assert_eq!(sieve_of_eratosthenes(2), Ok(vec![2]));
        assert_eq!(sieve_of_eratosthenes(3), Ok(vec![2, 3]));
        assert_eq!(sieve_of_eratosthenes(4), Ok(vec![2, 3]));
        assert_eq!(sieve_of_eratosthenes(5), Ok(vec![2, 3, 5]));
    }

    #[test]
    fn test_strike_multiples() {
        let mut table = PrimalityTable::new(30).unwrap();
        strike_multiples(&mut table, 3);

        // Starts at p², so 3 and 6 are untouched
        assert!(table.is_marked(3));
        assert!(table.is_marked(6));
        for multiple in [9, 12, 15, 18, 21, 24, 27, 30] {
            assert!(!table.is_marked(multiple));
        }
    }

    #[test]
    fn test_sieve_prime_count() {
        // π(10^4) = 1229
        assert_eq!(sieve_of_eratosthenes(10_000).unwrap().len(), 1229);
    }
}
