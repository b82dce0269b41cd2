//! Trial division generators
//!
//! Both variants share the same marking loop and differ only in how far the
//! divisor search runs for each candidate.

use alloc::vec::Vec;

use crate::table::PrimalityTable;
use crate::validation::bounds::integer_sqrt;
use crate::Result;

/// Primes up to `bound`, testing every divisor below each candidate
///
/// O(bound²) divisions in the worst case.
pub fn naive_trial_division(bound: usize) -> Result<Vec<usize>> {
    trial_division(bound, |candidate| candidate - 1)
}

/// Primes up to `bound`, testing divisors up to each candidate's square root
///
/// A composite always has a factor no larger than its root, so the search
/// stops there. O(bound·√bound) divisions in the worst case.
pub fn bounded_trial_division(bound: usize) -> Result<Vec<usize>> {
    trial_division(bound, integer_sqrt)
}

fn trial_division<F>(bound: usize, divisor_limit: F) -> Result<Vec<usize>>
where
    F: Fn(usize) -> usize,
{
    let mut table = PrimalityTable::new(bound)?;

    for candidate in 2..=bound {
        if has_divisor(candidate, divisor_limit(candidate)) {
            table.mark_composite(candidate);
        }
    }

    Ok(table.into_primes())
}

/// Whether any `d` in `2..=limit` divides `candidate`
///
/// Stops at the first divisor found. An empty range (limit < 2) finds none.
fn has_divisor(candidate: usize, limit: usize) -> bool {
    (2..=limit).any(|divisor| candidate % divisor == 0)
}
