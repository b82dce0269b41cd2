//! Bound validation and integer root arithmetic
//!
//! This module provides pure mathematical functions shared by every
//! prime generator, with no allocation and no I/O.

use crate::PrimesError;

/// Smallest bound accepted by the generators
pub const MIN_BOUND: usize = 1;

/// Validate that a bound is a natural number
///
/// Zero has no defined primality range and is rejected before any
/// table is allocated. Every other value is returned unchanged.
pub const fn validate_bound(bound: usize) -> Result<usize, PrimesError> {
    if bound < MIN_BOUND {
        return Err(PrimesError::InvalidInput);
    }
    Ok(bound)
}

/// Number of bytes needed for a bit-packed table covering `0..=bound`
///
/// Computed without adding one to `bound`, so `usize::MAX` does not wrap.
pub const fn table_byte_len(bound: usize) -> usize {
    bound / 8 + 1
}

/// Floor of the square root of `n`
///
/// Newton iteration on integers. The starting guess `n / 2 + 1` is never
/// below the root, and the sequence decreases monotonically onto it.
pub const fn integer_sqrt(n: usize) -> usize {
    if n < 2 {
        return n;
    }

    let mut x = n / 2 + 1;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
