//! Parsing utilities for bound strings
//!
//! This module provides pure parsing functions with no I/O dependencies,
//! so front ends share a single definition of what a valid bound looks like.

use crate::validation::bounds::validate_bound;
use crate::PrimesError;

/// Parse a bound from its decimal representation
///
/// Accepts ASCII digits only, optionally surrounded by whitespace and with
/// `_` digit separators (`1_000_000`). Zero, signs, empty strings and
/// values that overflow `usize` are all rejected as `InvalidInput`.
pub fn parse_bound(bound_str: &str) -> Result<usize, PrimesError> {
    let digits = bound_str.trim();

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return Err(PrimesError::InvalidInput);
    }

    let mut result: usize = 0;

    for byte in digits.bytes() {
        if byte == b'_' {
            continue;
        }
        if !byte.is_ascii_digit() {
            return Err(PrimesError::InvalidInput);
        }

        let digit = (byte - b'0') as usize;

        if result > (usize::MAX - digit) / 10 {
            return Err(PrimesError::InvalidInput);
        }

        result = result * 10 + digit;
    }

    validate_bound(result)
}
