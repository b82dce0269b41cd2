//! Bit-packed primality table
//!
//! One bit per candidate in `0..=bound`. A set bit means the candidate is
//! still believed prime. Each generator owns its table for the duration of
//! a single call and drops it once the primes are extracted.

use alloc::vec::Vec;

use crate::validation::bounds::{table_byte_len, validate_bound};
use crate::PrimesError;

/// Dense primality table over `0..=bound`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimalityTable {
    /// Bit array (bit `i % 8` of byte `i / 8` tracks candidate `i`)
    bits: Vec<u8>,
    /// Largest candidate tracked
    bound: usize,
}

impl PrimalityTable {
    /// Create a table for `0..=bound` with every candidate from 2 upward marked
    ///
    /// Rejects a zero bound before allocating.
    pub fn new(bound: usize) -> Result<Self, PrimesError> {
        let bound = validate_bound(bound)?;

        let mut bits = alloc::vec![0xFF; table_byte_len(bound)];

        // 0 and 1 are never prime
        bits[0] &= !0b0000_0011;

        // Clear padding bits past the bound so count() stays exact
        let used = bound % 8 + 1;
        if used < 8 {
            if let Some(last) = bits.last_mut() {
                *last &= (1u8 << used) - 1;
            }
        }

        Ok(Self { bits, bound })
    }

    /// Largest candidate tracked by this table
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Check whether a candidate is still marked prime
    ///
    /// Candidates past the bound are reported as not prime.
    pub fn is_marked(&self, candidate: usize) -> bool {
        if candidate > self.bound {
            return false;
        }
        let byte_index = candidate / 8;
        let bit_offset = candidate % 8;
        (self.bits[byte_index] & (1 << bit_offset)) != 0
    }

    /// Mark a candidate composite
    ///
    /// Candidates past the bound are ignored.
    pub fn mark_composite(&mut self, candidate: usize) {
        if candidate > self.bound {
            return;
        }
        let byte_index = candidate / 8;
        let bit_offset = candidate % 8;
        self.bits[byte_index] &= !(1 << bit_offset);
    }

    /// Count the candidates still marked prime
    pub fn count(&self) -> usize {
        self.bits.iter().map(|byte| byte.count_ones() as usize).sum()
    }

    /// Iterate marked candidates in ascending order
    pub fn iter_marked(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|(_, byte)| **byte != 0)
            .flat_map(|(byte_index, &byte)| {
                (0..8)
                    .filter(move |bit| byte & (1 << bit) != 0)
                    .map(move |bit| byte_index * 8 + bit)
            })
    }

    /// Consume the table and collect the candidates still marked prime
    pub fn into_primes(self) -> Vec<usize> {
        let mut primes = Vec::with_capacity(self.count());
        primes.extend(self.iter_marked());
        primes
    }
}
