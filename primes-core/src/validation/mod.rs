//! Input validation for prime generation
//!
//! This module contains pure validation and parsing functions with no I/O
//! dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{integer_sqrt, table_byte_len, validate_bound, MIN_BOUND};
pub use parsing::parse_bound;
