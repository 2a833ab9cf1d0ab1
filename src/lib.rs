//! Bounded, overflow-safe Fibonacci numbers.
//!
//! The calculator works on `i32` results, so the valid index range is
//! `0..=MAX_N`. Input parsing lives in [`input`] and is shared by the
//! command line binary and the tests.

pub mod calculator;
pub mod error;
pub mod input;

pub use calculator::{fibonacci, fibonacci_unchecked, sequence};
pub use error::FibError;
pub use input::{parse_index, read_index};

/// Largest index whose Fibonacci value fits in an `i32`.
pub const MAX_N: u32 = 46;

/// Result type for calculator and input operations
pub type Result<T> = std::result::Result<T, FibError>;
