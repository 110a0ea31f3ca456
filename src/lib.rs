//! Dec BigInt \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision signed integers with exact base-10 arithmetic.
//! - [`ParseBigIntError`] and [`DivideByZeroError`]: the two ways an operation can fail.

mod big_int;
mod big_int_cache;
mod error;

pub use big_int::BigInt;
pub use error::{DivideByZeroError, ParseBigIntError};
