use lazy_static::lazy_static;

use crate::BigInt;

/// Largest value kept in the constant caches.
pub(crate) const MAX_CONSTANT: u64 = 16;

lazy_static! {
    pub(crate) static ref POS_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_raw(BigInt::decimal_digits(val), false))
        .collect();
    pub(crate) static ref NEG_CACHE: Vec<BigInt> = (0..=MAX_CONSTANT)
        .map(|val| BigInt::from_raw(BigInt::decimal_digits(val), val != 0))
        .collect();
}
