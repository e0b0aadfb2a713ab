//! Integer square root for big integers.

use num_bigint::BigInt;
use num_traits::{One, Signed};

/// Floor of the square root of a non-negative big integer, by Newton's
/// method: start at the value itself and iterate `x' = (x + v/x) / 2`
/// until the iterate stops decreasing.
///
/// Negative inputs are a caller bug; the standard-deviation path only
/// feeds variances, which are non-negative by construction.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use moneta::math::isqrt;
///
/// assert_eq!(isqrt(&BigInt::from(0)), BigInt::from(0));
/// assert_eq!(isqrt(&BigInt::from(99)), BigInt::from(9));
/// assert_eq!(isqrt(&BigInt::from(100)), BigInt::from(10));
/// ```
#[must_use]
pub fn isqrt(value: &BigInt) -> BigInt {
    debug_assert!(!value.is_negative(), "isqrt of a negative value");
    if value <= &BigInt::one() {
        return value.clone();
    }
    let two = BigInt::from(2);
    let mut x = value.clone();
    let mut next = (&x + value / &x) / &two;
    while next < x {
        x = next;
        next = (&x + value / &x) / &two;
    }
    x
}
