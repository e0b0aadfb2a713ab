//! Signed integer division with an explicit rounding mode.
//!
//! This module provides [`div_round`], the low-level building block used
//! by multiplication, division, and precision decreases. Half comparisons
//! use the doubled form `2·|r|` vs `V` so no truncation error can creep
//! into the tie decision.

use core::cmp::Ordering;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::domain::Rounding;
use crate::error::{MoneyError, Result};

/// Divides `dividend` by a positive `divisor`, rounding per `mode`.
///
/// With `q = trunc(D/V)` and `r = D − q·V` (the remainder takes the sign
/// of the dividend):
///
/// - [`Rounding::Floor`]: if `r ≠ 0` and `D < 0`, decrement `q`.
/// - [`Rounding::Ceil`]: if `r ≠ 0` and `D > 0`, increment `q`.
/// - [`Rounding::HalfUp`]: ties and above-half round away from zero.
/// - [`Rounding::HalfDown`]: only strictly above half rounds away.
/// - [`Rounding::HalfEven`]: above half rounds away; an exact tie rounds
///   to the nearest even quotient.
///
/// The divisor must be positive; callers divide by the magnitude and
/// reapply the sign themselves.
///
/// # Errors
///
/// Returns [`MoneyError::DivideByZero`] if `divisor` is zero.
///
/// # Examples
///
/// ```
/// use num_bigint::BigInt;
/// use moneta::domain::Rounding;
/// use moneta::math::div_round;
///
/// let d = BigInt::from(-7);
/// let v = BigInt::from(2);
/// assert_eq!(div_round(&d, &v, Rounding::Floor), Ok(BigInt::from(-4)));
/// assert_eq!(div_round(&d, &v, Rounding::Ceil), Ok(BigInt::from(-3)));
/// assert_eq!(div_round(&d, &v, Rounding::HalfUp), Ok(BigInt::from(-4)));
/// ```
pub fn div_round(dividend: &BigInt, divisor: &BigInt, mode: Rounding) -> Result<BigInt> {
    if divisor.is_zero() {
        return Err(MoneyError::DivideByZero);
    }
    debug_assert!(divisor.is_positive(), "divisor must be positive");

    let q = dividend / divisor;
    let r = dividend - &q * divisor;
    if r.is_zero() {
        return Ok(q);
    }
    let negative = dividend.is_negative();

    match mode {
        Rounding::Floor => {
            if negative {
                Ok(q - 1)
            } else {
                Ok(q)
            }
        }
        Rounding::Ceil => {
            if negative {
                Ok(q)
            } else {
                Ok(q + 1)
            }
        }
        Rounding::HalfUp | Rounding::HalfDown | Rounding::HalfEven => {
            let doubled = (r.magnitude() * 2u32).cmp(divisor.magnitude());
            let away = match (mode, doubled) {
                (_, Ordering::Greater) => true,
                (Rounding::HalfUp, Ordering::Equal) => true,
                (Rounding::HalfEven, Ordering::Equal) => q.is_odd(),
                _ => false,
            };
            if away {
                if negative {
                    Ok(q - 1)
                } else {
                    Ok(q + 1)
                }
            } else {
                Ok(q)
            }
        }
    }
}
