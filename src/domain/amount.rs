//! Exact signed minor-unit amount.

use core::fmt;
use core::ops::{Add, Neg, Sub};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// An exact signed count of minor units at some scale.
///
/// Wraps an arbitrary-precision [`BigInt`]: amounts beyond 64-bit range
/// are representable and no floating-point ever holds monetary value.
/// `Amount` never interprets the scale — that responsibility lies with
/// [`Price`](super::Price).
///
/// # Examples
///
/// ```
/// use moneta::domain::Amount;
///
/// let a = Amount::from(5_000i64);
/// assert!(!a.is_negative());
/// assert_eq!((-a).to_string(), "-5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(BigInt);

impl Amount {
    /// Creates an amount from a raw big integer.
    pub fn new(value: BigInt) -> Self {
        Self(value)
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// Borrows the underlying big integer.
    #[must_use]
    pub fn get(&self) -> &BigInt {
        &self.0
    }

    /// Consumes the amount, returning the big integer.
    #[must_use]
    pub fn into_inner(self) -> BigInt {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by `10^exp`. Exact: widening never loses precision.
    pub fn scale_up_by_pow10(&self, exp: u32) -> Self {
        Self(&self.0 * crate::math::pow10(exp))
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i128> for Amount {
    fn from(value: i128) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Amount(self.0 + rhs.0)
    }
}

impl Sub for Amount {
    type Output = Amount;

    fn sub(self, rhs: Amount) -> Amount {
        Amount(self.0 - rhs.0)
    }
}

impl Neg for Amount {
    type Output = Amount;

    fn neg(self) -> Amount {
        Amount(-self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
