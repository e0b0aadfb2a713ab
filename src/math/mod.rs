//! Low-level numeric kernels for money arithmetic.
//!
//! This module provides [`div_round`], the signed rounding kernel behind
//! every precision-losing operation, [`isqrt`] for standard deviation,
//! and the exact power-of-ten helper used by rescaling.

mod isqrt;
mod rounding;

pub use isqrt::isqrt;
pub use rounding::div_round;

use num_bigint::BigInt;

/// `10^exp` as a big integer. Exact for any exponent.
#[must_use]
pub fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u32).pow(exp)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn pow10_small_exponents() {
        assert_eq!(pow10(0), BigInt::from(1));
        assert_eq!(pow10(1), BigInt::from(10));
        assert_eq!(pow10(12), BigInt::from(1_000_000_000_000u64));
    }

    #[test]
    fn pow10_widens_past_u64() {
        let Ok(expected) = "1000000000000000000000000".parse::<BigInt>() else {
            panic!("expected parse");
        };
        assert_eq!(pow10(24), expected);
    }
}
