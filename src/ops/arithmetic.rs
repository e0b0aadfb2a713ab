//! Sum, subtract, multiply-by-scalar, and divide-by-scalar.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};

use super::normalize::{normalize_prices, resolve_all};
use crate::domain::{Amount, IntoPrice, Price, Rounding, Scale};
use crate::error::{MoneyError, Result};
use crate::math::{div_round, pow10};

/// Fractional scalars are captured at twelve-digit precision before
/// multiplication and rounded back out afterwards.
const SCALAR_DIGITS: u32 = 12;

/// Adds one or more prices.
///
/// All currencies must be equal; operands are normalized to the finest
/// scale and the result carries that scale.
///
/// # Errors
///
/// [`MoneyError::EmptyInput`] on no operands,
/// [`MoneyError::CurrencyMismatch`] on mixed currencies.
///
/// # Examples
///
/// ```
/// use moneta::ops::sum;
///
/// let total = sum(["USD 0.10", "USD 0.20"]).expect("same currency");
/// assert_eq!(total.to_words(), "USD 0.30");
///
/// let mixed = sum(["USD 50.00", "USD 0.000_005"]).expect("same currency");
/// assert_eq!(mixed.to_words(), "USD 50.000_005");
/// ```
pub fn sum<I, P>(prices: I) -> Result<Price>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    let resolved = resolve_all(prices)?;
    if resolved.is_empty() {
        return Err(MoneyError::EmptyInput);
    }
    let normalized = normalize_prices(&resolved)?;
    let total = normalized
        .iter()
        .fold(BigInt::zero(), |acc, p| acc + p.amount().get());
    let first = &normalized[0];
    Ok(Price::new(Amount::new(total), first.currency(), first.scale()))
}

/// Subtracts `b` from `a`: behaves as a sum over `{a, −b}`, so the
/// result carries the finer of the two scales.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`] on unequal currencies.
pub fn subtract(a: impl IntoPrice, b: impl IntoPrice) -> Result<Price> {
    let a = a.into_price()?;
    let b = b.into_price()?;
    let negated = b.with_amount(-b.amount().clone());
    sum([a, negated])
}

/// Multiplies a price by a real scalar.
///
/// The scalar is captured at twelve-digit precision as
/// `round(by · 10^12)`; the product is rounded back with the chosen
/// mode. Output scale equals input scale; a zero scalar yields zero at
/// the input scale and a negative scalar a correctly-signed result.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] for a non-finite scalar.
///
/// # Examples
///
/// ```
/// use moneta::domain::Rounding;
/// use moneta::ops::multiply;
///
/// let gross = multiply("USD 100.00", 1.08, Rounding::default()).expect("finite scalar");
/// assert_eq!(gross.to_words(), "USD 108.00");
/// ```
pub fn multiply(of: impl IntoPrice, by: f64, round: Rounding) -> Result<Price> {
    let p = of.into_price()?;
    if !by.is_finite() {
        return Err(MoneyError::invalid_format(by.to_string()));
    }
    let captured = (by * 10f64.powi(SCALAR_DIGITS as i32)).round();
    let scalar = BigInt::from_f64(captured)
        .ok_or_else(|| MoneyError::invalid_format(by.to_string()))?;
    let product = p.amount().get() * &scalar;
    let rounded = div_round(&product, &pow10(SCALAR_DIGITS), round)?;
    Ok(p.with_amount(Amount::new(rounded)))
}

/// Divides a price by a non-zero integer scalar.
///
/// The output scale widens with the divisor magnitude so quotients keep
/// meaningful precision — never coarser than the input scale:
///
/// | `|by|` | Output scale |
/// |--------|--------------|
/// | `< 100` | input scale |
/// | `< 10^6` | milli |
/// | `< 10^9` | nano |
/// | otherwise | pico |
///
/// The amount is rescaled losslessly, divided by `|by|` with the chosen
/// mode, and the divisor's sign is reapplied.
///
/// # Errors
///
/// [`MoneyError::DivideByZero`] on a zero divisor.
///
/// # Examples
///
/// ```
/// use moneta::domain::Rounding;
/// use moneta::ops::divide;
///
/// let sliver = divide("USD 0.25", 1_000_000, Rounding::default()).expect("non-zero divisor");
/// assert_eq!(sliver.to_words(), "USD 0.000_000_250");
/// ```
pub fn divide(of: impl IntoPrice, by: i128, round: Rounding) -> Result<Price> {
    let p = of.into_price()?;
    if by == 0 {
        return Err(MoneyError::DivideByZero);
    }
    let magnitude = by.unsigned_abs();
    let tier = if magnitude < 100 {
        p.scale()
    } else if magnitude < 1_000_000 {
        Scale::Milli
    } else if magnitude < 1_000_000_000 {
        Scale::Nano
    } else {
        Scale::Pico
    };
    let target = Scale::finer(p.scale(), tier);
    let rescaled = p.rescale_exactly(target);
    let quotient = div_round(rescaled.get(), &BigInt::from(magnitude), round)?;
    let signed = if by < 0 { -quotient } else { quotient };
    Ok(Price::new(Amount::new(signed), p.currency(), target))
}
