//! Average and population standard deviation.

use num_bigint::BigInt;
use num_traits::Zero;

use super::normalize::{normalize_prices, resolve_all};
use crate::domain::{Amount, IntoPrice, Price};
use crate::error::{MoneyError, Result};
use crate::math::isqrt;

/// Arithmetic mean, truncated towards zero.
///
/// Operands are normalized to the finest scale; the mean is the big
/// integer quotient of their total by the count, at that scale.
///
/// # Errors
///
/// [`MoneyError::EmptyInput`] on no operands,
/// [`MoneyError::CurrencyMismatch`] on mixed currencies.
///
/// # Examples
///
/// ```
/// use moneta::ops::average;
///
/// let mean = average(["USD 1.00", "USD 2.00", "USD 4.00"]).expect("same currency");
/// assert_eq!(mean.to_words(), "USD 2.33");
/// ```
pub fn average<I, P>(prices: I) -> Result<Price>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    let resolved = resolve_all(prices)?;
    if resolved.is_empty() {
        return Err(MoneyError::EmptyInput);
    }
    let normalized = normalize_prices(&resolved)?;
    let count = BigInt::from(normalized.len());
    let total = normalized
        .iter()
        .fold(BigInt::zero(), |acc, p| acc + p.amount().get());
    let first = &normalized[0];
    Ok(Price::new(
        Amount::new(total / count),
        first.currency(),
        first.scale(),
    ))
}

/// Population standard deviation (`/n`), truncated at every division.
///
/// The mean uses truncating division, the variance is the truncated
/// quotient of the squared deviations by the count, and the result is
/// its integer square root at the finest input scale. A single element
/// yields zero at its own scale.
///
/// # Errors
///
/// [`MoneyError::EmptyInput`] on no operands,
/// [`MoneyError::CurrencyMismatch`] on mixed currencies.
pub fn stddev<I, P>(prices: I) -> Result<Price>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    let resolved = resolve_all(prices)?;
    if resolved.is_empty() {
        return Err(MoneyError::EmptyInput);
    }
    if resolved.len() == 1 {
        return Ok(resolved[0].with_amount(Amount::zero()));
    }
    let normalized = normalize_prices(&resolved)?;
    let count = BigInt::from(normalized.len());
    let total = normalized
        .iter()
        .fold(BigInt::zero(), |acc, p| acc + p.amount().get());
    let mean = &total / &count;
    let sum_sq = normalized.iter().fold(BigInt::zero(), |acc, p| {
        let deviation = p.amount().get() - &mean;
        acc + &deviation * &deviation
    });
    let variance = sum_sq / count;
    let first = &normalized[0];
    Ok(Price::new(
        Amount::new(isqrt(&variance)),
        first.currency(),
        first.scale(),
    ))
}
