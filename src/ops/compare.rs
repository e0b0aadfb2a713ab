//! Numeric comparison predicates.

use core::cmp::Ordering;

use crate::domain::IntoPrice;
use crate::error::Result;

/// Numeric equality after normalization.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
/// on mixed currencies — comparison never silently succeeds across
/// currencies.
///
/// # Examples
///
/// ```
/// use moneta::ops::equal;
///
/// assert_eq!(equal("USD 50.00", "USD 50.000"), Ok(true));
/// assert!(equal("USD 1.00", "EUR 1.00").is_err());
/// ```
pub fn equal(a: impl IntoPrice, b: impl IntoPrice) -> Result<bool> {
    Ok(numeric_ordering(a, b)? == Ordering::Equal)
}

/// Numeric `a > b` after normalization.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
/// on mixed currencies.
pub fn greater(a: impl IntoPrice, b: impl IntoPrice) -> Result<bool> {
    Ok(numeric_ordering(a, b)? == Ordering::Greater)
}

/// Numeric `a < b` after normalization.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
/// on mixed currencies.
pub fn lesser(a: impl IntoPrice, b: impl IntoPrice) -> Result<bool> {
    Ok(numeric_ordering(a, b)? == Ordering::Less)
}

fn numeric_ordering(a: impl IntoPrice, b: impl IntoPrice) -> Result<Ordering> {
    a.into_price()?.numeric_cmp(&b.into_price()?)
}
