//! Casts between the three price representations.

use crate::domain::{Currency, IntoPrice, Price, PriceInput};
use crate::error::Result;

/// Lowers any input to the lossless code-form string.
///
/// # Errors
///
/// Parse failures for string inputs.
///
/// # Examples
///
/// ```
/// use moneta::ops::as_words;
///
/// assert_eq!(as_words("$1,000,000.00"), Ok(String::from("USD 1_000_000.00")));
/// ```
pub fn as_words(input: impl IntoPrice) -> Result<String> {
    Ok(input.into_price()?.to_words())
}

/// Lowers any input to the display-oriented symbol-form string.
///
/// # Errors
///
/// Parse failures for string inputs.
pub fn as_human(input: impl IntoPrice) -> Result<String> {
    Ok(input.into_price()?.to_human())
}

/// Lifts any input to the structured shape.
///
/// # Errors
///
/// Parse failures for string inputs.
pub fn as_shape(input: impl IntoPrice) -> Result<Price> {
    input.into_price()
}

/// Normalize-to-words with an explicit currency override for symbol-form
/// disambiguation (`"$9.50"` as CAD, say). Code-form and shape inputs
/// carry their own currency and ignore the override.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
/// when the override conflicts with a unique glyph; parse failures
/// otherwise.
pub fn as_words_with(input: impl Into<PriceInput>, currency: Option<Currency>) -> Result<String> {
    Ok(input.into().resolve_with(currency)?.to_words())
}
