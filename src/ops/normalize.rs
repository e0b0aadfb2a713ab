//! Scale normalization: aligning operands on their finest common scale.

use crate::domain::{IntoPrice, Price, Scale};
use crate::error::{MoneyError, Result};

/// Normalizes a sequence of prices to its finest scale.
///
/// Each amount is multiplied by the exact power of ten separating its
/// scale from the finest one, so no precision is lost. An
/// already-finest sequence comes back with identical amounts. The empty
/// sequence normalizes to an empty sequence.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`] on mixed currencies, before any
/// rescaling; parse failures for string inputs.
///
/// # Examples
///
/// ```
/// use moneta::ops::normalize;
///
/// let aligned = normalize(["USD 50.00", "USD 0.000_005"]).expect("same currency");
/// assert_eq!(aligned[0].to_words(), "USD 50.000_000");
/// assert_eq!(aligned[1].to_words(), "USD 0.000_005");
/// ```
pub fn normalize<I, P>(prices: I) -> Result<Vec<Price>>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    let resolved = resolve_all(prices)?;
    normalize_prices(&resolved)
}

/// Lifts every input to the structured form, failing fast on the first
/// unparsable element.
pub(crate) fn resolve_all<I, P>(prices: I) -> Result<Vec<Price>>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    prices.into_iter().map(IntoPrice::into_price).collect()
}

/// Verifies all prices share one currency.
pub(crate) fn check_same_currency(prices: &[Price]) -> Result<()> {
    if let Some((first, rest)) = prices.split_first() {
        for p in rest {
            if p.currency() != first.currency() {
                return Err(MoneyError::currency_mismatch(
                    first.currency(),
                    p.currency(),
                ));
            }
        }
    }
    Ok(())
}

/// Currency-checked rescale of already-structured prices.
pub(crate) fn normalize_prices(prices: &[Price]) -> Result<Vec<Price>> {
    check_same_currency(prices)?;
    let Some(finest) = Scale::finest(prices.iter().map(Price::scale)) else {
        return Ok(Vec::new());
    };
    Ok(prices
        .iter()
        .map(|p| Price::new(p.rescale_exactly(finest), p.currency(), finest))
        .collect())
}
