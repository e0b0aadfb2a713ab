//! Stable numeric ordering of price sequences.

use num_bigint::BigInt;

use super::normalize::{check_same_currency, resolve_all};
use crate::domain::{IntoPrice, Price, Scale};
use crate::error::Result;

/// Sort direction for [`sorted`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

/// Produces a stably ordered copy of the input sequence.
///
/// Ordering is numeric — comparison happens on amounts normalized to the
/// finest scale, never on the formatted strings — so `"USD 9.00"` sorts
/// below `"USD 50.00"`. Equal elements keep their input order, elements
/// keep their original scales, and empty or singleton inputs come back
/// unchanged as a fresh sequence.
///
/// # Errors
///
/// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
/// on mixed currencies; parse failures for string inputs.
///
/// # Examples
///
/// ```
/// use moneta::ops::{sorted, Order};
///
/// let out = sorted(["USD 100.00", "USD 9.00", "USD 50.00"], Order::Asc)
///     .expect("same currency");
/// let words: Vec<String> = out.iter().map(|p| p.to_words()).collect();
/// assert_eq!(words, ["USD 9.00", "USD 50.00", "USD 100.00"]);
/// ```
pub fn sorted<I, P>(prices: I, order: Order) -> Result<Vec<Price>>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    let resolved = resolve_all(prices)?;
    if resolved.len() <= 1 {
        return Ok(resolved);
    }
    check_same_currency(&resolved)?;
    let Some(finest) = Scale::finest(resolved.iter().map(Price::scale)) else {
        return Ok(resolved);
    };
    let keys: Vec<BigInt> = resolved
        .iter()
        .map(|p| p.rescale_exactly(finest).into_inner())
        .collect();
    let mut indices: Vec<usize> = (0..resolved.len()).collect();
    match order {
        // Stable sorts: equal keys keep input order in both directions.
        Order::Asc => indices.sort_by(|&a, &b| keys[a].cmp(&keys[b])),
        Order::Desc => indices.sort_by(|&a, &b| keys[b].cmp(&keys[a])),
    }
    Ok(indices.into_iter().map(|i| resolved[i].clone()).collect())
}

/// [`sorted`] with [`Order::Asc`].
///
/// # Errors
///
/// Same as [`sorted`].
pub fn sorted_asc<I, P>(prices: I) -> Result<Vec<Price>>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    sorted(prices, Order::Asc)
}

/// [`sorted`] with [`Order::Desc`].
///
/// # Errors
///
/// Same as [`sorted`].
pub fn sorted_desc<I, P>(prices: I) -> Result<Vec<Price>>
where
    I: IntoIterator<Item = P>,
    P: IntoPrice,
{
    sorted(prices, Order::Desc)
}
