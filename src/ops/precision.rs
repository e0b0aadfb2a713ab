//! Changing a price's scale.

use crate::domain::{Amount, IntoPrice, Price, Rounding, Scale};
use crate::error::Result;
use crate::math::{div_round, pow10};

/// Re-expresses a price at another scale.
///
/// Increasing precision multiplies by the exact power of ten and is
/// always lossless; decreasing precision divides through the rounding
/// kernel with the chosen mode.
///
/// # Errors
///
/// Parse failures for string inputs.
///
/// # Examples
///
/// ```
/// use moneta::domain::{Rounding, Scale};
/// use moneta::ops::set_precision;
///
/// let up = set_precision("USD 5.55", Scale::Micro, Rounding::default())
///     .expect("widening is lossless");
/// assert_eq!(up.to_words(), "USD 5.550_000");
///
/// let down = set_precision("USD 5.555", Scale::Centi, Rounding::HalfEven)
///     .expect("valid input");
/// assert_eq!(down.to_words(), "USD 5.56");
/// ```
pub fn set_precision(of: impl IntoPrice, to: Scale, round: Rounding) -> Result<Price> {
    let p = of.into_price()?;
    let from = p.scale();
    if to == from {
        return Ok(p);
    }
    if to.magnitude() < from.magnitude() {
        return Ok(Price::new(p.rescale_exactly(to), p.currency(), to));
    }
    let diff = (to.magnitude() - from.magnitude()) as u32;
    let quotient = div_round(p.amount().get(), &pow10(diff), round)?;
    Ok(Price::new(Amount::new(quotient), p.currency(), to))
}

/// Alias for the precision-decrease path of [`set_precision`].
///
/// # Errors
///
/// Same as [`set_precision`].
pub fn round_to(of: impl IntoPrice, to: Scale, round: Rounding) -> Result<Price> {
    set_precision(of, to, round)
}
