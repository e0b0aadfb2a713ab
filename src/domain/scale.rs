//! The closed set of supported decimal scales.

use core::fmt;
use core::str::FromStr;

use crate::error::{MoneyError, Result};

/// A decimal scale: the power of ten relating minor units to the displayed
/// value.
///
/// The set is closed at six members so malformed external input is caught
/// at the type boundary and the normalizer's "finest" selection is total.
/// The magnitude is the canonical key; the SI prefix names the token.
///
/// | Scale | Magnitude | Token |
/// |-------|-----------|-------|
/// | `Whole` | 10⁰ | `whole x10^0` |
/// | `Centi` | 10⁻² | `centi x10^-2` |
/// | `Milli` | 10⁻³ | `milli x10^-3` |
/// | `Micro` | 10⁻⁶ | `micro x10^-6` |
/// | `Nano` | 10⁻⁹ | `nano x10^-9` |
/// | `Pico` | 10⁻¹² | `pico x10^-12` |
///
/// # Examples
///
/// ```
/// use moneta::domain::Scale;
///
/// assert_eq!(Scale::Centi.digits(), 2);
/// assert_eq!(Scale::finer(Scale::Centi, Scale::Micro), Scale::Micro);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    /// Whole units, 10⁰.
    Whole,
    /// Hundredths, 10⁻².
    Centi,
    /// Thousandths, 10⁻³.
    Milli,
    /// Millionths, 10⁻⁶.
    Micro,
    /// Billionths, 10⁻⁹.
    Nano,
    /// Trillionths, 10⁻¹².
    Pico,
}

impl Scale {
    /// All six scales, coarsest first.
    pub const ALL: [Scale; 6] = [
        Scale::Whole,
        Scale::Centi,
        Scale::Milli,
        Scale::Micro,
        Scale::Nano,
        Scale::Pico,
    ];

    /// Power-of-ten magnitude: the displayed value is
    /// `amount × 10^magnitude`.
    #[must_use]
    pub const fn magnitude(&self) -> i8 {
        match self {
            Scale::Whole => 0,
            Scale::Centi => -2,
            Scale::Milli => -3,
            Scale::Micro => -6,
            Scale::Nano => -9,
            Scale::Pico => -12,
        }
    }

    /// Number of fractional digits: `|magnitude|`.
    #[must_use]
    pub const fn digits(&self) -> u32 {
        self.magnitude().unsigned_abs() as u32
    }

    /// Canonical string token: SI prefix plus explicit magnitude.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Scale::Whole => "whole x10^0",
            Scale::Centi => "centi x10^-2",
            Scale::Milli => "milli x10^-3",
            Scale::Micro => "micro x10^-6",
            Scale::Nano => "nano x10^-9",
            Scale::Pico => "pico x10^-12",
        }
    }

    /// Bare SI prefix of the token.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Scale::Whole => "whole",
            Scale::Centi => "centi",
            Scale::Milli => "milli",
            Scale::Micro => "micro",
            Scale::Nano => "nano",
            Scale::Pico => "pico",
        }
    }

    /// Looks a scale up by its canonical magnitude key.
    #[must_use]
    pub const fn from_magnitude(magnitude: i8) -> Option<Scale> {
        match magnitude {
            0 => Some(Scale::Whole),
            -2 => Some(Scale::Centi),
            -3 => Some(Scale::Milli),
            -6 => Some(Scale::Micro),
            -9 => Some(Scale::Nano),
            -12 => Some(Scale::Pico),
            _ => None,
        }
    }

    /// Returns the finer of two scales (the more negative magnitude).
    /// Ties return either side; the operation is associative.
    #[must_use]
    pub const fn finer(a: Scale, b: Scale) -> Scale {
        if a.magnitude() <= b.magnitude() { a } else { b }
    }

    /// Minimum scale over a sequence; `None` on an empty sequence.
    pub fn finest<I>(scales: I) -> Option<Scale>
    where
        I: IntoIterator<Item = Scale>,
    {
        scales.into_iter().reduce(Scale::finer)
    }

    /// The smallest built-in scale whose digit count covers `k` fractional
    /// digits. `None` when `k` exceeds pico precision (12 digits).
    #[must_use]
    pub fn covering(k: u32) -> Option<Scale> {
        Scale::ALL.into_iter().find(|s| s.digits() >= k)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Scale {
    type Err = MoneyError;

    /// Accepts the full token (`"centi x10^-2"`) or the bare prefix
    /// (`"centi"`). Anything else is [`MoneyError::InvalidScale`].
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Scale::ALL
            .into_iter()
            .find(|scale| trimmed == scale.token() || trimmed == scale.prefix())
            .ok_or_else(|| MoneyError::invalid_scale(s))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Magnitudes & digits ------------------------------------------------

    #[test]
    fn magnitudes() {
        assert_eq!(Scale::Whole.magnitude(), 0);
        assert_eq!(Scale::Centi.magnitude(), -2);
        assert_eq!(Scale::Milli.magnitude(), -3);
        assert_eq!(Scale::Micro.magnitude(), -6);
        assert_eq!(Scale::Nano.magnitude(), -9);
        assert_eq!(Scale::Pico.magnitude(), -12);
    }

    #[test]
    fn digits_are_absolute_magnitudes() {
        for scale in Scale::ALL {
            assert_eq!(scale.digits(), scale.magnitude().unsigned_abs() as u32);
        }
    }

    // -- from_magnitude -----------------------------------------------------

    #[test]
    fn from_magnitude_round_trips() {
        for scale in Scale::ALL {
            assert_eq!(Scale::from_magnitude(scale.magnitude()), Some(scale));
        }
    }

    #[test]
    fn from_magnitude_rejects_open_exponents() {
        assert_eq!(Scale::from_magnitude(-1), None);
        assert_eq!(Scale::from_magnitude(-4), None);
        assert_eq!(Scale::from_magnitude(1), None);
        assert_eq!(Scale::from_magnitude(-13), None);
    }

    // -- finer / finest -----------------------------------------------------

    #[test]
    fn finer_picks_more_negative_magnitude() {
        assert_eq!(Scale::finer(Scale::Centi, Scale::Micro), Scale::Micro);
        assert_eq!(Scale::finer(Scale::Micro, Scale::Centi), Scale::Micro);
        assert_eq!(Scale::finer(Scale::Whole, Scale::Pico), Scale::Pico);
    }

    #[test]
    fn finer_tie_returns_equal_scale() {
        assert_eq!(Scale::finer(Scale::Milli, Scale::Milli), Scale::Milli);
    }

    #[test]
    fn finer_is_associative() {
        let (a, b, c) = (Scale::Centi, Scale::Nano, Scale::Milli);
        assert_eq!(
            Scale::finer(Scale::finer(a, b), c),
            Scale::finer(a, Scale::finer(b, c))
        );
    }

    #[test]
    fn finest_of_sequence() {
        let scales = [Scale::Centi, Scale::Whole, Scale::Micro, Scale::Milli];
        assert_eq!(Scale::finest(scales), Some(Scale::Micro));
    }

    #[test]
    fn finest_of_empty_is_none() {
        assert_eq!(Scale::finest([]), None);
    }

    #[test]
    fn finest_of_singleton() {
        assert_eq!(Scale::finest([Scale::Nano]), Some(Scale::Nano));
    }

    // -- covering -----------------------------------------------------------

    #[test]
    fn covering_exact_digit_counts() {
        assert_eq!(Scale::covering(0), Some(Scale::Whole));
        assert_eq!(Scale::covering(2), Some(Scale::Centi));
        assert_eq!(Scale::covering(3), Some(Scale::Milli));
        assert_eq!(Scale::covering(6), Some(Scale::Micro));
        assert_eq!(Scale::covering(9), Some(Scale::Nano));
        assert_eq!(Scale::covering(12), Some(Scale::Pico));
    }

    #[test]
    fn covering_rounds_up_to_next_scale() {
        assert_eq!(Scale::covering(1), Some(Scale::Centi));
        assert_eq!(Scale::covering(4), Some(Scale::Micro));
        assert_eq!(Scale::covering(5), Some(Scale::Micro));
        assert_eq!(Scale::covering(7), Some(Scale::Nano));
        assert_eq!(Scale::covering(10), Some(Scale::Pico));
    }

    #[test]
    fn covering_beyond_pico_is_none() {
        assert_eq!(Scale::covering(13), None);
        assert_eq!(Scale::covering(100), None);
    }

    // -- Token round-trip ---------------------------------------------------

    #[test]
    fn token_parses_back() {
        for scale in Scale::ALL {
            let Ok(parsed) = scale.token().parse::<Scale>() else {
                panic!("token should parse: {}", scale.token());
            };
            assert_eq!(parsed, scale);
        }
    }

    #[test]
    fn bare_prefix_parses() {
        let Ok(parsed) = "micro".parse::<Scale>() else {
            panic!("prefix should parse");
        };
        assert_eq!(parsed, Scale::Micro);
    }

    #[test]
    fn unknown_token_is_invalid_scale() {
        let Err(e) = "deci x10^-1".parse::<Scale>() else {
            panic!("expected Err");
        };
        assert_eq!(e, MoneyError::invalid_scale("deci x10^-1"));
    }

    #[test]
    fn display_is_token() {
        assert_eq!(format!("{}", Scale::Nano), "nano x10^-9");
    }
}
