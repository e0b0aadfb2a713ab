//! The three-format input union and the polymorphic-input trait.

use super::{Currency, Price};
use crate::error::Result;

/// The sum of the three price representations.
///
/// Every entry point in the crate accepts any of the three shapes; the
/// symbol form is an output-oriented convenience and is never the
/// internal representation.
///
/// # Examples
///
/// ```
/// use moneta::domain::PriceInput;
///
/// let words = PriceInput::from("USD 50.37");
/// let human = PriceInput::from("$50.37");
/// assert!(matches!(words, PriceInput::Words(_)));
/// assert!(matches!(human, PriceInput::Human(_)));
///
/// let a = words.resolve().expect("parses");
/// let b = human.resolve().expect("parses");
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceInput {
    /// Code-form string: `"USD 50.37"`.
    Words(String),
    /// Symbol-form string: `"$50.37"`.
    Human(String),
    /// The structured triple.
    Shape(Price),
}

impl PriceInput {
    /// Classifies and lifts the input to the structured form.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidFormat`](crate::error::MoneyError::InvalidFormat)
    /// when the input matches no known format.
    pub fn resolve(&self) -> Result<Price> {
        self.resolve_with(None)
    }

    /// Like [`PriceInput::resolve`], with an explicit currency override
    /// for symbol-form disambiguation.
    ///
    /// # Errors
    ///
    /// [`MoneyError::CurrencyMismatch`](crate::error::MoneyError::CurrencyMismatch)
    /// when the override conflicts with a unique glyph.
    pub fn resolve_with(&self, currency: Option<Currency>) -> Result<Price> {
        match self {
            PriceInput::Words(s) | PriceInput::Human(s) => crate::parse::parse_with(s, currency),
            PriceInput::Shape(p) => Ok(p.clone()),
        }
    }
}

impl From<&str> for PriceInput {
    /// Classifies the string by the guards: strict code form becomes
    /// `Words`, a glyph match becomes `Human`; anything else is kept as
    /// `Words` and rejected at resolve time.
    fn from(s: &str) -> Self {
        if crate::parse::is_symbol_form(s) {
            PriceInput::Human(s.to_owned())
        } else {
            PriceInput::Words(s.to_owned())
        }
    }
}

impl From<String> for PriceInput {
    fn from(s: String) -> Self {
        PriceInput::from(s.as_str())
    }
}

impl From<Price> for PriceInput {
    fn from(p: Price) -> Self {
        PriceInput::Shape(p)
    }
}

impl From<&Price> for PriceInput {
    fn from(p: &Price) -> Self {
        PriceInput::Shape(p.clone())
    }
}

/// Polymorphic input: anything that can be lifted to a [`Price`].
///
/// Implemented for the structured type, both string forms, and
/// [`PriceInput`] itself, so operations can be called uniformly:
///
/// ```
/// use moneta::ops::sum;
///
/// let total = sum(["USD 0.10", "USD 0.20"]).expect("same currency");
/// assert_eq!(total.to_words(), "USD 0.30");
/// ```
pub trait IntoPrice {
    /// Lifts `self` to the structured form.
    ///
    /// # Errors
    ///
    /// Propagates parse failures for string inputs.
    fn into_price(self) -> Result<Price>;
}

impl IntoPrice for Price {
    fn into_price(self) -> Result<Price> {
        Ok(self)
    }
}

impl IntoPrice for &Price {
    fn into_price(self) -> Result<Price> {
        Ok(self.clone())
    }
}

impl IntoPrice for &str {
    fn into_price(self) -> Result<Price> {
        crate::parse::parse(self)
    }
}

impl IntoPrice for String {
    fn into_price(self) -> Result<Price> {
        crate::parse::parse(&self)
    }
}

impl IntoPrice for &String {
    fn into_price(self) -> Result<Price> {
        crate::parse::parse(self)
    }
}

impl IntoPrice for PriceInput {
    fn into_price(self) -> Result<Price> {
        self.resolve()
    }
}

impl IntoPrice for &PriceInput {
    fn into_price(self) -> Result<Price> {
        self.resolve()
    }
}
