//! The structured price triple.

use core::cmp::Ordering;
use core::fmt;

use super::{Amount, Currency, Scale};
use crate::error::{MoneyError, Result};

/// A monetary value: an exact [`Amount`] of minor units, a [`Currency`],
/// and the [`Scale`] relating the two.
///
/// The displayed value equals `amount × 10^magnitude(scale)`. Prices are
/// immutable; every operation in the crate returns fresh values.
///
/// Derived equality is structural (same amount, currency, and scale).
/// Numeric equality across scales goes through [`Price::numeric_cmp`],
/// which first normalizes both sides to the finer scale.
///
/// # Examples
///
/// ```
/// use moneta::domain::{Amount, Currency, Price, Scale};
///
/// let usd = Currency::new("USD").expect("valid code");
/// let p = Price::new(Amount::from(5_037i64), usd, Scale::Centi);
/// assert_eq!(p.to_words(), "USD 50.37");
/// assert_eq!(p.to_human(), "$50.37");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Price {
    amount: Amount,
    currency: Currency,
    scale: Scale,
}

impl Price {
    /// Assembles a price from its parts.
    pub fn new(amount: impl Into<Amount>, currency: Currency, scale: Scale) -> Self {
        Self {
            amount: amount.into(),
            currency,
            scale,
        }
    }

    /// Zero at the currency's default scale.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Amount::zero(), currency, currency.default_scale())
    }

    /// Validates loose shape parts into a price.
    ///
    /// The currency code must be three ASCII uppercase letters; the scale
    /// token, when present, must belong to the closed set. A missing scale
    /// is stamped with the currency's default.
    ///
    /// # Errors
    ///
    /// [`MoneyError::InvalidFormat`] for a bad code,
    /// [`MoneyError::InvalidScale`] for an unknown scale token.
    ///
    /// # Examples
    ///
    /// ```
    /// use moneta::domain::{Amount, Price, Scale};
    ///
    /// let p = Price::from_parts(Amount::from(700i64), "USD", None).expect("valid shape");
    /// assert_eq!(p.scale(), Scale::Centi);
    ///
    /// let q = Price::from_parts(Amount::from(5i64), "USD", Some("micro x10^-6"))
    ///     .expect("valid shape");
    /// assert_eq!(q.scale(), Scale::Micro);
    /// ```
    pub fn from_parts(
        amount: impl Into<Amount>,
        code: &str,
        scale_token: Option<&str>,
    ) -> Result<Self> {
        let currency = Currency::new(code)?;
        let scale = match scale_token {
            Some(token) => token.parse::<Scale>()?,
            None => currency.default_scale(),
        };
        Ok(Self::new(amount, currency, scale))
    }

    /// The exact minor-unit amount.
    #[must_use]
    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    /// The currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// The scale.
    #[must_use]
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns `true` if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// A fresh price with the same currency and scale but a new amount.
    pub fn with_amount(&self, amount: impl Into<Amount>) -> Self {
        Self::new(amount, self.currency, self.scale)
    }

    /// Numeric comparison after normalization to the finer scale.
    ///
    /// # Errors
    ///
    /// [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn numeric_cmp(&self, other: &Price) -> Result<Ordering> {
        if self.currency != other.currency {
            return Err(MoneyError::currency_mismatch(self.currency, other.currency));
        }
        let finer = Scale::finer(self.scale, other.scale);
        let lhs = self.rescale_exactly(finer);
        let rhs = other.rescale_exactly(finer);
        Ok(lhs.cmp(&rhs))
    }

    /// Numeric equality: identical currency and identical amounts after
    /// normalization to the finer scale.
    ///
    /// # Errors
    ///
    /// [`MoneyError::CurrencyMismatch`] when the currencies differ.
    pub fn numerically_eq(&self, other: &Price) -> Result<bool> {
        Ok(self.numeric_cmp(other)? == Ordering::Equal)
    }

    /// The amount lifted to `target`, which must be at least as fine as
    /// this price's scale. Exact by construction.
    pub(crate) fn rescale_exactly(&self, target: Scale) -> Amount {
        let diff = (self.scale.magnitude() - target.magnitude()).unsigned_abs() as u32;
        self.amount.scale_up_by_pow10(diff)
    }

    /// The code-form ("words") string.
    #[must_use]
    pub fn to_words(&self) -> String {
        crate::format::format_words(self)
    }

    /// The symbol-form ("human") string.
    #[must_use]
    pub fn to_human(&self) -> String {
        crate::format::format_human(self)
    }
}

impl fmt::Display for Price {
    /// Displays the lossless code form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_words())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn usd() -> Currency {
        let Ok(c) = Currency::new("USD") else {
            panic!("valid code");
        };
        c
    }

    fn eur() -> Currency {
        let Ok(c) = Currency::new("EUR") else {
            panic!("valid code");
        };
        c
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_and_accessors() {
        let p = Price::new(Amount::from(1_000i64), usd(), Scale::Centi);
        assert_eq!(p.amount(), &Amount::from(1_000i64));
        assert_eq!(p.currency(), usd());
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn zero_uses_default_scale() {
        let p = Price::zero(usd());
        assert!(p.is_zero());
        assert_eq!(p.scale(), Scale::Centi);

        let Ok(jpy) = Currency::new("JPY") else {
            panic!("valid code");
        };
        assert_eq!(Price::zero(jpy).scale(), Scale::Whole);
    }

    #[test]
    fn with_amount_keeps_currency_and_scale() {
        let p = Price::new(Amount::from(5i64), usd(), Scale::Micro);
        let q = p.with_amount(Amount::from(9i64));
        assert_eq!(q.amount(), &Amount::from(9i64));
        assert_eq!(q.currency(), p.currency());
        assert_eq!(q.scale(), p.scale());
    }

    // -- from_parts ---------------------------------------------------------

    #[test]
    fn from_parts_stamps_default_scale() {
        let Ok(p) = Price::from_parts(Amount::from(700i64), "USD", None) else {
            panic!("expected Ok");
        };
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn from_parts_honors_scale_token() {
        let Ok(p) = Price::from_parts(Amount::from(5i64), "USD", Some("nano x10^-9")) else {
            panic!("expected Ok");
        };
        assert_eq!(p.scale(), Scale::Nano);
    }

    #[test]
    fn from_parts_accepts_bare_prefix_token() {
        let Ok(p) = Price::from_parts(Amount::from(5i64), "USD", Some("milli")) else {
            panic!("expected Ok");
        };
        assert_eq!(p.scale(), Scale::Milli);
    }

    #[test]
    fn from_parts_rejects_bad_code() {
        let Err(e) = Price::from_parts(Amount::from(1i64), "usd", None) else {
            panic!("expected Err");
        };
        assert!(e.is_validation());
    }

    #[test]
    fn from_parts_rejects_unknown_scale_token() {
        let Err(e) = Price::from_parts(Amount::from(1i64), "USD", Some("deci")) else {
            panic!("expected Err");
        };
        assert_eq!(e, MoneyError::invalid_scale("deci"));
    }

    // -- Numeric comparison -------------------------------------------------

    #[test]
    fn numeric_eq_across_scales() {
        // 50.00 at centi == 50.000 at milli
        let a = Price::new(Amount::from(5_000i64), usd(), Scale::Centi);
        let b = Price::new(Amount::from(50_000i64), usd(), Scale::Milli);
        assert_eq!(a.numerically_eq(&b), Ok(true));
    }

    #[test]
    fn numeric_cmp_orders_by_value() {
        let small = Price::new(Amount::from(900i64), usd(), Scale::Centi);
        let large = Price::new(Amount::from(10_000i64), usd(), Scale::Centi);
        assert_eq!(small.numeric_cmp(&large), Ok(Ordering::Less));
        assert_eq!(large.numeric_cmp(&small), Ok(Ordering::Greater));
    }

    #[test]
    fn numeric_cmp_rejects_mixed_currencies() {
        let a = Price::new(Amount::from(1i64), usd(), Scale::Centi);
        let b = Price::new(Amount::from(1i64), eur(), Scale::Centi);
        let Err(e) = a.numeric_cmp(&b) else {
            panic!("expected Err");
        };
        assert_eq!(e, MoneyError::currency_mismatch("USD", "EUR"));
    }

    #[test]
    fn structural_eq_distinguishes_scales() {
        let a = Price::new(Amount::from(5_000i64), usd(), Scale::Centi);
        let b = Price::new(Amount::from(50_000i64), usd(), Scale::Milli);
        assert_ne!(a, b);
        assert_eq!(a.numerically_eq(&b), Ok(true));
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_is_code_form() {
        let p = Price::new(Amount::from(5_037i64), usd(), Scale::Centi);
        assert_eq!(format!("{p}"), "USD 50.37");
    }
}
