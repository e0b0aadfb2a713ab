//! Currency codes and the default-scale registry.

use core::fmt;
use core::str::FromStr;

use super::Scale;
use crate::error::{MoneyError, Result};

/// An uppercase three-letter currency identifier, stored inline.
///
/// Construction validates the shape only: any three ASCII uppercase
/// letters are accepted, so custom and crypto codes work alongside the
/// ISO 4217 set. Unknown codes default to centi scale in the registry.
///
/// # Examples
///
/// ```
/// use moneta::domain::{Currency, Scale};
///
/// let usd = Currency::new("USD").expect("valid code");
/// assert_eq!(usd.as_str(), "USD");
/// assert_eq!(usd.default_scale(), Scale::Centi);
///
/// let btc = Currency::new("BTC").expect("custom codes are accepted");
/// assert_eq!(btc.default_scale(), Scale::Centi);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Currency([u8; 3]);

impl Currency {
    /// Creates a currency from a code.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::InvalidFormat`] unless `code` is exactly
    /// three ASCII uppercase letters.
    pub fn new(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(MoneyError::invalid_format(code));
        }
        Ok(Self([bytes[0], bytes[1], bytes[2]]))
    }

    /// Builds a currency from a known-good literal. Callers must pass
    /// exactly three ASCII uppercase letters; used for the built-in tables.
    pub(crate) const fn from_literal(code: &str) -> Self {
        let bytes = code.as_bytes();
        Self([bytes[0], bytes[1], bytes[2]])
    }

    /// The three-letter code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Constructors only admit ASCII uppercase bytes.
        core::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Default scale per the registry.
    ///
    /// - Whole-unit: JPY, KRW, VND, IDR, CLP, PYG, UGX.
    /// - Milli-unit: BHD, KWD, OMR, TND.
    /// - Centi-unit: everything else, including unknown codes.
    ///
    /// Lookups never fail.
    #[must_use]
    pub fn default_scale(&self) -> Scale {
        match &self.0 {
            b"JPY" | b"KRW" | b"VND" | b"IDR" | b"CLP" | b"PYG" | b"UGX" => Scale::Whole,
            b"BHD" | b"KWD" | b"OMR" | b"TND" => Scale::Milli,
            _ => Scale::Centi,
        }
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Currency").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self> {
        Currency::new(s)
    }
}

// ---------------------------------------------------------------------------
// KnownCurrency
// ---------------------------------------------------------------------------

/// The closed enumeration of the 25 most-common currencies.
///
/// Lets callers constrain the currency statically where an open
/// [`Currency`] would be too permissive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownCurrency {
    /// United States dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Swiss franc.
    Chf,
    /// Canadian dollar.
    Cad,
    /// Australian dollar.
    Aud,
    /// New Zealand dollar.
    Nzd,
    /// Chinese yuan.
    Cny,
    /// Hong Kong dollar.
    Hkd,
    /// Singapore dollar.
    Sgd,
    /// Indian rupee.
    Inr,
    /// Brazilian real.
    Brl,
    /// Mexican peso.
    Mxn,
    /// South African rand.
    Zar,
    /// Japanese yen.
    Jpy,
    /// South Korean won.
    Krw,
    /// Vietnamese dong.
    Vnd,
    /// Indonesian rupiah.
    Idr,
    /// Chilean peso.
    Clp,
    /// Paraguayan guarani.
    Pyg,
    /// Ugandan shilling.
    Ugx,
    /// Bahraini dinar.
    Bhd,
    /// Kuwaiti dinar.
    Kwd,
    /// Omani rial.
    Omr,
    /// Tunisian dinar.
    Tnd,
}

impl KnownCurrency {
    /// All 25 known currencies.
    pub const ALL: [KnownCurrency; 25] = [
        KnownCurrency::Usd,
        KnownCurrency::Eur,
        KnownCurrency::Gbp,
        KnownCurrency::Chf,
        KnownCurrency::Cad,
        KnownCurrency::Aud,
        KnownCurrency::Nzd,
        KnownCurrency::Cny,
        KnownCurrency::Hkd,
        KnownCurrency::Sgd,
        KnownCurrency::Inr,
        KnownCurrency::Brl,
        KnownCurrency::Mxn,
        KnownCurrency::Zar,
        KnownCurrency::Jpy,
        KnownCurrency::Krw,
        KnownCurrency::Vnd,
        KnownCurrency::Idr,
        KnownCurrency::Clp,
        KnownCurrency::Pyg,
        KnownCurrency::Ugx,
        KnownCurrency::Bhd,
        KnownCurrency::Kwd,
        KnownCurrency::Omr,
        KnownCurrency::Tnd,
    ];

    /// Canonical three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            KnownCurrency::Usd => "USD",
            KnownCurrency::Eur => "EUR",
            KnownCurrency::Gbp => "GBP",
            KnownCurrency::Chf => "CHF",
            KnownCurrency::Cad => "CAD",
            KnownCurrency::Aud => "AUD",
            KnownCurrency::Nzd => "NZD",
            KnownCurrency::Cny => "CNY",
            KnownCurrency::Hkd => "HKD",
            KnownCurrency::Sgd => "SGD",
            KnownCurrency::Inr => "INR",
            KnownCurrency::Brl => "BRL",
            KnownCurrency::Mxn => "MXN",
            KnownCurrency::Zar => "ZAR",
            KnownCurrency::Jpy => "JPY",
            KnownCurrency::Krw => "KRW",
            KnownCurrency::Vnd => "VND",
            KnownCurrency::Idr => "IDR",
            KnownCurrency::Clp => "CLP",
            KnownCurrency::Pyg => "PYG",
            KnownCurrency::Ugx => "UGX",
            KnownCurrency::Bhd => "BHD",
            KnownCurrency::Kwd => "KWD",
            KnownCurrency::Omr => "OMR",
            KnownCurrency::Tnd => "TND",
        }
    }

    /// The open [`Currency`] value for this code.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        Currency::from_literal(self.code())
    }

    /// Default scale per the registry.
    #[must_use]
    pub fn default_scale(&self) -> Scale {
        self.currency().default_scale()
    }
}

impl From<KnownCurrency> for Currency {
    fn from(known: KnownCurrency) -> Self {
        known.currency()
    }
}

impl fmt::Display for KnownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
