//! The total parser: classification and lifting to the structured form.
//!
//! A string is classified as code form (`"USD 50.37"`), symbol form
//! (`"$50.37"`), or rejected; both accepted forms run through the shared
//! amount assembly and scale inference. The structured shape needs no
//! parsing and passes through [`PriceInput`](crate::domain::PriceInput)
//! untouched.
//!
//! ```text
//! Classify ──► Code   ──► split ──► currency ──► assemble ──► infer scale ──► Price
//!          ──► Symbol ──► glyph ──► resolve  ──► assemble ──► infer scale ──► Price
//!          ──► Reject ──► InvalidFormat
//! ```

mod code;
mod guards;
mod symbol;

pub use guards::{
    assure_code_form, assure_price, assure_symbol_form, is_code_form, is_price, is_symbol_form,
};

use crate::domain::{Currency, Price};
use crate::error::{MoneyError, Result};

/// Parses either string form into a structured price.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] when the input matches neither form or
/// its amount cannot be assembled.
///
/// # Examples
///
/// ```
/// use moneta::parse::parse;
///
/// let a = parse("USD 50.37").expect("code form");
/// let b = parse("$50.37").expect("symbol form");
/// assert_eq!(a, b);
/// ```
pub fn parse(input: &str) -> Result<Price> {
    parse_with(input, None)
}

/// Like [`parse`], with an explicit currency override used to
/// disambiguate symbol-form input. Code-form input carries its own
/// currency and ignores the override.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] for unrecognized input;
/// [`MoneyError::CurrencyMismatch`] when the override conflicts with a
/// unique glyph.
pub fn parse_with(input: &str, currency: Option<Currency>) -> Result<Price> {
    let trimmed = input.trim();
    if guards::is_code_form_lenient(trimmed) {
        code::parse_code(trimmed)
    } else if guards::is_symbol_form(trimmed) {
        symbol::parse_symbol(trimmed, currency)
    } else {
        Err(MoneyError::invalid_format(input))
    }
}
