//! Format predicates and their assure variants.

use crate::domain::symbol;
use crate::error::{MoneyError, Result};

/// Separators allowed by the strict code form.
pub(crate) const STRICT_SEPS: &[char] = &['_'];

/// Separators accepted on input for convenience. Commas are normalized
/// away during parsing and never emitted in the code form.
pub(crate) const LENIENT_SEPS: &[char] = &['_', ','];

/// Strict code-form check: `CCC -?digits[.digits]` with underscore
/// grouping only, in groups of three outward from the decimal point.
///
/// # Examples
///
/// ```
/// use moneta::parse::is_code_form;
///
/// assert!(is_code_form("USD 1_000_000.00"));
/// assert!(is_code_form("USD -50.37"));
/// assert!(!is_code_form("USD 1,000.00")); // commas are lenient-only
/// assert!(!is_code_form("$50.37"));
/// ```
#[must_use]
pub fn is_code_form(s: &str) -> bool {
    code_form_with(s, STRICT_SEPS)
}

/// Code-form check accepting comma grouping as well; classification in
/// the parser uses this, strict guards do not.
pub(crate) fn is_code_form_lenient(s: &str) -> bool {
    code_form_with(s, LENIENT_SEPS)
}

fn code_form_with(s: &str, seps: &[char]) -> bool {
    let Some((code, amount)) = s.split_once(' ') else {
        return false;
    };
    code.len() == 3
        && code.bytes().all(|b| b.is_ascii_uppercase())
        && !amount.contains(' ')
        && valid_amount_text(amount, seps)
}

/// Symbol-form check: the string begins or ends with a known currency
/// glyph and is not code form.
///
/// # Examples
///
/// ```
/// use moneta::parse::is_symbol_form;
///
/// assert!(is_symbol_form("$50.37"));
/// assert!(is_symbol_form("100 kr"));
/// assert!(!is_symbol_form("USD 50.37"));
/// ```
#[must_use]
pub fn is_symbol_form(s: &str) -> bool {
    (symbol::match_prefix(s).is_some() || symbol::match_suffix(s).is_some()) && !is_code_form(s)
}

/// Union predicate: either string form.
///
/// The third representation, the structured shape, is carried by the
/// type system and validated by
/// [`Price::from_parts`](crate::domain::Price::from_parts).
#[must_use]
pub fn is_price(s: &str) -> bool {
    is_code_form(s) || is_symbol_form(s)
}

/// Fails with [`MoneyError::InvalidFormat`] unless `s` is strict code
/// form.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] carrying the input.
pub fn assure_code_form(s: &str) -> Result<()> {
    if is_code_form(s) {
        Ok(())
    } else {
        Err(MoneyError::invalid_format(s))
    }
}

/// Fails with [`MoneyError::InvalidFormat`] unless `s` is symbol form.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] carrying the input.
pub fn assure_symbol_form(s: &str) -> Result<()> {
    if is_symbol_form(s) {
        Ok(())
    } else {
        Err(MoneyError::invalid_format(s))
    }
}

/// Fails with [`MoneyError::InvalidFormat`] unless `s` is one of the two
/// string forms.
///
/// # Errors
///
/// [`MoneyError::InvalidFormat`] carrying the input.
pub fn assure_price(s: &str) -> Result<()> {
    if is_price(s) {
        Ok(())
    } else {
        Err(MoneyError::invalid_format(s))
    }
}

// ---------------------------------------------------------------------------
// Digit-run validation
// ---------------------------------------------------------------------------

/// Validates `-?digits[.digits]` where each digit run may carry grouping
/// with the given separators.
pub(crate) fn valid_amount_text(text: &str, seps: &[char]) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    match unsigned.split_once('.') {
        Some((int_part, frac_part)) => {
            valid_int_digits(int_part, seps) && valid_frac_digits(frac_part, seps)
        }
        None => valid_int_digits(unsigned, seps),
    }
}

/// Integer-part digits: optional grouping in threes, right-to-left from
/// the decimal point (first group 1–3 digits, the rest exactly 3).
fn valid_int_digits(s: &str, seps: &[char]) -> bool {
    let Some(chunks) = digit_chunks(s, seps) else {
        return false;
    };
    match chunks.split_first() {
        None => false,
        Some((_, [])) => true,
        Some((first, rest)) => first.len() <= 3 && rest.iter().all(|c| c.len() == 3),
    }
}

/// Fractional-part digits: optional grouping in threes, left-to-right
/// from the decimal point (last group 1–3 digits, the rest exactly 3).
fn valid_frac_digits(s: &str, seps: &[char]) -> bool {
    let Some(chunks) = digit_chunks(s, seps) else {
        return false;
    };
    match chunks.split_last() {
        None => false,
        Some((_, [])) => true,
        Some((last, rest)) => last.len() <= 3 && rest.iter().all(|c| c.len() == 3),
    }
}

/// Splits on separators, requiring every chunk to be a non-empty ASCII
/// digit run. `None` when any other character or an empty chunk appears.
fn digit_chunks<'a>(s: &'a str, seps: &[char]) -> Option<Vec<&'a str>> {
    if s.is_empty() {
        return None;
    }
    let chunks: Vec<&str> = s.split(|c| seps.contains(&c)).collect();
    let well_formed = chunks
        .iter()
        .all(|c| !c.is_empty() && c.bytes().all(|b| b.is_ascii_digit()));
    well_formed.then_some(chunks)
}
