//! Lowering structured prices back to their string forms.
//!
//! Both forms share one digit pipeline: separate the sign, render the
//! absolute amount zero-padded to at least `digits + 1` characters, and
//! split off the last `digits` characters as the fraction. The code form
//! groups with underscores on both sides of the point; the human form
//! groups the integer part with commas and leaves the fraction plain.

use crate::domain::symbol::{self, Placement};
use crate::domain::{Price, Scale};

/// Renders the lossless code form: `"USD 1_000_000.00"`.
///
/// Per-scale fraction rules: whole emits no fraction, centi emits its two
/// digits, and the finer scales emit all their digits in underscored
/// groups of three from the decimal point outward.
///
/// # Examples
///
/// ```
/// use moneta::domain::{Amount, Currency, Price, Scale};
/// use moneta::format::format_words;
///
/// let usd = Currency::new("USD").expect("valid code");
/// let p = Price::new(Amount::from(250i64), usd, Scale::Nano);
/// assert_eq!(format_words(&p), "USD 0.000_000_250");
/// ```
#[must_use]
pub fn format_words(price: &Price) -> String {
    let (sign, int_digits, frac_digits) = digit_parts(price);
    let int_grouped = group_from_right(&int_digits, '_');
    let body = match price.scale() {
        Scale::Whole => int_grouped,
        Scale::Centi => format!("{int_grouped}.{frac_digits}"),
        _ => format!("{int_grouped}.{}", group_from_left(&frac_digits, '_')),
    };
    format!("{} {sign}{body}", price.currency())
}

/// Renders the display-oriented human form: `"$1,000,000.00"`.
///
/// The glyph comes from the symbol table; currencies without a glyph use
/// their code as the prefix. The fraction is emitted ungrouped.
#[must_use]
pub fn format_human(price: &Price) -> String {
    let (sign, int_digits, frac_digits) = digit_parts(price);
    let int_grouped = group_from_right(&int_digits, ',');
    let body = match price.scale() {
        Scale::Whole => format!("{sign}{int_grouped}"),
        _ => format!("{sign}{int_grouped}.{frac_digits}"),
    };
    match symbol::entry_for(price.currency()) {
        Some(entry) if entry.placement == Placement::Prefix => {
            format!("{}{body}", entry.glyph)
        }
        Some(entry) => format!("{body} {}", entry.glyph),
        None => format!("{}{body}", price.currency()),
    }
}

/// Sign, integer digits, and fraction digits of the absolute amount,
/// zero-padded so the integer part is never empty.
fn digit_parts(price: &Price) -> (&'static str, String, String) {
    let d = price.scale().digits() as usize;
    let magnitude = price.amount().abs().to_string();
    let padded = format!("{magnitude:0>width$}", width = d + 1);
    let (int_part, frac_part) = padded.split_at(padded.len() - d);
    let sign = if price.is_negative() { "-" } else { "" };
    (sign, int_part.to_owned(), frac_part.to_owned())
}

/// Thousands grouping, right to left: `1000000` → `1_000_000`.
fn group_from_right(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// Fraction grouping, left to right: `000000250` → `000_000_250`.
fn group_from_left(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}
