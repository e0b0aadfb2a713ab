//! Glyph ↔ currency table for the symbol ("human") form.

use super::Currency;

/// Where a glyph sits relative to the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    /// Glyph precedes the digits (`$50.37`).
    Prefix,
    /// Glyph follows the digits (`100 kr`).
    Suffix,
}

/// One row of the symbol table.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SymbolEntry {
    /// The display glyph.
    pub glyph: &'static str,
    /// Currency this glyph resolves to when no override is supplied.
    pub currency: Currency,
    /// Glyph position in the human form.
    pub placement: Placement,
    /// A unique glyph identifies exactly one currency; an explicit
    /// override naming any other currency is a conflict.
    pub unique: bool,
}

const fn entry(
    glyph: &'static str,
    code: &'static str,
    placement: Placement,
    unique: bool,
) -> SymbolEntry {
    SymbolEntry {
        glyph,
        currency: Currency::from_literal(code),
        placement,
        unique,
    }
}

/// The symbol table. Multi-character dollar glyphs come before the bare
/// `$` so prefix matching can simply take the longest hit.
pub(crate) const SYMBOLS: &[SymbolEntry] = &[
    entry("R$", "BRL", Placement::Prefix, false),
    entry("A$", "AUD", Placement::Prefix, false),
    entry("C$", "CAD", Placement::Prefix, false),
    entry("HK$", "HKD", Placement::Prefix, false),
    entry("NZ$", "NZD", Placement::Prefix, false),
    entry("S$", "SGD", Placement::Prefix, false),
    entry("$", "USD", Placement::Prefix, false),
    entry("€", "EUR", Placement::Prefix, true),
    entry("¥", "JPY", Placement::Prefix, false),
    entry("£", "GBP", Placement::Prefix, false),
    entry("₹", "INR", Placement::Prefix, false),
    entry("₩", "KRW", Placement::Prefix, false),
    entry("₫", "VND", Placement::Suffix, false),
    entry("kr", "SEK", Placement::Suffix, false),
    entry("zł", "PLN", Placement::Suffix, false),
];

/// Matches a prefix glyph, returning the entry and the remaining text.
/// Prefers the longest matching glyph.
pub(crate) fn match_prefix(s: &str) -> Option<(&'static SymbolEntry, &str)> {
    SYMBOLS
        .iter()
        .filter(|e| e.placement == Placement::Prefix && s.starts_with(e.glyph))
        .max_by_key(|e| e.glyph.len())
        .map(|e| (e, &s[e.glyph.len()..]))
}

/// Matches a suffix glyph, returning the entry and the remaining text.
pub(crate) fn match_suffix(s: &str) -> Option<(&'static SymbolEntry, &str)> {
    SYMBOLS
        .iter()
        .filter(|e| e.placement == Placement::Suffix && s.ends_with(e.glyph))
        .max_by_key(|e| e.glyph.len())
        .map(|e| (e, &s[..s.len() - e.glyph.len()]))
}

/// The unique-glyph entry a currency insists on, if any.
pub(crate) fn unique_entry_for(currency: Currency) -> Option<&'static SymbolEntry> {
    SYMBOLS
        .iter()
        .find(|e| e.unique && e.currency == currency)
}

/// Preferred display glyph for a currency, if the table has one.
pub(crate) fn entry_for(currency: Currency) -> Option<&'static SymbolEntry> {
    SYMBOLS.iter().find(|e| e.currency == currency)
}
