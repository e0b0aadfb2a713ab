//! Symbol-form parsing and currency resolution.

use super::code;
use crate::domain::symbol::{self, SymbolEntry};
use crate::domain::{Currency, Price};
use crate::error::{MoneyError, Result};

/// Parses a classified symbol-form string: match the glyph, resolve the
/// currency (the explicit override may conflict), then run the shared
/// amount assembly at the resolved currency's default scale.
pub(crate) fn parse_symbol(s: &str, override_currency: Option<Currency>) -> Result<Price> {
    let matched = symbol::match_prefix(s).or_else(|| symbol::match_suffix(s));
    let Some((entry, amount_text)) = matched else {
        return Err(MoneyError::invalid_format(s));
    };
    let currency = resolve_currency(entry, override_currency)?;
    code::assemble(amount_text.trim(), currency, s)
}

/// Applies the override rules: an explicit currency wins unless the
/// matched glyph uniquely identifies a different currency, or the
/// override currency itself requires a different unique glyph.
fn resolve_currency(
    entry: &SymbolEntry,
    override_currency: Option<Currency>,
) -> Result<Currency> {
    let Some(wanted) = override_currency else {
        return Ok(entry.currency);
    };
    if entry.unique && entry.currency != wanted {
        return Err(MoneyError::currency_mismatch(entry.currency, wanted));
    }
    if let Some(required) = symbol::unique_entry_for(wanted) {
        if required.glyph != entry.glyph {
            return Err(MoneyError::currency_mismatch(wanted, entry.currency));
        }
    }
    Ok(wanted)
}
