//! Convenience re-exports for common types and operations.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use moneta::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the public operations, the
//! format guards, and the error types so that consumers don't need to
//! import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Amount, Currency, IntoPrice, KnownCurrency, Partition, Price, PriceInput, RemainderPolicy,
    Rounding, Scale,
};

// Re-export the public contract
pub use crate::ops::{
    allocate, as_human, as_shape, as_words, as_words_with, average, default_scale_for, divide,
    equal, greater, lesser, multiply, normalize, round_to, set_precision, sorted, sorted_asc,
    sorted_desc, stddev, subtract, sum, Order,
};

// Re-export the parser and guards
pub use crate::parse::{
    assure_code_form, assure_price, assure_symbol_form, is_code_form, is_price, is_symbol_form,
    parse, parse_with,
};

// Re-export the formatter
pub use crate::format::{format_human, format_words};

// Re-export math utilities
pub use crate::math::{div_round, isqrt};

// Re-export error types
pub use crate::error::{MoneyError, Result};
