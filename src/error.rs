//! Unified error types for the money arithmetic core.
//!
//! All fallible operations across the crate return [`MoneyError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every failure is immediate and structural: nothing is retried, no partial
//! result is produced, and each variant carries the offending input as a
//! diagnostic payload.
//!
//! # Error Code Ranges
//!
//! | Range | Category | Description |
//! |-------|----------|-------------|
//! | 1000–1999 | Validation | Malformed strings, scale tokens, partitions |
//! | 2000–2999 | Domain | Currency strictness and cardinality violations |
//! | 3000–3999 | Arithmetic | Division by zero |

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, MoneyError>;

// ---------------------------------------------------------------------------
// MoneyError
// ---------------------------------------------------------------------------

/// Unified error enum for the money arithmetic core.
///
/// Every fallible operation in the crate returns `Result<T, MoneyError>`.
/// Variants are grouped by numeric error-code ranges so that callers can
/// pattern-match on categories or inspect individual codes for logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    // ----- 1000–1999: Validation errors ------------------------------------
    /// The input matches no known price format, or an amount could not be
    /// assembled from it (code 1000).
    #[error("invalid format: {input:?}")]
    InvalidFormat {
        /// The offending input, verbatim.
        input: String,
    },

    /// A scale token outside the closed set of six scales (code 1001).
    #[error("invalid scale token: {token:?}")]
    InvalidScale {
        /// The offending token, verbatim.
        token: String,
    },

    /// An allocation partition that cannot be satisfied (code 1002).
    #[error("invalid partition: {reason}")]
    InvalidPartition {
        /// Why the partition was rejected.
        reason: &'static str,
    },

    // ----- 2000–2999: Domain errors ----------------------------------------
    /// A binary or n-ary operation received unequal currencies, or a
    /// symbol-form input conflicted with an explicit currency (code 2000).
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// First currency involved.
        left: String,
        /// Second, conflicting currency.
        right: String,
    },

    /// An aggregate operation received an empty sequence (code 2001).
    #[error("empty input")]
    EmptyInput,

    // ----- 3000–3999: Arithmetic errors ------------------------------------
    /// Division by a zero scalar was attempted (code 3000).
    #[error("division by zero")]
    DivideByZero,
}

impl MoneyError {
    /// Builds an [`MoneyError::InvalidFormat`] carrying the offending input.
    pub fn invalid_format(input: impl Into<String>) -> Self {
        Self::InvalidFormat {
            input: input.into(),
        }
    }

    /// Builds an [`MoneyError::InvalidScale`] carrying the offending token.
    pub fn invalid_scale(token: impl Into<String>) -> Self {
        Self::InvalidScale {
            token: token.into(),
        }
    }

    /// Builds a [`MoneyError::CurrencyMismatch`] from the two sides.
    pub fn currency_mismatch(left: impl ToString, right: impl ToString) -> Self {
        Self::CurrencyMismatch {
            left: left.to_string(),
            right: right.to_string(),
        }
    }

    /// Returns the numeric error code for this variant.
    ///
    /// Codes are organized into ranges:
    /// - 1000–1999 for validation errors
    /// - 2000–2999 for domain errors
    /// - 3000–3999 for arithmetic errors
    #[must_use]
    pub const fn error_code(&self) -> u16 {
        match self {
            // Validation (1000–1999)
            Self::InvalidFormat { .. } => 1000,
            Self::InvalidScale { .. } => 1001,
            Self::InvalidPartition { .. } => 1002,

            // Domain (2000–2999)
            Self::CurrencyMismatch { .. } => 2000,
            Self::EmptyInput => 2001,

            // Arithmetic (3000–3999)
            Self::DivideByZero => 3000,
        }
    }

    /// Returns `true` if this is a validation error (1000–1999).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        self.error_code() >= 1000 && self.error_code() < 2000
    }

    /// Returns `true` if this is a domain error (2000–2999).
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        self.error_code() >= 2000 && self.error_code() < 3000
    }

    /// Returns `true` if this is an arithmetic error (3000–3999).
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        self.error_code() >= 3000 && self.error_code() < 4000
    }
}
