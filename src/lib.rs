//! # Moneta
//!
//! A money arithmetic core for currency-aware monetary values: exact
//! big-integer amounts annotated with an ISO 4217 currency and a decimal
//! scale, a total parser over three interchangeable input shapes, and an
//! arithmetic kernel with five rounding modes and loss-free allocation.
//!
//! - **Exact by construction** — amounts are arbitrary-precision signed
//!   integers in minor units; floating point never holds monetary value.
//! - **Three formats, one surface** — every operation accepts code-form
//!   strings (`"USD 50.37"`), symbol-form strings (`"$50.37"`), or the
//!   structured [`Price`](domain::Price) triple.
//! - **Precision-preserving** — mixed-scale operands are normalized to
//!   their finest common scale before arithmetic; nothing is silently
//!   truncated.
//! - **Deterministic** — every operation, including the `Random`
//!   allocation policy, returns bit-identical outputs for identical
//!   inputs.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! moneta = "0.1"
//! ```
//!
//! ## Parse, add, split
//!
//! ```rust
//! use moneta::domain::{Partition, RemainderPolicy, Rounding};
//! use moneta::ops::{allocate, divide, multiply, sum};
//!
//! // Sum mixed-scale operands: the result lands on the finest scale.
//! let total = sum(["USD 50.00", "USD 0.000_005"]).expect("same currency");
//! assert_eq!(total.to_words(), "USD 50.000_005");
//!
//! // Multiply by a fractional scalar with the default HalfUp rounding.
//! let gross = multiply("USD 100.00", 1.08, Rounding::default()).expect("finite scalar");
//! assert_eq!(gross.to_words(), "USD 108.00");
//!
//! // Divide with divisor-driven output precision.
//! let sliver = divide("USD 0.25", 1_000_000, Rounding::default()).expect("non-zero");
//! assert_eq!(sliver.to_words(), "USD 0.000_000_250");
//!
//! // Allocate without losing a minor unit.
//! let parts = allocate("USD 10.00", &Partition::Equal(3), RemainderPolicy::First)
//!     .expect("valid partition");
//! let words: Vec<String> = parts.iter().map(|p| p.to_words()).collect();
//! assert_eq!(words, ["USD 3.34", "USD 3.33", "USD 3.33"]);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  strings or Price values, any mix
//! └──────┬───────┘
//!        │ IntoPrice
//!        ▼
//! ┌──────────────┐
//! │     ops       │  sum, subtract, multiply, divide, allocate, …
//! └──────┬───────┘
//!        │ classify → lift → normalize
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │  parse/format │ ◄──► │    domain     │  Price, Currency, Scale, …
//! └──────┬───────┘     └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │     math      │  div_round, isqrt, pow10
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Price`](domain::Price), [`Amount`](domain::Amount), [`Currency`](domain::Currency), [`Scale`](domain::Scale), [`Rounding`](domain::Rounding) |
//! | [`ops`]    | The orchestrated public contract: arithmetic, precision, statistics, comparison, sort, casts |
//! | [`parse`]  | Classification guards and the total parser |
//! | [`format`] | Lowering back to the code and symbol forms |
//! | [`math`]   | [`div_round`](math::div_round) rounding kernel, [`isqrt`](math::isqrt) |
//! | [`error`]  | [`MoneyError`](error::MoneyError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and operations |
//!
//! # Concurrency
//!
//! All operations are pure functions over immutable inputs. The currency
//! registry and symbol table are process-lifetime constants; callers may
//! invoke operations concurrently without synchronization.

pub mod domain;
pub mod error;
pub mod format;
pub mod math;
pub mod ops;
pub mod parse;
pub mod prelude;
