//! Parsing and formatting example.
//!
//! Demonstrates the three interchangeable price formats, scale inference,
//! and the code/symbol output forms.
//!
//! # Run
//!
//! ```bash
//! cargo run --example parse_and_format
//! ```

use moneta::domain::{Amount, Currency, Price};
use moneta::ops::{as_human, as_shape, as_words, as_words_with};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Parsing the three formats ===\n");

    // ── 1. Code form: lossless, underscore-grouped ──────────────────────
    let p = as_shape("USD 1_000_000.00")?;
    println!("Code form  'USD 1_000_000.00' → {} minor units at {}", p.amount(), p.scale());

    // ── 2. Symbol form: display-oriented, comma-grouped ─────────────────
    let q = as_shape("$1,000,000.00")?;
    println!("Symbol form '$1,000,000.00'  → {} minor units at {}", q.amount(), q.scale());
    assert_eq!(p, q);

    // ── 3. Structured shape: amount + code + optional scale token ───────
    let r = Price::from_parts(Amount::from(100_000_000i64), "USD", None)?;
    println!("Shape (no scale token)       → stamped {}\n", r.scale());
    assert_eq!(p, r);

    // ── 4. Scale inference preserves finer-than-default input ───────────
    let fine = as_shape("USD 50.000_005")?;
    println!("'USD 50.000_005' infers {}", fine.scale());

    let padded = as_shape("USD 7")?;
    println!("'USD 7' canonicalizes to {}", padded.to_words());

    // ── 5. Lowering back out ────────────────────────────────────────────
    println!("\n=== Formatting ===\n");
    println!("words: {}", as_words("$1,000,000.00")?);
    println!("human: {}", as_human("USD 1_000_000.00")?);
    println!("yen:   {}", as_human("JPY 2_000")?);
    println!("krona: {}", as_human("SEK 100.00")?);

    // ── 6. Symbol disambiguation with an explicit currency ──────────────
    let cad = Currency::new("CAD")?;
    println!("\n'$9.50' as CAD: {}", as_words_with("$9.50", Some(cad))?);

    Ok(())
}
