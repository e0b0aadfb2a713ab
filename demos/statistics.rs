//! Statistics example: mean, spread, and ordering of a price series.
//!
//! # Run
//!
//! ```bash
//! cargo run --example statistics
//! ```

use moneta::ops::{average, sorted, sorted_desc, stddev, Order};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let closes = [
        "USD 101.50",
        "USD 99.75",
        "USD 100.00",
        "USD 102.25",
        "USD 98.00",
    ];

    println!("=== Daily closes ===\n");
    for close in &closes {
        println!("  {close}");
    }

    // ── 1. Central tendency and spread ──────────────────────────────────
    let mean = average(closes)?;
    let sd = stddev(closes)?;
    println!("\nMean:   {mean}");
    println!("Stddev: {sd} (population)");

    // ── 2. Numeric ordering, not lexicographic ──────────────────────────
    let ascending = sorted(closes, Order::Asc)?;
    println!("\nAscending:");
    for p in &ascending {
        println!("  {p}");
    }

    let descending = sorted_desc(closes)?;
    println!("\nDescending:");
    for p in &descending {
        println!("  {p}");
    }

    Ok(())
}
