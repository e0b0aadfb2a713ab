//! Allocation example: splitting a bill without losing a minor unit.
//!
//! # Run
//!
//! ```bash
//! cargo run --example split_a_bill
//! ```

use moneta::domain::{Partition, RemainderPolicy, Rounding};
use moneta::ops::{allocate, equal, multiply, sum};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Splitting a dinner bill ===\n");

    // ── 1. Total the line items and add an 8% service charge ────────────
    let subtotal = sum(["USD 42.50", "USD 18.75", "USD 31.25"])?;
    println!("Subtotal:        {subtotal}");

    let total = multiply(subtotal, 1.08, Rounding::default())?;
    println!("With service:    {total}");

    // ── 2. Three ways, remainder to the front of the list ───────────────
    let three_ways = allocate(total.clone(), &Partition::Equal(3), RemainderPolicy::First)?;
    println!("\nEqual thirds (remainder first):");
    for (i, part) in three_ways.iter().enumerate() {
        println!("  diner {}: {part}", i + 1);
    }
    assert_eq!(equal(sum(three_ways)?, total.clone()), Ok(true));

    // ── 3. Weighted 2:1:1, remainder to the largest fraction ────────────
    let weighted = allocate(
        total.clone(),
        &Partition::Ratios(vec![2, 1, 1]),
        RemainderPolicy::Largest,
    )?;
    println!("\nWeighted 2:1:1 (remainder to largest fraction):");
    for (i, part) in weighted.iter().enumerate() {
        println!("  diner {}: {part}", i + 1);
    }

    // ── 4. The parts always sum bit-exactly to the whole ────────────────
    let check = sum(weighted)?;
    assert_eq!(equal(check.clone(), total), Ok(true));
    println!("\nConservation holds: parts sum to {check}");

    Ok(())
}
