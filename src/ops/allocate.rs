//! Loss-free allocation of an amount into a partition.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, ToPrimitive, Zero};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::{Amount, IntoPrice, Partition, Price, RemainderPolicy};
use crate::error::Result;

/// Splits a price into parts that sum bit-exactly to the input.
///
/// Base shares come from truncating integer division (equal parts, or
/// proportional to the ratio weights); the leftover minor units are then
/// distributed one by one according to the remainder policy. Every part
/// keeps the input's currency and scale.
///
/// # Errors
///
/// [`MoneyError::InvalidPartition`](crate::error::MoneyError::InvalidPartition)
/// for a zero part count, an empty ratio list, or all-zero ratios; parse
/// failures for string inputs.
///
/// # Examples
///
/// ```
/// use moneta::domain::{Partition, RemainderPolicy};
/// use moneta::ops::allocate;
///
/// let parts = allocate("USD 10.00", &Partition::Equal(3), RemainderPolicy::First)
///     .expect("valid partition");
/// let words: Vec<String> = parts.iter().map(|p| p.to_words()).collect();
/// assert_eq!(words, ["USD 3.34", "USD 3.33", "USD 3.33"]);
/// ```
pub fn allocate(
    of: impl IntoPrice,
    into: &Partition,
    remainder: RemainderPolicy,
) -> Result<Vec<Price>> {
    let p = of.into_price()?;
    into.validate()?;

    let weights: Vec<u64> = match into {
        Partition::Equal(n) => vec![1; *n],
        Partition::Ratios(rs) => rs.clone(),
    };
    let total: BigInt = weights.iter().map(|w| BigInt::from(*w)).sum();
    let amount = p.amount().get();

    let mut shares = Vec::with_capacity(weights.len());
    let mut fractions = Vec::with_capacity(weights.len());
    let mut allocated = BigInt::zero();
    for weight in &weights {
        let scaled = amount * BigInt::from(*weight);
        let base = &scaled / &total;
        let fraction = (&scaled - &base * &total).magnitude().clone();
        allocated += &base;
        shares.push(base);
        fractions.push(fraction);
    }

    let leftover = amount - allocated;
    let count = leftover
        .magnitude()
        .to_usize()
        .unwrap_or(shares.len())
        .min(shares.len());
    let unit = if leftover.is_negative() {
        BigInt::from(-1)
    } else {
        BigInt::from(1)
    };
    for &index in distribution_order(remainder, &fractions, &p).iter().take(count) {
        shares[index] += &unit;
    }

    Ok(shares
        .into_iter()
        .map(|s| p.with_amount(Amount::new(s)))
        .collect())
}

/// Index order in which parts absorb leftover units.
fn distribution_order(
    policy: RemainderPolicy,
    fractions: &[BigUint],
    price: &Price,
) -> Vec<usize> {
    let k = fractions.len();
    match policy {
        RemainderPolicy::First => (0..k).collect(),
        RemainderPolicy::Last => (0..k).rev().collect(),
        RemainderPolicy::Largest => {
            let mut order: Vec<usize> = (0..k).collect();
            // Stable sort: equal fractions keep First order.
            order.sort_by(|&a, &b| fractions[b].cmp(&fractions[a]));
            order
        }
        RemainderPolicy::Random => {
            let seed = price
                .amount()
                .abs()
                .get()
                .magnitude()
                .iter_u64_digits()
                .next()
                .unwrap_or(0);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut order: Vec<usize> = (0..k).collect();
            order.shuffle(&mut rng);
            order
        }
    }
}
