//! Property-based tests using `proptest` for the arithmetic invariants.
//!
//! Covers the universal properties of the core:
//!
//! 1. **Round-trip** — `parse(format(p))` returns `p`.
//! 2. **Normalization idempotence** — re-normalizing changes nothing.
//! 3. **Sum conservation** — allocation parts sum back to the input.
//! 4. **Associativity of sum** — grouping does not matter.
//! 5. **Additive inverse** — `subtract(a, a)` is zero at `a`'s scale.
//! 6. **Scalar distributivity** — exact for integer scalars.
//! 7. **Comparison trichotomy** — exactly one of `=`, `>`, `<` holds.
//! 8. **Sort stability & order** — sorted output is ordered and a
//!    permutation of the input.
//! 9. **Rounding-mode laws** — every mode lands within the divisor, half
//!    modes within half of it, directed modes on the right side.

use proptest::prelude::*;

use crate::domain::{
    Amount, Currency, Partition, Price, RemainderPolicy, Rounding, Scale,
};
use crate::math::div_round;
use crate::ops;
use crate::parse;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn usd() -> Currency {
    let Ok(c) = Currency::new("USD") else {
        panic!("valid code");
    };
    c
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Signed minor-unit amounts across several orders of magnitude.
fn amount_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000_000i64..=1_000_000_000_000i64
}

fn scale_strategy() -> impl Strategy<Value = Scale> {
    prop::sample::select(Scale::ALL.to_vec())
}

/// Scales at least as fine as the USD default, where the code form
/// round-trips structurally (coarser scales re-parse at the default).
fn centi_or_finer_strategy() -> impl Strategy<Value = Scale> {
    prop::sample::select(vec![
        Scale::Centi,
        Scale::Milli,
        Scale::Micro,
        Scale::Nano,
        Scale::Pico,
    ])
}

fn rounding_strategy() -> impl Strategy<Value = Rounding> {
    prop::sample::select(Rounding::ALL.to_vec())
}

fn policy_strategy() -> impl Strategy<Value = RemainderPolicy> {
    prop::sample::select(vec![
        RemainderPolicy::First,
        RemainderPolicy::Last,
        RemainderPolicy::Largest,
        RemainderPolicy::Random,
    ])
}

fn price_strategy() -> impl Strategy<Value = Price> {
    (amount_strategy(), scale_strategy())
        .prop_map(|(amount, scale)| Price::new(Amount::from(amount), usd(), scale))
}

fn parseable_price_strategy() -> impl Strategy<Value = Price> {
    (amount_strategy(), centi_or_finer_strategy())
        .prop_map(|(amount, scale)| Price::new(Amount::from(amount), usd(), scale))
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn words_round_trip_structurally(p in parseable_price_strategy()) {
        let words = p.to_words();
        prop_assert_eq!(parse::parse(&words), Ok(p));
    }

    #[test]
    fn words_round_trip_numerically_at_any_scale(p in price_strategy()) {
        let words = p.to_words();
        let Ok(back) = parse::parse(&words) else {
            return Err(TestCaseError::fail(format!("unparsable: {words}")));
        };
        prop_assert_eq!(back.numerically_eq(&p), Ok(true));
    }

    #[test]
    fn formatted_words_pass_the_strict_guard(p in price_strategy()) {
        prop_assert!(parse::is_code_form(&p.to_words()));
    }
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn normalization_is_idempotent(ps in prop::collection::vec(price_strategy(), 1..6)) {
        let Ok(once) = ops::normalize(ps) else {
            return Err(TestCaseError::fail("same-currency normalize failed"));
        };
        prop_assert_eq!(ops::normalize(once.clone()), Ok(once));
    }

    #[test]
    fn normalization_preserves_value(p in price_strategy(), q in price_strategy()) {
        let Ok(out) = ops::normalize([p.clone(), q.clone()]) else {
            return Err(TestCaseError::fail("same-currency normalize failed"));
        };
        prop_assert_eq!(out[0].numerically_eq(&p), Ok(true));
        prop_assert_eq!(out[1].numerically_eq(&q), Ok(true));
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn sum_is_associative(a in price_strategy(), b in price_strategy(), c in price_strategy()) {
        let Ok(bc) = ops::sum([b.clone(), c.clone()]) else {
            return Err(TestCaseError::fail("sum failed"));
        };
        let Ok(ab) = ops::sum([a.clone(), b]) else {
            return Err(TestCaseError::fail("sum failed"));
        };
        prop_assert_eq!(ops::sum([a, bc]), ops::sum([ab, c]));
    }

    #[test]
    fn subtract_self_is_zero_at_own_scale(p in price_strategy()) {
        let Ok(zero) = ops::subtract(p.clone(), p.clone()) else {
            return Err(TestCaseError::fail("subtract failed"));
        };
        prop_assert!(zero.is_zero());
        prop_assert_eq!(zero.scale(), p.scale());
    }

    #[test]
    fn integer_scalars_distribute_over_sum(
        a in amount_strategy(),
        b in amount_strategy(),
        k in -50i64..=50i64,
    ) {
        let pa = Price::new(Amount::from(a), usd(), Scale::Centi);
        let pb = Price::new(Amount::from(b), usd(), Scale::Centi);
        let Ok(total) = ops::sum([pa.clone(), pb.clone()]) else {
            return Err(TestCaseError::fail("sum failed"));
        };
        #[allow(clippy::cast_precision_loss)]
        let scalar = k as f64;
        let lhs = ops::multiply(total, scalar, Rounding::HalfUp);
        let Ok(ma) = ops::multiply(pa, scalar, Rounding::HalfUp) else {
            return Err(TestCaseError::fail("multiply failed"));
        };
        let Ok(mb) = ops::multiply(pb, scalar, Rounding::HalfUp) else {
            return Err(TestCaseError::fail("multiply failed"));
        };
        prop_assert_eq!(lhs, ops::sum([ma, mb]));
    }
}

// ---------------------------------------------------------------------------
// Allocation conservation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn equal_allocation_conserves_the_sum(
        amount in amount_strategy(),
        n in 1usize..=9,
        policy in policy_strategy(),
        scale in scale_strategy(),
    ) {
        let p = Price::new(Amount::from(amount), usd(), scale);
        let Ok(parts) = ops::allocate(p.clone(), &Partition::Equal(n), policy) else {
            return Err(TestCaseError::fail("allocate failed"));
        };
        prop_assert_eq!(parts.len(), n);
        prop_assert_eq!(ops::sum(parts), Ok(p));
    }

    #[test]
    fn ratio_allocation_conserves_the_sum(
        amount in amount_strategy(),
        ratios in prop::collection::vec(0u64..=20, 1..6),
        policy in policy_strategy(),
    ) {
        prop_assume!(ratios.iter().any(|r| *r > 0));
        let p = Price::new(Amount::from(amount), usd(), Scale::Centi);
        let Ok(parts) = ops::allocate(p.clone(), &Partition::Ratios(ratios), policy) else {
            return Err(TestCaseError::fail("allocate failed"));
        };
        prop_assert_eq!(ops::sum(parts), Ok(p));
    }
}

// ---------------------------------------------------------------------------
// Comparison & sort
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn trichotomy(a in price_strategy(), b in price_strategy()) {
        let (Ok(eq), Ok(gt), Ok(lt)) = (
            ops::equal(a.clone(), b.clone()),
            ops::greater(a.clone(), b.clone()),
            ops::lesser(a, b),
        ) else {
            return Err(TestCaseError::fail("same-currency comparison failed"));
        };
        prop_assert_eq!(u8::from(eq) + u8::from(gt) + u8::from(lt), 1);
    }

    #[test]
    fn sorted_output_is_ordered(ps in prop::collection::vec(price_strategy(), 0..8)) {
        let Ok(out) = ops::sorted(ps.clone(), ops::Order::Asc) else {
            return Err(TestCaseError::fail("same-currency sort failed"));
        };
        prop_assert_eq!(out.len(), ps.len());
        for pair in out.windows(2) {
            prop_assert_eq!(ops::greater(pair[0].clone(), pair[1].clone()), Ok(false));
        }
    }

    #[test]
    fn sorted_is_a_permutation(ps in prop::collection::vec(price_strategy(), 0..8)) {
        let Ok(out) = ops::sorted(ps.clone(), ops::Order::Asc) else {
            return Err(TestCaseError::fail("same-currency sort failed"));
        };
        let mut input_words: Vec<String> = ps.iter().map(Price::to_words).collect();
        let mut output_words: Vec<String> = out.iter().map(Price::to_words).collect();
        input_words.sort();
        output_words.sort();
        prop_assert_eq!(input_words, output_words);
    }
}

// ---------------------------------------------------------------------------
// Rounding-mode laws
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn quotient_lands_within_one_divisor(
        d in -1_000_000i64..=1_000_000,
        v in 1i64..=10_000,
        mode in rounding_strategy(),
    ) {
        use num_bigint::BigInt;
        let Ok(q) = div_round(&BigInt::from(d), &BigInt::from(v), mode) else {
            return Err(TestCaseError::fail("positive divisor"));
        };
        let residue = BigInt::from(d) - &q * BigInt::from(v);
        prop_assert!(residue.magnitude() < BigInt::from(v).magnitude());
    }

    #[test]
    fn half_modes_land_within_half_a_divisor(
        d in -1_000_000i64..=1_000_000,
        v in 1i64..=10_000,
    ) {
        use num_bigint::BigInt;
        for mode in [Rounding::HalfUp, Rounding::HalfDown, Rounding::HalfEven] {
            let Ok(q) = div_round(&BigInt::from(d), &BigInt::from(v), mode) else {
                return Err(TestCaseError::fail("positive divisor"));
            };
            let residue = BigInt::from(d) - &q * BigInt::from(v);
            prop_assert!(
                residue.magnitude() * 2u32 <= *BigInt::from(v).magnitude(),
                "{mode:?}: residue {residue} for {d}/{v}"
            );
        }
    }

    #[test]
    fn directed_modes_bracket_the_exact_quotient(
        d in -1_000_000i64..=1_000_000,
        v in 1i64..=10_000,
    ) {
        use num_bigint::BigInt;
        let (big_d, big_v) = (BigInt::from(d), BigInt::from(v));
        let Ok(floor) = div_round(&big_d, &big_v, Rounding::Floor) else {
            return Err(TestCaseError::fail("positive divisor"));
        };
        let Ok(ceil) = div_round(&big_d, &big_v, Rounding::Ceil) else {
            return Err(TestCaseError::fail("positive divisor"));
        };
        // floor·v ≤ d ≤ ceil·v, and the two differ by at most one.
        prop_assert!(&floor * &big_v <= big_d);
        prop_assert!(&ceil * &big_v >= big_d);
        prop_assert!(&ceil - &floor <= BigInt::from(1));
    }
}
