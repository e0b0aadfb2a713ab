//! Integration tests exercising the full system through the public API:
//! the three-format surface, the arithmetic kernel, allocation, precision
//! changes, comparison and sort, and the documented end-to-end scenarios.

#![allow(clippy::panic)]

use moneta::domain::{
    Amount, Currency, Partition, Price, PriceInput, RemainderPolicy, Rounding, Scale,
};
use moneta::error::MoneyError;
use moneta::ops::{
    allocate, as_human, as_shape, as_words, as_words_with, average, divide, equal, greater,
    lesser, multiply, round_to, set_precision, sorted, sorted_desc, stddev, subtract, sum, Order,
};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn currency(code: &str) -> Currency {
    let Ok(c) = Currency::new(code) else {
        panic!("valid code: {code}");
    };
    c
}

fn words(prices: &[Price]) -> Vec<String> {
    prices.iter().map(Price::to_words).collect()
}

// ---------------------------------------------------------------------------
// Documented scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_sum_of_cents() {
    let Ok(total) = sum(["USD 0.10", "USD 0.20"]) else {
        panic!("expected Ok");
    };
    assert_eq!(total.to_words(), "USD 0.30");
}

#[test]
fn scenario_mixed_scales_normalize_to_micro() {
    let Ok(total) = sum(["USD 50.00", "USD 0.000_005"]) else {
        panic!("expected Ok");
    };
    assert_eq!(total.to_words(), "USD 50.000_005");
    assert_eq!(total.scale(), Scale::Micro);
}

#[test]
fn scenario_divide_auto_scales_to_nano() {
    let Ok(q) = divide("USD 0.25", 1_000_000, Rounding::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(q.to_words(), "USD 0.000_000_250");
}

#[test]
fn scenario_multiply_by_tax_rate() {
    let Ok(p) = multiply("USD 100.00", 1.08, Rounding::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(p.to_words(), "USD 108.00");
}

#[test]
fn scenario_allocate_thirds_and_conserve() {
    let Ok(parts) = allocate("USD 10.00", &Partition::Equal(3), RemainderPolicy::First) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&parts), ["USD 3.34", "USD 3.33", "USD 3.33"]);
    let Ok(total) = sum(parts) else {
        panic!("expected Ok");
    };
    assert_eq!(total.to_words(), "USD 10.00");
}

#[test]
fn scenario_round_half_even_vs_half_down() {
    let Ok(even) = round_to("USD 5.555", Scale::Centi, Rounding::HalfEven) else {
        panic!("expected Ok");
    };
    assert_eq!(even.to_words(), "USD 5.56");

    let Ok(down) = round_to("USD 5.555", Scale::Centi, Rounding::HalfDown) else {
        panic!("expected Ok");
    };
    assert_eq!(down.to_words(), "USD 5.55");
}

#[test]
fn scenario_sort_negates_the_lexicographic_trap() {
    let Ok(out) = sorted(["USD 100.00", "USD 9.00", "USD 50.00"], Order::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&out), ["USD 9.00", "USD 50.00", "USD 100.00"]);
}

#[test]
fn scenario_symbol_form_with_commas() {
    let Ok(p) = as_shape("$1,000,000.00") else {
        panic!("expected Ok");
    };
    assert_eq!(p.amount(), &Amount::from(100_000_000i64));
    assert_eq!(p.currency(), currency("USD"));
    assert_eq!(p.scale(), Scale::Centi);
    assert_eq!(p.to_words(), "USD 1_000_000.00");
}

// ---------------------------------------------------------------------------
// Three-format surface
// ---------------------------------------------------------------------------

#[test]
fn all_three_formats_feed_the_same_operation() {
    let shape = Price::new(Amount::from(1_000i64), currency("USD"), Scale::Centi);
    let Ok(total) = sum([
        PriceInput::from("USD 10.00"),
        PriceInput::from("$10.00"),
        PriceInput::from(shape),
    ]) else {
        panic!("expected Ok");
    };
    assert_eq!(total.to_words(), "USD 30.00");
}

#[test]
fn casts_are_mutually_consistent() {
    let Ok(human) = as_human("USD 1_234.50") else {
        panic!("expected Ok");
    };
    assert_eq!(human, "$1,234.50");
    let Ok(back) = as_words(human.as_str()) else {
        panic!("expected Ok");
    };
    assert_eq!(back, "USD 1_234.50");
}

#[test]
fn words_round_trip_through_parse_and_format() {
    for text in [
        "USD 0.30",
        "USD 50.000_005",
        "USD -1_000_000.00",
        "JPY 500",
        "KWD 1.500",
        "USD 0.000_000_000_001",
    ] {
        let Ok(p) = as_shape(text) else {
            panic!("should parse: {text}");
        };
        assert_eq!(p.to_words(), text, "round trip of {text}");
    }
}

#[test]
fn symbol_override_disambiguates_the_dollar() {
    let Ok(cad) = as_words_with("$9.50", Some(currency("CAD"))) else {
        panic!("expected Ok");
    };
    assert_eq!(cad, "CAD 9.50");

    // The euro glyph is unique: overriding it to USD is a conflict.
    let Err(e) = as_words_with("€9.50", Some(currency("USD"))) else {
        panic!("expected Err");
    };
    assert_eq!(e, MoneyError::currency_mismatch("EUR", "USD"));
}

// ---------------------------------------------------------------------------
// Currency strictness across the surface
// ---------------------------------------------------------------------------

#[test]
fn every_binary_operation_rejects_mixed_currencies() {
    let mismatch = MoneyError::currency_mismatch("USD", "EUR");
    assert_eq!(sum(["USD 1.00", "EUR 1.00"]), Err(mismatch.clone()));
    assert_eq!(subtract("USD 1.00", "EUR 1.00"), Err(mismatch.clone()));
    assert_eq!(equal("USD 1.00", "EUR 1.00"), Err(mismatch.clone()));
    assert_eq!(greater("USD 1.00", "EUR 1.00"), Err(mismatch.clone()));
    assert_eq!(lesser("USD 1.00", "EUR 1.00"), Err(mismatch.clone()));
    assert_eq!(
        sorted(["USD 1.00", "EUR 1.00"], Order::Asc),
        Err(mismatch.clone())
    );
    assert_eq!(average(["USD 1.00", "EUR 1.00"]), Err(mismatch.clone()));
    assert_eq!(stddev(["USD 1.00", "EUR 1.00"]), Err(mismatch));
}

#[test]
fn empty_aggregates_are_rejected() {
    let none: [&str; 0] = [];
    assert_eq!(sum(none), Err(MoneyError::EmptyInput));
    assert_eq!(average(none), Err(MoneyError::EmptyInput));
    assert_eq!(stddev(none), Err(MoneyError::EmptyInput));
}

// ---------------------------------------------------------------------------
// End-to-end flows
// ---------------------------------------------------------------------------

#[test]
fn invoice_flow_subtotal_tax_and_split() {
    // Three line items, 8% tax, split across two cost centers 2:1.
    let Ok(subtotal) = sum(["USD 19.99", "USD 5.01", "USD 25.00"]) else {
        panic!("expected Ok");
    };
    assert_eq!(subtotal.to_words(), "USD 50.00");

    let Ok(with_tax) = multiply(subtotal, 1.08, Rounding::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(with_tax.to_words(), "USD 54.00");

    let Ok(centers) = allocate(
        with_tax.clone(),
        &Partition::Ratios(vec![2, 1]),
        RemainderPolicy::Largest,
    ) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&centers), ["USD 36.00", "USD 18.00"]);

    let Ok(check) = sum(centers) else {
        panic!("expected Ok");
    };
    assert_eq!(equal(check, with_tax), Ok(true));
}

#[test]
fn unit_price_flow_divide_then_widen() {
    // A 250-unit batch priced at USD 19.00: per-unit cost at milli.
    let Ok(per_unit) = divide("USD 19.00", 250, Rounding::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(per_unit.to_words(), "USD 0.076");

    // Re-express at pico for downstream accumulation, losslessly.
    let Ok(fine) = set_precision(per_unit.clone(), Scale::Pico, Rounding::default()) else {
        panic!("expected Ok");
    };
    assert_eq!(equal(fine, per_unit), Ok(true));
}

#[test]
fn statistics_flow_over_a_price_series() {
    let series = ["USD 2.00", "USD 4.00", "USD 4.00", "USD 4.00", "USD 5.00",
        "USD 5.00", "USD 7.00", "USD 9.00"];
    let Ok(mean) = average(series) else {
        panic!("expected Ok");
    };
    assert_eq!(mean.to_words(), "USD 5.00");

    let Ok(sd) = stddev(series) else {
        panic!("expected Ok");
    };
    assert_eq!(sd.to_words(), "USD 2.00");
}

#[test]
fn whole_and_milli_currencies_flow_end_to_end() {
    let Ok(yen) = sum(["JPY 500", "JPY 1,500"]) else {
        panic!("expected Ok");
    };
    assert_eq!(yen.to_words(), "JPY 2_000");
    assert_eq!(yen.scale(), Scale::Whole);

    let Ok(dinar) = sum(["KWD 1.500", "KWD 0.750"]) else {
        panic!("expected Ok");
    };
    assert_eq!(dinar.to_words(), "KWD 2.250");
    assert_eq!(dinar.scale(), Scale::Milli);
}

#[test]
fn sorted_desc_affordance() {
    let Ok(out) = sorted_desc(["USD 9.00", "USD 100.00", "USD 50.00"]) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&out), ["USD 100.00", "USD 50.00", "USD 9.00"]);
}

#[test]
fn allocation_policies_move_the_remainder_differently() {
    let partition = Partition::Equal(3);
    let Ok(first) = allocate("USD 1.00", &partition, RemainderPolicy::First) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&first), ["USD 0.34", "USD 0.33", "USD 0.33"]);

    let Ok(last) = allocate("USD 1.00", &partition, RemainderPolicy::Last) else {
        panic!("expected Ok");
    };
    assert_eq!(words(&last), ["USD 0.33", "USD 0.33", "USD 0.34"]);

    let Ok(random_a) = allocate("USD 1.00", &partition, RemainderPolicy::Random) else {
        panic!("expected Ok");
    };
    let Ok(random_b) = allocate("USD 1.00", &partition, RemainderPolicy::Random) else {
        panic!("expected Ok");
    };
    assert_eq!(random_a, random_b, "random policy is deterministic");
}

#[test]
fn shape_inputs_without_scale_get_the_currency_default() {
    let Ok(p) = Price::from_parts(Amount::from(700i64), "USD", None) else {
        panic!("expected Ok");
    };
    assert_eq!(p.to_words(), "USD 7.00");

    let Err(e) = Price::from_parts(Amount::from(1i64), "USD", Some("femto x10^-15")) else {
        panic!("expected Err");
    };
    assert_eq!(e, MoneyError::invalid_scale("femto x10^-15"));
}
