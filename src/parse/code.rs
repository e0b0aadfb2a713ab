//! Code-form parsing and the shared amount assembly.

use num_bigint::BigInt;

use super::guards;
use crate::domain::{Amount, Currency, Price, Scale};
use crate::error::{MoneyError, Result};

/// Parses a classified code-form string: split on the space, extract the
/// currency, assemble the amount.
pub(crate) fn parse_code(s: &str) -> Result<Price> {
    let (code, amount_text) = s
        .split_once(' ')
        .ok_or_else(|| MoneyError::invalid_format(s))?;
    let currency = Currency::new(code).map_err(|_| MoneyError::invalid_format(s))?;
    assemble(amount_text, currency, s)
}

/// Assembles an amount string into a price at the inferred scale.
///
/// Scale inference against the currency default `d_c`, with `k` the
/// fractional digit count:
/// - `k ≤ d_c`: pad the fraction to `d_c`, adopt the default scale;
/// - `k > d_c`: adopt the smallest scale covering `k` and pad to its
///   digit count. More than twelve fractional digits fit no scale.
///
/// Separators are stripped after validation; the sign, integer part
/// (zero when empty), and padded fraction concatenate into the big
/// integer amount.
pub(crate) fn assemble(text: &str, currency: Currency, original: &str) -> Result<Price> {
    if !guards::valid_amount_text(text, guards::LENIENT_SEPS) {
        return Err(MoneyError::invalid_format(original));
    }
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (int_text, frac_text) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };
    let int_digits: String = int_text.chars().filter(char::is_ascii_digit).collect();
    let frac_digits: String = frac_text.chars().filter(char::is_ascii_digit).collect();

    let k = frac_digits.len() as u32;
    let default = currency.default_scale();
    let scale = if k <= default.digits() {
        default
    } else {
        Scale::covering(k).ok_or_else(|| MoneyError::invalid_format(original))?
    };

    let width = scale.digits() as usize;
    let padded = format!("{frac_digits:0<width$}");
    let int_part = if int_digits.is_empty() {
        "0"
    } else {
        &int_digits
    };
    let digits = format!("{sign}{int_part}{padded}");
    let amount = digits
        .parse::<BigInt>()
        .map_err(|_| MoneyError::invalid_format(original))?;
    Ok(Price::new(Amount::new(amount), currency, scale))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn parsed(s: &str) -> Price {
        let Ok(p) = parse_code(s) else {
            panic!("should parse: {s}");
        };
        p
    }

    // -- Scale inference: k <= d_c ------------------------------------------

    #[test]
    fn whole_number_pads_to_default() {
        let p = parsed("USD 7");
        assert_eq!(p.amount(), &Amount::from(700i64));
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn one_fraction_digit_pads_to_centi() {
        let p = parsed("USD 12.5");
        assert_eq!(p.amount(), &Amount::from(1_250i64));
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn exact_default_digits() {
        let p = parsed("USD 50.37");
        assert_eq!(p.amount(), &Amount::from(5_037i64));
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn whole_currency_keeps_whole_scale() {
        let p = parsed("JPY 500");
        assert_eq!(p.amount(), &Amount::from(500i64));
        assert_eq!(p.scale(), Scale::Whole);
    }

    #[test]
    fn milli_currency_pads_to_three() {
        let p = parsed("KWD 1.5");
        assert_eq!(p.amount(), &Amount::from(1_500i64));
        assert_eq!(p.scale(), Scale::Milli);
    }

    // -- Scale inference: k > d_c -------------------------------------------

    #[test]
    fn finer_than_default_picks_covering_scale() {
        let p = parsed("USD 50.000_005");
        assert_eq!(p.amount(), &Amount::from(50_000_005i64));
        assert_eq!(p.scale(), Scale::Micro);
    }

    #[test]
    fn three_fraction_digits_pick_milli() {
        let p = parsed("USD 5.555");
        assert_eq!(p.amount(), &Amount::from(5_555i64));
        assert_eq!(p.scale(), Scale::Milli);
    }

    #[test]
    fn four_fraction_digits_pad_into_micro() {
        let p = parsed("USD 0.1234");
        assert_eq!(p.amount(), &Amount::from(123_400i64));
        assert_eq!(p.scale(), Scale::Micro);
    }

    #[test]
    fn whole_currency_with_fraction_escalates() {
        let p = parsed("JPY 5.5");
        assert_eq!(p.amount(), &Amount::from(550i64));
        assert_eq!(p.scale(), Scale::Centi);
    }

    #[test]
    fn twelve_fraction_digits_reach_pico() {
        let p = parsed("USD 0.000_000_000_001");
        assert_eq!(p.amount(), &Amount::from(1i64));
        assert_eq!(p.scale(), Scale::Pico);
    }

    #[test]
    fn thirteen_fraction_digits_are_rejected() {
        let Err(e) = parse_code("USD 0.000_000_000_000_1") else {
            panic!("expected Err");
        };
        assert!(e.is_validation());
    }

    // -- Sign & grouping ----------------------------------------------------

    #[test]
    fn negative_amounts() {
        let p = parsed("USD -50.37");
        assert_eq!(p.amount(), &Amount::from(-5_037i64));
    }

    #[test]
    fn underscore_grouping_is_stripped() {
        let p = parsed("USD 1_000_000.00");
        assert_eq!(p.amount(), &Amount::from(100_000_000i64));
    }

    #[test]
    fn comma_grouping_is_stripped() {
        let p = parsed("USD 1,000,000.00");
        assert_eq!(p.amount(), &Amount::from(100_000_000i64));
    }

    #[test]
    fn zero_keeps_default_scale() {
        let p = parsed("USD 0");
        assert!(p.is_zero());
        assert_eq!(p.scale(), Scale::Centi);
    }

    // -- Rejections ---------------------------------------------------------

    #[test]
    fn missing_amount_rejected() {
        assert!(parse_code("USD").is_err());
    }

    #[test]
    fn rejection_carries_whole_input() {
        let Err(e) = parse_code("USD 5.3.7") else {
            panic!("expected Err");
        };
        assert_eq!(e, MoneyError::invalid_format("USD 5.3.7"));
    }
}
