//! Display formatting for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Render an amount with two decimals and `,` thousands grouping.
///
/// Midpoints round away from zero (`2.345` → `2.35`).
pub(crate) fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let text = rounded.abs().to_string();

    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(format_amount(dec!(100)), "100.00");
        assert_eq!(format_amount(dec!(0)), "0.00");
        assert_eq!(format_amount(dec!(9.5)), "9.50");
    }

    #[test]
    fn rounds_midpoints_away_from_zero() {
        assert_eq!(format_amount(dec!(2.345)), "2.35");
        assert_eq!(format_amount(dec!(2.344)), "2.34");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(dec!(1234.5)), "1,234.50");
        assert_eq!(format_amount(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(dec!(999)), "999.00");
    }

    #[test]
    fn keeps_sign_of_negative_amounts() {
        assert_eq!(format_amount(dec!(-1500)), "-1,500.00");
    }
}
