//! Display formatting helpers for the result table.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Currency display: `€ 1.234,56` - dot thousands grouping, decimal comma,
/// always two decimals. Stays in `Decimal` until the final string so no
/// binary rounding can creep in.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2));
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!("€ {}{},{}", sign, grouped, frac_part)
}

/// Date display: `dd/mm/yyyy`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    #[test]
    fn test_two_decimals_with_comma() {
        assert_eq!(format_currency(dec(1575)), "€ 15,75");
        assert_eq!(format_currency(dec(50)), "€ 0,50");
        assert_eq!(format_currency(Decimal::ZERO), "€ 0,00");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(dec(123_456)), "€ 1.234,56");
        assert_eq!(format_currency(dec(100_000_000)), "€ 1.000.000,00");
        assert_eq!(format_currency(dec(99_999)), "€ 999,99");
    }

    #[test]
    fn test_trailing_zero_padding() {
        assert_eq!(format_currency(Decimal::new(12345, 1)), "€ 1.234,50");
        assert_eq!(format_currency(Decimal::new(7, 0)), "€ 7,00");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(format_currency(Decimal::new(15755, 3)), "€ 15,76");
    }

    #[test]
    fn test_date_format() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(format_date(date), "07/03/2026");
    }
}
