//! Money formatting helpers.
//!
//! Prices are stored as `rust_decimal::Decimal` in the currency's standard
//! unit (dollars, not cents). The storefront sells in a single currency, so
//! formatting is a plain helper rather than a full `Price`/`Currency` pair.

use rust_decimal::Decimal;

/// Format a decimal amount as a USD price string, e.g. `$19.99`.
///
/// Always renders two fractional digits.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_format_whole_amount() {
        assert_eq!(format_usd(dec!(10)), "$10.00");
    }

    #[test]
    fn test_format_fractional_amount() {
        assert_eq!(format_usd(dec!(19.99)), "$19.99");
        assert_eq!(format_usd(dec!(3.5)), "$3.50");
    }

    #[test]
    fn test_format_rounds_to_cents() {
        assert_eq!(format_usd(dec!(1.005)), "$1.00");
        assert_eq!(format_usd(dec!(1.015)), "$1.02");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }
}
