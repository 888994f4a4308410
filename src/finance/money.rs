//! Rounding at the engine boundary.

use rust_decimal::{Decimal, RoundingStrategy};

/// Round an amount to `scale` decimal places, halves away from zero.
///
/// Apply this only to amounts leaving the engine (display, persistence,
/// payment). Pipeline stages never round.
#[must_use]
pub fn round_currency(amount: Decimal, scale: u32) -> Decimal {
    amount.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_currency(dec!(0.125), 2), dec!(0.13));
        assert_eq!(round_currency(dec!(0.124), 2), dec!(0.12));
        assert_eq!(round_currency(dec!(33.333333), 2), dec!(33.33));
        assert_eq!(round_currency(dec!(1000), 2), dec!(1000.00));
    }

    #[test]
    fn test_scale_is_applied() {
        assert_eq!(round_currency(dec!(1.23456), 4).scale(), 4);
        assert_eq!(round_currency(dec!(1.5), 0), dec!(2));
    }
}
