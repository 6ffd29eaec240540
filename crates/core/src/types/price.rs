//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are exact decimals in US dollars. They travel as plain JSON
//! numbers, which is what the pizza backend and the persisted cart snapshot
//! both use.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Round to whole cents, midpoint away from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Returns `true` if the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    /// Formats as `$12.50`, rounding to cents the same way pricing does.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.round_to_cents().0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self::Output {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_display_pads_to_cents() {
        assert_eq!(Price::new(dec!(12.5)).to_string(), "$12.50");
        assert_eq!(Price::new(dec!(3)).to_string(), "$3.00");
    }

    #[test]
    fn test_display_rounds_like_pricing() {
        let price = Price::new(dec!(12.4875));
        assert_eq!(price.to_string(), "$12.49");
        assert_eq!(price.to_string(), price.round_to_cents().to_string());
        assert_eq!(Price::new(dec!(0.125)).to_string(), "$0.13");
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(
            Price::new(dec!(12.4875)).round_to_cents(),
            Price::new(dec!(12.49))
        );
        assert_eq!(
            Price::new(dec!(0.125)).round_to_cents(),
            Price::new(dec!(0.13))
        );
    }

    #[test]
    fn test_mul_and_sum() {
        let total: Price = [Price::new(dec!(12.50)) * 3, Price::new(dec!(1.25))]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(dec!(38.75)));
    }

    #[test]
    fn test_serializes_as_json_number() {
        let json = serde_json::to_string(&Price::new(dec!(12.50))).unwrap();
        assert_eq!(json, "12.5");

        let parsed: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(parsed, Price::new(dec!(9.99)));
    }
}
