//! Pricing and delivery fee rules.
//!
//! Both rules are evaluated client-side. Unit prices are fixed at
//! add-to-cart time and are not re-checked against the server; the order
//! payload carries them as computed here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{Price, Size};

/// Orders with a subtotal strictly above this ship free.
pub const FREE_DELIVERY_THRESHOLD: Price = Price::new(Decimal::from_parts(20, 0, 0, false, 0));

/// Flat delivery fee below the threshold ($3.50).
pub const DELIVERY_FEE: Price = Price::new(Decimal::from_parts(350, 0, 0, false, 2));

/// Unit price for a pizza in a given size: `base_price × size multiplier`,
/// rounded to whole cents.
///
/// When the base price is not a whole number of cents (or the multiplier
/// leaves a fraction of a cent), the order payload carries this rounded
/// figure rather than the raw product.
///
/// ```
/// use blaze_pizza_core::{pricing, Price, Size};
/// use rust_decimal::Decimal;
///
/// let base = Price::new(Decimal::new(1000, 2));
/// assert_eq!(pricing::unit_price(base, Size::Medium).to_string(), "$12.50");
/// ```
#[must_use]
pub fn unit_price(base_price: Price, size: Size) -> Price {
    Price::new(base_price.amount() * size.multiplier()).round_to_cents()
}

/// Delivery fee for a subtotal: free strictly above $20, otherwise $3.50.
#[must_use]
pub fn delivery_fee(subtotal: Price) -> Price {
    if subtotal > FREE_DELIVERY_THRESHOLD {
        Price::ZERO
    } else {
        DELIVERY_FEE
    }
}

/// The money summary shown on the cart and checkout pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

impl Totals {
    /// Apply the delivery fee rule to a subtotal.
    #[must_use]
    pub fn for_subtotal(subtotal: Price) -> Self {
        let delivery_fee = delivery_fee(subtotal);
        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }

    /// Whether delivery is free at this subtotal.
    #[must_use]
    pub fn free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_unit_price_per_size() {
        let base = Price::new(dec!(10.00));
        assert_eq!(unit_price(base, Size::Small), Price::new(dec!(10.00)));
        assert_eq!(unit_price(base, Size::Medium), Price::new(dec!(12.50)));
        assert_eq!(unit_price(base, Size::Large), Price::new(dec!(15.00)));
    }

    #[test]
    fn test_unit_price_rounds_to_cents() {
        // 9.99 × 1.25 = 12.4875
        assert_eq!(
            unit_price(Price::new(dec!(9.99)), Size::Medium),
            Price::new(dec!(12.49))
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(FREE_DELIVERY_THRESHOLD, Price::new(dec!(20)));
        assert_eq!(DELIVERY_FEE, Price::new(dec!(3.50)));
    }

    #[test]
    fn test_fee_at_threshold_is_charged() {
        let totals = Totals::for_subtotal(Price::new(dec!(20.00)));
        assert_eq!(totals.delivery_fee, Price::new(dec!(3.5)));
        assert_eq!(totals.total, Price::new(dec!(23.50)));
        assert!(!totals.free_delivery());
    }

    #[test]
    fn test_fee_above_threshold_is_free() {
        let totals = Totals::for_subtotal(Price::new(dec!(20.01)));
        assert_eq!(totals.delivery_fee, Price::ZERO);
        assert_eq!(totals.total, Price::new(dec!(20.01)));
        assert!(totals.free_delivery());
    }

    #[test]
    fn test_empty_cart_still_charges_fee() {
        let totals = Totals::for_subtotal(Price::ZERO);
        assert_eq!(totals.total, DELIVERY_FEE);
    }
}
