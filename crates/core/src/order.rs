//! Order payload sent to the order service.
//!
//! An [`Order`] is built from a cart snapshot at checkout time and is never
//! stored locally. Once submitted, the order service owns it.

use serde::{Deserialize, Serialize};

use crate::cart::{CartState, LineItem};
use crate::types::{CustomerContact, OrderId, Price};

/// Errors that can occur when building an [`Order`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,
}

/// A finalized purchase.
///
/// Wire shape: `{customer:{name,phone,address}, items:[LineItem], notes,
/// subtotal, delivery_fee, total}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub customer: CustomerContact,
    pub items: Vec<LineItem>,
    pub notes: String,
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

impl Order {
    /// Snapshot the cart into an order for `customer`.
    ///
    /// Totals are computed from the cart with the delivery fee rule applied.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] if the cart has no items.
    pub fn from_cart(
        cart: &CartState,
        customer: CustomerContact,
        notes: impl Into<String>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let totals = cart.totals();
        Ok(Self {
            customer,
            items: cart.items().to_vec(),
            notes: notes.into(),
            subtotal: totals.subtotal,
            delivery_fee: totals.delivery_fee,
            total: totals.total,
        })
    }
}

/// Successful response from the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub id: OrderId,
}
