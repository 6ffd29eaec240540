//! Checkout: turn the cart into an order and place it.
//!
//! On success the cart is cleared and the backend's order ID is returned.
//! On any failure the cart is left exactly as it was so the customer can
//! try again.

use blaze_pizza_core::{CustomerContact, Order, OrderError, OrderId};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::api::{ApiError, PizzaApiClient};
use crate::cart::Cart;
use crate::store::CartStore;

/// Errors that can occur while placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The order could not be built from the cart.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The backend refused the order or could not be reached.
    #[error("Order submission failed: {0}")]
    Submit(#[from] ApiError),
}

impl CheckoutError {
    /// Message suitable for showing to a customer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Order(e) => e.to_string(),
            Self::Submit(e) => e.user_message().to_string(),
        }
    }
}

/// Submit the cart as an order for `customer`.
///
/// # Errors
///
/// Returns [`CheckoutError::Order`] if the cart is empty, or
/// [`CheckoutError::Submit`] if the backend call fails. The cart is unchanged
/// in both cases.
#[instrument(skip_all, fields(lines = cart.items().len()))]
pub async fn place_order<S: CartStore>(
    client: &PizzaApiClient,
    cart: &mut Cart<S>,
    customer: CustomerContact,
    notes: &str,
) -> Result<OrderId, CheckoutError> {
    let order = Order::from_cart(cart.state(), customer, notes)?;

    match client.submit_order(&order).await {
        Ok(confirmation) => {
            cart.clear();
            info!(order_id = %confirmation.id, total = %order.total, "Checkout complete");
            Ok(confirmation.id)
        }
        Err(e) => {
            warn!(error = %e, "Checkout failed, cart kept for retry");
            Err(e.into())
        }
    }
}
