//! Checkout command.

use blaze_pizza_core::CustomerContact;
use blaze_pizza_storefront::{AppState, Cart, CartStore, place_order};
use tracing::info;

use crate::error::{Result, add_breadcrumb};
use crate::views::OrderPlacedView;

/// Contact details and notes as typed on the command line.
#[derive(Debug, Clone)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
}

/// Place the cart as an order.
///
/// # Errors
///
/// Returns [`crate::error::CliError::Contact`] for blank contact fields and
/// [`crate::error::CliError::Checkout`] when the cart is empty or the backend
/// refuses the order. The cart is kept in both cases.
pub async fn checkout<S: CartStore>(
    state: &AppState,
    cart: &mut Cart<S>,
    form: &CheckoutForm,
) -> Result<String> {
    let customer = CustomerContact::new(&form.name, &form.phone, &form.address)?;
    let totals = cart.totals();

    add_breadcrumb("checkout", "Submitting order");
    let order_id = place_order(state.api(), cart, customer, &form.notes).await?;
    info!(order_id = %order_id, "Order placed from CLI");

    Ok(OrderPlacedView { order_id, totals }.to_string())
}
