//! Cart commands: add, remove, show, clear.

use blaze_pizza_core::{LineItem, PizzaId, Size};
use blaze_pizza_storefront::{AppState, Cart, CartStore, PizzaDetail};

use crate::error::{CliError, Result, add_breadcrumb};
use crate::views::{AddedView, CartView};

/// Fetch a pizza and add `quantity` of it in `size` to the cart.
///
/// # Errors
///
/// Returns [`CliError::NotFound`] if the backend has no such pizza,
/// [`CliError::Api`] if it could not be asked, and [`CliError::BadRequest`]
/// if the pizza is not offered in `size`.
pub async fn add<S: CartStore>(
    state: &AppState,
    cart: &mut Cart<S>,
    id: &PizzaId,
    size: Size,
    quantity: u32,
) -> Result<String> {
    let detail = state
        .api()
        .get_by_id(id)
        .await?
        .ok_or_else(|| CliError::NotFound(format!("pizza {id}")))?;

    let item = line_for(&detail, size, quantity)?;
    add_breadcrumb("cart", &format!("Added {quantity} x {} ({size})", detail.name));
    cart.add(item.clone());

    Ok(AddedView {
        item: &item,
        cart_count: cart.item_count(),
    }
    .to_string())
}

/// Remove the `(id, size)` line. Removing a line that is not there leaves
/// the cart as it was.
#[must_use]
pub fn remove<S: CartStore>(cart: &mut Cart<S>, id: &PizzaId, size: Size) -> String {
    if !cart.remove(id, size) {
        return format!("Nothing to remove: pizza {id} ({size}) is not in your cart.\n{}", show(cart));
    }
    add_breadcrumb("cart", &format!("Removed pizza {id} ({size})"));
    show(cart)
}

/// Render the cart page.
#[must_use]
pub fn show<S: CartStore>(cart: &Cart<S>) -> String {
    CartView::from(cart.state()).to_string()
}

/// Empty the cart.
#[must_use]
pub fn clear<S: CartStore>(cart: &mut Cart<S>) -> String {
    cart.clear();
    add_breadcrumb("cart", "Cleared cart");
    show(cart)
}

/// Cart line for a product page selection.
fn line_for(detail: &PizzaDetail, size: Size, quantity: u32) -> Result<LineItem> {
    if !detail.offers(size) {
        let offered: Vec<&str> = detail.available_sizes().iter().map(|s| s.as_str()).collect();
        return Err(CliError::BadRequest(format!(
            "{} is not offered in {size}; choose one of: {}",
            detail.name,
            offered.join(", ")
        )));
    }
    Ok(detail.line_item(size, quantity))
}
