//! Browsing commands: home page, menu, and product detail.
//!
//! These never fail on backend trouble. A catalog that cannot be fetched
//! renders as its empty state.

use blaze_pizza_core::{PizzaId, Size};
use blaze_pizza_storefront::AppState;

use crate::error::add_breadcrumb;
use crate::views::{HomeView, MenuView, ProductView};

/// Landing page with featured pizzas.
pub async fn home(state: &AppState) -> String {
    let featured = state.api().featured_or_empty().await;
    HomeView {
        featured: &featured,
    }
    .to_string()
}

/// Full menu.
pub async fn menu(state: &AppState) -> String {
    let pizzas = state.api().menu_or_empty().await;
    MenuView { pizzas: &pizzas }.to_string()
}

/// One pizza with its per-size prices.
pub async fn product(state: &AppState, id: &PizzaId, selected: Size) -> String {
    add_breadcrumb("catalog", &format!("Viewed pizza {id}"));
    let pizza = state.api().detail_or_none(id).await;
    ProductView {
        pizza: pizza.as_ref(),
        selected,
    }
    .to_string()
}
