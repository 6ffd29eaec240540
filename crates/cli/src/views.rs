//! Plain-text views for the terminal storefront.
//!
//! Each view is a small struct holding exactly what it renders, with a
//! `Display` impl acting as its template. Commands build a view and write it
//! to stdout; nothing here performs I/O.

use std::fmt;

use blaze_pizza_core::{CartState, LineItem, OrderId, Price, Size, Totals};
use blaze_pizza_storefront::{PizzaDetail, PizzaSummary};

const BRAND: &str = "Blaze Pizza";
const RULE: &str = "------------------------------------------------------------";

// =============================================================================
// Page chrome
// =============================================================================

/// Top bar with the cart badge.
#[derive(Debug, Clone, Copy)]
pub struct Navbar {
    pub cart_count: u32,
}

impl fmt::Display for Navbar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BRAND}  |  Home  Menu  About  Contact  |  Cart")?;
        if self.cart_count > 0 {
            write!(f, " ({})", self.cart_count)?;
        }
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }
}

/// Bottom bar.
#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub year: i32,
}

impl Footer {
    /// Footer stamped with the current year.
    #[must_use]
    pub fn now() -> Self {
        use chrono::Datelike;
        Self {
            year: chrono::Utc::now().year(),
        }
    }
}

impl fmt::Display for Footer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "© {} {BRAND} • Fresh, fast, and delicious.", self.year)?;
        writeln!(f, "Privacy  Terms  Support")
    }
}

/// One menu card: name and starting price.
struct PizzaCard<'a>(&'a PizzaSummary);

impl fmt::Display for PizzaCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pizza = self.0;
        write!(
            f,
            "  [{}] {:<28} From {}",
            pizza.id, pizza.name, pizza.base_price
        )
    }
}

// =============================================================================
// Home
// =============================================================================

/// Landing page: hero copy and the featured pizzas.
#[derive(Debug, Clone, Copy)]
pub struct HomeView<'a> {
    pub featured: &'a [PizzaSummary],
}

impl fmt::Display for HomeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Hot. Fresh. Delivered.")?;
        writeln!(f, "Your dream pizza in minutes.")?;
        writeln!(f)?;
        writeln!(
            f,
            "Crafted with premium ingredients, wood-fired to perfection, and brought to your door piping hot."
        )?;
        writeln!(
            f,
            "Free delivery on orders over {}.",
            blaze_pizza_core::pricing::FREE_DELIVERY_THRESHOLD
        )?;
        writeln!(f)?;
        writeln!(f, "Popular Picks")?;
        if self.featured.is_empty() {
            writeln!(f, "  Nothing featured right now. Try `blaze menu`.")?;
        }
        for pizza in self.featured {
            writeln!(f, "{}", PizzaCard(pizza))?;
        }
        Ok(())
    }
}

// =============================================================================
// Menu
// =============================================================================

/// The full menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuView<'a> {
    pub pizzas: &'a [PizzaSummary],
}

impl fmt::Display for MenuView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Menu")?;
        if self.pizzas.is_empty() {
            return writeln!(f, "  The menu is unavailable right now. Please try again shortly.");
        }
        for pizza in self.pizzas {
            writeln!(f, "{}", PizzaCard(pizza))?;
        }
        writeln!(f)?;
        writeln!(f, "See a pizza with `blaze product <id>`.")
    }
}

// =============================================================================
// Product
// =============================================================================

/// Product detail with a price per offered size.
#[derive(Debug, Clone, Copy)]
pub struct ProductView<'a> {
    /// `None` when the pizza is missing or could not be fetched.
    pub pizza: Option<&'a PizzaDetail>,
    pub selected: Size,
}

impl fmt::Display for ProductView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(pizza) = self.pizza else {
            return writeln!(f, "This pizza is not available right now.");
        };

        writeln!(f, "{}", pizza.name)?;
        if !pizza.description.is_empty() {
            writeln!(f, "{}", pizza.description)?;
        }
        writeln!(f)?;
        writeln!(f, "Choose size")?;
        for size in pizza.available_sizes() {
            let marker = if size == self.selected { '*' } else { ' ' };
            writeln!(f, "  {marker} {:<8} {}", size.as_str(), pizza.price_for(size))?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Add to cart: blaze add {} --size {}",
            pizza.id, self.selected
        )
    }
}

/// Confirmation after an add-to-cart.
#[derive(Debug, Clone, Copy)]
pub struct AddedView<'a> {
    pub item: &'a LineItem,
    pub cart_count: u32,
}

impl fmt::Display for AddedView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Added {} x {} ({}) at {} each.",
            self.item.quantity, self.item.name, self.item.size, self.item.unit_price
        )?;
        writeln!(f, "Cart now holds {} pizza(s).", self.cart_count)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Cart line display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemView {
    pub id: String,
    pub title: String,
    pub size: Size,
    pub quantity: u32,
    pub price: Price,
    pub line_price: Price,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.pizza_id.to_string(),
            title: item.name.clone(),
            size: item.size,
            quantity: item.quantity,
            price: item.unit_price,
            line_price: item.line_total(),
        }
    }
}

/// Cart page display data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub totals: Totals,
    pub item_count: u32,
}

impl From<&CartState> for CartView {
    fn from(cart: &CartState) -> Self {
        Self {
            items: cart.items().iter().map(CartItemView::from).collect(),
            totals: cart.totals(),
            item_count: cart.item_count(),
        }
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            writeln!(f, "Your Cart")?;
            writeln!(f, "  Your cart is empty.")?;
            return writeln!(f, "  Browse the menu with `blaze menu`.");
        }

        writeln!(f, "Your Cart ({} pizza(s))", self.item_count)?;

        for item in &self.items {
            let title = format!("{} - {}", item.title, item.size);
            writeln!(
                f,
                "  [{}] {:<32} {} x {:<3} {:>9}",
                item.id,
                title,
                item.price,
                item.quantity,
                item.line_price.to_string()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{}", TotalsView(&self.totals))?;
        writeln!(f)?;
        writeln!(f, "Checkout: blaze checkout --name <name> --phone <phone> --address <address>")
    }
}

/// Subtotal / delivery / total block.
pub struct TotalsView<'a>(pub &'a Totals);

impl fmt::Display for TotalsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = self.0;
        let delivery = if totals.free_delivery() {
            "Free".to_string()
        } else {
            totals.delivery_fee.to_string()
        };
        writeln!(f, "  {:<10} {:>10}", "Subtotal", totals.subtotal.to_string())?;
        writeln!(f, "  {:<10} {:>10}", "Delivery", delivery)?;
        write!(f, "  {:<10} {:>10}", "Total", totals.total.to_string())
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Shown after the backend accepts an order.
#[derive(Debug, Clone)]
pub struct OrderPlacedView {
    pub order_id: OrderId,
    pub totals: Totals,
}

impl fmt::Display for OrderPlacedView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Order placed! Your order number is {}.", self.order_id)?;
        writeln!(f, "{}", TotalsView(&self.totals))?;
        writeln!(f, "Thanks for ordering from {BRAND}.")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use blaze_pizza_core::{PizzaId, pricing};
    use rust_decimal_macros::dec;

    use super::*;

    fn summary(id: u64, name: &str, price: Price) -> PizzaSummary {
        PizzaSummary {
            id: PizzaId::from(id),
            name: name.to_string(),
            image: String::new(),
            base_price: price,
        }
    }

    fn detail() -> PizzaDetail {
        PizzaDetail {
            id: PizzaId::from(1_u64),
            name: "Margherita".to_string(),
            image: String::new(),
            base_price: Price::new(dec!(10)),
            description: "Tomato, mozzarella, basil".to_string(),
            sizes: vec!["Small".to_string(), "Medium".to_string(), "Large".to_string()],
        }
    }

    fn cart_with(quantity: u32) -> CartState {
        let mut cart = CartState::new();
        cart.add(detail().line_item(Size::Medium, quantity));
        cart
    }

    #[test]
    fn test_navbar_hides_zero_badge() {
        assert!(Navbar { cart_count: 0 }.to_string().contains("Cart\n"));
        assert!(Navbar { cart_count: 3 }.to_string().contains("Cart (3)"));
    }

    #[test]
    fn test_footer_year() {
        assert!(Footer { year: 2030 }.to_string().contains("© 2030 Blaze Pizza"));
    }

    #[test]
    fn test_home_lists_featured() {
        let featured = [summary(1, "Margherita", Price::new(dec!(10)))];
        let out = HomeView { featured: &featured }.to_string();
        assert!(out.contains("Popular Picks"));
        assert!(out.contains("Margherita"));
        assert!(out.contains("From $10.00"));
        assert!(out.contains("over $20.00"));
    }

    #[test]
    fn test_menu_empty_state() {
        let out = MenuView { pizzas: &[] }.to_string();
        assert!(out.contains("unavailable"));
    }

    #[test]
    fn test_product_prices_each_size() {
        let pizza = detail();
        let out = ProductView {
            pizza: Some(&pizza),
            selected: Size::Medium,
        }
        .to_string();
        assert!(out.contains("Small    $10.00"));
        assert!(out.contains("* Medium   $12.50"));
        assert!(out.contains("Large    $15.00"));
        assert!(out.contains("blaze add 1 --size Medium"));
    }

    #[test]
    fn test_product_absent_state() {
        let out = ProductView {
            pizza: None,
            selected: Size::Medium,
        }
        .to_string();
        assert!(out.contains("not available"));
    }

    #[test]
    fn test_cart_view_charges_delivery_below_threshold() {
        let view = CartView::from(&cart_with(1));
        assert_eq!(view.totals.delivery_fee, pricing::DELIVERY_FEE);
        let out = view.to_string();
        assert!(out.contains("Margherita - Medium"));
        assert!(out.contains("$3.50"));
        assert!(out.contains("$16.00"));
    }

    #[test]
    fn test_cart_view_header_counts_pizzas() {
        let out = CartView::from(&cart_with(3)).to_string();
        assert!(out.starts_with("Your Cart (3 pizza(s))\n"));
    }

    #[test]
    fn test_cart_view_free_delivery() {
        let out = CartView::from(&cart_with(3)).to_string();
        assert!(out.contains("Free"));
        assert!(out.contains("$37.50"));
    }

    #[test]
    fn test_cart_view_empty() {
        let out = CartView::from(&CartState::new()).to_string();
        assert!(out.contains("Your cart is empty."));
    }

    #[test]
    fn test_order_placed_view() {
        let out = OrderPlacedView {
            order_id: OrderId::new("A17"),
            totals: Totals::for_subtotal(Price::new(dec!(37.50))),
        }
        .to_string();
        assert!(out.contains("order number is A17"));
    }
}
