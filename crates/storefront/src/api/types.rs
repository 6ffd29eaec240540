//! Catalog types returned by the pizza backend.

use blaze_pizza_core::{LineItem, PizzaId, Price, Size, pricing};
use serde::{Deserialize, Serialize};

/// A pizza as listed on the menu and featured sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaSummary {
    pub id: PizzaId,
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Small-size price; other sizes are derived from it.
    pub base_price: Price,
}

/// A pizza with everything the product page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaDetail {
    pub id: PizzaId,
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub base_price: Price,
    #[serde(default)]
    pub description: String,
    /// Size names as sent by the backend.
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl PizzaDetail {
    /// Sizes this pizza can be ordered in.
    ///
    /// Unknown names from the backend are skipped. When the backend lists no
    /// sizes at all, every size is offered.
    #[must_use]
    pub fn available_sizes(&self) -> Vec<Size> {
        if self.sizes.is_empty() {
            return Size::ALL.to_vec();
        }
        let mut sizes: Vec<Size> = self
            .sizes
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        sizes.sort_unstable();
        sizes.dedup();
        sizes
    }

    /// Whether `size` is on offer for this pizza.
    #[must_use]
    pub fn offers(&self, size: Size) -> bool {
        self.available_sizes().contains(&size)
    }

    /// Client-side unit price for `size`.
    #[must_use]
    pub fn price_for(&self, size: Size) -> Price {
        pricing::unit_price(self.base_price, size)
    }

    /// Build a cart line for `quantity` of this pizza in `size`.
    #[must_use]
    pub fn line_item(&self, size: Size, quantity: u32) -> LineItem {
        LineItem {
            pizza_id: self.id.clone(),
            name: self.name.clone(),
            size,
            unit_price: self.price_for(size),
            quantity,
            image: self.image.clone(),
        }
    }
}
