//! Cart state: line items keyed by pizza and size.
//!
//! [`CartState`] is pure data. It has no knowledge of where it is stored;
//! the storefront crate wraps it in a model that persists after every
//! mutation.
//!
//! # Invariants
//!
//! - At most one [`LineItem`] per `(pizza_id, size)` pair. Adding a pair that
//!   is already present merges quantities.
//! - Insertion order is preserved for display.
//! - The subtotal is never stored; it is recomputed from the items on every
//!   read.

use serde::{Deserialize, Deserializer, Serialize};

use crate::pricing::Totals;
use crate::types::{PizzaId, Price, Size};

/// One pizza, in one size, in some quantity.
///
/// Field names match the backend's order payload and the persisted
/// snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub pizza_id: PizzaId,
    pub name: String,
    pub size: Size,
    pub unit_price: Price,
    pub quantity: u32,
    /// Image URL shown next to the line.
    pub image: String,
}

impl LineItem {
    /// `unit_price × quantity`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price * self.quantity
    }

    /// Whether this line is for the given pizza and size.
    #[must_use]
    pub fn matches(&self, pizza_id: &PizzaId, size: Size) -> bool {
        &self.pizza_id == pizza_id && self.size == size
    }
}

/// The ordered set of line items in a cart.
///
/// Serializes as a bare JSON array of [`LineItem`]. Deserializing merges
/// duplicate pairs, so a hand-edited snapshot cannot break the invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a line, merging with an existing `(pizza_id, size)` entry.
    ///
    /// When merging, the existing entry keeps its name, price and image and
    /// only its quantity grows. Quantities are trusted; no validation is done.
    pub fn add(&mut self, item: LineItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.matches(&item.pizza_id, item.size))
        {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(item.quantity);
            }
            None => self.items.push(item),
        }
    }

    /// Remove the entry for `(pizza_id, size)`, if any.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, pizza_id: &PizzaId, size: Size) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(pizza_id, size));
        self.items.len() != before
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Σ `unit_price × quantity` over the current items.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Subtotal, delivery fee and total for the current items.
    #[must_use]
    pub fn totals(&self) -> Totals {
        Totals::for_subtotal(self.subtotal())
    }

    /// Total number of pizzas across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0_u32, |count, item| count.saturating_add(item.quantity))
    }

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up the entry for `(pizza_id, size)`.
    #[must_use]
    pub fn get(&self, pizza_id: &PizzaId, size: Size) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(pizza_id, size))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl From<Vec<LineItem>> for CartState {
    /// Builds a cart by adding each item in turn, so duplicate pairs in the
    /// input are merged.
    fn from(items: Vec<LineItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add(item);
        }
        cart
    }
}

impl<'de> Deserialize<'de> for CartState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<LineItem>::deserialize(deserializer).map(Self::from)
    }
}
