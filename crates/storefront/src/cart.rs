//! Cart model: the cart state plus its persistence contract.
//!
//! [`Cart`] is the only writer of cart state. It loads the snapshot once
//! when opened and saves after every mutation. Storage failures never reach
//! the caller: they are logged, and the cart carries on in memory for the
//! rest of the session.

use blaze_pizza_core::{CartState, LineItem, PizzaId, Price, Size, Totals};
use tracing::{debug, warn};

use crate::store::CartStore;

/// A cart bound to a store.
#[derive(Debug)]
pub struct Cart<S> {
    state: CartState,
    store: S,
    degraded: bool,
}

impl<S: CartStore> Cart<S> {
    /// Open the cart, loading the stored snapshot.
    ///
    /// An unreadable or malformed snapshot is logged and replaced by an
    /// empty cart.
    pub fn open(store: S) -> Self {
        let (state, degraded) = match store.load() {
            Ok(state) => {
                debug!(lines = state.len(), "Loaded cart snapshot");
                (state, false)
            }
            Err(e) => {
                warn!(error = %e, "Could not load cart snapshot, starting with an empty cart");
                (CartState::new(), true)
            }
        };

        Self {
            state,
            store,
            degraded,
        }
    }

    /// Add a line, merging with an existing `(pizza_id, size)` entry.
    pub fn add(&mut self, item: LineItem) {
        debug!(pizza_id = %item.pizza_id, size = %item.size, quantity = item.quantity, "Adding to cart");
        self.state.add(item);
        self.persist();
    }

    /// Remove the `(pizza_id, size)` line. Missing lines are ignored.
    ///
    /// Returns `true` if a line was removed.
    pub fn remove(&mut self, pizza_id: &PizzaId, size: Size) -> bool {
        let removed = self.state.remove(pizza_id, size);
        debug!(%pizza_id, %size, removed, "Removing from cart");
        self.persist();
        removed
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!("Clearing cart");
        self.state.clear();
        self.persist();
    }

    /// Σ `unit_price × quantity`, recomputed on every call.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.state.subtotal()
    }

    /// Subtotal, delivery fee, and total.
    #[must_use]
    pub fn totals(&self) -> Totals {
        self.state.totals()
    }

    /// Total number of pizzas, for the navbar badge.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.state.item_count()
    }

    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.state.items()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Read-only view of the whole state.
    #[must_use]
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    /// Whether a load or save has failed during this session.
    #[must_use]
    pub const fn persistence_degraded(&self) -> bool {
        self.degraded
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state) {
            warn!(error = %e, "Could not save cart, changes are kept in memory only");
            self.degraded = true;
        }
    }
}
