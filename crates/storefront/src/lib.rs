//! Blaze Pizza Storefront library.
//!
//! Everything a front end needs to run the storefront: the cart model and
//! its local persistence, the pizza backend client, and the checkout flow.
//!
//! # Modules
//!
//! - [`cart`] - Cart model that persists after every mutation
//! - [`store`] - Cart snapshot storage (file and in-memory)
//! - [`api`] - Catalog and order endpoints of the pizza backend
//! - [`checkout`] - Place an order and clear the cart on success
//! - [`config`] - Environment-driven configuration
//! - [`state`] - Shared configuration and client handle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod state;
pub mod store;

pub use api::{ApiError, PizzaApiClient, PizzaDetail, PizzaSummary};
pub use cart::Cart;
pub use checkout::{CheckoutError, place_order};
pub use config::{ConfigError, StorefrontConfig};
pub use state::AppState;
pub use store::{CartStore, FileCartStore, MemoryCartStore, StoreError};
