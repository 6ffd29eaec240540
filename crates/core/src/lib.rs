//! Blaze Pizza Core - Shared domain types.
//!
//! This crate provides the types used across the Blaze Pizza components:
//! - `storefront` - Cart model, local persistence, and backend API clients
//! - `cli` - Terminal storefront (`blaze`)
//!
//! # Architecture
//!
//! The core crate contains only types and pure rules - no I/O, no
//! persistence, no HTTP clients. This keeps it lightweight and allows it to
//! be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, prices, sizes, and contact details
//! - [`cart`] - Line items and the cart state with its merge invariant
//! - [`pricing`] - Size pricing and the delivery fee rule
//! - [`order`] - The order payload built at checkout

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod order;
pub mod pricing;
pub mod types;

pub use cart::{CartState, LineItem};
pub use order::{Order, OrderConfirmation, OrderError};
pub use pricing::Totals;
pub use types::*;
