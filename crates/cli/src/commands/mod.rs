//! Storefront commands.
//!
//! Each command does its work against the backend and the cart, then
//! returns the rendered page body. The dispatcher in `main` wraps it with
//! the navbar and footer.

pub mod cart;
pub mod catalog;
pub mod checkout;
