//! Core types for the storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod contact;
pub mod id;
pub mod price;
pub mod size;

pub use contact::{ContactError, CustomerContact};
pub use id::*;
pub use price::Price;
pub use size::{Size, UnknownSize};
