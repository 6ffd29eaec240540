//! Application state shared by the front end.

use std::sync::Arc;

use crate::api::{ApiError, PizzaApiClient};
use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::store::FileCartStore;

/// Configuration and backend client for one storefront session.
///
/// This struct is cheaply cloneable via `Arc`. The cart is deliberately not
/// part of it: the cart has a single owner, opened with [`AppState::open_cart`]
/// and passed by `&mut` to whatever mutates it.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: StorefrontConfig,
    api: PizzaApiClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let api = PizzaApiClient::new(&config)?;

        Ok(Self {
            inner: Arc::new(AppStateInner { config, api }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the pizza API client.
    #[must_use]
    pub fn api(&self) -> &PizzaApiClient {
        &self.inner.api
    }

    /// Open the cart persisted in the configured data directory.
    #[must_use]
    pub fn open_cart(&self) -> Cart<FileCartStore> {
        Cart::open(FileCartStore::at_path(self.config().cart_path()))
    }
}
