//! Catalog endpoints: featured pizzas, the menu, and product detail.

use blaze_pizza_core::PizzaId;
use reqwest::{Method, StatusCode};
use tracing::{debug, instrument, warn};

use super::types::{PizzaDetail, PizzaSummary};
use super::{ApiError, PizzaApiClient, RetryPolicy, error_from_response};

impl PizzaApiClient {
    /// Fetch the featured pizzas.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body that
    /// is not a list of pizzas.
    #[instrument(skip(self))]
    pub async fn list_featured(&self) -> Result<Vec<PizzaSummary>, ApiError> {
        self.get_list(&["api", "featured"]).await
    }

    /// Fetch the full menu.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, non-success status, or a body that
    /// is not a list of pizzas.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<PizzaSummary>, ApiError> {
        self.get_list(&["api", "pizzas"]).await
    }

    /// Fetch one pizza. A 404 is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns error on transport failure, any other non-success status, or
    /// an unparseable body.
    #[instrument(skip(self, id), fields(pizza_id = %id))]
    pub async fn get_by_id(&self, id: &PizzaId) -> Result<Option<PizzaDetail>, ApiError> {
        let url = self.endpoint(&["api", "pizzas", id.as_str()])?;
        let response = self
            .send(Method::GET, url, RetryPolicy::Transport, |req| req)
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Pizza not found");
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await?;
        Ok(Some(serde_json::from_str(&body)?))
    }

    /// Featured pizzas, or an empty list if they could not be fetched.
    pub async fn featured_or_empty(&self) -> Vec<PizzaSummary> {
        self.list_featured().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to fetch featured pizzas");
            Vec::new()
        })
    }

    /// The menu, or an empty list if it could not be fetched.
    pub async fn menu_or_empty(&self) -> Vec<PizzaSummary> {
        self.list_all().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to fetch menu");
            Vec::new()
        })
    }

    /// Product detail, or `None` if it is missing or could not be fetched.
    pub async fn detail_or_none(&self, id: &PizzaId) -> Option<PizzaDetail> {
        self.get_by_id(id).await.unwrap_or_else(|e| {
            warn!(error = %e, pizza_id = %id, "Failed to fetch pizza");
            None
        })
    }

    async fn get_list(&self, path: &[&str]) -> Result<Vec<PizzaSummary>, ApiError> {
        let url = self.endpoint(path)?;
        let response = self
            .send(Method::GET, url, RetryPolicy::Transport, |req| req)
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await?;
        let pizzas: Vec<PizzaSummary> = serde_json::from_str(&body)?;
        debug!(count = pizzas.len(), "Fetched pizzas");
        Ok(pizzas)
    }
}
