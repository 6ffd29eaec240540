//! Order submission.

use blaze_pizza_core::{Order, OrderConfirmation};
use reqwest::Method;
use tracing::{info, instrument};

use super::{ApiError, PizzaApiClient, RetryPolicy, error_from_response};

impl PizzaApiClient {
    /// Post an order. Any 2xx response carrying `{id}` is a success.
    ///
    /// The request is retried only if the connection could not be
    /// established, so an order is never sent twice.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with the backend's `detail` on a non-success
    /// status, or a transport/parse error otherwise.
    #[instrument(skip(self, order), fields(lines = order.items.len(), total = %order.total))]
    pub async fn submit_order(&self, order: &Order) -> Result<OrderConfirmation, ApiError> {
        let url = self.endpoint(&["api", "orders"])?;
        let response = self
            .send(Method::POST, url, RetryPolicy::ConnectOnly, |req| {
                req.json(order)
            })
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body = response.text().await?;
        let confirmation: OrderConfirmation = serde_json::from_str(&body)?;
        info!(order_id = %confirmation.id, "Order placed");
        Ok(confirmation)
    }
}
