//! Integration tests for Blaze Pizza.
//!
//! The tests run the storefront library against [`FakePizzaApi`], an
//! in-process axum server that speaks the pizza backend's REST API on an
//! ephemeral port. No external services are needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p blaze-pizza-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog` - Menu, featured list, product detail, fail-soft helpers
//! - `checkout` - Order submission and cart clearing
//! - `cart_persistence` - Cart snapshots across sessions

#![allow(clippy::missing_panics_doc, clippy::expect_used)]

use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use blaze_pizza_storefront::PizzaApiClient;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use url::Url;

/// Catalog served by a fresh [`FakePizzaApi`].
///
/// - `1` Margherita, $10.00, every size, featured
/// - `2` Pepperoni, $12.00, every size, featured
/// - `3` Veggie, $11.00, small and large only
#[must_use]
pub fn sample_catalog() -> Vec<Value> {
    vec![
        json!({
            "id": 1,
            "name": "Margherita",
            "image": "https://img.example/margherita.jpg",
            "base_price": 10.0,
            "description": "Tomato, mozzarella, basil",
            "sizes": ["Small", "Medium", "Large"],
            "featured": true,
        }),
        json!({
            "id": 2,
            "name": "Pepperoni",
            "image": "https://img.example/pepperoni.jpg",
            "base_price": 12.0,
            "description": "Spicy pepperoni and mozzarella",
            "sizes": ["Small", "Medium", "Large"],
            "featured": true,
        }),
        json!({
            "id": 3,
            "name": "Veggie",
            "image": "https://img.example/veggie.jpg",
            "base_price": 11.0,
            "description": "Peppers, onions, olives",
            "sizes": ["Small", "Large"],
            "featured": false,
        }),
    ]
}

#[derive(Debug)]
struct FakeBackend {
    pizzas: Vec<Value>,
    order_reply: (StatusCode, Value),
    /// Pause after recording an order and before answering it.
    order_delay: Option<Duration>,
    orders: Vec<Value>,
}

type Shared = Arc<Mutex<FakeBackend>>;

fn lock(shared: &Shared) -> std::sync::MutexGuard<'_, FakeBackend> {
    shared.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-process stand-in for the pizza backend.
///
/// The server task lives as long as the tokio runtime of the test.
#[derive(Debug, Clone)]
pub struct FakePizzaApi {
    addr: SocketAddr,
    shared: Shared,
}

impl FakePizzaApi {
    /// Start a backend serving [`sample_catalog`] that accepts every order
    /// with id `"A17"`.
    pub async fn start() -> Self {
        Self::with_catalog(sample_catalog()).await
    }

    /// Start a backend serving `pizzas`.
    pub async fn with_catalog(pizzas: Vec<Value>) -> Self {
        Self::spawn(pizzas, false).await
    }

    /// Start a backend serving [`sample_catalog`] that closes its first
    /// incoming connection without answering, then serves normally.
    pub async fn dropping_first_connection() -> Self {
        Self::spawn(sample_catalog(), true).await
    }

    async fn spawn(pizzas: Vec<Value>, drop_first: bool) -> Self {
        let shared = Arc::new(Mutex::new(FakeBackend {
            pizzas,
            order_reply: (StatusCode::CREATED, json!({ "id": "A17" })),
            order_delay: None,
            orders: Vec::new(),
        }));

        let app = Router::new()
            .route("/api/featured", get(featured))
            .route("/api/pizzas", get(list_pizzas))
            .route("/api/pizzas/{id}", get(pizza_detail))
            .route("/api/orders", post(create_order))
            .with_state(Arc::clone(&shared));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake backend");
        let addr = listener.local_addr().expect("Fake backend has no address");

        tokio::spawn(async move {
            if drop_first && let Ok((stream, _)) = listener.accept().await {
                drop(stream);
            }
            axum::serve(listener, app).await.ok();
        });

        Self { addr, shared }
    }

    /// Base URL of the running backend.
    #[must_use]
    pub fn url(&self) -> Url {
        Url::parse(&format!("http://{}", self.addr)).expect("Fake backend URL is valid")
    }

    /// Client pointed at this backend with a short timeout.
    #[must_use]
    pub fn client(&self) -> PizzaApiClient {
        self.client_with_timeout(Duration::from_secs(5))
    }

    /// Client pointed at this backend with the given per-request timeout.
    #[must_use]
    pub fn client_with_timeout(&self, timeout: Duration) -> PizzaApiClient {
        PizzaApiClient::with_timeout(self.url(), timeout).expect("Failed to build API client")
    }

    /// Hold every order response for `delay` after recording the order.
    pub fn set_order_delay(&self, delay: Duration) {
        lock(&self.shared).order_delay = Some(delay);
    }

    /// Change how `POST /api/orders` answers from now on.
    pub fn set_order_reply(&self, status: StatusCode, body: Value) {
        lock(&self.shared).order_reply = (status, body);
    }

    /// Every order body received so far, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Value> {
        lock(&self.shared).orders.clone()
    }
}

/// A URL nothing is listening on.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("Probe URL is valid")
}

fn summary(pizza: &Value) -> Value {
    json!({
        "id": pizza["id"],
        "name": pizza["name"],
        "image": pizza["image"],
        "base_price": pizza["base_price"],
    })
}

async fn featured(State(shared): State<Shared>) -> Json<Vec<Value>> {
    let backend = lock(&shared);
    Json(
        backend
            .pizzas
            .iter()
            .filter(|p| p["featured"].as_bool().unwrap_or(false))
            .map(summary)
            .collect(),
    )
}

async fn list_pizzas(State(shared): State<Shared>) -> Json<Vec<Value>> {
    Json(lock(&shared).pizzas.iter().map(summary).collect())
}

async fn pizza_detail(
    State(shared): State<Shared>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let backend = lock(&shared);
    backend
        .pizzas
        .iter()
        .find(|p| p["id"].to_string().trim_matches('"') == id)
        .map_or_else(
            || {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "detail": "Pizza not found" })),
                )
            },
            |p| (StatusCode::OK, Json(p.clone())),
        )
}

async fn create_order(
    State(shared): State<Shared>,
    Json(order): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let ((status, body), delay) = {
        let mut backend = lock(&shared);
        backend.orders.push(order);
        (backend.order_reply.clone(), backend.order_delay)
    };
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }
    (status, Json(body))
}
