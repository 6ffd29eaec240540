//! Checkout against the fake backend.

#![allow(clippy::unwrap_used)]

use blaze_pizza_core::{CustomerContact, PizzaId, Price, Size};
use blaze_pizza_integration_tests::FakePizzaApi;
use blaze_pizza_storefront::api::{GENERIC_ORDER_FAILURE, StatusCode};
use blaze_pizza_storefront::{
    ApiError, Cart, CartStore, CheckoutError, FileCartStore, PizzaApiClient, place_order,
};
use rust_decimal_macros::dec;
use serde_json::json;
use std::time::Duration;

fn customer() -> CustomerContact {
    CustomerContact::new("Ada Lovelace", "555-0100", "1 Main St").unwrap()
}

async fn fill_cart<S: CartStore>(client: &PizzaApiClient, cart: &mut Cart<S>, quantity: u32) {
    let pizza = client
        .get_by_id(&PizzaId::from(1_u64))
        .await
        .unwrap()
        .unwrap();
    cart.add(pizza.line_item(Size::Medium, quantity));
}

#[tokio::test]
async fn test_successful_checkout_clears_cart_everywhere() {
    let api = FakePizzaApi::start().await;
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 3).await;

    let order_id = place_order(&client, &mut cart, customer(), "Ring twice")
        .await
        .unwrap();

    assert_eq!(order_id.as_str(), "A17");
    assert!(cart.is_empty());
    assert!(Cart::open(FileCartStore::in_dir(dir.path())).is_empty());
}

#[tokio::test]
async fn test_order_payload_shape() {
    let api = FakePizzaApi::start().await;
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 3).await;

    place_order(&client, &mut cart, customer(), "Ring twice")
        .await
        .unwrap();

    let orders = api.orders();
    assert_eq!(orders.len(), 1);
    let order = &orders[0];
    assert_eq!(
        order["customer"],
        json!({ "name": "Ada Lovelace", "phone": "555-0100", "address": "1 Main St" })
    );
    assert_eq!(order["notes"], "Ring twice");
    assert_eq!(order["items"][0]["pizza_id"], "1");
    assert_eq!(order["items"][0]["size"], "Medium");
    assert_eq!(order["items"][0]["quantity"], 3);
    assert_eq!(order["items"][0]["unit_price"].as_f64(), Some(12.5));
    assert_eq!(order["subtotal"].as_f64(), Some(37.5));
    assert_eq!(order["delivery_fee"].as_f64(), Some(0.0));
    assert_eq!(order["total"].as_f64(), Some(37.5));
}

#[tokio::test]
async fn test_small_order_pays_delivery() {
    let api = FakePizzaApi::start().await;
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 1).await;

    assert_eq!(cart.totals().total, Price::new(dec!(16.00)));
    place_order(&client, &mut cart, customer(), "").await.unwrap();

    let order = &api.orders()[0];
    assert_eq!(order["delivery_fee"].as_f64(), Some(3.5));
    assert_eq!(order["total"].as_f64(), Some(16.0));
}

#[tokio::test]
async fn test_rejected_order_keeps_cart_and_shows_detail() {
    let api = FakePizzaApi::start().await;
    api.set_order_reply(StatusCode::BAD_REQUEST, json!({ "detail": "Store closed" }));
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 2).await;

    let err = place_order(&client, &mut cart, customer(), "")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CheckoutError::Submit(ApiError::Api { status, .. }) if status == StatusCode::BAD_REQUEST
    ));
    assert_eq!(err.user_message(), "Store closed");
    assert_eq!(cart.item_count(), 2);
    assert_eq!(Cart::open(FileCartStore::in_dir(dir.path())).item_count(), 2);
}

#[tokio::test]
async fn test_server_error_without_detail_uses_generic_message() {
    let api = FakePizzaApi::start().await;
    api.set_order_reply(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "boom" }),
    );
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 1).await;

    let err = place_order(&client, &mut cart, customer(), "")
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), GENERIC_ORDER_FAILURE);
    assert!(!cart.is_empty());
}

#[tokio::test]
async fn test_success_without_id_keeps_cart() {
    let api = FakePizzaApi::start().await;
    api.set_order_reply(StatusCode::OK, json!({ "status": "queued" }));
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&client, &mut cart, 1).await;

    let err = place_order(&client, &mut cart, customer(), "")
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Submit(ApiError::Parse(_))));
    assert_eq!(err.user_message(), GENERIC_ORDER_FAILURE);
    assert!(!cart.is_empty());
}

#[tokio::test]
async fn test_empty_cart_never_reaches_backend() {
    let api = FakePizzaApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));

    let err = place_order(&api.client(), &mut cart, customer(), "")
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Order(_)));
    assert!(api.orders().is_empty());
}

#[tokio::test]
async fn test_timed_out_order_is_not_resent() {
    let api = FakePizzaApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
    fill_cart(&api.client(), &mut cart, 2).await;

    api.set_order_delay(Duration::from_secs(3));
    let client = api.client_with_timeout(Duration::from_millis(500));
    let err = place_order(&client, &mut cart, customer(), "")
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Submit(ApiError::Http(_))));
    assert_eq!(err.user_message(), GENERIC_ORDER_FAILURE);
    assert_eq!(cart.item_count(), 2);
    assert_eq!(api.orders().len(), 1);
}
