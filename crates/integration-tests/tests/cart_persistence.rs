//! Cart snapshots across storefront sessions.

#![allow(clippy::unwrap_used)]

use std::fs;

use blaze_pizza_core::{PizzaId, Price, Size};
use blaze_pizza_integration_tests::FakePizzaApi;
use blaze_pizza_storefront::{Cart, FileCartStore, StorefrontConfig};
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_cart_survives_restart() {
    let api = FakePizzaApi::start().await;
    let client = api.client();
    let dir = tempfile::tempdir().unwrap();

    {
        let mut cart = Cart::open(FileCartStore::in_dir(dir.path()));
        let margherita = client.detail_or_none(&PizzaId::from(1_u64)).await.unwrap();
        let veggie = client.detail_or_none(&PizzaId::from(3_u64)).await.unwrap();
        cart.add(margherita.line_item(Size::Medium, 1));
        cart.add(margherita.line_item(Size::Medium, 2));
        cart.add(veggie.line_item(Size::Small, 1));
    }

    let cart = Cart::open(FileCartStore::in_dir(dir.path()));
    assert!(!cart.persistence_degraded());
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.item_count(), 4);
    assert_eq!(cart.subtotal(), Price::new(dec!(48.50)));
    assert!(cart.totals().delivery_fee.is_zero());
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("cart.json"), b"{not json").unwrap();

    let cart = Cart::open(FileCartStore::in_dir(dir.path()));
    assert!(cart.is_empty());
    assert!(cart.persistence_degraded());
}

#[test]
fn test_config_cart_path_matches_store() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig::for_backend(
        url::Url::parse("http://localhost:8000").unwrap(),
        dir.path().to_path_buf(),
    );

    let store = FileCartStore::at_path(config.cart_path());
    assert_eq!(store.path(), FileCartStore::in_dir(dir.path()).path());
}
