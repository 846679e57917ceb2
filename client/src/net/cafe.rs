//! Customer-facing cafe endpoints: menu, cart, checkout, order history.

#[cfg(test)]
#[path = "cafe_test.rs"]
mod cafe_test;

use serde::Serialize;
use serde_json::Value;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{Cart, MenuPayload, OrdersPayload};

pub const MENU_PATH: &str = "/api/cafe/menu/";
pub const CART_PATH: &str = "/api/cafe/cart/";
pub const CART_ITEMS_PATH: &str = "/api/cafe/cart/items/";
pub const CHECKOUT_PATH: &str = "/api/cafe/checkout/";
pub const ORDERS_PATH: &str = "/api/cafe/orders/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CartChange {
    pub menu_item_id: i64,
    pub delta: i64,
}

#[derive(Serialize)]
struct CheckoutRequest<'a> {
    notes: &'a str,
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_menu<T: Transport>(api: &ApiClient<T>) -> Result<MenuPayload, ApiError> {
    api.get(MENU_PATH).await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_cart<T: Transport>(api: &ApiClient<T>) -> Result<Cart, ApiError> {
    api.get(CART_PATH).await
}

/// Load menu and cart concurrently.
///
/// # Errors
///
/// Returns the first failure of either request.
pub async fn fetch_menu_and_cart<T: Transport>(api: &ApiClient<T>) -> Result<(MenuPayload, Cart), ApiError> {
    futures::future::try_join(fetch_menu(api), fetch_cart(api)).await
}

/// Add (`delta = 1`) or remove (`delta = -1`) one unit of a menu item.
///
/// # Errors
///
/// Returns the API error.
pub async fn change_cart_item<T: Transport>(api: &ApiClient<T>, change: CartChange) -> Result<Cart, ApiError> {
    api.post_json(CART_ITEMS_PATH, &change).await
}

/// # Errors
///
/// Returns the API error.
pub async fn checkout<T: Transport>(api: &ApiClient<T>, notes: &str) -> Result<(), ApiError> {
    api.post_json::<Value, _>(CHECKOUT_PATH, &CheckoutRequest { notes })
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_orders<T: Transport>(api: &ApiClient<T>) -> Result<OrdersPayload, ApiError> {
    api.get(ORDERS_PATH).await
}

/// Put the items of a past order back in the cart.
///
/// # Errors
///
/// Returns the API error.
pub async fn reorder<T: Transport>(api: &ApiClient<T>, order_id: i64) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("/api/cafe/orders/{order_id}/reorder/"))
        .await
        .map(drop)
}
