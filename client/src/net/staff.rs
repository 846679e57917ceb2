//! Back-office endpoints: order fulfilment, menu stock, manual orders,
//! customer lookup, analytics, and user administration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only reachable from staff-guarded pages. The API enforces the real
//! permissions; these calls simply surface its `403` detail if the session
//! lost its staff role.

#[cfg(test)]
#[path = "staff_test.rs"]
mod staff_test;

use serde::Serialize;
use serde_json::Value;

use super::api::ApiClient;
use super::error::ApiError;
use super::transport::Transport;
use super::types::{
    AnalyticsOverview, CategoriesPayload, CustomersPayload, ManualOrderCreated, OrdersPayload, Page, Role,
    StaffMenuItemsPayload, StaffUser,
};
use crate::util::query::Query;

pub const ORDERS_PATH: &str = "/api/cafe/staff/orders/";
pub const MENU_ITEMS_PATH: &str = "/api/cafe/staff/menu-items/";
pub const MANUAL_ORDERS_PATH: &str = "/api/cafe/staff/manual-orders/";
pub const ANALYTICS_PATH: &str = "/api/staff/analytics/overview/";
pub const USERS_PAGE_SIZE: u32 = 20;

/// Fulfilment states staff can move an order into.
pub const ORDER_TRANSITIONS: [&str; 4] = ["PREPARING", "READY", "DELIVERED", "CANCELLED"];

#[derive(Serialize)]
struct StatusChange<'a> {
    status: &'a str,
}

/// New menu item. `price` is sent as typed by staff; the API parses it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: i64,
    pub is_available: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ManualOrderLine {
    pub menu_item_id: i64,
    pub quantity: u32,
}

/// Counter order entered by staff. An empty `phone_number` means anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ManualOrder {
    pub phone_number: String,
    pub notes: String,
    pub items: Vec<ManualOrderLine>,
}

/// User administration filters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub page: u32,
    pub q: String,
    pub role: String,
    /// `"true"`, `"false"`, or empty for any.
    pub is_active: String,
}

impl UserFilter {
    pub fn path(&self) -> String {
        Query::new()
            .with("page", self.page.max(1))
            .with("page_size", USERS_PAGE_SIZE)
            .with_nonempty("q", &self.q)
            .with_nonempty("role", &self.role)
            .with_nonempty("is_active", &self.is_active)
            .append_to("/api/staff/users/")
    }
}

#[derive(Serialize)]
struct ActiveChange {
    is_active: bool,
}

#[derive(Serialize)]
struct RoleChange {
    role: Role,
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_orders<T: Transport>(api: &ApiClient<T>) -> Result<OrdersPayload, ApiError> {
    api.get(ORDERS_PATH).await
}

/// # Errors
///
/// Returns the API error (e.g. an illegal transition).
pub async fn set_order_status<T: Transport>(api: &ApiClient<T>, order_id: i64, status: &str) -> Result<(), ApiError> {
    api.post_json::<Value, _>(
        &format!("/api/cafe/staff/orders/{order_id}/status/"),
        &StatusChange { status },
    )
    .await
    .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn toggle_order_payment<T: Transport>(api: &ApiClient<T>, order_id: i64) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("/api/cafe/staff/orders/{order_id}/toggle-payment/"))
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_menu_categories<T: Transport>(api: &ApiClient<T>) -> Result<CategoriesPayload, ApiError> {
    api.get("/api/cafe/staff/menu-categories/").await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_menu_items<T: Transport>(api: &ApiClient<T>) -> Result<StaffMenuItemsPayload, ApiError> {
    api.get(MENU_ITEMS_PATH).await
}

/// Categories and items for the stock screen, loaded concurrently.
///
/// # Errors
///
/// Returns the first failure of either request.
pub async fn fetch_menu_stock<T: Transport>(
    api: &ApiClient<T>,
) -> Result<(CategoriesPayload, StaffMenuItemsPayload), ApiError> {
    futures::future::try_join(fetch_menu_categories(api), fetch_menu_items(api)).await
}

/// # Errors
///
/// Returns the API error.
pub async fn create_menu_item<T: Transport>(api: &ApiClient<T>, item: &NewMenuItem) -> Result<(), ApiError> {
    api.post_json::<Value, _>(MENU_ITEMS_PATH, item).await.map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn toggle_item_availability<T: Transport>(api: &ApiClient<T>, item_id: i64) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("/api/cafe/staff/menu-items/{item_id}/toggle-availability/"))
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn lookup_customers<T: Transport>(api: &ApiClient<T>, query: &str) -> Result<CustomersPayload, ApiError> {
    let path = Query::new()
        .with("q", query)
        .append_to("/api/cafe/staff/customer-lookup/");
    api.get(&path).await
}

/// # Errors
///
/// Returns the API error.
pub async fn create_manual_order<T: Transport>(
    api: &ApiClient<T>,
    order: &ManualOrder,
) -> Result<ManualOrderCreated, ApiError> {
    api.post_json(MANUAL_ORDERS_PATH, order).await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_analytics<T: Transport>(api: &ApiClient<T>) -> Result<AnalyticsOverview, ApiError> {
    api.get(ANALYTICS_PATH).await
}

/// # Errors
///
/// Returns the API error.
pub async fn fetch_users<T: Transport>(api: &ApiClient<T>, filter: &UserFilter) -> Result<Page<StaffUser>, ApiError> {
    api.get(&filter.path()).await
}

/// # Errors
///
/// Returns the API error.
pub async fn set_user_active<T: Transport>(api: &ApiClient<T>, user_id: i64, is_active: bool) -> Result<(), ApiError> {
    api.patch_json::<Value, _>(&format!("/api/staff/users/{user_id}/status/"), &ActiveChange { is_active })
        .await
        .map(drop)
}

/// # Errors
///
/// Returns the API error.
pub async fn set_user_role<T: Transport>(api: &ApiClient<T>, user_id: i64, role: Role) -> Result<(), ApiError> {
    api.patch_json::<Value, _>(&format!("/api/staff/users/{user_id}/role/"), &RoleChange { role })
        .await
        .map(drop)
}
