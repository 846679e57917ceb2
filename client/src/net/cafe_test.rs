use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;

#[test]
fn cart_increment_posts_delta_and_returns_server_cart() {
    let api = MockTransport::new().client();
    api.transport().set_cookie("csrftoken", "tok");
    api.transport().reply(
        Method::Post,
        CART_ITEMS_PATH,
        200,
        r#"{"items":[{"item_id":5,"name":"Latte","quantity":1,"subtotal":90000}],"total":90000,"cart_count":1}"#,
    );

    let cart = block_on(change_cart_item(
        &api,
        CartChange {
            menu_item_id: 5,
            delta: 1,
        },
    ))
    .unwrap();

    let sent = &api.transport().requests_to(Method::Post, CART_ITEMS_PATH)[0];
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({ "menu_item_id": 5, "delta": 1 }));
    assert_eq!(sent.header("X-CSRFToken"), Some("tok"));
    assert_eq!(cart.cart_count, 1);
    assert_eq!(cart.lines()[0].item_id, 5);
    assert_eq!(cart.lines()[0].quantity, 1);
}

#[test]
fn menu_and_cart_load_together() {
    let api = MockTransport::yielding().client();
    api.transport().reply(
        Method::Get,
        MENU_PATH,
        200,
        r#"{"categories":[{"id":1,"name":"Coffee","items":[{"id":5,"name":"Latte","description":"","price":90000}]}]}"#,
    );
    api.transport().reply(Method::Get, CART_PATH, 200, r#"{"items":[],"total":0,"cart_count":0}"#);

    let (menu, cart) = block_on(fetch_menu_and_cart(&api)).unwrap();
    assert_eq!(menu.categories[0].items[0].name, "Latte");
    assert_eq!(cart.cart_count, 0);
}

#[test]
fn menu_failure_propagates_message() {
    let api = MockTransport::new().client();
    api.transport().reply(Method::Get, MENU_PATH, 500, r#"{"detail":"menu offline"}"#);
    api.transport().reply(Method::Get, CART_PATH, 200, "{}");

    let err = block_on(fetch_menu_and_cart(&api)).unwrap_err();
    assert_eq!(err.to_string(), "menu offline");
}

#[test]
fn checkout_sends_notes() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Post, CHECKOUT_PATH, 201, r#"{"order_id":3}"#);

    block_on(checkout(&api, "no sugar")).unwrap();
    let sent = &api.transport().requests_to(Method::Post, CHECKOUT_PATH)[0];
    assert_eq!(sent.body.as_deref(), Some(r#"{"notes":"no sugar"}"#));
}

#[test]
fn reorder_targets_order_path() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Post, "/api/cafe/orders/8/reorder/", 200, "{}");

    block_on(reorder(&api, 8)).unwrap();
    assert_eq!(api.transport().requests().len(), 1);
}
