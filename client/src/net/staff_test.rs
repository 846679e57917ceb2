use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;

fn body_of(api: &ApiClient<MockTransport>, method: Method, url: &str) -> serde_json::Value {
    let sent = api.transport().requests_to(method, url);
    serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap()
}

#[test]
fn status_change_posts_status() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport()
        .reply(Method::Post, "/api/cafe/staff/orders/4/status/", 200, "{}");

    block_on(set_order_status(&api, 4, "READY")).unwrap();
    assert_eq!(
        body_of(&api, Method::Post, "/api/cafe/staff/orders/4/status/"),
        json!({ "status": "READY" })
    );
}

#[test]
fn status_change_surfaces_forbidden_detail() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(
        Method::Post,
        "/api/cafe/staff/orders/4/status/",
        403,
        r#"{"detail":"denied"}"#,
    );

    let err = block_on(set_order_status(&api, 4, "READY")).unwrap_err();
    assert_eq!(err.to_string(), "denied");
}

#[test]
fn manual_order_body_shape() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(
        Method::Post,
        MANUAL_ORDERS_PATH,
        201,
        r#"{"order_id":51,"total_price":"180000"}"#,
    );

    let order = ManualOrder {
        phone_number: String::new(),
        notes: "Customer type: Walk-in".to_owned(),
        items: vec![ManualOrderLine {
            menu_item_id: 5,
            quantity: 2,
        }],
    };
    let created = block_on(create_manual_order(&api, &order)).unwrap();
    assert_eq!(created.order_id, 51);
    assert_eq!(
        body_of(&api, Method::Post, MANUAL_ORDERS_PATH),
        json!({
            "phone_number": "",
            "notes": "Customer type: Walk-in",
            "items": [{ "menu_item_id": 5, "quantity": 2 }]
        })
    );
}

#[test]
fn lookup_encodes_query() {
    let api = MockTransport::new().client();
    api.transport().reply(
        Method::Get,
        "/api/cafe/staff/customer-lookup/?q=sara%20k",
        200,
        r#"{"customers":[{"id":1,"phone_number":"0912","full_name":"Sara K","is_active":true}]}"#,
    );

    let found = block_on(lookup_customers(&api, "sara k")).unwrap();
    assert_eq!(found.customers[0].full_name, "Sara K");
}

#[test]
fn user_filter_path() {
    let filter = UserFilter {
        page: 2,
        role: "Barista".to_owned(),
        is_active: "false".to_owned(),
        ..UserFilter::default()
    };
    assert_eq!(
        filter.path(),
        "/api/staff/users/?page=2&page_size=20&role=Barista&is_active=false"
    );
}

#[test]
fn role_change_patches_role_name() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Patch, "/api/staff/users/9/role/", 200, "{}");

    block_on(set_user_role(&api, 9, Role::Barista)).unwrap();
    assert_eq!(
        body_of(&api, Method::Patch, "/api/staff/users/9/role/"),
        json!({ "role": "Barista" })
    );
}

#[test]
fn active_change_patches_flag() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Patch, "/api/staff/users/9/status/", 200, "{}");

    block_on(set_user_active(&api, 9, false)).unwrap();
    assert_eq!(
        body_of(&api, Method::Patch, "/api/staff/users/9/status/"),
        json!({ "is_active": false })
    );
}
