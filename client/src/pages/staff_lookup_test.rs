use futures::executor::block_on;

use super::*;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;

const LOOKUP_URL: &str = "/api/cafe/staff/customer-lookup/?q=0912";
const FOUND: &str = r#"{"customers":[{"id":4,"phone_number":"09120000000","full_name":"","is_active":true}]}"#;

#[test]
fn customer_label_uses_placeholder_name() {
    let customer = Customer {
        id: 1,
        phone_number: "0912".to_owned(),
        full_name: " ".to_owned(),
        is_active: true,
    };
    assert_eq!(customer_label(&customer), "No name - 0912");
}

#[test]
fn current_ticket_gets_results() {
    let api = MockTransport::new().client();
    api.transport().reply(Method::Get, LOOKUP_URL, 200, FOUND);
    let debouncer = Debouncer::new();
    let ticket = debouncer.bump();

    let found = block_on(lookup_latest(&api, &debouncer, ticket, "0912", 0));
    let customers = found.unwrap().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, 4);
}

#[test]
fn superseded_ticket_sends_nothing() {
    let api = MockTransport::new().client();
    let debouncer = Debouncer::new();
    let stale = debouncer.bump();
    debouncer.bump();

    assert!(block_on(lookup_latest(&api, &debouncer, stale, "0912", 0)).is_none());
    assert!(api.transport().requests().is_empty());
}

#[test]
fn response_for_superseded_ticket_is_dropped() {
    let api = MockTransport::yielding().client();
    api.transport().reply(Method::Get, LOOKUP_URL, 200, FOUND);
    let debouncer = Debouncer::new();
    let first = debouncer.bump();

    let (stale, ()) = block_on(futures::future::join(
        lookup_latest(&api, &debouncer, first, "0912", 0),
        async {
            debouncer.bump();
        },
    ));
    assert!(stale.is_none());
    assert_eq!(api.transport().requests_to(Method::Get, LOOKUP_URL).len(), 1);
}

#[test]
fn lookup_errors_surface_for_current_ticket() {
    let api = MockTransport::new().client();
    api.transport()
        .reply(Method::Get, LOOKUP_URL, 403, r#"{"detail":"Staff only."}"#);
    let debouncer = Debouncer::new();
    let ticket = debouncer.bump();

    let err = block_on(lookup_latest(&api, &debouncer, ticket, "0912", 0)).unwrap().unwrap_err();
    assert_eq!(err.to_string(), "Staff only.");
}
