use futures::executor::block_on;

use super::*;
use crate::net::auth::LOGIN_PATH;
use crate::net::mock::MockTransport;
use crate::net::transport::Method;

fn credentials() -> LoginRequest {
    login_request("09120000000", "secret").unwrap()
}

#[test]
fn login_request_requires_both_fields() {
    assert!(login_request("", "secret").is_err());
    assert!(login_request("09120000000", "").is_err());
    assert!(login_request("   ", "secret").is_err());
}

#[test]
fn login_request_normalises_digits() {
    let request = login_request(" ۰۹۱۲۳۴۵۶۷۸۹ ", "pw").unwrap();
    assert_eq!(request.phone_number, "09123456789");
    assert_eq!(request.password, "pw");
}

// =============================================================
// attempt_login
// =============================================================

#[test]
fn accepted_login_navigates_home() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport().reply(Method::Post, LOGIN_PATH, 200, r#"{"authenticated":true}"#);

    let outcome = block_on(attempt_login(&api, &credentials()));
    assert_eq!(outcome, LoginOutcome::Navigate(AFTER_LOGIN_ROUTE));
}

#[test]
fn rejected_login_shows_message_and_stays() {
    let api = MockTransport::new().client();
    api.set_csrf_token("tok");
    api.transport()
        .reply(Method::Post, LOGIN_PATH, 400, r#"{"detail":"invalid credentials"}"#);

    let outcome = block_on(attempt_login(&api, &credentials()));
    assert_eq!(outcome, LoginOutcome::ShowError("invalid credentials".to_owned()));
}
