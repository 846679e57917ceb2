use super::*;
use serde_json::json;

#[test]
fn detail_string_is_used_verbatim() {
    let err = ApiError::from_response(403, &json!({ "detail": "denied" }));
    assert_eq!(err.to_string(), "denied");
    assert_eq!(err.status(), Some(403));
}

#[test]
fn errors_object_is_stringified() {
    let err = ApiError::from_response(400, &json!({ "errors": { "phone_number": ["required"] } }));
    let message = err.to_string();
    assert!(message.contains("phone_number"), "{message}");
    assert!(message.contains("required"), "{message}");
}

#[test]
fn detail_wins_over_errors() {
    let payload = json!({ "detail": "first", "errors": { "x": ["y"] } });
    assert_eq!(status_message(400, &payload), "first");
}

#[test]
fn empty_detail_falls_through_to_errors() {
    let payload = json!({ "detail": "", "errors": "bad input" });
    assert_eq!(status_message(400, &payload), "bad input");
}

#[test]
fn non_string_detail_is_rendered_as_json() {
    let payload = json!({ "detail": ["a", "b"] });
    assert_eq!(status_message(409, &payload), r#"["a","b"]"#);
}

#[test]
fn missing_fields_synthesize_status_text() {
    assert_eq!(status_message(500, &Value::Null), "HTTP 500");
    assert_eq!(status_message(502, &json!({ "other": 1 })), "HTTP 502");
}

#[test]
fn bootstrap_error_message_names_status() {
    assert_eq!(
        ApiError::CsrfBootstrap(503).to_string(),
        "Unable to initialize CSRF cookie (HTTP 503)"
    );
}

#[test]
fn network_error_carries_transport_message() {
    let err = ApiError::Network("Failed to fetch".to_owned());
    assert_eq!(err.to_string(), "Failed to fetch");
    assert_eq!(err.status(), None);
}
