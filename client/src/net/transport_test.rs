use super::*;

#[test]
fn method_parse_is_case_insensitive() {
    assert_eq!(Method::parse("post"), Some(Method::Post));
    assert_eq!(Method::parse("Patch"), Some(Method::Patch));
    assert_eq!(Method::parse("TRACE"), None);
}

#[test]
fn only_get_head_options_are_safe() {
    assert!(Method::Get.is_safe());
    assert!(Method::Head.is_safe());
    assert!(Method::Options.is_safe());
    for method in [Method::Post, Method::Put, Method::Patch, Method::Delete] {
        assert!(!method.is_safe(), "{method:?}");
    }
}

#[test]
fn header_lookup_ignores_case() {
    let req = HttpRequest {
        headers: vec![("X-CSRFToken".to_owned(), "abc".to_owned())],
        ..HttpRequest::default()
    };
    assert_eq!(req.header("x-csrftoken"), Some("abc"));
    assert_eq!(req.header("Accept"), None);
}

#[test]
fn cookie_value_finds_exact_name() {
    let jar = "sessionid=s1; csrftoken=tok; xcsrftoken=nope";
    assert_eq!(cookie_value(jar, "csrftoken"), Some("tok".to_owned()));
    assert_eq!(cookie_value(jar, "sessionid"), Some("s1".to_owned()));
}

#[test]
fn cookie_value_missing_or_empty_is_none() {
    assert_eq!(cookie_value("", "csrftoken"), None);
    assert_eq!(cookie_value("a=1", "csrftoken"), None);
    assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
}

#[test]
fn server_transport_refuses_requests() {
    let result = futures::executor::block_on(ServerTransport.send(HttpRequest::default()));
    assert_eq!(result, Err(ApiError::Network("not available on server".to_owned())));
    assert_eq!(ServerTransport.cookie("csrftoken"), None);
}

#[test]
fn response_success_range() {
    assert!(HttpResponse::new(204, "").is_success());
    assert!(!HttpResponse::new(302, "").is_success());
    assert!(!HttpResponse::new(404, "").is_success());
}
