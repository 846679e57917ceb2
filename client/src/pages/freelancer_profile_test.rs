use super::*;

#[test]
fn cta_uses_default_label() {
    assert_eq!(
        contact_cta("", "https://t.me/ava"),
        Some(("Get in touch".to_owned(), "https://t.me/ava".to_owned()))
    );
}

#[test]
fn cta_keeps_custom_label() {
    assert_eq!(
        contact_cta(" Email me ", "mailto:ava@example.com"),
        Some(("Email me".to_owned(), "mailto:ava@example.com".to_owned()))
    );
}

#[test]
fn cta_rejects_unsafe_or_missing_urls() {
    assert_eq!(contact_cta("Hi", ""), None);
    assert_eq!(contact_cta("Hi", "javascript:alert(1)"), None);
}
