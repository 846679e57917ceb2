use super::*;

fn form(phone: &str, password: &str, confirm: &str) -> RegisterRequest {
    RegisterRequest {
        phone_number: phone.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
        ..RegisterRequest::default()
    }
}

// =============================================================
// Step navigation
// =============================================================

#[test]
fn steps_walk_forward_and_back() {
    assert_eq!(RegisterStep::Phone.next(), RegisterStep::Identity);
    assert_eq!(RegisterStep::Identity.next(), RegisterStep::Password);
    assert_eq!(RegisterStep::Password.next(), RegisterStep::Review);
    assert_eq!(RegisterStep::Review.next(), RegisterStep::Review);
    assert_eq!(RegisterStep::Review.prev(), RegisterStep::Password);
    assert_eq!(RegisterStep::Phone.prev(), RegisterStep::Phone);
}

#[test]
fn step_numbers_are_one_based() {
    assert_eq!(RegisterStep::Phone.number(), 1);
    assert_eq!(RegisterStep::Review.number(), 4);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn phone_step_requires_phone() {
    assert!(validate_step(RegisterStep::Phone, &form("  ", "", "")).is_err());
    assert!(validate_step(RegisterStep::Phone, &form("0912", "", "")).is_ok());
}

#[test]
fn identity_step_is_optional() {
    assert!(validate_step(RegisterStep::Identity, &form("", "", "")).is_ok());
}

#[test]
fn password_step_requires_matching_pair() {
    assert_eq!(
        validate_step(RegisterStep::Password, &form("0912", "a", "")),
        Err("Enter the password twice.".to_owned())
    );
    assert_eq!(
        validate_step(RegisterStep::Password, &form("0912", "a", "b")),
        Err("Passwords do not match.".to_owned())
    );
    assert!(validate_step(RegisterStep::Password, &form("0912", "same", "same")).is_ok());
}

#[test]
fn normalized_trims_and_converts_digits() {
    let mut raw = form(" ۰۹۱۲ ", "pw", "pw");
    raw.full_name = "  Ava  ".to_owned();
    raw.national_id = "٠١٢".to_owned();
    let clean = normalized(&raw);
    assert_eq!(clean.phone_number, "0912");
    assert_eq!(clean.full_name, "Ava");
    assert_eq!(clean.national_id, "012");
    assert_eq!(clean.password, "pw");
}
