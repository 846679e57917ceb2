use super::*;

#[test]
fn persian_and_arabic_digits_become_latin() {
    assert_eq!(to_latin_digits("۰۹۱۲"), "0912");
    assert_eq!(to_latin_digits("٠٩١٢"), "0912");
    assert_eq!(to_latin_digits("abc"), "abc");
}

#[test]
fn normalize_strips_separators() {
    assert_eq!(normalize_phone("0912 345-67 89"), "09123456789");
    assert_eq!(normalize_phone("+98 (912) ۳۴۵ ۶۷۸۹"), "+989123456789");
    assert_eq!(normalize_phone("Ali - "), "");
}

#[test]
fn valid_phone_bounds() {
    assert!(is_valid_phone("1234567"));
    assert!(is_valid_phone("+989123456789"));
    assert!(is_valid_phone("123456789012345"));
    assert!(!is_valid_phone("123456"));
    assert!(!is_valid_phone("1234567890123456"));
    assert!(!is_valid_phone("++1234567"));
    assert!(!is_valid_phone("12345+67"));
    assert!(!is_valid_phone(""));
}
