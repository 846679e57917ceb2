//! Phone-number normalisation for counter orders.
//!
//! Staff may type numbers with Persian or Arabic-Indic digits, spaces, or
//! dashes. The API only accepts `+` and ASCII digits.

#[cfg(test)]
#[path = "phone_test.rs"]
mod phone_test;

/// Map Extended Arabic-Indic (`۰`..`۹`) and Arabic-Indic (`٠`..`٩`) digits to ASCII.
pub fn to_latin_digits(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '\u{06F0}'..='\u{06F9}' => latin_digit(ch, '\u{06F0}'),
            '\u{0660}'..='\u{0669}' => latin_digit(ch, '\u{0660}'),
            _ => ch,
        })
        .collect()
}

fn latin_digit(ch: char, zero: char) -> char {
    let offset = u32::from(ch) - u32::from(zero);
    char::from_digit(offset, 10).unwrap_or(ch)
}

/// Latin digits with everything except `0-9` and `+` stripped.
pub fn normalize_phone(raw: &str) -> String {
    to_latin_digits(raw)
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect()
}

/// `^\+?\d{7,15}$`
pub fn is_valid_phone(phone: &str) -> bool {
    let digits = phone.strip_prefix('+').unwrap_or(phone);
    (7..=15).contains(&digits.len()) && digits.bytes().all(|b| b.is_ascii_digit())
}
