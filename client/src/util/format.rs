//! Display formatting for prices and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const CURRENCY: &str = "Toman";

/// Round to a whole amount and group thousands: `125000.0` → `125,000 Toman`.
pub fn format_price(amount: f64) -> String {
    format!("{} {CURRENCY}", group_thousands(amount))
}

pub fn group_thousands(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation)]
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if whole < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Date part of an ISO-8601 timestamp, or the input unchanged.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split_once('T').map_or(timestamp, |(date, _)| date)
}

/// `YYYY-MM-DD HH:MM` from an ISO-8601 timestamp.
pub fn short_datetime(timestamp: &str) -> String {
    match timestamp.split_once('T') {
        Some((date, time)) => {
            let hm: String = time.chars().take(5).collect();
            format!("{date} {hm}")
        }
        None => timestamp.to_owned(),
    }
}

/// Percentage with one decimal place, for rates given as `0..=100`.
pub fn format_percent(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// `1 item`, `3 items`.
pub fn item_count(count: i64) -> String {
    if count == 1 {
        "1 item".to_owned()
    } else {
        format!("{count} items")
    }
}
