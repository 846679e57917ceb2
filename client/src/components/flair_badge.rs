//! Coloured badge for freelancer flairs.

#[cfg(test)]
#[path = "flair_badge_test.rs"]
mod flair_badge_test;

use leptos::prelude::*;

const FALLBACK_TOKEN: &str = "neutral";

/// CSS modifier class for a colour token; unknown characters fall back.
pub fn flair_class(color_token: &str) -> String {
    let token = color_token.trim().to_ascii_lowercase();
    let valid = !token.is_empty() && token.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
    format!("flair-badge flair-badge--{}", if valid { token.as_str() } else { FALLBACK_TOKEN })
}

#[component]
pub fn FlairBadge(#[prop(into)] label: String, #[prop(into)] color: String) -> impl IntoView {
    view! { <span class=flair_class(&color)>{label}</span> }
}
