//! Per-page `<title>`, description and canonical link.

#[cfg(test)]
#[path = "seo_head_test.rs"]
mod seo_head_test;

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

pub const SITE_NAME: &str = "Cowork & Cafe";

pub fn page_title(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        SITE_NAME.to_owned()
    } else {
        format!("{title} | {SITE_NAME}")
    }
}

/// First `max_chars` characters of `text`, cut at a word boundary.
pub fn meta_description(text: &str, max_chars: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    match cut.rfind(' ') {
        Some(idx) => format!("{}…", &cut[..idx]),
        None => format!("{cut}…"),
    }
}

#[component]
pub fn SeoHead(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: String,
    #[prop(optional_no_strip)] canonical: Option<String>,
) -> impl IntoView {
    let description = meta_description(&description, 160);
    view! {
        <Title text=page_title(&title)/>
        <Meta name="description" content=description/>
        {canonical.map(|href| view! { <Link rel="canonical" href=href/> })}
    }
}
