use leptos::prelude::*;

/// Small pill for a tag or specialty. Renders a link when `href` is set.
#[component]
pub fn TagChip(
    #[prop(into)] label: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] active: bool,
) -> impl IntoView {
    match href {
        Some(href) => view! {
            <a class="tag-chip" class:tag-chip--active=active href=href>{label}</a>
        }
        .into_any(),
        None => view! {
            <span class="tag-chip" class:tag-chip--active=active>{label}</span>
        }
        .into_any(),
    }
}
