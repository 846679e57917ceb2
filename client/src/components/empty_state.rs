use leptos::prelude::*;

/// Placeholder shown when a list has nothing to display.
#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(optional, into)] message: String) -> impl IntoView {
    let has_message = !message.is_empty();
    view! {
        <div class="empty-state">
            <p class="empty-state__title">{title}</p>
            <Show when=move || has_message>
                <p class="empty-state__message">{message.clone()}</p>
            </Show>
        </div>
    }
}
