use leptos::prelude::*;

/// Inline error line; renders nothing while `message` is empty.
#[component]
pub fn ErrorText(message: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <p class="error-text" role="alert">{move || message.get()}</p>
        </Show>
    }
}
