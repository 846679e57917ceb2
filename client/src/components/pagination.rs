//! Previous/next pager for paginated lists.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Prev/next availability for `page` of `total`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PagerState {
    pub visible: bool,
    pub has_prev: bool,
    pub has_next: bool,
}

pub fn pager_state(page: u32, total: u32) -> PagerState {
    PagerState {
        visible: total > 1,
        has_prev: page > 1,
        has_next: page < total,
    }
}

/// Hidden entirely when there is a single page.
#[component]
pub fn Pagination(page: Signal<u32>, total_pages: Signal<u32>, on_change: Callback<u32>) -> impl IntoView {
    let state = move || pager_state(page.get(), total_pages.get());

    view! {
        <Show when=move || state().visible>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__button"
                    disabled=move || !state().has_prev
                    on:click=move |_| on_change.run(page.get().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pagination__status">
                    {move || format!("Page {} of {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="pagination__button"
                    disabled=move || !state().has_next
                    on:click=move |_| on_change.run(page.get() + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
