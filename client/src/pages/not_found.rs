use leptos::prelude::*;

use crate::components::seo_head::SeoHead;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SeoHead title="Page not found"/>
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"The page you were looking for does not exist."</p>
            <a class="button" href="/">"Back to home"</a>
        </section>
    }
}
