//! Landing page linking into the cafe, cowork, blog and directory.

use leptos::prelude::*;

use crate::components::seo_head::SeoHead;
use crate::state::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let greeting = move || {
        auth.state.with(|state| match state.user() {
            Some(user) if !user.full_name.trim().is_empty() => format!("Welcome back, {}", user.full_name.trim()),
            Some(_) => "Welcome back".to_owned(),
            None => "Coffee, desks, and people to work with".to_owned(),
        })
    };

    view! {
        <SeoHead
            title="Home"
            description="Order from the cafe, book a desk or meeting room, and find freelancers in the community."
        />
        <section class="hero">
            <h1 class="hero__title">{greeting}</h1>
            <p class="hero__lead">"A cafe and coworking space under one roof."</p>
        </section>
        <section class="home-grid">
            <a class="home-card" href="/cafe/menu">
                <h2>"Cafe"</h2>
                <p>"Browse the menu and order ahead."</p>
            </a>
            <a class="home-card" href="/cowork">
                <h2>"Cowork"</h2>
                <p>"Book a desk, a private office, or a meeting room."</p>
            </a>
            <a class="home-card" href="/blog">
                <h2>"Blog"</h2>
                <p>"News and stories from the space."</p>
            </a>
            <a class="home-card" href="/freelancers">
                <h2>"Freelancers"</h2>
                <p>"Find members offering their services."</p>
            </a>
        </section>
    }
}
