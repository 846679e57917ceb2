//! Coworking zones and their bookable spaces.

#[cfg(test)]
#[path = "cowork_spaces_test.rs"]
mod cowork_spaces_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cowork;
use crate::net::types::{Space, Zone};
use crate::state::auth::use_api;

pub fn booking_href(id: i64) -> String {
    format!("/cowork/book/{id}")
}

pub fn space_is_bookable(space: &Space) -> bool {
    matches!(space.status.as_str(), "" | "AVAILABLE")
}

#[component]
pub fn CoworkSpacesPage() -> impl IntoView {
    let api = use_api();
    let zones = RwSignal::new(None::<Vec<Zone>>);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let api = api.clone();
        spawn_local(async move {
            match cowork::fetch_spaces(&api).await {
                Ok(payload) => {
                    zones.try_set(Some(payload.zones));
                }
                Err(e) => {
                    zones.try_set(Some(Vec::new()));
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let body = move || {
        let list = zones.get().unwrap_or_default();
        if list.is_empty() {
            return view! { <EmptyState title="No spaces are listed yet."/> }.into_any();
        }
        list.into_iter()
            .map(|zone| {
                view! {
                    <section class="zone">
                        <h2>{zone.label}</h2>
                        <ul class="space-grid">
                            {zone.spaces.into_iter().map(space_card).collect_view()}
                        </ul>
                    </section>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="Cowork" description="Desks, private offices, and meeting rooms to book by the hour, day, or month."/>
        <section class="page cowork-spaces">
            <header class="page-header">
                <h1>"Coworking spaces"</h1>
                <a class="button" href="/cowork/my-bookings">"My bookings"</a>
            </header>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || zones.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading spaces..."</p> }>
                {body}
            </Show>
        </section>
    }
}

fn space_card(space: Space) -> impl IntoView {
    let bookable = space_is_bookable(&space);
    let unavailable = !bookable;
    let id = space.id;
    let seats = space
        .seats
        .into_iter()
        .map(|seat| {
            view! {
                <li>
                    <a class="seat-link" href=booking_href(seat.id)>{seat.name}</a>
                </li>
            }
        })
        .collect_view();
    view! {
        <li class="space-card" class:space-card--busy=unavailable>
            <h3>{space.name}</h3>
            <Show when=move || bookable fallback=|| view! { <span class="pill">"Unavailable"</span> }>
                <a class="button button--primary" href=booking_href(id)>"Book"</a>
            </Show>
            <ul class="seat-list">{seats}</ul>
        </li>
    }
}
