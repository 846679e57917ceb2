//! The signed-in member's bookings.

#[cfg(test)]
#[path = "cowork_my_bookings_test.rs"]
mod cowork_my_bookings_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cowork;
use crate::net::types::Booking;
use crate::state::auth::use_api;
use crate::util::format::{date_part, format_price};

pub fn booking_status_label(status: &str) -> &str {
    match status {
        "PENDING" => "Pending approval",
        "CONFIRMED" | "APPROVED" => "Confirmed",
        "ACTIVE" => "Active",
        "CANCELLED" => "Cancelled",
        "EXPIRED" | "COMPLETED" => "Finished",
        "REJECTED" => "Rejected",
        other => other,
    }
}

pub fn awaiting_approval(booking: &Booking) -> bool {
    booking.status == "PENDING"
}

/// Jalali date when the API sent one, otherwise the ISO date.
pub fn display_date<'a>(jalali: &'a str, iso: &'a str) -> &'a str {
    if jalali.trim().is_empty() { date_part(iso) } else { jalali }
}

#[component]
pub fn CoworkMyBookingsPage() -> impl IntoView {
    let api = use_api();
    let bookings = RwSignal::new(None::<Vec<Booking>>);
    let error = RwSignal::new(String::new());

    Effect::new(move || {
        let api = api.clone();
        spawn_local(async move {
            match cowork::fetch_my_bookings(&api).await {
                Ok(payload) => {
                    bookings.try_set(Some(payload.bookings));
                }
                Err(e) => {
                    bookings.try_set(Some(Vec::new()));
                    error.try_set(e.to_string());
                }
            }
        });
    });

    let rows = move || {
        let list = bookings.get().unwrap_or_default();
        if list.is_empty() {
            return view! {
                <EmptyState title="No bookings yet."/>
                <a class="button" href="/cowork">"Browse spaces"</a>
            }
            .into_any();
        }
        list.into_iter()
            .map(|booking| {
                let pending = awaiting_approval(&booking);
                let start = display_date(&booking.start_time_jalali, &booking.start_time).to_owned();
                let end = display_date(&booking.end_time_jalali, &booking.end_time).to_owned();
                view! {
                    <li class="booking-row">
                        <span class="booking-row__space">{booking.space_name}</span>
                        <span class=format!("pill pill--{}", booking.status.to_ascii_lowercase())>
                            {booking_status_label(&booking.status).to_owned()}
                        </span>
                        <span class="booking-row__dates">{format!("{start} → {end}")}</span>
                        <span class="booking-row__price">{format_price(booking.price_charged)}</span>
                        <Show when=move || pending>
                            <p class="booking-row__note">"An admin will review this booking shortly."</p>
                        </Show>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="My bookings"/>
        <section class="page cowork-bookings">
            <h1>"My bookings"</h1>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || bookings.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading bookings..."</p> }>
                <ul class="booking-list">{rows}</ul>
            </Show>
        </section>
    }
}
