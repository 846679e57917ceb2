//! Booking form for one space or seat.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route carries only the space id. Name and zone are resolved from the
//! spaces list, and the zone decides which billing periods are offered.
//! Preview and submit both require a start date.

#[cfg(test)]
#[path = "cowork_booking_test.rs"]
mod cowork_booking_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cowork::{self, BookingRequest};
use crate::net::types::{BookingCreated, BookingPreview, BookingType, SpacesPayload};
use crate::state::auth::use_api;
use crate::util::format::{date_part, format_price};

pub const PENDING_APPROVAL_NOTICE: &str =
    "Your booking request was received and is waiting for admin approval.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSpace {
    pub name: String,
    pub zone: String,
}

/// Find a space, or a seat inside a space, by id.
pub fn resolve_space(spaces: &SpacesPayload, id: i64) -> Option<ResolvedSpace> {
    spaces.zones.iter().find_map(|zone| {
        zone.spaces.iter().find_map(|space| {
            let zone_code = if zone.code.is_empty() { &space.zone } else { &zone.code };
            if space.id == id {
                return Some(ResolvedSpace {
                    name: space.name.clone(),
                    zone: zone_code.clone(),
                });
            }
            space.seats.iter().find(|seat| seat.id == id).map(|seat| ResolvedSpace {
                name: format!("{} / {}", space.name, seat.name),
                zone: zone_code.clone(),
            })
        })
    })
}

/// Billing periods offered for a zone. `None` means the zone is unknown yet.
pub fn allowed_booking_types(zone: Option<&str>) -> Vec<BookingType> {
    use crate::net::types::BookingType::{Daily, Hourly, Monthly, SixMonth, Yearly};
    match zone.filter(|zone| !zone.is_empty()) {
        None => vec![Daily, Monthly, SixMonth, Yearly],
        Some("LONG_TABLE") => vec![Daily],
        Some("SHARED_DESK") => vec![Monthly],
        Some("PRIVATE_2" | "PRIVATE_3") => vec![Daily, Monthly, SixMonth, Yearly],
        Some("MEETING_ROOM") => vec![Hourly, Daily, Monthly],
        Some("DESK") => vec![Daily, Monthly],
        Some(_) => vec![Daily],
    }
}

/// Keep `current` if allowed, otherwise fall back to the first allowed type.
pub fn coerce_booking_type(current: BookingType, allowed: &[BookingType]) -> BookingType {
    if allowed.contains(&current) {
        current
    } else {
        allowed.first().copied().unwrap_or_default()
    }
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Accept a real Gregorian `YYYY-MM-DD` date only.
///
/// # Errors
///
/// Returns the message to show next to the date field.
pub fn validate_start_date(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Choose a start date.".to_owned());
    }
    let shaped = raw.len() == 10
        && raw
            .bytes()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    if !shaped {
        return Err("Start date must look like YYYY-MM-DD.".to_owned());
    }
    let field = |range: std::ops::Range<usize>| raw[range].parse::<u32>().unwrap_or(0);
    let (year, month, day) = (field(0..4), field(5..7), field(8..10));
    if (1..=12).contains(&month) && (1..=days_in_month(year, month)).contains(&day) {
        Ok(raw.to_owned())
    } else {
        Err("Start date is not a valid calendar date.".to_owned())
    }
}

pub fn success_notice(created: &BookingCreated) -> String {
    created
        .detail
        .as_deref()
        .map(str::trim)
        .filter(|detail| !detail.is_empty())
        .unwrap_or(PENDING_APPROVAL_NOTICE)
        .to_owned()
}

#[component]
pub fn CoworkBookingPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let space_id = Memo::new(move |_| params.with(|p| p.get("space_id").and_then(|raw| raw.parse::<i64>().ok())));

    let spaces = RwSignal::new(None::<SpacesPayload>);
    let booking_type = RwSignal::new(BookingType::default());
    let start_date = RwSignal::new(String::new());
    let preview = RwSignal::new(None::<BookingPreview>);
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match cowork::fetch_spaces(&api).await {
                    Ok(payload) => {
                        spaces.try_set(Some(payload));
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    let resolved = Memo::new(move |_| {
        let id = space_id.get()?;
        spaces.with(|spaces| spaces.as_ref().and_then(|spaces| resolve_space(spaces, id)))
    });
    let allowed = Memo::new(move |_| resolved.with(|space| allowed_booking_types(space.as_ref().map(|s| s.zone.as_str()))));

    Effect::new(move || {
        let allowed = allowed.get();
        let current = booking_type.get_untracked();
        let next = coerce_booking_type(current, &allowed);
        if next != current {
            booking_type.set(next);
        }
    });

    let build_request = move || -> Result<BookingRequest, String> {
        let space_id = space_id.get().ok_or_else(|| "Unknown space.".to_owned())?;
        let start_time = validate_start_date(&start_date.get())?;
        Ok(BookingRequest {
            space_id,
            booking_type: booking_type.get(),
            start_time,
        })
    };

    let on_preview = {
        let api = api.clone();
        move |_| {
            if busy.get() {
                return;
            }
            let request = match build_request() {
                Ok(request) => request,
                Err(message) => {
                    error.set(message);
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());
            let api = api.clone();
            spawn_local(async move {
                match cowork::preview_booking(&api, &request).await {
                    Ok(quote) => {
                        preview.try_set(Some(quote));
                    }
                    Err(e) => {
                        preview.try_set(None);
                        error.try_set(e.to_string());
                    }
                }
                busy.try_set(false);
            });
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match build_request() {
            Ok(request) => request,
            Err(message) => {
                error.set(message);
                return;
            }
        };
        busy.set(true);
        error.set(String::new());
        notice.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            match cowork::create_booking(&api, &request).await {
                Ok(created) => {
                    notice.try_set(success_notice(&created));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            busy.try_set(false);
        });
    };

    let title = move || {
        resolved
            .get()
            .map_or_else(|| format!("Space #{}", space_id.get().unwrap_or_default()), |space| space.name)
    };

    view! {
        <SeoHead title="Book a space"/>
        <section class="page cowork-booking">
            <h1>{title}</h1>
            <form class="booking-form" on:submit=on_submit>
                <label class="field-label">
                    "Booking type"
                    <select
                        class="field"
                        on:change=move |ev| {
                            if let Some(kind) = BookingType::parse(&event_target_value(&ev)) {
                                booking_type.set(kind);
                                preview.set(None);
                            }
                        }
                    >
                        {move || {
                            allowed
                                .get()
                                .into_iter()
                                .map(|kind| {
                                    view! {
                                        <option value=kind.as_str() selected=move || booking_type.get() == kind>
                                            {kind.label()}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="field-label">
                    "Start date"
                    <input
                        class="field"
                        type="date"
                        prop:value=move || start_date.get()
                        on:input=move |ev| {
                            start_date.set(event_target_value(&ev));
                            preview.set(None);
                        }
                    />
                </label>
                <Show when=move || preview.with(Option::is_some)>
                    {move || {
                        preview
                            .get()
                            .map(|quote| {
                                view! {
                                    <dl class="booking-preview">
                                        <dt>"Price"</dt>
                                        <dd>{format_price(quote.price)}</dd>
                                        <dt>"Starts"</dt>
                                        <dd>{date_part(&quote.start_time).to_owned()}</dd>
                                        <dt>"Ends"</dt>
                                        <dd>{date_part(&quote.end_time).to_owned()}</dd>
                                        <dt>"Ends (Jalali)"</dt>
                                        <dd>{quote.end_time_jalali.clone()}</dd>
                                    </dl>
                                }
                            })
                    }}
                </Show>
                <ErrorText message=Signal::derive(move || error.get())/>
                <Show when=move || !notice.get().is_empty()>
                    <p class="notice">{move || notice.get()} " " <a href="/cowork/my-bookings">"See my bookings"</a></p>
                </Show>
                <div class="form-actions">
                    <button class="button" type="button" disabled=move || busy.get() on:click=on_preview>
                        "Preview price"
                    </button>
                    <button class="button button--primary" type="submit" disabled=move || busy.get()>"Book"</button>
                </div>
            </form>
        </section>
    }
}
