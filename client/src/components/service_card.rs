//! Freelancer service card, read-only or editable.
//!
//! The public profile renders it read-only. The profile page passes
//! `on_save`/`on_delete` to get inline editing.

#[cfg(test)]
#[path = "service_card_test.rs"]
mod service_card_test;

use leptos::prelude::*;

use super::error_text::ErrorText;
use crate::net::auth::ServiceInput;
use crate::net::types::Service;
use crate::util::format::format_price;

pub const DELIVERY_MODES: [(&str, &str); 3] = [("remote", "Remote"), ("onsite", "On site"), ("hybrid", "Hybrid")];

pub fn delivery_mode_label(mode: &str) -> &str {
    DELIVERY_MODES
        .iter()
        .find(|(key, _)| *key == mode)
        .map_or(mode, |(_, label)| *label)
}

pub fn response_time_label(hours: u32) -> String {
    match hours {
        0 => String::new(),
        1 => "Responds within 1 hour".to_owned(),
        n => format!("Responds within {n} hours"),
    }
}

/// Build an update from the edit form's raw fields.
///
/// # Errors
///
/// Returns a user-facing message when the title is blank or a number does
/// not parse.
pub fn service_input_from_form(
    title: &str,
    description: &str,
    delivery_mode: &str,
    starting_price: &str,
    response_time_hours: &str,
    is_active: bool,
) -> Result<ServiceInput, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Service title is required.".to_owned());
    }
    let starting_price = match starting_price.trim() {
        "" => 0.0,
        raw => raw
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite() && *price >= 0.0)
            .ok_or_else(|| "Starting price must be a number.".to_owned())?,
    };
    let response_time_hours = match response_time_hours.trim() {
        "" => 0,
        raw => raw
            .parse::<u32>()
            .map_err(|_| "Response time must be a whole number of hours.".to_owned())?,
    };
    Ok(ServiceInput {
        title: title.to_owned(),
        description: description.trim().to_owned(),
        delivery_mode: delivery_mode.to_owned(),
        starting_price,
        response_time_hours,
        is_active,
    })
}

#[component]
pub fn ServiceCard(
    service: Service,
    #[prop(optional)] on_save: Option<Callback<(i64, ServiceInput)>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = service.id;
    let editing = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let title = RwSignal::new(service.title.clone());
    let description = RwSignal::new(service.description.clone());
    let delivery_mode = RwSignal::new(service.delivery_mode.clone());
    let starting_price = RwSignal::new(service.starting_price.to_string());
    let response_time = RwSignal::new(service.response_time_hours.to_string());
    let is_active = RwSignal::new(service.is_active);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(on_save) = on_save else {
            return;
        };
        match service_input_from_form(
            &title.get(),
            &description.get(),
            &delivery_mode.get(),
            &starting_price.get(),
            &response_time.get(),
            is_active.get(),
        ) {
            Ok(input) => {
                error.set(String::new());
                editing.set(false);
                on_save.run((id, input));
            }
            Err(message) => error.set(message),
        }
    };

    let inactive = !service.is_active;
    let read_only = move || {
        view! {
            <div class="service-card__body">
                <h3 class="service-card__title">{service.title.clone()}</h3>
                <p class="service-card__description">{service.description.clone()}</p>
                <p class="service-card__meta">
                    <span>{delivery_mode_label(&service.delivery_mode).to_owned()}</span>
                    <span>{format!("From {}", format_price(service.starting_price))}</span>
                    <span>{response_time_label(service.response_time_hours)}</span>
                </p>
                <Show when=move || on_save.is_some() || on_delete.is_some()>
                    <div class="service-card__actions">
                        <Show when=move || on_save.is_some()>
                            <button class="service-card__button" on:click=move |_| editing.set(true)>"Edit"</button>
                        </Show>
                        <Show when=move || on_delete.is_some()>
                            <button
                                class="service-card__button service-card__button--danger"
                                on:click=move |_| {
                                    if let Some(on_delete) = on_delete {
                                        on_delete.run(id);
                                    }
                                }
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                </Show>
            </div>
        }
    };

    view! {
        <article class="service-card" class:service-card--inactive=inactive>
            <Show when=move || editing.get() fallback=read_only>
                <form class="service-card__form" on:submit=on_submit>
                    <input
                        class="field"
                        placeholder="Title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <textarea
                        class="field"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <select class="field" on:change=move |ev| delivery_mode.set(event_target_value(&ev))>
                        {DELIVERY_MODES
                            .into_iter()
                            .map(|(key, label)| {
                                view! {
                                    <option value=key selected=move || delivery_mode.get() == key>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        class="field"
                        inputmode="decimal"
                        placeholder="Starting price"
                        prop:value=move || starting_price.get()
                        on:input=move |ev| starting_price.set(event_target_value(&ev))
                    />
                    <input
                        class="field"
                        inputmode="numeric"
                        placeholder="Response time (hours)"
                        prop:value=move || response_time.get()
                        on:input=move |ev| response_time.set(event_target_value(&ev))
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || is_active.get()
                            on:change=move |ev| is_active.set(event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <ErrorText message=Signal::derive(move || error.get())/>
                    <div class="service-card__actions">
                        <button class="service-card__button" type="submit">"Save"</button>
                        <button class="service-card__button" type="button" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>
        </article>
    }
}
