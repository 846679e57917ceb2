//! Counter order entry for walk-in and known customers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Menu items and best-seller stats load independently; a failed stats call
//! just leaves suggestions sorted by name. The optional customer is picked
//! through the same debounced lookup as the lookup page.

#[cfg(test)]
#[path = "staff_manual_order_test.rs"]
mod staff_manual_order_test;

use std::cmp::Ordering;
use std::collections::HashMap;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::staff::{self, ManualOrder, ManualOrderLine};
use crate::net::types::{Customer, ManualOrderCreated, StaffMenuItem, TopItem};
use crate::pages::staff_lookup::{customer_label, lookup_latest};
use crate::state::auth::use_api;
use crate::util::debounce::{Debouncer, LOOKUP_DEBOUNCE_MS};
use crate::util::format::format_price;
use crate::util::phone::{is_valid_phone, normalize_phone};

pub const MAX_SUGGESTIONS: usize = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CustomerType {
    #[default]
    WalkIn,
    Member,
    Vip,
}

impl CustomerType {
    pub const ALL: [Self; 3] = [Self::WalkIn, Self::Member, Self::Vip];

    pub fn value(self) -> &'static str {
        match self {
            Self::WalkIn => "walk_in",
            Self::Member => "member",
            Self::Vip => "vip",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::WalkIn => "Walk-in",
            Self::Member => "Member",
            Self::Vip => "VIP",
        }
    }

    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|kind| kind.value() == raw).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectedItem {
    pub menu_item_id: i64,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

fn rank_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best-seller quantity keyed by normalised item name.
pub fn sales_rank(top_items: &[TopItem]) -> HashMap<String, f64> {
    top_items
        .iter()
        .filter_map(|item| {
            let key = rank_key(&item.name);
            (!key.is_empty()).then_some((key, item.total_qty))
        })
        .collect()
}

/// Matching items, best sellers first, then by name; at most twelve.
pub fn rank_suggestions(items: &[StaffMenuItem], rank: &HashMap<String, f64>, query: &str) -> Vec<StaffMenuItem> {
    let needle = query.trim().to_lowercase();
    let score = |item: &StaffMenuItem| rank.get(&rank_key(&item.name)).copied().unwrap_or(0.0);
    let mut matches: Vec<StaffMenuItem> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item.name.to_lowercase().contains(&needle)
                || item.category_name.to_lowercase().contains(&needle)
                || item.id.to_string().contains(&needle)
        })
        .cloned()
        .collect();
    matches.sort_by(|a, b| {
        score(b)
            .partial_cmp(&score(a))
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
    matches.truncate(MAX_SUGGESTIONS);
    matches
}

pub fn add_item(selection: &mut Vec<SelectedItem>, item: &StaffMenuItem) {
    if let Some(entry) = selection.iter_mut().find(|entry| entry.menu_item_id == item.id) {
        entry.quantity += 1;
    } else {
        selection.push(SelectedItem {
            menu_item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        });
    }
}

/// Adjust one line; lines that reach zero are removed.
pub fn update_quantity(selection: &mut Vec<SelectedItem>, menu_item_id: i64, delta: i32) {
    for entry in selection.iter_mut().filter(|entry| entry.menu_item_id == menu_item_id) {
        entry.quantity = entry.quantity.saturating_add_signed(delta);
    }
    selection.retain(|entry| entry.quantity > 0);
}

pub fn remove_item(selection: &mut Vec<SelectedItem>, menu_item_id: i64) {
    selection.retain(|entry| entry.menu_item_id != menu_item_id);
}

pub fn selection_total(selection: &[SelectedItem]) -> f64 {
    selection
        .iter()
        .map(|entry| entry.unit_price * f64::from(entry.quantity))
        .sum()
}

/// Phone to send: the chosen customer's, else the typed query if it looks
/// like a phone number, else empty (anonymous order).
pub fn order_phone(selected: Option<&Customer>, query: &str) -> String {
    let raw = selected
        .map(|customer| customer.phone_number.clone())
        .filter(|phone| !phone.is_empty())
        .unwrap_or_else(|| normalize_phone(query));
    if is_valid_phone(&raw) { raw } else { String::new() }
}

pub fn order_notes(kind: CustomerType) -> String {
    format!("Customer type: {}", kind.label())
}

pub fn build_order(selection: &[SelectedItem], selected: Option<&Customer>, query: &str, kind: CustomerType) -> ManualOrder {
    ManualOrder {
        phone_number: order_phone(selected, query),
        notes: order_notes(kind),
        items: selection
            .iter()
            .map(|entry| ManualOrderLine {
                menu_item_id: entry.menu_item_id,
                quantity: entry.quantity,
            })
            .collect(),
    }
}

pub fn created_message(created: &ManualOrderCreated) -> String {
    format!("Order {} created. Total: {}", created.order_id, format_price(created.total_price))
}

#[component]
pub fn StaffManualOrderPage() -> impl IntoView {
    let api = use_api();
    let debouncer = Debouncer::new();
    let menu_items = RwSignal::new(Vec::<StaffMenuItem>::new());
    let rank = RwSignal::new(HashMap::<String, f64>::new());
    let item_query = RwSignal::new(String::new());
    let selection = RwSignal::new(Vec::<SelectedItem>::new());
    let customer_query = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<Customer>::new());
    let selected_customer = RwSignal::new(None::<Customer>);
    let customer_type = RwSignal::new(CustomerType::default());
    let message = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                let (items, analytics) = futures::join!(staff::fetch_menu_items(&api), staff::fetch_analytics(&api));
                match items {
                    Ok(payload) => {
                        menu_items.try_set(payload.items.into_iter().filter(|item| item.is_available).collect());
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                rank.try_set(analytics.map(|overview| sales_rank(&overview.top_items)).unwrap_or_default());
            });
        }
    });

    let lookup = {
        let api = api.clone();
        let debouncer = debouncer.clone();
        move |raw: String| {
            let q = raw.trim().to_owned();
            if q.is_empty() {
                debouncer.cancel();
                suggestions.set(Vec::new());
                selected_customer.set(None);
                return;
            }
            let ticket = debouncer.bump();
            let api = api.clone();
            let debouncer = debouncer.clone();
            spawn_local(async move {
                match lookup_latest(&api, &debouncer, ticket, &q, LOOKUP_DEBOUNCE_MS).await {
                    Some(Ok(found)) => {
                        suggestions.try_set(found);
                    }
                    Some(Err(_)) => {
                        suggestions.try_set(Vec::new());
                    }
                    None => {}
                }
            });
        }
    };

    let choose_customer = {
        let debouncer = debouncer.clone();
        move |customer: Customer| {
            debouncer.cancel();
            customer_query.set(customer_label(&customer));
            selected_customer.set(Some(customer));
            suggestions.set(Vec::new());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        error.set(String::new());
        message.set(String::new());
        if selection.with(Vec::is_empty) {
            error.set("Add at least one item.".to_owned());
            return;
        }
        let order = build_order(
            &selection.get(),
            selected_customer.get().as_ref(),
            &customer_query.get(),
            customer_type.get(),
        );
        submitting.set(true);
        let api = api.clone();
        spawn_local(async move {
            match staff::create_manual_order(&api, &order).await {
                Ok(created) => {
                    message.try_set(created_message(&created));
                    selection.try_set(Vec::new());
                    item_query.try_set(String::new());
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            submitting.try_set(false);
        });
    };

    let item_suggestions = move || {
        let ranked = menu_items.with(|items| rank.with(|rank| item_query.with(|q| rank_suggestions(items, rank, q))));
        ranked
            .into_iter()
            .map(|item| {
                let label = format!("{} · {}", item.name, format_price(item.price));
                view! {
                    <li>
                        <button
                            class="suggestion"
                            type="button"
                            on:click=move |_| {
                                selection.update(|sel| add_item(sel, &item));
                                item_query.set(String::new());
                            }
                        >
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let selected_rows = move || {
        selection
            .get()
            .into_iter()
            .map(|entry| {
                let id = entry.menu_item_id;
                view! {
                    <li class="selected-item">
                        <span class="selected-item__name">{entry.name}</span>
                        <div class="stepper">
                            <button class="stepper__button" type="button" on:click=move |_| selection.update(|sel| update_quantity(sel, id, -1))>
                                "-"
                            </button>
                            <span class="stepper__value">{entry.quantity}</span>
                            <button class="stepper__button" type="button" on:click=move |_| selection.update(|sel| update_quantity(sel, id, 1))>
                                "+"
                            </button>
                        </div>
                        <span>{format_price(entry.unit_price * f64::from(entry.quantity))}</span>
                        <button class="button button--small" type="button" on:click=move |_| selection.update(|sel| remove_item(sel, id))>
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let customer_suggestions = move || {
        suggestions
            .get()
            .into_iter()
            .map(|customer| {
                let label = customer_label(&customer);
                let choose = choose_customer.clone();
                view! {
                    <li>
                        <button class="suggestion" type="button" on:click=move |_| choose(customer.clone())>
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <SeoHead title="Manual order"/>
        <section class="page staff-manual-order">
            <h1>"Manual order"</h1>
            <form class="manual-order" on:submit=on_submit>
                <div class="card">
                    <h2>"Items"</h2>
                    <input
                        class="field"
                        type="search"
                        placeholder="Search by name, category, or id"
                        prop:value=move || item_query.get()
                        on:input=move |ev| item_query.set(event_target_value(&ev))
                    />
                    <ul class="suggestion-list">{item_suggestions}</ul>
                    <ul class="selected-items">{selected_rows}</ul>
                    <p class="manual-order__total">
                        "Total: " {move || selection.with(|sel| format_price(selection_total(sel)))}
                    </p>
                </div>
                <div class="card">
                    <h2>"Customer"</h2>
                    <select class="field" on:change=move |ev| customer_type.set(CustomerType::parse(&event_target_value(&ev)))>
                        {CustomerType::ALL
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.value() selected=move || customer_type.get() == kind>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    <input
                        class="field"
                        type="search"
                        placeholder="Customer name or phone (optional)"
                        prop:value=move || customer_query.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            customer_query.set(value.clone());
                            lookup(value);
                        }
                    />
                    <ul class="suggestion-list">{customer_suggestions}</ul>
                </div>
                <ErrorText message=Signal::derive(move || error.get())/>
                <Show when=move || !message.get().is_empty()>
                    <p class="notice">{move || message.get()}</p>
                </Show>
                <button class="button button--primary" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Create order" }}
                </button>
            </form>
        </section>
    }
}
