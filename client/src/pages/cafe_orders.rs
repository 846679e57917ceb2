//! Order history with one-click reorder.

#[cfg(test)]
#[path = "cafe_orders_test.rs"]
mod cafe_orders_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cafe;
use crate::net::types::Order;
use crate::state::auth::use_api;
use crate::util::format::{format_price, short_datetime};

pub fn order_status_label(status: &str) -> &str {
    match status {
        "PENDING" => "Received",
        "PREPARING" => "Preparing",
        "READY" => "Ready for pickup",
        "DELIVERED" => "Delivered",
        "CANCELLED" => "Cancelled",
        other => other,
    }
}

/// `pill pill--<status>` with the status lowercased.
pub fn status_pill_class(status: &str) -> String {
    format!("pill pill--{}", status.to_ascii_lowercase())
}

#[component]
pub fn CafeOrdersPage() -> impl IntoView {
    let api = use_api();
    let orders = RwSignal::new(None::<Vec<Order>>);
    let reordering = RwSignal::new(HashSet::<i64>::new());
    let error = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match cafe::fetch_orders(&api).await {
                    Ok(payload) => {
                        orders.try_set(Some(payload.orders));
                    }
                    Err(e) => {
                        orders.try_set(Some(Vec::new()));
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    let reorder = Callback::new(move |order_id: i64| {
        if reordering.with(|set| set.contains(&order_id)) {
            return;
        }
        reordering.update(|set| {
            set.insert(order_id);
        });
        error.set(String::new());
        notice.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            match cafe::reorder(&api, order_id).await {
                Ok(()) => {
                    notice.try_set(format!("Order #{order_id} was added to your cart."));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            reordering.try_update(|set| set.remove(&order_id));
        });
    });

    let rows = move || {
        let list = orders.get().unwrap_or_default();
        if list.is_empty() {
            return view! { <EmptyState title="No orders yet." message="Your cafe orders will show up here."/> }
                .into_any();
        }
        list.into_iter()
            .map(|order| {
                let id = order.id;
                view! {
                    <li class="order-row">
                        <span class="order-row__id">{format!("#{id}")}</span>
                        <span class=status_pill_class(&order.status)>{order_status_label(&order.status).to_owned()}</span>
                        <span class="order-row__date">{order.created_at.as_deref().map(short_datetime)}</span>
                        <span class="order-row__total">{format_price(order.total_price)}</span>
                        <button
                            class="button"
                            disabled=move || reordering.with(|set| set.contains(&id))
                            on:click=move |_| reorder.run(id)
                        >
                            "Order again"
                        </button>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="My orders"/>
        <section class="page cafe-orders">
            <h1>"My orders"</h1>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || !notice.get().is_empty()>
                <p class="notice">{move || notice.get()} " " <a href="/cafe/cart">"Open cart"</a></p>
            </Show>
            <Show when=move || orders.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading orders..."</p> }>
                <ul class="order-list">{rows}</ul>
            </Show>
        </section>
    }
}
