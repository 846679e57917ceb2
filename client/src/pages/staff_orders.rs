//! Barista order desk: live queue, status transitions, payment flag.
//!
//! Every mutation re-fetches the full queue instead of patching locally;
//! another barista may have moved the same order in the meantime.

#[cfg(test)]
#[path = "staff_orders_test.rs"]
mod staff_orders_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::staff::{self, ORDER_TRANSITIONS};
use crate::net::types::Order;
use crate::pages::cafe_orders::{order_status_label, status_pill_class};
use crate::state::auth::use_api;
use crate::util::format::{format_price, short_datetime};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OrderMetrics {
    pub total: usize,
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub paid: usize,
}

impl OrderMetrics {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(
            Self {
                total: orders.len(),
                ..Self::default()
            },
            |mut metrics, order| {
                match order.status.as_str() {
                    "PENDING" => metrics.pending += 1,
                    "PREPARING" => metrics.preparing += 1,
                    "READY" => metrics.ready += 1,
                    _ => {}
                }
                if order.is_paid {
                    metrics.paid += 1;
                }
                metrics
            },
        )
    }
}

/// Transitions worth offering: everything except the current status.
pub fn next_statuses(current: &str) -> Vec<&'static str> {
    ORDER_TRANSITIONS.into_iter().filter(|status| *status != current).collect()
}

#[derive(Clone, Copy)]
enum OrderAction {
    Status(i64, &'static str),
    TogglePayment(i64),
}

impl OrderAction {
    fn order_id(self) -> i64 {
        match self {
            Self::Status(id, _) | Self::TogglePayment(id) => id,
        }
    }
}

#[component]
pub fn StaffOrdersPage() -> impl IntoView {
    let api = use_api();
    let orders = RwSignal::new(None::<Vec<Order>>);
    let busy = RwSignal::new(HashSet::<i64>::new());
    let error = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                match staff::fetch_orders(&api).await {
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
    Effect::new(move || load.run(()));

    let act = Callback::new(move |action: OrderAction| {
        let id = action.order_id();
        if busy.with(|set| set.contains(&id)) {
            return;
        }
        busy.update(|set| {
            set.insert(id);
        });
        error.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            let result = match action {
                OrderAction::Status(id, status) => staff::set_order_status(&api, id, status).await,
                OrderAction::TogglePayment(id) => staff::toggle_order_payment(&api, id).await,
            };
            if let Err(e) = result {
                error.try_set(e.to_string());
            }
            busy.try_update(|set| set.remove(&id));
            load.run(());
        });
    });

    let metrics = move || orders.with(|list| OrderMetrics::from_orders(list.as_deref().unwrap_or_default()));

    let rows = move || {
        let list = orders.get().unwrap_or_default();
        if list.is_empty() {
            return view! { <EmptyState title="No open orders."/> }.into_any();
        }
        list.into_iter()
            .map(|order| {
                let id = order.id;
                let is_busy = move || busy.with(|set| set.contains(&id));
                let customer = order
                    .customer
                    .as_ref()
                    .and_then(|c| c.full_name.clone().filter(|n| !n.is_empty()).or_else(|| c.phone_number.clone()))
                    .unwrap_or_else(|| "Walk-in".to_owned());
                view! {
                    <tr class="order-table__row">
                        <td>{format!("#{id}")}</td>
                        <td>{customer}</td>
                        <td>{order.created_at.as_deref().map(short_datetime)}</td>
                        <td>{format_price(order.total_price)}</td>
                        <td><span class=status_pill_class(&order.status)>{order_status_label(&order.status).to_owned()}</span></td>
                        <td>
                            <div class="button-row">
                                {next_statuses(&order.status)
                                    .into_iter()
                                    .map(|status| {
                                        view! {
                                            <button
                                                class="button button--small"
                                                disabled=is_busy
                                                on:click=move |_| act.run(OrderAction::Status(id, status))
                                            >
                                                {order_status_label(status).to_owned()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </td>
                        <td>
                            <button
                                class="button button--small"
                                class:button--success=order.is_paid
                                disabled=is_busy
                                on:click=move |_| act.run(OrderAction::TogglePayment(id))
                            >
                                {if order.is_paid { "Paid" } else { "Unpaid" }}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="Order desk"/>
        <section class="page staff-orders">
            <header class="page-header">
                <h1>"Order desk"</h1>
                <button class="button" on:click=move |_| load.run(())>"Refresh"</button>
            </header>
            <div class="metric-grid">
                <div class="metric"><span class="metric__value">{move || metrics().total}</span><span class="metric__label">"Orders"</span></div>
                <div class="metric"><span class="metric__value">{move || metrics().pending}</span><span class="metric__label">"Pending"</span></div>
                <div class="metric"><span class="metric__value">{move || metrics().preparing}</span><span class="metric__label">"Preparing"</span></div>
                <div class="metric"><span class="metric__value">{move || metrics().ready}</span><span class="metric__label">"Ready"</span></div>
                <div class="metric"><span class="metric__value">{move || metrics().paid}</span><span class="metric__label">"Paid"</span></div>
            </div>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || orders.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading orders..."</p> }>
                <table class="order-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Placed"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th>"Move to"</th>
                            <th>"Payment"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </section>
    }
}
