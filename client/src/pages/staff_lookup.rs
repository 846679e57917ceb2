//! Customer lookup with debounced type-ahead.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used here and by the manual-order page. Each keystroke bumps a
//! [`Debouncer`]; a lookup only fires if its ticket survives the delay, and
//! its result is only applied if the ticket is still current when the
//! response arrives.

#[cfg(test)]
#[path = "staff_lookup_test.rs"]
mod staff_lookup_test;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::staff;
use crate::net::transport::Transport;
use crate::net::types::Customer;
use crate::state::auth::use_api;
use crate::util::debounce::{DebounceTicket, Debouncer, LOOKUP_DEBOUNCE_MS, sleep_ms};

/// `name - phone`, with a placeholder for customers without a name.
pub fn customer_label(customer: &Customer) -> String {
    let name = customer.full_name.trim();
    let name = if name.is_empty() { "No name" } else { name };
    format!("{name} - {}", customer.phone_number)
}

/// Wait out the debounce delay, then look up `query` unless superseded.
///
/// Returns `None` when a newer ticket was issued before the request was
/// sent or before its response arrived.
pub async fn lookup_latest<T: Transport>(
    api: &ApiClient<T>,
    debouncer: &Debouncer,
    ticket: DebounceTicket,
    query: &str,
    delay_ms: u32,
) -> Option<Result<Vec<Customer>, ApiError>> {
    sleep_ms(delay_ms).await;
    if !debouncer.is_current(ticket) {
        return None;
    }
    let result = staff::lookup_customers(api, query).await.map(|payload| payload.customers);
    debouncer.is_current(ticket).then_some(result)
}

#[component]
pub fn StaffLookupPage() -> impl IntoView {
    let api = use_api();
    let debouncer = Debouncer::new();
    let query = RwSignal::new(String::new());
    let customers = RwSignal::new(Vec::<Customer>::new());
    let searched = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let run = move |delay_ms: u32| {
        let q = query.get_untracked().trim().to_owned();
        if q.is_empty() {
            debouncer.cancel();
            customers.set(Vec::new());
            searched.set(false);
            return;
        }
        let ticket = debouncer.bump();
        let api = api.clone();
        let debouncer = debouncer.clone();
        spawn_local(async move {
            match lookup_latest(&api, &debouncer, ticket, &q, delay_ms).await {
                Some(Ok(found)) => {
                    error.try_set(String::new());
                    customers.try_set(found);
                    searched.try_set(true);
                }
                Some(Err(e)) => {
                    error.try_set(e.to_string());
                }
                None => {}
            }
        });
    };

    let run_on_input = run.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        run(0);
    };

    let results = move || {
        let list = customers.get();
        if list.is_empty() {
            return searched
                .get()
                .then(|| view! { <EmptyState title="No customers found."/> })
                .into_any();
        }
        list.into_iter()
            .map(|customer| {
                let name = if customer.full_name.trim().is_empty() { "No name".to_owned() } else { customer.full_name };
                view! {
                    <article class="customer-card">
                        <h3>{name}</h3>
                        <p>{customer.phone_number}</p>
                        <p class="muted">{if customer.is_active { "Active" } else { "Inactive" }}</p>
                    </article>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="Customer lookup"/>
        <section class="page staff-lookup">
            <h1>"Customer lookup"</h1>
            <p class="muted">"Find a customer by name or phone number."</p>
            <form class="search-bar" on:submit=on_submit>
                <input
                    class="field"
                    type="search"
                    placeholder="Name or phone number"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        run_on_input(LOOKUP_DEBOUNCE_MS);
                    }
                />
                <button class="button button--primary" type="submit">"Search"</button>
            </form>
            <ErrorText message=Signal::derive(move || error.get())/>
            <div class="customer-grid">{results}</div>
        </section>
    }
}
