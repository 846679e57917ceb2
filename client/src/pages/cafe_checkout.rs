//! Checkout: order notes and confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cafe;
use crate::net::types::Cart;
use crate::state::auth::use_api;
use crate::util::format::format_price;

#[component]
pub fn CafeCheckoutPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();
    let cart = RwSignal::new(None::<Cart>);
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match cafe::fetch_cart(&api).await {
                    Ok(loaded) => {
                        cart.try_set(Some(loaded));
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    let is_empty = move || cart.with(|cart| cart.as_ref().is_none_or(Cart::is_empty));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || is_empty() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        let api = api.clone();
        let navigate = navigate.clone();
        let notes = notes.get().trim().to_owned();
        spawn_local(async move {
            match cafe::checkout(&api, &notes).await {
                Ok(()) => navigate("/cafe/orders", Default::default()),
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            busy.try_set(false);
        });
    };

    let summary = move || {
        cart.with(|cart| cart.as_ref().map(|cart| cart.lines().to_vec()).unwrap_or_default())
            .into_iter()
            .map(|line| {
                view! {
                    <li class="checkout-line">
                        <span>{format!("{} × {}", line.quantity, line.name)}</span>
                        <span>{format_price(line.subtotal)}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <SeoHead title="Checkout"/>
        <section class="page cafe-checkout">
            <h1>"Checkout"</h1>
            <ul class="checkout-lines">{summary}</ul>
            <p class="checkout-total">
                "Total: " {move || format_price(cart.with(|cart| cart.as_ref().map_or(0.0, |cart| cart.total)))}
            </p>
            <form class="checkout-form" on:submit=on_submit>
                <label class="field-label">
                    "Notes for the barista"
                    <textarea
                        class="field"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <ErrorText message=Signal::derive(move || error.get())/>
                <button class="button button--primary" type="submit" disabled=move || busy.get() || is_empty()>
                    {move || if busy.get() { "Placing order..." } else { "Place order" }}
                </button>
            </form>
        </section>
    }
}
