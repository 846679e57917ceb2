//! Cart review with quantity controls.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cafe::{self, CartChange};
use crate::net::types::Cart;
use crate::state::auth::use_api;
use crate::util::format::{format_price, item_count};

#[component]
pub fn CafeCartPage() -> impl IntoView {
    let api = use_api();
    let cart = RwSignal::new(None::<Cart>);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                match cafe::fetch_cart(&api).await {
                    Ok(loaded) => {
                        cart.try_set(Some(loaded));
                    }
                    Err(e) => {
                        cart.try_set(Some(Cart::default()));
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });
    Effect::new(move || load.run(()));

    // Mutation responses may omit `items`, so always re-read the cart.
    let change = Callback::new(move |change: CartChange| {
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = cafe::change_cart_item(&api, change).await {
                error.try_set(e.to_string());
            }
            load.run(());
            busy.try_set(false);
        });
    });

    let is_empty = move || cart.with(|cart| cart.as_ref().is_none_or(Cart::is_empty));

    let lines = move || {
        cart.with(|cart| cart.as_ref().map(|cart| cart.lines().to_vec()).unwrap_or_default())
            .into_iter()
            .map(|line| {
                let id = line.item_id;
                view! {
                    <li class="cart-line">
                        <span class="cart-line__name">{line.name}</span>
                        <div class="stepper">
                            <button
                                class="stepper__button"
                                disabled=move || busy.get()
                                on:click=move |_| change.run(CartChange { menu_item_id: id, delta: -1 })
                            >
                                "-"
                            </button>
                            <span class="stepper__value">{line.quantity}</span>
                            <button
                                class="stepper__button"
                                disabled=move || busy.get()
                                on:click=move |_| change.run(CartChange { menu_item_id: id, delta: 1 })
                            >
                                "+"
                            </button>
                        </div>
                        <span class="cart-line__subtotal">{format_price(line.subtotal)}</span>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <SeoHead title="Your cart"/>
        <section class="page cafe-cart">
            <h1>
                "Your cart"
                <Show when=move || cart.with(|cart| cart.as_ref().is_some_and(|cart| cart.cart_count > 0))>
                    <span class="muted">
                        {move || format!(" ({})", item_count(cart.with(|cart| cart.as_ref().map_or(0, |cart| cart.cart_count))))}
                    </span>
                </Show>
            </h1>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || cart.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading cart..."</p> }>
                <Show when=move || !is_empty() fallback=|| view! { <EmptyState title="Your cart is empty." message="Add something from the menu."/> }>
                    <ul class="cart-lines">{lines}</ul>
                </Show>
                <footer class="cart-summary">
                    <span class="cart-summary__total">
                        {move || format_price(cart.with(|cart| cart.as_ref().map_or(0.0, |cart| cart.total)))}
                    </span>
                    <a class="button" href="/cafe/menu">"Back to menu"</a>
                    <a
                        class="button button--primary"
                        class:button--disabled=is_empty
                        aria-disabled=move || is_empty().to_string()
                        href=move || if is_empty() { "#" } else { "/cafe/checkout" }
                        on:click=move |ev| {
                            if is_empty() {
                                ev.prevent_default();
                            }
                        }
                    >
                        "Checkout"
                    </a>
                </footer>
            </Show>
        </section>
    }
}
