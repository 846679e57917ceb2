//! Cafe menu with inline cart quantity controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Menu and cart load concurrently. The per-item quantity map is rebuilt
//! from the cart whenever a mutation response carries `items`; otherwise
//! the change is applied locally. The cart count always follows the
//! server's `cart_count`. A per-item busy set disables both buttons for an
//! item while its request is in flight.

#[cfg(test)]
#[path = "cafe_menu_test.rs"]
mod cafe_menu_test;

use std::collections::{HashMap, HashSet};

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::cafe::{self, CartChange};
use crate::net::types::{Cart, MenuItem, MenuPayload};
use crate::state::auth::use_api;
use crate::util::format::{format_price, item_count};

pub fn quantities_from_cart(cart: &Cart) -> HashMap<i64, i64> {
    cart.lines().iter().map(|line| (line.item_id, line.quantity)).collect()
}

/// Apply `delta` to one item, never going below zero. Zero entries are dropped.
pub fn apply_local_delta(quantities: &mut HashMap<i64, i64>, item_id: i64, delta: i64) {
    let next = (quantities.get(&item_id).copied().unwrap_or(0) + delta).max(0);
    if next == 0 {
        quantities.remove(&item_id);
    } else {
        quantities.insert(item_id, next);
    }
}

/// What the menu shows of the cart: per-item quantities and the item count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    pub quantities: HashMap<i64, i64>,
    pub count: i64,
}

impl CartState {
    pub fn from_cart(cart: &Cart) -> Self {
        Self {
            quantities: quantities_from_cart(cart),
            count: cart.cart_count.max(0),
        }
    }

    pub fn quantity(&self, item_id: i64) -> i64 {
        self.quantities.get(&item_id).copied().unwrap_or(0)
    }

    /// Reconcile with a cart mutation response.
    pub fn reconcile(&mut self, response: &Cart, change: CartChange) {
        if response.items.is_some() {
            self.quantities = quantities_from_cart(response);
        } else {
            apply_local_delta(&mut self.quantities, change.menu_item_id, change.delta);
        }
        self.count = response.cart_count.max(0);
    }
}

pub fn cart_link_label(count: i64) -> String {
    if count > 0 {
        format!("View cart ({})", item_count(count))
    } else {
        "View cart".to_owned()
    }
}

pub fn is_orderable(item: &MenuItem) -> bool {
    item.is_available.unwrap_or(true)
}

#[component]
pub fn CafeMenuPage() -> impl IntoView {
    let api = use_api();
    let menu = RwSignal::new(None::<MenuPayload>);
    let cart_state = RwSignal::new(CartState::default());
    let busy = RwSignal::new(HashSet::<i64>::new());
    let error = RwSignal::new(String::new());

    Effect::new({
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn_local(async move {
                match cafe::fetch_menu_and_cart(&api).await {
                    Ok((loaded, cart)) => {
                        cart_state.try_set(CartState::from_cart(&cart));
                        menu.try_set(Some(loaded));
                    }
                    Err(e) => {
                        menu.try_set(Some(MenuPayload::default()));
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });

    let change = Callback::new(move |change: CartChange| {
        if busy.with(|set| set.contains(&change.menu_item_id)) {
            return;
        }
        busy.update(|set| {
            set.insert(change.menu_item_id);
        });
        error.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            match cafe::change_cart_item(&api, change).await {
                Ok(cart) => {
                    cart_state.try_update(|state| state.reconcile(&cart, change));
                }
                Err(e) => {
                    error.try_set(e.to_string());
                }
            }
            busy.try_update(|set| set.remove(&change.menu_item_id));
        });
    });

    let categories = move || {
        menu.get().map(|menu| {
            if menu.categories.is_empty() {
                return view! { <EmptyState title="The menu is empty right now."/> }.into_any();
            }
            menu.categories
                .into_iter()
                .map(|category| {
                    view! {
                        <section class="menu-category">
                            <h2>{category.name}</h2>
                            <ul class="menu-items">
                                {category
                                    .items
                                    .into_iter()
                                    .map(|item| view! { <MenuRow item=item cart_state=cart_state busy=busy change=change/> })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()
                .into_any()
        })
    };

    view! {
        <SeoHead title="Cafe menu" description="Coffee, tea, and snacks from the cafe."/>
        <section class="page cafe-menu">
            <header class="page-header">
                <h1>"Menu"</h1>
                <a class="button" href="/cafe/cart">{move || cart_state.with(|state| cart_link_label(state.count))}</a>
            </header>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || menu.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading menu..."</p> }>
                {categories}
            </Show>
        </section>
    }
}

#[component]
fn MenuRow(
    item: MenuItem,
    cart_state: RwSignal<CartState>,
    busy: RwSignal<HashSet<i64>>,
    change: Callback<CartChange>,
) -> impl IntoView {
    let id = item.id;
    let orderable = is_orderable(&item);
    let quantity = move || cart_state.with(|state| state.quantity(id));
    let is_busy = move || busy.with(|set| set.contains(&id));
    let unavailable = !orderable;

    view! {
        <li class="menu-item" class:menu-item--unavailable=unavailable>
            <div class="menu-item__info">
                <span class="menu-item__name">{item.name}</span>
                <span class="menu-item__description">{item.description}</span>
                <span class="menu-item__price">{format_price(item.price)}</span>
            </div>
            <Show when=move || orderable fallback=|| view! { <span class="pill">"Unavailable"</span> }>
                <div class="stepper">
                    <button
                        class="stepper__button"
                        disabled=move || is_busy() || quantity() == 0
                        on:click=move |_| change.run(CartChange { menu_item_id: id, delta: -1 })
                    >
                        "-"
                    </button>
                    <span class="stepper__value">{quantity}</span>
                    <button
                        class="stepper__button"
                        disabled=is_busy
                        on:click=move |_| change.run(CartChange { menu_item_id: id, delta: 1 })
                    >
                        "+"
                    </button>
                </div>
            </Show>
        </li>
    }
}
