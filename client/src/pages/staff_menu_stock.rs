//! Menu and stock management: create items, toggle availability.

#[cfg(test)]
#[path = "staff_menu_stock_test.rs"]
mod staff_menu_stock_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::staff::{self, NewMenuItem};
use crate::net::types::{CategoryRef, StaffMenuItem};
use crate::state::auth::use_api;
use crate::util::format::format_price;
use crate::util::phone::to_latin_digits;

/// Raw form state; `category_id` is the `<select>` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemForm {
    pub name: String,
    pub description: String,
    pub price: String,
    pub category_id: String,
    pub is_available: bool,
}

impl Default for MenuItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category_id: String::new(),
            is_available: true,
        }
    }
}

impl MenuItemForm {
    /// Name, price and category must all be filled in.
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty() && !self.price.trim().is_empty() && self.category_id.parse::<i64>().is_ok()
    }

    pub fn to_request(&self) -> Option<NewMenuItem> {
        if !self.can_submit() {
            return None;
        }
        Some(NewMenuItem {
            name: self.name.trim().to_owned(),
            description: self.description.trim().to_owned(),
            price: to_latin_digits(self.price.trim()).replace(',', ""),
            category_id: self.category_id.parse().ok()?,
            is_available: self.is_available,
        })
    }
}

#[component]
pub fn StaffMenuStockPage() -> impl IntoView {
    let api = use_api();
    let categories = RwSignal::new(Vec::<CategoryRef>::new());
    let items = RwSignal::new(None::<Vec<StaffMenuItem>>);
    let form = RwSignal::new(MenuItemForm::default());
    let toggling = RwSignal::new(HashSet::<i64>::new());
    let creating = RwSignal::new(false);
    let error = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            spawn_local(async move {
                match staff::fetch_menu_stock(&api).await {
                    Ok((cats, stock)) => {
                        categories.try_set(cats.categories);
                        items.try_set(Some(stock.items));
                    }
                    Err(e) => {
                        items.try_set(Some(Vec::new()));
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });
    Effect::new(move || load.run(()));

    let on_create = {
        let api = api.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if creating.get() {
                return;
            }
            let Some(request) = form.with(MenuItemForm::to_request) else {
                return;
            };
            creating.set(true);
            error.set(String::new());
            let api = api.clone();
            spawn_local(async move {
                match staff::create_menu_item(&api, &request).await {
                    Ok(()) => {
                        form.try_set(MenuItemForm::default());
                        load.run(());
                    }
                    Err(e) => {
                        error.try_set(e.to_string());
                    }
                }
                creating.try_set(false);
            });
        }
    };

    let toggle = Callback::new(move |item_id: i64| {
        if toggling.with(|set| set.contains(&item_id)) {
            return;
        }
        toggling.update(|set| {
            set.insert(item_id);
        });
        error.set(String::new());
        let api = api.clone();
        spawn_local(async move {
            if let Err(e) = staff::toggle_item_availability(&api, item_id).await {
                error.try_set(e.to_string());
            }
            toggling.try_update(|set| set.remove(&item_id));
            load.run(());
        });
    });

    let rows = move || {
        let list = items.get().unwrap_or_default();
        if list.is_empty() {
            return view! { <EmptyState title="No menu items yet."/> }.into_any();
        }
        list.into_iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <tr>
                        <td>{item.name}</td>
                        <td>{item.category_name}</td>
                        <td>{format_price(item.price)}</td>
                        <td>
                            <button
                                class="button button--small"
                                class:button--success=item.is_available
                                disabled=move || toggling.with(|set| set.contains(&id))
                                on:click=move |_| toggle.run(id)
                            >
                                {if item.is_available { "Available" } else { "Out of stock" }}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <SeoHead title="Menu & stock"/>
        <section class="page staff-menu">
            <h1>"Menu & stock"</h1>
            <form class="card menu-item-form" on:submit=on_create>
                <h2>"New item"</h2>
                <input
                    class="field"
                    placeholder="Name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <textarea
                    class="field"
                    placeholder="Description"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <input
                    class="field"
                    inputmode="numeric"
                    placeholder="Price"
                    prop:value=move || form.with(|f| f.price.clone())
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
                <select
                    class="field"
                    prop:value=move || form.with(|f| f.category_id.clone())
                    on:change=move |ev| form.update(|f| f.category_id = event_target_value(&ev))
                >
                    <option value="">"Choose a category"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
                            .collect_view()
                    }}
                </select>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.is_available)
                        on:change=move |ev| form.update(|f| f.is_available = event_target_checked(&ev))
                    />
                    "Available now"
                </label>
                <button
                    class="button button--primary"
                    type="submit"
                    disabled=move || creating.get() || !form.with(MenuItemForm::can_submit)
                >
                    "Add item"
                </button>
            </form>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || items.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading menu..."</p> }>
                <table class="stock-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Category"</th>
                            <th>"Price"</th>
                            <th>"Availability"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </section>
    }
}
