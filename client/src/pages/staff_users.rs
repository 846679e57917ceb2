//! User administration: search, activate or deactivate, and change roles.

#[cfg(test)]
#[path = "staff_users_test.rs"]
mod staff_users_test;

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::empty_state::EmptyState;
use crate::components::error_text::ErrorText;
use crate::components::seo_head::SeoHead;
use crate::net::staff::{self, USERS_PAGE_SIZE, UserFilter};
use crate::net::types::{Page, Role, StaffUser, UserRoles};
use crate::state::auth::use_api;

/// Highest role held; the API keeps the flags mutually exclusive but old
/// accounts may carry several.
pub fn role_of(roles: &UserRoles) -> Role {
    if roles.is_admin {
        Role::Admin
    } else if roles.is_barista {
        Role::Barista
    } else {
        Role::Customer
    }
}

/// Apply a filter edit; any change other than paging goes back to page 1.
pub fn refilter(filter: &mut UserFilter, edit: impl FnOnce(&mut UserFilter)) {
    let before = filter.clone();
    edit(filter);
    if *filter != before {
        filter.page = 1;
    }
}

/// A short page means there is nothing after it.
pub fn has_next_page(page: &Page<StaffUser>) -> bool {
    page.results.len() >= USERS_PAGE_SIZE as usize
}

pub fn total_label(page: &Page<StaffUser>) -> String {
    match page.count {
        1 => "1 user".to_owned(),
        n => format!("{n} users"),
    }
}

#[derive(Clone, Copy)]
enum UserAction {
    SetActive(i64, bool),
    SetRole(i64, Role),
}

impl UserAction {
    fn user_id(self) -> i64 {
        match self {
            Self::SetActive(id, _) | Self::SetRole(id, _) => id,
        }
    }
}

#[component]
pub fn StaffUsersPage() -> impl IntoView {
    let api = use_api();
    let filter = RwSignal::new(UserFilter {
        page: 1,
        ..UserFilter::default()
    });
    let users = RwSignal::new(None::<Page<StaffUser>>);
    let busy = RwSignal::new(HashSet::<i64>::new());
    let error = RwSignal::new(String::new());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            let current = filter.get_untracked();
            spawn_local(async move {
                match staff::fetch_users(&api, &current).await {
                    Ok(page) => {
                        users.try_set(Some(page));
                    }
                    Err(e) => {
                        users.try_set(Some(Page::default()));
                        error.try_set(e.to_string());
                    }
                }
            });
        }
    });
    Effect::new(move || {
        filter.track();
        load.run(());
    });

    let act = Callback::new(move |action: UserAction| {
        let id = action.user_id();
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
                UserAction::SetActive(id, active) => staff::set_user_active(&api, id, active).await,
                UserAction::SetRole(id, role) => staff::set_user_role(&api, id, role).await,
            };
            if let Err(e) = result {
                error.try_set(e.to_string());
            }
            busy.try_update(|set| set.remove(&id));
            load.run(());
        });
    });

    let rows = move || {
        let list = users.with(|page| page.as_ref().map(|p| p.results.clone()).unwrap_or_default());
        if list.is_empty() {
            return view! { <EmptyState title="No users match."/> }.into_any();
        }
        list.into_iter()
            .map(|user| {
                let id = user.id;
                let active = user.is_active;
                let current_role = role_of(&user.roles);
                let is_busy = move || busy.with(|set| set.contains(&id));
                view! {
                    <tr>
                        <td>{user.full_name}</td>
                        <td>{user.phone_number}</td>
                        <td>
                            <select
                                class="field field--small"
                                disabled=is_busy
                                on:change=move |ev| {
                                    if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                        if role != current_role {
                                            act.run(UserAction::SetRole(id, role));
                                        }
                                    }
                                }
                            >
                                {Role::ALL
                                    .into_iter()
                                    .map(|role| {
                                        view! {
                                            <option value=role.as_str() selected=role == current_role>
                                                {role.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </td>
                        <td>
                            <button
                                class="button button--small"
                                class:button--success=active
                                disabled=is_busy
                                on:click=move |_| act.run(UserAction::SetActive(id, !active))
                            >
                                {if active { "Active" } else { "Inactive" }}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    let page = move || filter.with(|f| f.page);
    let no_prev = move || page() <= 1;
    let no_next = move || !users.with(|p| p.as_ref().is_some_and(has_next_page));

    view! {
        <SeoHead title="Users"/>
        <section class="page staff-users">
            <header class="page-header">
                <h1>"Users"</h1>
                <span class="muted">{move || users.with(|page| page.as_ref().map(total_label))}</span>
            </header>
            <div class="filter-bar">
                <input
                    class="field"
                    type="search"
                    placeholder="Name or phone"
                    prop:value=move || filter.with(|f| f.q.clone())
                    on:change=move |ev| {
                        let q = event_target_value(&ev);
                        filter.update(|f| refilter(f, |f| f.q = q));
                    }
                />
                <select
                    class="field"
                    on:change=move |ev| {
                        let role = event_target_value(&ev);
                        filter.update(|f| refilter(f, |f| f.role = role));
                    }
                >
                    <option value="">"Any role"</option>
                    {Role::ALL
                        .into_iter()
                        .map(|role| view! { <option value=role.as_str()>{role.as_str()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="field"
                    on:change=move |ev| {
                        let state = event_target_value(&ev);
                        filter.update(|f| refilter(f, |f| f.is_active = state));
                    }
                >
                    <option value="">"Any status"</option>
                    <option value="true">"Active"</option>
                    <option value="false">"Inactive"</option>
                </select>
            </div>
            <ErrorText message=Signal::derive(move || error.get())/>
            <Show when=move || users.with(Option::is_some) fallback=|| view! { <p class="muted">"Loading users..."</p> }>
                <table class="user-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Phone"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
            <nav class="pagination">
                <button
                    class="button"
                    disabled=no_prev
                    on:click=move |_| filter.update(|f| f.page = f.page.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pagination__label">{move || format!("Page {}", page())}</span>
                <button class="button" disabled=no_next on:click=move |_| filter.update(|f| f.page += 1)>
                    "Next"
                </button>
            </nav>
        </section>
    }
}
