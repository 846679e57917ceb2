//! Site chrome: header navigation, account area, and page outlet.
//!
//! DESIGN
//! ======
//! Navigation entries are static data filtered by audience so the same
//! list drives both the header and its tests.

#[cfg(test)]
#[path = "app_shell_test.rs"]
mod app_shell_test;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::net::types::SessionUser;
use crate::state::auth::use_auth;

/// Who a navigation entry is shown to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Audience {
    Everyone,
    SignedIn,
    Staff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub audience: Audience,
}

impl NavItem {
    pub fn visible_to(self, is_authenticated: bool, is_staff: bool) -> bool {
        match self.audience {
            Audience::Everyone => true,
            Audience::SignedIn => is_authenticated,
            Audience::Staff => is_staff,
        }
    }
}

const fn entry(href: &'static str, label: &'static str, audience: Audience) -> NavItem {
    NavItem { href, label, audience }
}

pub const NAV_ITEMS: [NavItem; 12] = [
    entry("/", "Home", Audience::Everyone),
    entry("/cafe/menu", "Cafe", Audience::Everyone),
    entry("/cowork", "Cowork", Audience::Everyone),
    entry("/blog", "Blog", Audience::Everyone),
    entry("/freelancers", "Freelancers", Audience::Everyone),
    entry("/cafe/dashboard", "Orders desk", Audience::Staff),
    entry("/cafe/manual-order", "Manual order", Audience::Staff),
    entry("/cafe/manage-menu", "Menu & stock", Audience::Staff),
    entry("/cafe/lookup", "Lookup", Audience::Staff),
    entry("/cafe/analytics", "Analytics", Audience::Staff),
    entry("/staff/users", "Users", Audience::Staff),
    entry("/cafe/orders", "My orders", Audience::SignedIn),
];

/// Entries visible to the current visitor, in display order.
pub fn visible_nav(is_authenticated: bool, is_staff: bool) -> Vec<NavItem> {
    NAV_ITEMS
        .iter()
        .copied()
        .filter(|item| item.visible_to(is_authenticated, is_staff))
        .collect()
}

/// Name to show in the header, falling back to the phone number.
pub fn user_label(user: &SessionUser) -> String {
    let name = user.full_name.trim();
    if name.is_empty() {
        user.phone_number.clone()
    } else {
        name.to_owned()
    }
}

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let nav = {
        let auth = auth.clone();
        move || {
            visible_nav(auth.is_authenticated(), auth.is_staff())
                .into_iter()
                .map(|item| {
                    view! {
                        <a class="app-nav__link" class:app-nav__link--staff=item.audience == Audience::Staff href=item.href>
                            {item.label}
                        </a>
                    }
                })
                .collect_view()
        }
    };

    let on_logout = {
        let auth = auth.clone();
        move |_| {
            if busy.get() {
                return;
            }
            busy.set(true);
            let auth = auth.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                auth.logout().await;
                busy.try_set(false);
                navigate("/", Default::default());
            });
        }
    };

    let account = {
        let auth = auth.clone();
        move || {
            let state = auth.state.get();
            match state.user().filter(|_| state.is_authenticated()) {
                Some(user) => {
                    let label = user_label(user);
                    let phone = user.phone_number.clone();
                    let on_logout = on_logout.clone();
                    view! {
                        <div class="app-account">
                            <a class="app-account__name" href="/profile">{label}</a>
                            <span class="app-account__phone">{phone}</span>
                            <button class="app-account__logout" on:click=on_logout disabled=move || busy.get()>
                                "Log out"
                            </button>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <div class="app-account">
                        <a class="app-account__link" href="/login">"Log in"</a>
                        <a class="app-account__link app-account__link--primary" href="/register">"Register"</a>
                    </div>
                }
                .into_any(),
            }
        }
    };

    view! {
        <div class="app-shell">
            <header class="app-header">
                <a class="app-header__brand" href="/">"Cowork & Cafe"</a>
                <nav class="app-nav">{nav}</nav>
                {account}
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
