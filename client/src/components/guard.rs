//! Route guards wrapping protected pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards only read the auth context; the decision itself lives in
//! `util::guard`. While the session loads, and after a denial, a neutral
//! placeholder is rendered so protected children never mount for a
//! visitor who may not see them.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_auth;
use crate::util::guard::{GuardDecision, GuardPolicy, evaluate};

/// Renders `children` only for signed-in visitors.
#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::Authenticated, children)
}

/// Renders `children` only for admins and baristas.
#[component]
pub fn StaffGuard(children: ChildrenFn) -> impl IntoView {
    guarded(GuardPolicy::Staff, children)
}

fn guarded(policy: GuardPolicy, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| auth.state.with(|state| evaluate(state, policy)));
    let navigate = use_navigate();

    Effect::new(move || {
        if let GuardDecision::Denied { redirect_to } = decision.get() {
            navigate(
                redirect_to,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Granted
            fallback=|| view! { <div class="route-guard" aria-busy="true"></div> }
        >
            {children()}
        </Show>
    }
}
