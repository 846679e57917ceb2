//! Route-guard decisions.
//!
//! The decision is a pure function of the auth state so the guard
//! components only have to render it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

/// Route every guard sends a denied visitor to.
pub const LOGIN_ROUTE: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardPolicy {
    Authenticated,
    Staff,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not loaded yet; render nothing protected.
    Pending,
    Denied { redirect_to: &'static str },
    Granted,
}

pub fn evaluate(state: &AuthState, policy: GuardPolicy) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    let allowed = match policy {
        GuardPolicy::Authenticated => state.is_authenticated(),
        GuardPolicy::Staff => state.is_authenticated() && state.is_staff(),
    };
    if allowed {
        GuardDecision::Granted
    } else {
        GuardDecision::Denied {
            redirect_to: LOGIN_ROUTE,
        }
    }
}
