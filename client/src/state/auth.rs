//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component builds one [`AuthContext`] and provides it (and its
//! `ApiClient`) to the whole tree. Route guards and the app shell read
//! `state`; login, registration, profile edits and logout call `refresh`
//! or `logout` to resynchronise with the API.
//!
//! ERROR HANDLING
//! ==============
//! A failed session fetch is never surfaced: the anonymous session is a
//! valid state, so failures are logged and replaced by the fallback. Logout
//! failures are likewise logged and followed by a refresh.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::logging::warn;
use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::auth;
use crate::net::transport::{DefaultTransport, Transport};
use crate::net::types::{Session, SessionUser};

/// Current session plus whether the first fetch is still pending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: Session::anonymous(),
            loading: true,
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.authenticated
    }

    pub fn is_staff(&self) -> bool {
        self.session.is_staff()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.user.as_ref()
    }
}

/// Fetch the session, falling back to anonymous on any failure. A fetched
/// session seeds the client's CSRF cache.
pub async fn load_session<T: Transport>(api: &ApiClient<T>) -> Session {
    match auth::fetch_session(api).await {
        Ok(session) => {
            api.set_csrf_token(&session.csrf_token);
            session
        }
        Err(e) => {
            warn!("session fetch failed, continuing anonymously: {e}");
            Session::anonymous()
        }
    }
}

/// Log out (tolerating failure) and reload the session.
pub async fn logout_session<T: Transport>(api: &ApiClient<T>) -> Session {
    if let Err(e) = auth::logout(api).await {
        warn!("logout request failed: {e}");
    }
    load_session(api).await
}

/// Shared handle to the session signal and the API client that feeds it.
pub struct AuthContext<T: Transport = DefaultTransport> {
    pub state: RwSignal<AuthState>,
    api: ApiClient<T>,
}

impl<T: Transport> Clone for AuthContext<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            api: self.api.clone(),
        }
    }
}

impl<T: Transport> AuthContext<T> {
    pub fn new(api: ApiClient<T>) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            api,
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Reactive: re-evaluated whenever the session changes.
    pub fn is_staff(&self) -> bool {
        self.state.with(AuthState::is_staff)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    fn store(&self, session: Session) {
        self.state.try_update(|state| state.session = session);
    }

    pub async fn refresh(&self) {
        let session = load_session(&self.api).await;
        self.store(session);
    }

    pub async fn logout(&self) {
        let session = logout_session(&self.api).await;
        self.store(session);
    }

    /// First load: refresh, then clear `loading` whatever the outcome.
    pub async fn bootstrap(&self) {
        self.refresh().await;
        self.state.try_update(|state| state.loading = false);
    }
}

/// Build the auth context, provide it and its API client, and return it.
pub fn provide_auth(api: ApiClient) -> AuthContext {
    let auth = AuthContext::new(api.clone());
    provide_context(api);
    provide_context(auth.clone());
    auth
}

/// Auth context of the enclosing provider.
///
/// # Panics
///
/// Panics when called outside the provider installed by `App`.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// API client of the enclosing provider.
///
/// # Panics
///
/// Panics when called outside the provider installed by `App`.
pub fn use_api() -> ApiClient {
    expect_context::<ApiClient>()
}
