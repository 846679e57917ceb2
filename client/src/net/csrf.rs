//! CSRF token cache and single-flight cookie bootstrap.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by one `ApiClient` (and shared by its clones). The cached token is
//! fed from the bootstrap endpoint, the session payload, and any response
//! that carries a `csrf_token`.
//!
//! DESIGN
//! ======
//! Bootstrap is a three-state machine. The first write that needs a token
//! becomes the leader and performs the request; concurrent writes park on a
//! oneshot and receive the leader's outcome. Success is terminal. Failure
//! (or a leader dropped mid-flight) returns to `Idle` so a later write can
//! retry.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use std::sync::{Mutex, MutexGuard, PoisonError};

use futures::channel::oneshot;

use super::error::ApiError;

type Waiter = oneshot::Sender<Result<(), ApiError>>;

#[derive(Debug, Default)]
enum BootstrapState {
    #[default]
    Idle,
    InFlight(Vec<Waiter>),
    Done,
}

/// What a caller must do to obtain a bootstrapped CSRF cookie.
#[derive(Debug)]
pub(crate) enum BootstrapTicket {
    /// Bootstrap already succeeded.
    Ready,
    /// Caller must perform the bootstrap and report back via `finish`.
    Lead,
    /// Another caller is bootstrapping; await its outcome.
    Wait(oneshot::Receiver<Result<(), ApiError>>),
}

#[derive(Debug, Default)]
pub struct CsrfStore {
    token: Mutex<Option<String>>,
    bootstrap: Mutex<BootstrapState>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CsrfStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently observed server token.
    pub fn token(&self) -> Option<String> {
        lock(&self.token).clone()
    }

    /// Replace the cached token. Empty values are ignored.
    pub fn set_token(&self, token: &str) {
        if token.is_empty() {
            return;
        }
        *lock(&self.token) = Some(token.to_owned());
    }

    /// Token to send: the cache first, then the cookie.
    pub fn resolve(&self, cookie: Option<String>) -> Option<String> {
        self.token().or(cookie).filter(|token| !token.is_empty())
    }

    pub fn is_bootstrapped(&self) -> bool {
        matches!(*lock(&self.bootstrap), BootstrapState::Done)
    }

    pub(crate) fn begin_bootstrap(&self) -> BootstrapTicket {
        let mut state = lock(&self.bootstrap);
        match &mut *state {
            BootstrapState::Done => BootstrapTicket::Ready,
            BootstrapState::InFlight(waiters) => {
                let (tx, rx) = oneshot::channel();
                waiters.push(tx);
                BootstrapTicket::Wait(rx)
            }
            BootstrapState::Idle => {
                *state = BootstrapState::InFlight(Vec::new());
                BootstrapTicket::Lead
            }
        }
    }

    pub(crate) fn finish_bootstrap(&self, outcome: &Result<(), ApiError>) {
        let next = if outcome.is_ok() {
            BootstrapState::Done
        } else {
            BootstrapState::Idle
        };
        let previous = std::mem::replace(&mut *lock(&self.bootstrap), next);
        if let BootstrapState::InFlight(waiters) = previous {
            for waiter in waiters {
                // Receiver may already be gone.
                let _ = waiter.send(outcome.clone());
            }
        }
    }
}

/// Releases waiters if the bootstrap leader is dropped before finishing.
pub(crate) struct LeaderGuard<'a> {
    store: Option<&'a CsrfStore>,
}

impl<'a> LeaderGuard<'a> {
    pub(crate) fn new(store: &'a CsrfStore) -> Self {
        Self { store: Some(store) }
    }

    pub(crate) fn finish(mut self, outcome: &Result<(), ApiError>) {
        if let Some(store) = self.store.take() {
            store.finish_bootstrap(outcome);
        }
    }
}

impl Drop for LeaderGuard<'_> {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            store.finish_bootstrap(&Err(ApiError::Network("CSRF bootstrap was cancelled".to_owned())));
        }
    }
}
