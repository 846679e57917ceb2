//! Latest-wins debouncing for type-ahead lookups.
//!
//! Each keystroke takes a new [`DebounceTicket`]; after the delay and again
//! after the network call, the task checks that its ticket is still the
//! newest before touching any signal. Older responses are dropped.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Delay between the last keystroke and the lookup request.
pub const LOOKUP_DEBOUNCE_MS: u32 = 220;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate every outstanding ticket and issue a new one.
    pub fn bump(&self) -> DebounceTicket {
        DebounceTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: DebounceTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Cancel pending work without starting a new lookup.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

/// Sleep for `ms` in the browser; resolves immediately elsewhere.
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = ms;
}
