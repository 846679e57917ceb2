//! Scripted in-memory transport for native tests.

use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::task::{Context, Poll};

use super::api::{ApiClient, ApiConfig};
use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

type Reply = Result<HttpResponse, ApiError>;

#[derive(Default)]
struct MockState {
    requests: Vec<HttpRequest>,
    replies: HashMap<(Method, String), VecDeque<Reply>>,
    cookies: HashMap<String, String>,
}

/// Records every request and answers from per-route reply queues.
///
/// The last queued reply for a route is reused once the queue drains.
/// Unscripted routes answer `404 {"detail": "not found"}`.
#[derive(Default)]
pub struct MockTransport {
    state: Mutex<MockState>,
    yield_before_reply: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspend every `send` once so concurrent callers interleave.
    pub fn yielding() -> Self {
        Self {
            yield_before_reply: true,
            ..Self::default()
        }
    }

    pub fn client(self) -> ApiClient<Self> {
        ApiClient::with_transport(self, ApiConfig::default())
    }

    pub fn reply(&self, method: Method, url: &str, status: u16, body: &str) {
        self.reply_with(method, url, Ok(HttpResponse::new(status, body)));
    }

    pub fn reply_with(&self, method: Method, url: &str, reply: Reply) {
        let mut state = self.state.lock().expect("mock lock");
        state
            .replies
            .entry((method, url.to_owned()))
            .or_default()
            .push_back(reply);
    }

    pub fn set_cookie(&self, name: &str, value: &str) {
        let mut state = self.state.lock().expect("mock lock");
        state.cookies.insert(name.to_owned(), value.to_owned());
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().expect("mock lock").requests.clone()
    }

    pub fn requests_to(&self, method: Method, url: &str) -> Vec<HttpRequest> {
        self.requests()
            .into_iter()
            .filter(|req| req.method == method && req.url == url)
            .collect()
    }

    fn answer(&self, request: &HttpRequest) -> Reply {
        let mut state = self.state.lock().expect("mock lock");
        let key = (request.method, request.url.clone());
        match state.replies.get_mut(&key) {
            Some(queue) if queue.len() > 1 => queue.pop_front().expect("non-empty queue"),
            Some(queue) if !queue.is_empty() => queue[0].clone(),
            _ => Ok(HttpResponse::new(404, r#"{"detail":"not found"}"#)),
        }
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.state.lock().expect("mock lock").requests.push(request.clone());
        if self.yield_before_reply {
            YieldOnce(false).await;
        }
        self.answer(&request)
    }

    fn cookie(&self, name: &str) -> Option<String> {
        self.state.lock().expect("mock lock").cookies.get(name).cloned()
    }
}

struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}
