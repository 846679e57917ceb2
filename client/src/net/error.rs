//! Error type shared by every API call.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into one user-facing message. Pages render
//! `err.to_string()` verbatim; the variants only exist so callers and tests
//! can tell a server rejection from a transport fault.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Failure surfaced by [`crate::net::api::ApiClient`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// No response at all. Carries the transport's own message.
    #[error("{0}")]
    Network(String),
    /// A 2xx payload did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The CSRF bootstrap endpoint answered with a non-2xx status.
    #[error("Unable to initialize CSRF cookie (HTTP {0})")]
    CsrfBootstrap(u16),
}

impl ApiError {
    /// Build the error for a non-2xx response from its parsed payload.
    pub fn from_response(status: u16, payload: &Value) -> Self {
        Self::Status {
            status,
            message: status_message(status, payload),
        }
    }

    /// HTTP status when the server responded, `None` for transport faults.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::CsrfBootstrap(status) => Some(*status),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Pick the user-facing message for a failed response.
///
/// Priority: `detail`, then `errors`, then `HTTP <status>`. Non-string
/// values are rendered as compact JSON.
pub fn status_message(status: u16, payload: &Value) -> String {
    ["detail", "errors"]
        .iter()
        .filter_map(|field| payload.get(field))
        .find(|value| is_present(value))
        .map_or_else(|| format!("HTTP {status}"), stringify)
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
