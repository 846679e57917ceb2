//! Networking for the JSON API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the request pipeline (CSRF, headers, error normalisation),
//! `transport` the browser/server seam beneath it, `csrf` the token cache
//! and bootstrap, and `types` the wire schema. The remaining modules are
//! typed endpoint groups, one per API area.

pub mod api;
pub mod auth;
pub mod blog;
pub mod cafe;
pub mod cowork;
pub mod csrf;
pub mod error;
pub mod freelancers;
pub mod staff;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;
