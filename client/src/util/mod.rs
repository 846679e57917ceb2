//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers live here so pages and components stay thin and the logic
//! can be tested natively.

pub mod debounce;
pub mod format;
pub mod guard;
pub mod pagination;
pub mod phone;
pub mod query;
