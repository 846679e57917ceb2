//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, route guards, and the small presentational
//! pieces shared by pages. Only the shell and the guards read context.

pub mod app_shell;
pub mod empty_state;
pub mod error_text;
pub mod flair_badge;
pub mod guard;
pub mod pagination;
pub mod seo_head;
pub mod service_card;
pub mod tag_chip;
