//! State model for linking a bank account inside a payment sheet.
//!
//! The core is [`domain::state::BankFormState`], an immutable value with pure
//! transitions and derived presentation values. The application layer wraps
//! it in a single-writer [`application::flow::LinkFlow`] that renderers
//! subscribe to, and a [`application::engine::ReplayEngine`] that replays
//! recorded flows against a [`domain::ports::StateStore`].

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
