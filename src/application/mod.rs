//! Application layer: orchestration of linking sessions.
//!
//! `LinkFlow` is the live, single-writer handle for one session and publishes
//! snapshots to subscribed renderers. `ReplayEngine` drives many recorded
//! sessions through a `StateStore`. `BankFormView` is the renderer-facing
//! projection of a state.

pub mod engine;
pub mod flow;
pub mod view;
