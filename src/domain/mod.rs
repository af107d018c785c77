//! Domain layer: the bank form state, its linked account and the events that
//! move it forward. Everything here is plain data with pure transitions.

pub mod account;
pub mod event;
pub mod ports;
pub mod state;
pub mod text;
