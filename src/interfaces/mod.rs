//! Interface adapters for the `bankform` binary.

pub mod csv;
