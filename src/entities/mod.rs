//! Resources exposed by the API

pub mod macros;

pub mod account;
pub mod event;
