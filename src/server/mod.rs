//! Server module for building the HTTP application
//!
//! This module provides a `ServerBuilder` that wires the configuration and
//! stores into a `ServerHost`, and a router exposing:
//! - the API index and the event resource routes
//! - health check routes

pub mod builder;
pub mod host;
pub mod router;

pub use builder::ServerBuilder;
pub use host::{AppState, ServerHost};
pub use router::build_router;
