//! # learn-rest-api
//!
//! A hypermedia-driven REST API for managing events.
//!
//! ## Features
//!
//! - **HAL Responses**: every resource carries `_links`, collections embed
//!   their items and expose page navigation
//! - **Two-Stage Validation**: declarative field constraints, then
//!   cross-field business rules, all reported together
//! - **Paging and Sorting**: `?page=&size=&sort=field,DIR` on collections
//! - **Pluggable Stores**: stores are traits, in-memory implementations included
//! - **Accounts**: Argon2-hashed passwords and lookup by username
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use learn_rest_api::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(AppConfig::from_yaml_file("config.yaml")?)
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod links;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        AccountError, ApiError, ConfigError, Entity, EntityStore, Errors, Link, Links, Page,
        PageParams, PageRequest, Sort, StorageError, Validated, rel,
    };

    // === Entities ===
    pub use crate::entities::account::{Account, AccountRole, AccountService, AccountStore, UserDetails};
    pub use crate::entities::event::{Event, EventDto, EventResource, EventStatus, EventValidator};

    // === Hypermedia ===
    pub use crate::links::{
        EntityResource, ErrorsResource, HAL_JSON, Hal, PagedResource, Profile, RouteRegistry,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryAccountStore, InMemoryEntityStore};

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppState, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
