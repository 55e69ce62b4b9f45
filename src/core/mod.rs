//! Core module containing the fundamental traits and types of the API

pub mod entity;
pub mod error;
pub mod link;
pub mod query;
pub mod store;
pub mod validation;

pub use entity::Entity;
pub use error::{AccountError, ApiError, ConfigError, StorageError};
pub use link::{Link, Links, rel};
pub use query::{Direction, Page, PageParams, PageRequest, Sort};
pub use store::EntityStore;
pub use validation::{Errors, Validated};
