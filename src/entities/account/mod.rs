//! User accounts

pub mod model;
pub mod service;
pub mod store;

pub use model::{Account, AccountRole, UserDetails};
pub use service::AccountService;
pub use store::AccountStore;
