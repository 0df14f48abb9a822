//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The account
//! service depends only on these traits, not on concrete storage.

mod user_store;

pub use user_store::UserStore;
