//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - JSON document on disk for the UserStore port
//! - In-memory list for tests

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileUserStore;
pub use memory::InMemoryUserStore;
