//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod account;
pub mod hashing;
pub mod locale;
pub mod logging;

pub use account::{AccountResult, AccountService};
pub use hashing::{CredentialHasher, HashScheme};
pub use locale::{Locale, Translations};
pub use logging::{EntryPoint, LogEntry, LogEvent, LoggingService};
