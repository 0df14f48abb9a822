//! Core domain entities
//!
//! Pure data structures and validation rules - no I/O.

mod user;
pub mod result;
pub mod validation;

pub use user::UserRecord;
pub use result::{Error, ErrorCategory, ErrorKind, OperationResult, StorageErrorKind, ValidationError};
pub use validation::{passwords_match, validate_email};
