//! Result and error types for the core library
//!
//! Every failure the account service can report maps to a stable,
//! machine-readable [`ErrorKind`]. Front ends pick the user-facing message
//! for a kind from the locale table; the core never produces display text
//! meant for end users.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons an input fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// At least one field was empty
    Required,
    /// Email is not on the allow-list pattern
    BadEmail,
    /// Password and confirmation differ
    Mismatch,
}

/// Reasons the credential store fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageErrorKind {
    ReadFailed,
    WriteFailed,
    Malformed,
}

/// Core library error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(ValidationError),

    #[error("Conflict: email_taken")]
    EmailTaken,

    #[error("Not found: no_such_user")]
    NoSuchUser,

    #[error("Storage error ({kind}): {message}")]
    Storage {
        kind: StorageErrorKind,
        message: String,
    },

    #[error("Hashing error: {0}")]
    Hashing(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(reason: ValidationError) -> Self {
        Self::Validation(reason)
    }

    /// Create a storage error
    pub fn storage(kind: StorageErrorKind, message: impl Into<String>) -> Self {
        Self::Storage {
            kind,
            message: message.into(),
        }
    }

    /// Machine-readable kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(reason) => (*reason).into(),
            Self::EmailTaken => ErrorKind::EmailTaken,
            Self::NoSuchUser => ErrorKind::NoSuchUser,
            Self::Storage { kind, .. } => (*kind).into(),
            Self::Hashing(_) => ErrorKind::HashFailed,
        }
    }

    /// Broad category of this error
    pub fn category(&self) -> ErrorCategory {
        self.kind().category()
    }
}

/// Flat, serializable error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    BadEmail,
    Mismatch,
    EmailTaken,
    NoSuchUser,
    ReadFailed,
    WriteFailed,
    Malformed,
    HashFailed,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 9] = [
        ErrorKind::Required,
        ErrorKind::BadEmail,
        ErrorKind::Mismatch,
        ErrorKind::EmailTaken,
        ErrorKind::NoSuchUser,
        ErrorKind::ReadFailed,
        ErrorKind::WriteFailed,
        ErrorKind::Malformed,
        ErrorKind::HashFailed,
    ];

    /// Stable snake_case code, also used as the locale table key
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::BadEmail => "bad_email",
            ErrorKind::Mismatch => "mismatch",
            ErrorKind::EmailTaken => "email_taken",
            ErrorKind::NoSuchUser => "no_such_user",
            ErrorKind::ReadFailed => "read_failed",
            ErrorKind::WriteFailed => "write_failed",
            ErrorKind::Malformed => "malformed",
            ErrorKind::HashFailed => "hash_failed",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorKind::Required | ErrorKind::BadEmail | ErrorKind::Mismatch => {
                ErrorCategory::Validation
            }
            ErrorKind::EmailTaken => ErrorCategory::Conflict,
            ErrorKind::NoSuchUser => ErrorCategory::NotFound,
            ErrorKind::ReadFailed | ErrorKind::WriteFailed | ErrorKind::Malformed => {
                ErrorCategory::Storage
            }
            ErrorKind::HashFailed => ErrorCategory::Hashing,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ErrorKind::from(*self), f)
    }
}

impl fmt::Display for StorageErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ErrorKind::from(*self), f)
    }
}

impl From<ValidationError> for ErrorKind {
    fn from(reason: ValidationError) -> Self {
        match reason {
            ValidationError::Required => ErrorKind::Required,
            ValidationError::BadEmail => ErrorKind::BadEmail,
            ValidationError::Mismatch => ErrorKind::Mismatch,
        }
    }
}

impl From<StorageErrorKind> for ErrorKind {
    fn from(kind: StorageErrorKind) -> Self {
        match kind {
            StorageErrorKind::ReadFailed => ErrorKind::ReadFailed,
            StorageErrorKind::WriteFailed => ErrorKind::WriteFailed,
            StorageErrorKind::Malformed => ErrorKind::Malformed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Storage,
    Hashing,
}

/// Core library result type
pub type Result<T> = std::result::Result<T, Error>;

/// Operation outcome handed to front ends (success flag + error kind)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ErrorKind>,
}

impl<T> OperationResult<T> {
    /// Create a successful result
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a failed result
    pub fn fail(kind: ErrorKind) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(kind),
        }
    }
}

impl<T> From<Result<T>> for OperationResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(e) => Self::fail(e.kind()),
        }
    }
}
