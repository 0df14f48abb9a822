//! User record domain model

use serde::{Deserialize, Serialize};

/// A registered user as persisted in the credential store
///
/// The digest is stored under the `password` key to stay compatible with
/// existing `users.json` files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(rename = "password")]
    pub password_digest: String,
}

impl UserRecord {
    pub fn new(email: impl Into<String>, password_digest: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password_digest: password_digest.into(),
        }
    }
}
