//! Credential hashing
//!
//! The default scheme is unsalted SHA-256 rendered as 64 lowercase hex
//! characters, which is what existing `users.json` files contain. It gives
//! identical digests for identical passwords and is open to precomputed
//! table attacks. `argon2id` is the salted alternative; it stores a PHC
//! string (`$argon2id$v=19$...`) that carries its own salt and parameters.
//!
//! Verification looks at the stored digest, not at the configured scheme,
//! so records written under either scheme keep working after a switch.

use std::fmt;
use std::str::FromStr;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::domain::result::{Error, Result};

/// Length of a SHA-256 hex digest
pub const SHA256_HEX_LEN: usize = 64;

const ARGON2_PREFIX: &str = "$argon2";

/// Scheme used when writing new digests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashScheme {
    #[default]
    Sha256,
    Argon2id,
}

impl HashScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashScheme::Sha256 => "sha256",
            HashScheme::Argon2id => "argon2id",
        }
    }
}

impl fmt::Display for HashScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashScheme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(HashScheme::Sha256),
            "argon2id" | "argon2" => Ok(HashScheme::Argon2id),
            other => Err(format!("Unknown hash scheme: {}. Available: sha256, argon2id", other)),
        }
    }
}

/// Unsalted SHA-256 of the password, lowercase hex
pub fn sha256_hex(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Hashes new passwords and verifies stored digests
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialHasher {
    scheme: HashScheme,
}

impl CredentialHasher {
    pub fn new(scheme: HashScheme) -> Self {
        Self { scheme }
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Produce the digest to store for `password`
    pub fn hash(&self, password: &str) -> Result<String> {
        match self.scheme {
            HashScheme::Sha256 => Ok(sha256_hex(password)),
            HashScheme::Argon2id => {
                let salt = SaltString::generate(&mut rand::rngs::OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|hash| hash.to_string())
                    .map_err(|e| Error::Hashing(e.to_string()))
            }
        }
    }

    /// Check `password` against a stored digest of either scheme
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        if digest.starts_with(ARGON2_PREFIX) {
            match PasswordHash::new(digest) {
                Ok(parsed) => Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok(),
                Err(_) => false,
            }
        } else {
            sha256_hex(password).as_bytes().ct_eq(digest.as_bytes()).into()
        }
    }
}
