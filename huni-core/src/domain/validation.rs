//! Input validation
//!
//! Email validation is an allow-list, not a general syntax check: only
//! addresses at gmail.com, hotmail.com and outlook.com are accepted.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@(gmail\.com|hotmail\.com|outlook\.com)$")
        .expect("email pattern is valid")
});

/// Check an email against the accepted-domain pattern
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Check that a password and its confirmation are identical
pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}
