//! Account service - registration, password reset and login
//!
//! Every operation is one load-mutate-save cycle against the store. All
//! checks run before `save`, so a failed call never changes what is on disk.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::result::{Error, Result, ValidationError};
use crate::domain::{passwords_match, validate_email, UserRecord};
use crate::ports::UserStore;
use crate::services::hashing::CredentialHasher;

/// Account service over a user store
pub struct AccountService {
    store: Arc<dyn UserStore>,
    hasher: CredentialHasher,
}

/// Returned by successful register and reset calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountResult {
    pub email: String,
    pub total_users: usize,
}

impl AccountService {
    pub fn new(store: Arc<dyn UserStore>, hasher: CredentialHasher) -> Self {
        Self { store, hasher }
    }

    /// Register a new user
    ///
    /// Surrounding whitespace is trimmed from the email before it is checked
    /// and stored. Passwords are taken as given.
    pub fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AccountResult> {
        let email = email.trim();
        check_credentials(email, password, confirm_password)?;

        let mut users = self.store.load()?;
        if users.iter().any(|u| u.email == email) {
            return Err(Error::EmailTaken);
        }

        users.push(UserRecord::new(email, self.hasher.hash(password)?));
        self.store.save(&users)?;

        Ok(AccountResult {
            email: email.to_string(),
            total_users: users.len(),
        })
    }

    /// Replace the password of an existing user
    ///
    /// Every record with this email is dropped and a single fresh record is
    /// appended at the end.
    pub fn reset_password(
        &self,
        email: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<AccountResult> {
        let email = email.trim();
        check_credentials(email, new_password, confirm_password)?;

        let users = self.store.load()?;
        if !users.iter().any(|u| u.email == email) {
            return Err(Error::NoSuchUser);
        }

        let digest = self.hasher.hash(new_password)?;
        let mut users: Vec<UserRecord> = users.into_iter().filter(|u| u.email != email).collect();
        users.push(UserRecord::new(email, digest));
        self.store.save(&users)?;

        Ok(AccountResult {
            email: email.to_string(),
            total_users: users.len(),
        })
    }

    /// Check a login attempt
    ///
    /// Unknown email and wrong password both yield `false`. Only storage
    /// failures are reported as errors.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<bool> {
        let users = self.store.load()?;
        Ok(users
            .iter()
            .any(|u| u.email == email && self.hasher.verify(password, &u.password_digest)))
    }

    /// Number of registered users
    pub fn user_count(&self) -> Result<usize> {
        Ok(self.store.load()?.len())
    }
}

/// Empty fields, then email format, then confirmation
fn check_credentials(email: &str, password: &str, confirm_password: &str) -> Result<()> {
    if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
        return Err(Error::validation(ValidationError::Required));
    }
    if !validate_email(email) {
        return Err(Error::validation(ValidationError::BadEmail));
    }
    if !passwords_match(password, confirm_password) {
        return Err(Error::validation(ValidationError::Mismatch));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryUserStore;
    use crate::domain::ErrorKind;
    use crate::services::hashing::{sha256_hex, HashScheme};

    fn service_with(store: Arc<InMemoryUserStore>) -> AccountService {
        AccountService::new(store, CredentialHasher::default())
    }

    #[test]
    fn test_register_appends_hashed_record() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        let result = service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        assert_eq!(result.total_users, 1);

        let users = store.load().unwrap();
        assert_eq!(users, vec![UserRecord::new("u@gmail.com", sha256_hex("Pw1!"))]);
    }

    #[test]
    fn test_register_check_order() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        // Empty wins over bad email and mismatch
        let err = service.register("bad", "", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);

        // Bad email wins over mismatch
        let err = service.register("u@yahoo.com", "a", "b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadEmail);

        let err = service.register("u@gmail.com", "a", "b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Mismatch);

        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_register_mismatch_regardless_of_store_state() {
        let store = Arc::new(InMemoryUserStore::with_records(vec![UserRecord::new(
            "u@gmail.com",
            sha256_hex("x"),
        )]));
        let service = service_with(Arc::clone(&store));

        let err = service.register("u@gmail.com", "Pw1!", "Pw2!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Mismatch);
        let err = service.register("new@gmail.com", "Pw1!", "Pw2!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Mismatch);
    }

    #[test]
    fn test_register_twice_is_conflict() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        let err = service.register("u@gmail.com", "Other1", "Other1").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmailTaken);

        let users = store.load().unwrap();
        assert_eq!(users.iter().filter(|u| u.email == "u@gmail.com").count(), 1);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_register_trims_email() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        service.register("  u@gmail.com \t", "Pw1!", "Pw1!").unwrap();
        assert_eq!(store.load().unwrap()[0].email, "u@gmail.com");

        let err = service.register("u@gmail.com ", "Pw1!", "Pw1!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmailTaken);

        let err = service.register("   ", "Pw1!", "Pw1!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);
    }

    #[test]
    fn test_reset_trims_email() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        service.reset_password("  u@gmail.com ", "Pw2!", "Pw2!").unwrap();

        let records = store.load().unwrap();
        assert_eq!(records, vec![UserRecord::new("u@gmail.com", sha256_hex("Pw2!"))]);
        assert!(service.authenticate("u@gmail.com", "Pw2!").unwrap());
    }

    #[test]
    fn test_reset_blank_email_is_required() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        let err = service.reset_password("   ", "a", "a").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Required);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_email_is_case_sensitive() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        service.register("U@gmail.com", "Pw1!", "Pw1!").unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
        assert!(!service.authenticate("U@gmail.com", "wrong").unwrap());
    }

    #[test]
    fn test_reset_unknown_user_leaves_store_unchanged() {
        let before = vec![UserRecord::new("a@gmail.com", sha256_hex("x"))];
        let store = Arc::new(InMemoryUserStore::with_records(before.clone()));
        let service = service_with(Arc::clone(&store));

        let err = service.reset_password("b@gmail.com", "Pw2!", "Pw2!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchUser);
        assert_eq!(store.load().unwrap(), before);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_reset_validation() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store);

        assert_eq!(
            service.reset_password("", "a", "a").unwrap_err().kind(),
            ErrorKind::Required
        );
        assert_eq!(
            service.reset_password("u@yahoo.com", "a", "a").unwrap_err().kind(),
            ErrorKind::BadEmail
        );
        assert_eq!(
            service.reset_password("u@gmail.com", "a", "b").unwrap_err().kind(),
            ErrorKind::Mismatch
        );
    }

    #[test]
    fn test_reset_moves_record_to_end_and_drops_duplicates() {
        let store = Arc::new(InMemoryUserStore::with_records(vec![
            UserRecord::new("u@gmail.com", sha256_hex("old1")),
            UserRecord::new("other@gmail.com", sha256_hex("x")),
            UserRecord::new("u@gmail.com", sha256_hex("old2")),
        ]));
        let service = service_with(Arc::clone(&store));

        let result = service.reset_password("u@gmail.com", "Pw2!", "Pw2!").unwrap();
        assert_eq!(result.total_users, 2);

        let users = store.load().unwrap();
        assert_eq!(
            users,
            vec![
                UserRecord::new("other@gmail.com", sha256_hex("x")),
                UserRecord::new("u@gmail.com", sha256_hex("Pw2!")),
            ]
        );
    }

    #[test]
    fn test_authenticate() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(store);

        assert!(!service.authenticate("u@gmail.com", "Pw1!").unwrap());

        service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        assert!(service.authenticate("u@gmail.com", "Pw1!").unwrap());
        assert!(!service.authenticate("u@gmail.com", "Pw1").unwrap());
        assert!(!service.authenticate("x@gmail.com", "Pw1!").unwrap());
        // Login uses the email exactly as typed
        assert!(!service.authenticate(" u@gmail.com", "Pw1!").unwrap());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = service_with(Arc::clone(&store));

        service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
        assert_eq!(service.user_count().unwrap(), 1);
        assert!(service.authenticate("u@gmail.com", "Pw1!").unwrap());

        service.reset_password("u@gmail.com", "Pw2!", "Pw2!").unwrap();
        assert!(!service.authenticate("u@gmail.com", "Pw1!").unwrap());
        assert!(service.authenticate("u@gmail.com", "Pw2!").unwrap());
        assert_eq!(service.user_count().unwrap(), 1);
    }

    #[test]
    fn test_legacy_digest_survives_scheme_switch() {
        let store = Arc::new(InMemoryUserStore::new());
        service_with(Arc::clone(&store))
            .register("old@gmail.com", "Pw1!", "Pw1!")
            .unwrap();

        let argon = AccountService::new(
            Arc::clone(&store) as Arc<dyn UserStore>,
            CredentialHasher::new(HashScheme::Argon2id),
        );
        assert!(argon.authenticate("old@gmail.com", "Pw1!").unwrap());

        argon.reset_password("old@gmail.com", "Pw2!", "Pw2!").unwrap();
        let users = store.load().unwrap();
        assert!(users[0].password_digest.starts_with("$argon2id$"));
        assert!(argon.authenticate("old@gmail.com", "Pw2!").unwrap());
        assert!(!argon.authenticate("old@gmail.com", "Pw1!").unwrap());
    }
}
