//! Integration tests for huni-core
//!
//! These tests run the account service against a real `users.json` in a
//! temporary directory.
//!
//! Run with: cargo test --test integration_tests -- --nocapture

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use huni_core::adapters::JsonFileUserStore;
use huni_core::config::{Config, SETTINGS_FILE};
use huni_core::ports::UserStore;
use huni_core::services::hashing::sha256_hex;
use huni_core::services::{AccountService, CredentialHasher};
use huni_core::{ErrorKind, HashScheme, HuniContext, Locale, OperationResult, UserRecord};

// ============================================================================
// Test Helpers
// ============================================================================

/// Account service over `users.json` in a fresh temp dir
fn create_test_service(temp_dir: &TempDir) -> (AccountService, Arc<JsonFileUserStore>) {
    let store = Arc::new(JsonFileUserStore::new(temp_dir.path().join("users.json")));
    let service = AccountService::new(
        Arc::clone(&store) as Arc<dyn UserStore>,
        CredentialHasher::default(),
    );
    (service, store)
}

fn read_users_file(temp_dir: &TempDir) -> String {
    fs::read_to_string(temp_dir.path().join("users.json")).unwrap()
}

// ============================================================================
// Store round-trip
// ============================================================================

#[test]
fn test_save_of_load_is_a_no_op() {
    let temp_dir = TempDir::new().unwrap();
    let (service, store) = create_test_service(&temp_dir);

    service.register("a@gmail.com", "Pw1!", "Pw1!").unwrap();
    service.register("b@hotmail.com", "Pw2!", "Pw2!").unwrap();
    let before = read_users_file(&temp_dir);

    let records = store.load().unwrap();
    store.save(&records).unwrap();

    assert_eq!(read_users_file(&temp_dir), before);
}

#[test]
fn test_reads_file_written_by_another_tool() {
    let temp_dir = TempDir::new().unwrap();
    let digest = sha256_hex("Şifre1");
    // Compact formatting
    fs::write(
        temp_dir.path().join("users.json"),
        format!(r#"[{{"email": "u@gmail.com", "password": "{}"}}]"#, digest),
    )
    .unwrap();

    let (service, store) = create_test_service(&temp_dir);
    assert_eq!(store.load().unwrap(), vec![UserRecord::new("u@gmail.com", digest)]);
    assert!(service.authenticate("u@gmail.com", "Şifre1").unwrap());
}

// ============================================================================
// Account lifecycle
// ============================================================================

#[test]
fn test_end_to_end_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let (service, store) = create_test_service(&temp_dir);

    assert!(store.load().unwrap().is_empty());

    service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
    assert_eq!(store.load().unwrap().len(), 1);
    assert!(service.authenticate("u@gmail.com", "Pw1!").unwrap());

    service.reset_password("u@gmail.com", "Pw2!", "Pw2!").unwrap();
    assert!(!service.authenticate("u@gmail.com", "Pw1!").unwrap());
    assert!(service.authenticate("u@gmail.com", "Pw2!").unwrap());

    let records = store.load().unwrap();
    assert_eq!(records, vec![UserRecord::new("u@gmail.com", sha256_hex("Pw2!"))]);
}

#[test]
fn test_duplicate_registration_keeps_one_record() {
    let temp_dir = TempDir::new().unwrap();
    let (service, store) = create_test_service(&temp_dir);

    service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
    let err = service.register("u@gmail.com", "Pw9!", "Pw9!").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmailTaken);

    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert!(service.authenticate("u@gmail.com", "Pw1!").unwrap());
    assert!(!service.authenticate("u@gmail.com", "Pw9!").unwrap());
}

#[test]
fn test_failed_operations_leave_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let (service, _store) = create_test_service(&temp_dir);

    service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
    let before = read_users_file(&temp_dir);

    let failures = [
        service.register("u@gmail.com", "a", "b").unwrap_err(),
        service.register("x@yahoo.com", "a", "a").unwrap_err(),
        service.register("", "a", "a").unwrap_err(),
        service.reset_password("nobody@gmail.com", "a", "a").unwrap_err(),
        service.reset_password("u@gmail.com", "a", "b").unwrap_err(),
    ];
    let kinds: Vec<ErrorKind> = failures.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::Mismatch,
            ErrorKind::BadEmail,
            ErrorKind::Required,
            ErrorKind::NoSuchUser,
            ErrorKind::Mismatch,
        ]
    );

    assert_eq!(read_users_file(&temp_dir), before);
}

#[test]
fn test_no_file_written_until_first_registration() {
    let temp_dir = TempDir::new().unwrap();
    let (service, _store) = create_test_service(&temp_dir);

    assert!(!service.authenticate("u@gmail.com", "Pw1!").unwrap());
    service.reset_password("u@gmail.com", "Pw1!", "Pw1!").unwrap_err();

    assert!(!temp_dir.path().join("users.json").exists());
}

#[test]
fn test_malformed_store_surfaces_storage_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("users.json"), "[{\"email\": ").unwrap();
    let (service, _store) = create_test_service(&temp_dir);

    let err = service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Malformed);

    let result: OperationResult<bool> = service.authenticate("u@gmail.com", "Pw1!").into();
    assert!(!result.success);
    assert_eq!(result.error, Some(ErrorKind::Malformed));

    // Nothing was overwritten
    assert_eq!(read_users_file(&temp_dir), "[{\"email\": ");
}

#[test]
fn test_identical_passwords_share_digest_under_sha256() {
    let temp_dir = TempDir::new().unwrap();
    let (service, store) = create_test_service(&temp_dir);

    service.register("a@gmail.com", "same", "same").unwrap();
    service.register("b@gmail.com", "same", "same").unwrap();

    let records = store.load().unwrap();
    assert_eq!(records[0].password_digest, records[1].password_digest);
}

// ============================================================================
// Context wiring
// ============================================================================

#[test]
fn test_context_uses_configured_users_file_and_scheme() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(SETTINGS_FILE),
        r#"{"app": {"usersFile": "people.json", "hashScheme": "argon2id", "language": "tr"}}"#,
    )
    .unwrap();
    let config = Config::load_with_env(temp_dir.path(), |_| None).unwrap();

    let ctx = HuniContext::with_config(temp_dir.path(), config);
    assert_eq!(ctx.config.hash_scheme, HashScheme::Argon2id);
    assert_eq!(ctx.translations.locale(), Locale::Tr);

    ctx.account_service.register("u@gmail.com", "Pw1!", "Pw1!").unwrap();
    assert!(temp_dir.path().join("people.json").exists());
    assert!(!temp_dir.path().join("users.json").exists());

    let records = ctx.store.load().unwrap();
    assert!(records[0].password_digest.starts_with("$argon2id$"));
    assert!(ctx.account_service.authenticate("u@gmail.com", "Pw1!").unwrap());
}
