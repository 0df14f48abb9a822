//! HuNi Core - credential store and account logic
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: User records, validation rules, error taxonomy
//! - **ports**: Trait definitions for external dependencies (UserStore)
//! - **services**: Hashing, accounts, locale table, event log
//! - **adapters**: Concrete implementations (JSON file, in-memory)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use adapters::JsonFileUserStore;
use config::Config;
use services::{AccountService, CredentialHasher, Translations};

// Re-export commonly used types at crate root
pub use domain::result::{Error, ErrorCategory, ErrorKind, OperationResult};
pub use domain::UserRecord;
pub use services::{EntryPoint, HashScheme, Locale, LogEvent, LoggingService};

/// Main context for HuNi operations
///
/// Holds the resolved configuration, the credential store and the services
/// a front end needs.
pub struct HuniContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub store: Arc<JsonFileUserStore>,
    pub account_service: AccountService,
    pub translations: Translations,
}

impl HuniContext {
    /// Create a new context rooted at `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        Ok(Self::with_config(data_dir, config))
    }

    /// Create a context from an already resolved configuration
    pub fn with_config(data_dir: &Path, config: Config) -> Self {
        let store = Arc::new(JsonFileUserStore::new(config.users_path(data_dir)));
        let account_service = AccountService::new(
            Arc::clone(&store) as Arc<dyn ports::UserStore>,
            CredentialHasher::new(config.hash_scheme),
        );
        let translations = Translations::new(config.language);

        Self {
            config,
            data_dir: data_dir.to_path_buf(),
            store,
            account_service,
            translations,
        }
    }
}
