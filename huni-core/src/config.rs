//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "language": "tr", "usersFile": "users.json", "hashScheme": "sha256" }
//! }
//! ```
//! Keys this crate does not manage are preserved when saving.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::adapters::json_file::{write_atomic, USERS_FILE};
use crate::services::{HashScheme, Locale};

/// Settings file name inside the data directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    users_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hash_scheme: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// HuNi configuration (resolved view of settings + environment)
#[derive(Debug, Clone)]
pub struct Config {
    pub language: Locale,
    pub users_file: PathBuf,
    pub hash_scheme: HashScheme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Locale::default(),
            users_file: PathBuf::from(USERS_FILE),
            hash_scheme: HashScheme::default(),
        }
    }
}

/// Raw settings text, `None` when the file does not exist yet
fn read_settings_text(settings_path: &Path) -> Result<Option<String>> {
    if !settings_path.exists() {
        return Ok(None);
    }
    std::fs::read_to_string(settings_path)
        .map(Some)
        .with_context(|| format!("Failed to read {}", settings_path.display()))
}

impl Config {
    /// Load config from the data directory
    ///
    /// Environment overrides (for CI/testing):
    /// - `HUNI_LANGUAGE`: `en` or `tr`
    /// - `HUNI_HASH_SCHEME`: `sha256` or `argon2id`
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with_env(data_dir, |key| std::env::var(key).ok())
    }

    /// Load config using `env` to resolve overrides
    pub fn load_with_env(data_dir: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // A settings file that does not parse is read as defaults
        let raw: SettingsFile = read_settings_text(&data_dir.join(SETTINGS_FILE))?
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();

        // Unparseable values fall through to the next source
        let language = env("HUNI_LANGUAGE")
            .and_then(|v| v.parse().ok())
            .or_else(|| raw.app.language.as_deref().and_then(|v| v.parse().ok()))
            .unwrap_or_default();

        let hash_scheme = env("HUNI_HASH_SCHEME")
            .and_then(|v| v.parse().ok())
            .or_else(|| raw.app.hash_scheme.as_deref().and_then(|v| v.parse().ok()))
            .unwrap_or_default();

        let users_file = raw
            .app
            .users_file
            .filter(|f| !f.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(USERS_FILE));

        Ok(Self {
            language,
            users_file,
            hash_scheme,
        })
    }

    /// Save the interface language to the data directory
    ///
    /// Only the language is written; other settings, including ones set by
    /// environment overrides, are left as they are in the file. A file that
    /// does not parse is an error and is left untouched.
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);
        let mut settings: SettingsFile = match read_settings_text(&settings_path)? {
            Some(content) => serde_json::from_str(&content).with_context(|| {
                format!("Failed to parse {}, not overwriting it", settings_path.display())
            })?,
            None => SettingsFile::default(),
        };

        settings.app.language = Some(self.language.code().to_string());

        let content = serde_json::to_string_pretty(&settings)?;
        write_atomic(&settings_path, content.as_bytes())
            .with_context(|| format!("Failed to write {}", settings_path.display()))?;
        Ok(())
    }

    /// Set the interface language
    pub fn set_language(&mut self, language: Locale) {
        self.language = language;
    }

    /// Absolute location of the users file
    pub fn users_path(&self, data_dir: &Path) -> PathBuf {
        if self.users_file.is_absolute() {
            self.users_file.clone()
        } else {
            data_dir.join(&self.users_file)
        }
    }
}
