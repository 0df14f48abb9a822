//! CLI command implementations

pub mod guest;
pub mod language;
pub mod login;
pub mod logs;
pub mod register;
pub mod reset;
pub mod status;

use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use serde::Serialize;
use huni_core::config::Config;
use huni_core::services::Translations;
use huni_core::{EntryPoint, Error, HuniContext, Locale, LoggingService, OperationResult};

use crate::output;

/// Get the logging service for CLI operations
///
/// Returns None if logging fails to initialize (shouldn't block operations)
pub fn get_logger() -> Option<LoggingService> {
    let data_dir = get_data_dir().ok()?;
    LoggingService::new(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Log an event, ignoring any errors (logging should never break the app)
pub fn log_event(logger: &Option<LoggingService>, event: &str) {
    if let Some(l) = logger {
        let _ = l.log_event(event);
    }
}

/// Log that a command ran
pub fn log_command(logger: &Option<LoggingService>, command: &str) {
    if let Some(l) = logger {
        let _ = l.log_command(command);
    }
}

/// Log a failed operation by its error code and category
pub fn log_error(logger: &Option<LoggingService>, event: &str, err: &Error) {
    if let Some(l) = logger {
        let category = format!("{:?}", err.category());
        let _ = l.log_error(event, err.kind().as_str(), Some(&category));
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("HUNI_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".huni"))
        .context("Could not find home directory")
}

/// Build the HuNi context, optionally overriding the language
pub fn get_context(lang: Option<Locale>) -> Result<HuniContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    let mut config = Config::load(&data_dir).context("Failed to load settings")?;
    if let Some(lang) = lang {
        config.set_language(lang);
    }

    Ok(HuniContext::with_config(&data_dir, config))
}

/// Prompt label from a locale-table label ("E-Mail: " -> "E-Mail")
fn label(t: &Translations, key: &str) -> String {
    t.get(key).trim_end_matches([' ', ':']).to_string()
}

/// Use the given value, or ask for it when attached to a terminal
///
/// Without a terminal a missing field is an empty string, which the
/// account service rejects as `required`.
pub fn field(value: Option<String>, t: &Translations, key: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if atty::is(atty::Stream::Stdin) => Ok(Input::<String>::new()
            .with_prompt(label(t, key))
            .allow_empty(true)
            .interact_text()?),
        None => Ok(String::new()),
    }
}

/// Like [`field`] but with hidden input
pub fn secret(value: Option<String>, t: &Translations, key: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None if atty::is(atty::Stream::Stdin) => Ok(Password::new()
            .with_prompt(label(t, key))
            .allow_empty_password(true)
            .interact()?),
        None => Ok(String::new()),
    }
}

/// Print an operation outcome as JSON with its localized message
pub fn print_json<T: Serialize>(result: &OperationResult<T>, message: &str) -> Result<()> {
    let mut value = serde_json::to_value(result)?;
    value["message"] = serde_json::Value::String(message.to_string());
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

/// Report a failed account operation and exit with code 1
pub fn fail(
    ctx: &HuniContext,
    logger: &Option<LoggingService>,
    event: &str,
    err: Error,
    json: bool,
) -> Result<()> {
    log_error(logger, event, &err);

    let kind = err.kind();

    let message = ctx.translations.error_message(kind);
    if json {
        print_json(&OperationResult::<()>::fail(kind), message)?;
    } else {
        output::error(message);
    }
    exit(1);
}
