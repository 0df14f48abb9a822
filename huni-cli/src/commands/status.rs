//! Status command - show where data lives and how many users are registered

use anyhow::Result;
use serde::Serialize;
use huni_core::Locale;

use super::{get_context, get_logger, log_command};
use crate::output;

#[derive(Debug, Serialize)]
struct StatusSummary {
    data_dir: String,
    users_file: String,
    users_file_size: u64,
    total_users: usize,
    language: Locale,
    hash_scheme: String,
}

pub fn run(json: bool, lang: Option<Locale>) -> Result<()> {
    let ctx = get_context(lang)?;
    let logger = get_logger();
    log_command(&logger, "status");

    let total_users = match ctx.account_service.user_count() {
        Ok(count) => count,
        Err(e) => return super::fail(&ctx, &logger, "status_failed", e, json),
    };
    let users_path = ctx.store.path();
    let summary = StatusSummary {
        data_dir: ctx.data_dir.display().to_string(),
        users_file: users_path.display().to_string(),
        users_file_size: std::fs::metadata(users_path).map(|m| m.len()).unwrap_or(0),
        total_users,
        language: ctx.config.language,
        hash_scheme: ctx.config.hash_scheme.to_string(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    output::title(ctx.translations.get("title"));
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Data directory", &summary.data_dir]);
    table.add_row(vec!["Users file", &summary.users_file]);
    table.add_row(vec!["File size", &output::format_size(summary.users_file_size)]);
    table.add_row(vec!["Registered users", &summary.total_users.to_string()]);
    table.add_row(vec!["Language", summary.language.code()]);
    table.add_row(vec!["Hash scheme", &summary.hash_scheme]);
    println!("{}", table);

    if summary.total_users == 0 {
        println!();
        output::warning(ctx.translations.get("please_register"));
    }

    Ok(())
}
