//! Guest command - continue without an account
//!
//! Never touches the user file.

use anyhow::Result;
use huni_core::services::Translations;
use huni_core::Locale;

use super::{get_context, get_logger, log_command, log_event};
use crate::output;

pub fn run(lang: Option<Locale>) -> Result<()> {
    // Only settings are read; the context does not open the user file
    let ctx = get_context(lang)?;
    let logger = get_logger();
    log_command(&logger, "guest");
    log_event(&logger, "guest_login");

    output::info(guest_message(&ctx.translations));
    Ok(())
}

fn guest_message(t: &Translations) -> &str {
    t.get("guest_msg")
}
