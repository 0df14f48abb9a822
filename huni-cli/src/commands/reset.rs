//! Reset-password command - replace the password of an existing account

use anyhow::Result;
use huni_core::{Locale, OperationResult};

use super::{field, get_context, get_logger, log_command, log_event, print_json, secret};
use crate::output;

pub fn run(
    email: Option<String>,
    password: Option<String>,
    confirm: Option<String>,
    json: bool,
    lang: Option<Locale>,
) -> Result<()> {
    let ctx = get_context(lang)?;
    let logger = get_logger();
    log_command(&logger, "reset-password");

    let t = &ctx.translations;
    if !json {
        output::title(t.get("forgot_password_title"));
    }
    let email = field(email, t, "email_label")?;
    let password = secret(password, t, "password_label")?;
    let confirm = secret(confirm, t, "confirm_password_label")?;

    let result = match ctx.account_service.reset_password(&email, &password, &confirm) {
        Ok(result) => result,
        Err(e) => return super::fail(&ctx, &logger, "password_reset_failed", e, json),
    };

    log_event(&logger, "password_reset_succeeded");
    let message = t.get("forgot_password_success");
    if json {
        print_json(&OperationResult::ok(result), message)?;
    } else {
        output::done(message);
    }

    Ok(())
}
