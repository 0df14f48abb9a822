//! Login command - authenticate against the user file

use anyhow::Result;
use huni_core::{Locale, OperationResult};

use super::{field, get_context, get_logger, log_command, log_event, print_json, secret};
use crate::output;

pub fn run(email: Option<String>, password: Option<String>, json: bool, lang: Option<Locale>) -> Result<()> {
    let ctx = get_context(lang)?;
    let logger = get_logger();
    log_command(&logger, "login");

    let t = &ctx.translations;
    let email = field(email, t, "email_label")?;
    let password = secret(password, t, "password_label")?;

    let authenticated = match ctx.account_service.authenticate(&email, &password) {
        Ok(authenticated) => authenticated,
        Err(e) => return super::fail(&ctx, &logger, "login_failed", e, json),
    };

    if !authenticated {
        // Unknown email and wrong password are reported the same way
        log_event(&logger, "login_rejected");
        let message = t.get("login_failed");
        if json {
            let rejected = OperationResult {
                success: false,
                data: Some(false),
                error: None,
            };
            print_json(&rejected, message)?;
        } else {
            output::error(message);
        }
        std::process::exit(1);
    }

    log_event(&logger, "login_succeeded");
    let info = t.format("login_info", &[("email", email.as_str()), ("password", "****")]);
    if json {
        print_json(&OperationResult::ok(true), &info)?;
    } else {
        output::done(t.get("login_msg"));
        println!("{}", info);
    }

    Ok(())
}
