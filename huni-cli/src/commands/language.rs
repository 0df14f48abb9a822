//! Language command - show or change the interface language

use anyhow::Result;
use colored::Colorize;
use huni_core::config::Config;
use huni_core::services::Translations;
use huni_core::Locale;

use super::{get_data_dir, get_logger, log_command, log_event};
use crate::output;

pub fn run(language: Option<Locale>) -> Result<()> {
    let data_dir = get_data_dir()?;
    let mut config = Config::load(&data_dir)?;

    let Some(language) = language else {
        let t = Translations::new(config.language);
        println!("{} {}", t.get("language_label").bold(), config.language);
        for locale in Locale::ALL {
            let name = Translations::new(locale).get(&format!("language_{}", locale.code())).to_string();
            let marker = if locale == config.language { "*" } else { " " };
            println!("  {} {} ({})", marker, locale.code(), name);
        }
        return Ok(());
    };

    std::fs::create_dir_all(&data_dir)?;
    config.set_language(language);
    config.save(&data_dir)?;
    let logger = get_logger();
    log_command(&logger, "language");
    log_event(&logger, "language_changed");

    output::success(Translations::new(language).get("language_changed"));
    Ok(())
}
