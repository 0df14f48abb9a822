//! HuNi CLI - login and registration in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use huni_core::Locale;

mod commands;
mod output;

use commands::{guest, language, login, logs, register, reset, status};

/// HuNi - login and registration backed by a local user file
#[derive(Parser)]
#[command(name = "huni", version, about, long_about = None)]
struct Cli {
    /// Interface language for this run (en, tr)
    #[arg(long, global = true)]
    lang: Option<Locale>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in with e-mail and password
    Login {
        /// E-mail address (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted if omitted)
        #[arg(long, env = "HUNI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Continue as a guest without an account
    Guest,

    /// Create a new account
    Register {
        /// E-mail address (gmail.com, hotmail.com or outlook.com)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted if omitted)
        #[arg(long, env = "HUNI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Password confirmation (prompted if omitted)
        #[arg(long, env = "HUNI_PASSWORD_CONFIRM", hide_env_values = true)]
        confirm: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a new password for an existing account
    #[command(alias = "forgot-password")]
    ResetPassword {
        /// E-mail address of the account
        #[arg(long)]
        email: Option<String>,
        /// New password (prompted if omitted)
        #[arg(long, env = "HUNI_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// New password confirmation (prompted if omitted)
        #[arg(long, env = "HUNI_PASSWORD_CONFIRM", hide_env_values = true)]
        confirm: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or change the interface language
    Language {
        /// Language to switch to (en, tr)
        language: Option<Locale>,
    },

    /// Show data location and account summary
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// View and manage the event log
    Logs {
        #[command(subcommand)]
        command: logs::LogsCommands,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let lang = cli.lang;
    match cli.command {
        Commands::Login { email, password, json } => login::run(email, password, json, lang),
        Commands::Guest => guest::run(lang),
        Commands::Register { email, password, confirm, json } => {
            register::run(email, password, confirm, json, lang)
        }
        Commands::ResetPassword { email, password, confirm, json } => {
            reset::run(email, password, confirm, json, lang)
        }
        Commands::Language { language } => language::run(language),
        Commands::Status { json } => status::run(json, lang),
        Commands::Logs { command } => logs::run(command),
    }
}
