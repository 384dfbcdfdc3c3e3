//! Jotform CLI - drive the embedded-form integration from a terminal.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Run form listing, choice listing and the publish hook via the client library.
//!
//! Does NOT handle:
//! - Remote API calls or caching (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; command output goes to stdout.

mod args;
mod commands;
mod dispatch;
mod error;
mod settings_source;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use jotform_config::load_dotenv;

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    if let Err(e) = jotform_client::logging::init(&cli.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let exit_code = match run_command(cli).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
