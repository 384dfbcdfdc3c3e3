//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not resolve settings (see `settings_source` module).

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jotform")]
#[command(about = "Inspect Jotform forms and register embedded-form redirects", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  jotform forms list\n  jotform forms list --json\n  jotform forms choices\n  jotform publish --form 202722038345045 --page-url https://example.com/contact/\n  jotform --settings jotform.json forms list\n\nSettings are read from JOTFORM_API_URL, JOTFORM_API_KEY and JOTFORM_LIMIT\nunless --settings points at a JSON object with API_URL, API_KEY and LIMIT.\n"
)]
pub struct Cli {
    /// JSON file holding an `{"API_URL": ..., "API_KEY": ..., "LIMIT": ...}` object.
    ///
    /// Values are validated strictly; the environment is ignored when this is set.
    #[arg(long, global = true, env = "JOTFORM_SETTINGS_PATH", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "JOTFORM_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn", value_name = "DIRECTIVE")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect forms on the configured account
    Forms {
        #[command(subcommand)]
        command: FormsCommand,
    },

    /// Register the thank-you redirect for a published embedded-form page
    Publish {
        /// Id of the remote form embedded on the page
        #[arg(long, value_name = "ID")]
        form: String,

        /// Absolute URL of the published page
        #[arg(long, value_name = "URL")]
        page_url: String,

        /// Page title, used only for log output
        #[arg(long, default_value = "")]
        title: String,
    },
}

#[derive(Subcommand)]
pub enum FormsCommand {
    /// List forms straight from the API
    List {
        /// Print the raw JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the (id, title) choices offered to page editors
    Choices,
}
