//! Command dispatch logic.
//!
//! Responsibilities:
//! - Resolve settings and build the client.
//! - Route parsed CLI arguments to the command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).

use std::time::Duration;

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::settings_source;

pub(crate) async fn run_command(cli: Cli) -> Result<()> {
    let settings = settings_source::resolve(cli.settings.as_deref())?;
    let client = commands::build_client(settings, cli.timeout.map(Duration::from_secs))?;

    match cli.command {
        Commands::Forms { command } => commands::forms::run(&client, command).await?,
        Commands::Publish {
            form,
            page_url,
            title,
        } => commands::publish::run(&client, &form, &page_url, &title).await?,
    }

    Ok(())
}
