//! CLI command implementations.

pub mod forms;
pub mod publish;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use jotform_client::{ChoiceCache, JotformClient};
use jotform_config::SettingsProvider;

/// Build a client for one CLI invocation.
///
/// Each invocation gets its own choice cache; nothing outlives the process.
pub(crate) fn build_client(
    settings: Arc<dyn SettingsProvider>,
    timeout: Option<Duration>,
) -> Result<JotformClient> {
    let mut builder = JotformClient::builder()
        .settings_provider(settings)
        .cache(ChoiceCache::new());
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("Failed to build Jotform client")
}
