//! Settings resolution for command execution.
//!
//! Responsibilities:
//! - Choose between a settings file and the process environment.
//!
//! Invariants:
//! - A settings file is parsed strictly; a bad value fails the command before
//!   any request is made.
//! - Environment settings are re-read on every access.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use jotform_config::{EnvSettings, Settings, SettingsProvider};

/// Build the settings provider for this invocation.
pub(crate) fn resolve(path: Option<&Path>) -> Result<Arc<dyn SettingsProvider>> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        return Ok(Arc::new(EnvSettings::new()));
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let mapping: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("Settings file {} is not valid JSON", path.display()))?;
    let settings = Settings::try_from_mapping(&mapping)
        .with_context(|| format!("Invalid settings in {}", path.display()))?;

    Ok(Arc::new(settings))
}
