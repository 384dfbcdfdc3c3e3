//! Environment variable settings source.
//!
//! Responsibilities:
//! - Read `JOTFORM_*` variables into a fresh `Settings` on every call.
//! - Optionally load a `.env` file into the process environment.
//!
//! Does NOT handle:
//! - Caching. Each [`EnvSettings::settings`] call re-reads the environment
//!   so changes made at runtime take effect on the next request.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - An unparsable `JOTFORM_LIMIT` logs a warning and falls back to the default.

use secrecy::SecretString;
use tracing::warn;

use crate::constants::{DEFAULT_LIMIT, ENV_API_KEY, ENV_API_URL, ENV_DOTENV_DISABLED, ENV_LIMIT};
use crate::error::ConfigError;
use crate::provider::SettingsProvider;
use crate::settings::{Settings, parse_limit};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Settings provider backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl EnvSettings {
    pub fn new() -> Self {
        Self
    }
}

impl SettingsProvider for EnvSettings {
    fn settings(&self) -> Settings {
        let limit = match env_var_or_none(ENV_LIMIT) {
            None => DEFAULT_LIMIT,
            Some(raw) => parse_limit(&raw).unwrap_or_else(|| {
                warn!(
                    var = ENV_LIMIT,
                    "Ignoring invalid form limit, using default of {}", DEFAULT_LIMIT
                );
                DEFAULT_LIMIT
            }),
        };

        Settings {
            api_url: env_var_or_none(ENV_API_URL),
            api_key: env_var_or_none(ENV_API_KEY).map(|key| SecretString::new(key.into())),
            limit,
        }
    }
}

/// Load a `.env` file from the current directory or its parents.
///
/// A missing file is not an error. Loading is skipped entirely when
/// `DOTENV_DISABLED` is set.
pub fn load_dotenv() -> Result<(), ConfigError> {
    if env_var_or_none(ENV_DOTENV_DISABLED).is_some() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => Err(ConfigError::DotenvParse { error_index: idx }),
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
