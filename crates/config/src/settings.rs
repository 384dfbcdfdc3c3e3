//! Typed settings for the Jotform integration.
//!
//! Responsibilities:
//! - Define the `Settings` snapshot (API URL, API key, list limit).
//! - Resolve a host settings mapping (`{"API_URL": .., "API_KEY": .., "LIMIT": ..}`)
//!   with per-key fallback to documented defaults.
//!
//! Does NOT handle:
//! - Deciding whether settings are good enough for a request. The client crate
//!   checks preconditions and logs; this module only looks values up.
//! - Re-reading host configuration (see `provider`).
//!
//! Invariants:
//! - Blank (empty or whitespace-only) URL and key values are treated as absent.
//! - `limit` always has a value; it defaults to [`DEFAULT_LIMIT`].
//! - The API key is a `SecretString` and never appears in `Debug` output.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::constants::{DEFAULT_LIMIT, KEY_API_KEY, KEY_API_URL, KEY_LIMIT};
use crate::error::ConfigError;

/// Resolved integration settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base URL of the remote API, e.g. `https://api.jotform.com`.
    pub api_url: Option<String>,
    /// API key sent with every remote call.
    pub api_key: Option<SecretString>,
    /// Maximum number of forms requested from the list endpoint.
    pub limit: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: None,
            api_key: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Settings {
    /// Create settings with both URL and key set and the default limit.
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: Some(api_url.into()),
            api_key: Some(SecretString::new(api_key.into().into())),
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the form list limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// The API base URL, if set and not blank.
    pub fn api_url(&self) -> Option<&str> {
        non_blank(self.api_url.as_deref())
    }

    /// The API key, if set and not blank.
    pub fn api_key(&self) -> Option<&str> {
        non_blank(self.api_key.as_ref().map(|key| key.expose_secret()))
    }

    /// True when both the API URL and the API key are present.
    pub fn is_configured(&self) -> bool {
        self.api_url().is_some() && self.api_key().is_some()
    }

    /// Resolve settings from an optional host mapping.
    ///
    /// Any key that is missing or has an unusable type falls back to its
    /// default; this never fails. `LIMIT` accepts integers and numeric strings.
    pub fn from_mapping(mapping: Option<&Value>) -> Self {
        let Some(mapping) = mapping else {
            return Self::default();
        };

        let api_url = mapping
            .get(KEY_API_URL)
            .and_then(Value::as_str)
            .map(str::to_string);
        let api_key = mapping
            .get(KEY_API_KEY)
            .and_then(Value::as_str)
            .map(|key| SecretString::new(key.into()));
        let limit = mapping
            .get(KEY_LIMIT)
            .and_then(lenient_limit)
            .unwrap_or(DEFAULT_LIMIT);

        Self {
            api_url,
            api_key,
            limit,
        }
    }

    /// Resolve settings from a host mapping, rejecting malformed values.
    ///
    /// `null` values count as absent. A present `API_URL` must parse as an
    /// absolute `http` or `https` URL, and `LIMIT` must be a positive integer.
    pub fn try_from_mapping(mapping: &Value) -> Result<Self, ConfigError> {
        let object = mapping
            .as_object()
            .ok_or_else(|| ConfigError::NotAMapping(json_type_name(mapping)))?;

        let api_url = match object.get(KEY_API_URL) {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => {
                validate_api_url(raw)?;
                Some(raw.clone())
            }
            Some(other) => {
                return Err(ConfigError::invalid(
                    KEY_API_URL,
                    format!("expected a string, got {}", json_type_name(other)),
                ));
            }
        };

        let api_key = match object.get(KEY_API_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(raw)) => Some(SecretString::new(raw.as_str().into())),
            Some(other) => {
                return Err(ConfigError::invalid(
                    KEY_API_KEY,
                    format!("expected a string, got {}", json_type_name(other)),
                ));
            }
        };

        let limit = match object.get(KEY_LIMIT) {
            None | Some(Value::Null) => DEFAULT_LIMIT,
            Some(value) => lenient_limit(value).ok_or_else(|| {
                ConfigError::invalid(KEY_LIMIT, "must be a positive integer")
            })?,
        };

        Ok(Self {
            api_url,
            api_key,
            limit,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

pub(crate) fn parse_limit(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|limit| *limit > 0)
}

fn lenient_limit(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => number
            .as_u64()
            .and_then(|limit| u32::try_from(limit).ok())
            .filter(|limit| *limit > 0),
        Value::String(raw) => parse_limit(raw),
        _ => None,
    }
}

fn validate_api_url(raw: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(raw.trim())
        .map_err(|e| ConfigError::invalid(KEY_API_URL, format!("not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::invalid(
            KEY_API_URL,
            format!("scheme must be http or https, got {scheme}"),
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
