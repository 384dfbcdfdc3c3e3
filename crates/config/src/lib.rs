//! Settings resolution for the Jotform integration.
//!
//! This crate provides the typed [`Settings`] snapshot and the providers that
//! produce it from a host settings mapping or the process environment.

pub mod constants;
mod env;
mod error;
mod provider;
mod settings;

pub use env::{EnvSettings, env_var_or_none, load_dotenv};
pub use error::ConfigError;
pub use provider::{SettingsProvider, SharedSettings};
pub use settings::Settings;

