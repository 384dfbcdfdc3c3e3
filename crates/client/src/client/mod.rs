//! Main Jotform client and its operations.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - [`cache`]: The time-bounded choice list cache
//! - `choices`: Building the editor select choices
//! - `publish`: The post-publish hook
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Swallowing fetch errors (delegated to [`crate::api::ContentApi`])
//!
//! # Invariants
//! - Settings are read from the provider on every operation and never stored

pub mod builder;
pub mod cache;
mod choices;
mod publish;

use std::sync::Arc;
use std::time::Duration;

use jotform_config::{Settings, SettingsProvider};
use serde_json::Value;

use crate::api::{FormListFetcher, JotformApi};
use crate::client::cache::ChoiceCache;
use crate::endpoints;
use crate::error::FetchResult;
use crate::metrics::MetricsCollector;

/// Jotform API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use jotform_client::JotformClient;
/// use jotform_config::EnvSettings;
///
/// let client = JotformClient::builder().settings(EnvSettings::new()).build()?;
/// let choices = client.form_choices().await;
/// ```
#[derive(Clone)]
pub struct JotformClient {
    pub(crate) http: reqwest::Client,
    pub(crate) settings: Arc<dyn SettingsProvider>,
    pub(crate) choices: ChoiceCache,
    pub(crate) timeout: Duration,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl std::fmt::Debug for JotformClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JotformClient")
            .field("settings", &self.settings.settings())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl JotformClient {
    /// Create a new client builder.
    pub fn builder() -> builder::JotformClientBuilder {
        builder::JotformClientBuilder::new()
    }

    /// A fresh snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings.settings()
    }

    /// The per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The choice cache this client reads and writes.
    pub fn choice_cache(&self) -> &ChoiceCache {
        &self.choices
    }

    /// List forms with the current settings.
    ///
    /// Returns `Ok(None)` (after logging) when the settings are incomplete.
    pub async fn fetch_forms(&self) -> FetchResult<Option<Value>> {
        let settings = self.settings.settings();
        endpoints::fetch_forms(&self.http, &settings, self.timeout, self.metrics.as_ref()).await
    }

    /// The error-swallowing facade over the form list endpoint.
    pub fn api(&self) -> JotformApi {
        JotformApi::new(FormListFetcher::new(
            self.http.clone(),
            Arc::clone(&self.settings),
            self.timeout,
            self.metrics.clone(),
        ))
    }
}
