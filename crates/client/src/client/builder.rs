//! Client builder for constructing [`JotformClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Choosing the settings provider, choice cache and metrics collector
//! - Configuring the underlying HTTP client
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`JotformClient`] methods)
//! - Validating settings (checked at request time so changes take effect)
//!
//! # Invariants
//! - Without an explicit provider the client reads settings from the environment
//! - Without an explicit cache the client uses [`ChoiceCache::shared`]
//! - Each request carries its own timeout (10 seconds by default)

use std::sync::Arc;
use std::time::Duration;

use jotform_config::constants::DEFAULT_TIMEOUT_SECS;
use jotform_config::{EnvSettings, SettingsProvider};

use crate::client::JotformClient;
use crate::client::cache::ChoiceCache;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Redirects the HTTP client follows before giving up on a request.
pub const MAX_REDIRECTS: usize = 5;

/// Builder for creating a new [`JotformClient`].
///
/// # Example
///
/// ```rust,ignore
/// use jotform_client::JotformClient;
/// use jotform_config::Settings;
///
/// let client = JotformClient::builder()
///     .settings(Settings::new("https://api.jotform.com", "my-key"))
///     .build()?;
/// ```
pub struct JotformClientBuilder {
    settings: Option<Arc<dyn SettingsProvider>>,
    cache: Option<ChoiceCache>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
    http: Option<reqwest::Client>,
}

impl Default for JotformClientBuilder {
    fn default() -> Self {
        Self {
            settings: None,
            cache: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
            http: None,
        }
    }
}

impl JotformClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where settings are read from on every operation.
    pub fn settings(mut self, provider: impl SettingsProvider + 'static) -> Self {
        let provider: Arc<dyn SettingsProvider> = Arc::new(provider);
        self.settings = Some(provider);
        self
    }

    /// Share an existing provider.
    pub fn settings_provider(mut self, provider: Arc<dyn SettingsProvider>) -> Self {
        self.settings = Some(provider);
        self
    }

    /// Use a dedicated choice cache instead of the process-wide one.
    pub fn cache(mut self, cache: ChoiceCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the per-request timeout.
    ///
    /// Default is 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Reuse an existing HTTP client.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`JotformClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::HttpClient`] if the HTTP client fails to build.
    pub fn build(self) -> Result<JotformClient> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
                .build()
                .map_err(ClientError::HttpClient)?,
        };

        let settings = self
            .settings
            .unwrap_or_else(|| Arc::new(EnvSettings::new()) as Arc<dyn SettingsProvider>);

        let mut cache = self.cache.unwrap_or_else(|| ChoiceCache::shared().clone());
        if let Some(metrics) = &self.metrics {
            cache = cache.with_metrics(metrics.clone());
        }

        Ok(JotformClient {
            http,
            settings,
            choices: cache,
            timeout: self.timeout,
            metrics: self.metrics,
        })
    }
}
