//! Error-swallowing facade over a form data source.
//!
//! [`ContentApi`] wraps any [`FormSource`] and turns a
//! [`CantPullFromApi`] into "no data", so code that only needs to render a
//! list never handles transport errors. The worst case it sees is an empty
//! mapping.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use jotform_config::SettingsProvider;
use serde_json::{Map, Value};
use tracing::debug;

use crate::endpoints::fetch_forms;
use crate::error::{CantPullFromApi, FetchResult};
use crate::metrics::MetricsCollector;

/// A zero-argument source of remote data.
///
/// `Ok(None)` means the source declined to fetch (for example, missing
/// configuration). Any async closure returning the same result implements
/// this trait.
pub trait FormSource: Sync {
    fn fetch(&self) -> impl Future<Output = FetchResult<Option<Value>>> + Send;
}

impl<F, Fut> FormSource for F
where
    F: Fn() -> Fut + Sync,
    Fut: Future<Output = FetchResult<Option<Value>>> + Send,
{
    fn fetch(&self) -> impl Future<Output = FetchResult<Option<Value>>> + Send {
        self()
    }
}

/// Facade that downgrades fetch failures to absent data.
#[derive(Debug, Clone)]
pub struct ContentApi<S> {
    source: S,
}

impl<S: FormSource> ContentApi<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch from the source, returning `None` if it failed or declined.
    pub async fn fetch_from_api(&self) -> Option<Value> {
        match self.source.fetch().await {
            Ok(data) => data,
            Err(CantPullFromApi { url, .. }) => {
                debug!(%url, "Continuing without remote data");
                None
            }
        }
    }

    /// Fetch from the source, substituting an empty mapping for no data.
    pub async fn get_data(&self) -> Value {
        self.fetch_from_api()
            .await
            .unwrap_or_else(|| Value::Object(Map::new()))
    }
}

/// [`FormSource`] that lists forms with the settings current at call time.
#[derive(Clone)]
pub struct FormListFetcher {
    http: reqwest::Client,
    settings: Arc<dyn SettingsProvider>,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl FormListFetcher {
    pub fn new(
        http: reqwest::Client,
        settings: Arc<dyn SettingsProvider>,
        timeout: Duration,
        metrics: Option<MetricsCollector>,
    ) -> Self {
        Self {
            http,
            settings,
            timeout,
            metrics,
        }
    }
}

impl FormSource for FormListFetcher {
    fn fetch(&self) -> impl Future<Output = FetchResult<Option<Value>>> + Send {
        async move {
            let settings = self.settings.settings();
            fetch_forms(&self.http, &settings, self.timeout, self.metrics.as_ref()).await
        }
    }
}

/// The facade over the form list endpoint.
pub type JotformApi = ContentApi<FormListFetcher>;
