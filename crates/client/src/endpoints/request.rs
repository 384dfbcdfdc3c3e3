//! Single-attempt JSON GET with classified failure logging.
//!
//! Every failure is classified into a [`FailureCategory`], logged once at
//! error level with the category's message, and returned as one
//! [`CantPullFromApi`]. No retries are performed.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::error::{CantPullFromApi, FetchResult};
use crate::metrics::MetricsCollector;

/// Failure categories for a remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCategory {
    /// The request did not complete within its timeout.
    Timeout,
    /// Redirect or retry budget exhausted before a final response.
    RetriesExhausted,
    /// Error status from the server, or the connection could not be made.
    HttpOrConnection,
    /// The URL (or another request part) could not be built.
    MalformedUrl,
    /// Anything else, e.g. a body that is not JSON.
    Other,
}

impl FailureCategory {
    /// Classify a `reqwest` error.
    pub fn classify(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_redirect() {
            Self::RetriesExhausted
        } else if err.is_builder() {
            Self::MalformedUrl
        } else if err.is_status() || err.is_connect() || err.is_request() {
            Self::HttpOrConnection
        } else {
            Self::Other
        }
    }

    /// Returns the string label for this category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::RetriesExhausted => "retries_exhausted",
            Self::HttpOrConnection => "http_or_connection",
            Self::MalformedUrl => "malformed_url",
            Self::Other => "other",
        }
    }

    /// The diagnostic message logged for this category.
    pub fn message(&self, url: &str, err: &reqwest::Error) -> String {
        match self {
            Self::Timeout => format!("Timeout error occurred when fetching data from {url}"),
            Self::RetriesExhausted => format!("MaxRetryError occured when fetching data from {url}"),
            Self::HttpOrConnection => {
                format!("HTTP/ConnectionError occured when fetching data from {url}")
            }
            Self::MalformedUrl => format!("HTTP/ConnectionError occured when fetching data: {err}"),
            Self::Other => format!("Exception occured when fetching data from {url}"),
        }
    }
}

/// Log a failed call and normalize it into [`CantPullFromApi`].
///
/// `url` must not carry credentials. The request URL recorded inside `err`
/// may include the API key in its query string, so it is stripped before the
/// error is logged or chained.
pub(crate) fn normalize_failure(
    url: &str,
    endpoint: &'static str,
    err: reqwest::Error,
    metrics: Option<&MetricsCollector>,
) -> CantPullFromApi {
    let err = err.without_url();
    let category = FailureCategory::classify(&err);
    error!(
        category = category.as_str(),
        error = %err,
        "{}",
        category.message(url, &err)
    );
    if let Some(m) = metrics {
        m.record_error(endpoint, category);
    }
    CantPullFromApi::new(url, Some(err))
}

/// GET `url` and parse the JSON body.
///
/// Issues exactly one request bounded by `timeout`. Non-2xx statuses,
/// transport errors and undecodable bodies all become [`CantPullFromApi`]
/// after a single error-level log line.
pub async fn fetch_json(
    client: &Client,
    url: &str,
    headers: &[(&str, &str)],
    query: &[(&str, String)],
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> FetchResult<Value> {
    let endpoint = endpoint_label(url);
    if let Some(m) = metrics {
        m.record_request(endpoint, "GET");
    }

    let mut builder = client.get(url).timeout(timeout).query(query);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }

    let outcome = async {
        let response = builder.send().await?.error_for_status()?;
        response.json::<Value>().await
    }
    .await;

    outcome.map_err(|e| normalize_failure(url, endpoint, e, metrics))
}

fn endpoint_label(url: &str) -> &'static str {
    if url.ends_with(super::forms::FORMS_PATH) {
        super::forms::FORMS_PATH
    } else {
        "other"
    }
}
