//! Form list endpoint.

use std::time::Duration;

use jotform_config::Settings;
use reqwest::Client;
use serde_json::Value;
use tracing::error;

use crate::endpoints::fetch_json;
use crate::error::FetchResult;
use crate::metrics::MetricsCollector;

/// Path of the form list endpoint, relative to the API base URL.
pub const FORMS_PATH: &str = "/user/forms";

/// Header carrying the API key on GET requests.
pub const API_KEY_HEADER: &str = "APIKEY";

/// Logged when the URL or the key is missing.
pub const MISSING_SETTINGS_MESSAGE: &str = "API_URL or API_KEY is not set in settings.";

/// Logged when the URL does not start with `http`.
pub const BAD_SCHEME_MESSAGE: &str = "API_URL must start with http or https.";

/// List the account's forms.
///
/// Configuration problems are soft failures: they are logged and reported as
/// `Ok(None)` without touching the network. Transport problems are returned
/// as [`CantPullFromApi`](crate::error::CantPullFromApi).
pub async fn fetch_forms(
    client: &Client,
    settings: &Settings,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> FetchResult<Option<Value>> {
    let Some(api_url) = settings.api_url() else {
        error!("{}", MISSING_SETTINGS_MESSAGE);
        return Ok(None);
    };
    if !api_url.starts_with("http") {
        error!("{}", BAD_SCHEME_MESSAGE);
        return Ok(None);
    }
    let Some(api_key) = settings.api_key() else {
        error!("{}", MISSING_SETTINGS_MESSAGE);
        return Ok(None);
    };

    let url = format!("{}{}", api_url.trim_end_matches('/'), FORMS_PATH);
    let query = [("limit", settings.limit.to_string())];

    fetch_json(
        client,
        &url,
        &[(API_KEY_HEADER, api_key)],
        &query,
        timeout,
        metrics,
    )
    .await
    .map(Some)
}
