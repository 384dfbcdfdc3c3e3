//! Form properties endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::endpoints::encode_path_segment;
use crate::endpoints::request::normalize_failure;
use crate::error::FetchResult;
use crate::metrics::MetricsCollector;

/// Query parameter carrying the API key on POST requests.
pub const API_KEY_PARAM: &str = "apiKey";

const PROPERTIES_ENDPOINT: &str = "/form/{id}/properties";

/// Nest each key under the `properties[...]` naming convention.
///
/// ```
/// use jotform_client::endpoints::nest_properties;
///
/// let nested = nest_properties(&[("activeRedirect", "thankurl")]);
/// assert_eq!(nested, vec![("properties[activeRedirect]".to_string(), "thankurl".to_string())]);
/// ```
pub fn nest_properties(properties: &[(&str, &str)]) -> Vec<(String, String)> {
    properties
        .iter()
        .map(|(key, value)| (format!("properties[{key}]"), (*value).to_string()))
        .collect()
}

/// Build the properties URL for a form.
pub fn properties_url(api_url: &str, form_id: &str) -> String {
    format!(
        "{}/form/{}/properties",
        api_url.trim_end_matches('/'),
        encode_path_segment(form_id)
    )
}

/// Set properties on a form with one form-encoded POST.
///
/// Returns whether the remote API accepted the properties. Transport
/// failures are logged and returned as
/// [`CantPullFromApi`](crate::error::CantPullFromApi) with the cause chained.
/// A response with a non-success status is logged and reported as `false`,
/// not as a failure.
pub async fn set_form_properties(
    client: &Client,
    api_url: &str,
    api_key: &str,
    form_id: &str,
    properties: &[(&str, &str)],
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> FetchResult<bool> {
    let url = properties_url(api_url, form_id);
    if let Some(m) = metrics {
        m.record_request(PROPERTIES_ENDPOINT, "POST");
    }

    let response = client
        .post(&url)
        .timeout(timeout)
        .query(&[(API_KEY_PARAM, api_key)])
        .form(&nest_properties(properties))
        .send()
        .await
        .map_err(|e| normalize_failure(&url, PROPERTIES_ENDPOINT, e, metrics))?;

    let status = response.status();
    if status.is_success() {
        debug!(form_id, "Form properties updated");
    } else {
        warn!(
            form_id,
            status = status.as_u16(),
            "Remote API did not accept form properties"
        );
    }
    Ok(status.is_success())
}
