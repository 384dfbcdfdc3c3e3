//! Post-publish hook that registers the thank-you redirect remotely.
//!
//! # Invariants
//! - Pages that are not embedded-form pages, or that have no form selected,
//!   cause no side effect and no error.
//! - At most one POST is issued per call; there is no retry and no record of
//!   success is kept.
//! - Any failure to reach the remote API is returned as [`CantPullFromApi`].

use std::time::Duration;

use jotform_config::Settings;
use reqwest::Client;
use tracing::{error, info};

use crate::endpoints::{MISSING_SETTINGS_MESSAGE, set_form_properties};
use crate::error::{CantPullFromApi, FetchResult};
use crate::metrics::MetricsCollector;
use crate::pages::PublishedPage;

/// Property enabling the redirect.
pub const ACTIVE_REDIRECT_PROPERTY: &str = "activeRedirect";

/// Property holding the redirect target.
pub const THANK_URL_PROPERTY: &str = "thankurl";

/// The fixed payload pointing the form at `thank_you_url`.
pub fn redirect_properties(thank_you_url: &str) -> [(&'static str, &str); 2] {
    [
        (ACTIVE_REDIRECT_PROPERTY, THANK_URL_PROPERTY),
        (THANK_URL_PROPERTY, thank_you_url),
    ]
}

/// Handle a page-publish event.
pub async fn after_publish_page(
    client: &Client,
    settings: &Settings,
    page: &dyn PublishedPage,
    timeout: Duration,
    metrics: Option<&MetricsCollector>,
) -> FetchResult<()> {
    let Some(page) = page.as_embedded_form() else {
        return Ok(());
    };
    let Some(form_id) = page.form_id() else {
        return Ok(());
    };

    let (Some(api_url), Some(api_key)) = (settings.api_url(), settings.api_key()) else {
        error!(form_id, "{}", MISSING_SETTINGS_MESSAGE);
        return Err(CantPullFromApi::new(
            format!("/form/{form_id}/properties"),
            None,
        ));
    };

    let thank_you_url = page.thank_you_url();
    info!(form_id, %thank_you_url, "Registering thank-you redirect");

    let accepted = set_form_properties(
        client,
        api_url,
        api_key,
        form_id,
        &redirect_properties(&thank_you_url),
        timeout,
        metrics,
    )
    .await?;

    if accepted && let Some(m) = metrics {
        m.record_redirect_pushed();
    }
    Ok(())
}
