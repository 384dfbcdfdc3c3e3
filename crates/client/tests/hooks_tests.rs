//! Post-publish hook tests.
//!
//! This module tests the redirect registration performed after a page is
//! published:
//! - Pages that are not embedded-form pages are ignored
//! - Embedded-form pages POST the thank-you redirect properties
//! - Missing settings and transport failures surface as `CantPullFromApi`

mod common;

use std::collections::HashMap;
use std::time::Duration;

use common::*;
use jotform_client::endpoints::set_form_properties;
use jotform_client::{EmbeddedFormPage, PublishedPage};
use wiremock::matchers::{any, method, path, query_param};

/// A page type that does not embed a form.
struct PlainPage;

impl PublishedPage for PlainPage {}

fn form_page(form: &str) -> EmbeddedFormPage {
    EmbeddedFormPage::new(
        "Embedded Form Page",
        "embeded-form-page",
        "http://localhost:8000/embeded-form-page/",
        form,
    )
}

#[tokio::test]
async fn test_non_form_page_is_ignored() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_with(test_settings(&mock_server.uri()));
    client.after_publish_page(&PlainPage).await.unwrap();
}

#[tokio::test]
async fn test_page_without_form_is_ignored() {
    let mock_server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_with(test_settings(&mock_server.uri()));
    client.after_publish_page(&form_page("")).await.unwrap();
}

#[tokio::test]
async fn test_form_page_posts_redirect_properties() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/form/1/properties"))
        .and(query_param("apiKey", TEST_API_KEY))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("forms/properties_ok.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_with(test_settings(&mock_server.uri()));
    client.after_publish_page(&form_page("1")).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: HashMap<String, String> = url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect();

    assert_eq!(body.len(), 2);
    assert_eq!(body["properties[activeRedirect]"], "thankurl");
    assert_eq!(
        body["properties[thankurl]"],
        "http://localhost:8000/embeded-form-page/thank-you/"
    );
}

#[tokio::test]
async fn test_rejected_properties_are_not_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture_logs();
    let client = client_with(test_settings(&mock_server.uri()));
    client.after_publish_page(&form_page("1")).await.unwrap();

    assert_eq!(logs.warn_lines().len(), 1);
    assert!(logs.error_lines().is_empty());
}

#[tokio::test]
async fn test_unreachable_api_raises() {
    let (logs, _guard) = capture_logs();
    let client = client_with(test_settings(UNREACHABLE_URL));

    let err = client.after_publish_page(&form_page("1")).await.unwrap_err();

    assert_eq!(err.url, format!("{UNREACHABLE_URL}/form/1/properties"));
    assert_eq!(logs.error_lines().len(), 1);
}

#[tokio::test]
async fn test_post_honours_request_timeout() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock_server)
        .await;

    let (logs, _guard) = capture_logs();
    let client = JotformClient::builder()
        .settings(test_settings(&mock_server.uri()))
        .cache(ChoiceCache::new())
        .timeout(SHORT_TIMEOUT)
        .build()
        .unwrap();

    let err = client.after_publish_page(&form_page("1")).await.unwrap_err();

    let url = format!("{}/form/1/properties", mock_server.uri());
    assert_eq!(err.url, url);
    let errors = logs.error_lines();
    assert_eq!(errors.len(), 1, "{errors:?}");
    assert!(errors[0].contains(&format!(
        "Timeout error occurred when fetching data from {url}"
    )));
}

#[tokio::test]
async fn test_failed_post_does_not_expose_api_key() {
    let (logs, _guard) = capture_logs();
    let client = client_with(test_settings(UNREACHABLE_URL));

    let err = client.after_publish_page(&form_page("1")).await.unwrap_err();
    let report = format!("{:#}", anyhow::Error::from(err));

    assert!(report.contains("Error occured when fetching data from"));
    assert!(!report.contains(TEST_API_KEY), "{report}");
    assert!(!logs.contents().contains(TEST_API_KEY), "{}", logs.contents());
}

#[tokio::test]
async fn test_set_form_properties_reports_acceptance() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/form/1/properties"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/form/2/properties"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let http = Client::new();
    let properties = [("activeRedirect", "thankurl")];
    let timeout = Duration::from_secs(10);
    let uri = mock_server.uri();

    let accepted =
        set_form_properties(&http, &uri, TEST_API_KEY, "1", &properties, timeout, None)
            .await
            .unwrap();
    let rejected =
        set_form_properties(&http, &uri, TEST_API_KEY, "2", &properties, timeout, None)
            .await
            .unwrap();

    assert!(accepted);
    assert!(!rejected);
}

#[tokio::test]
async fn test_missing_settings_raise() {
    let client = client_with(Settings::default());

    let err = client.after_publish_page(&form_page("1")).await.unwrap_err();
    assert_eq!(err.url, "/form/1/properties");
}
