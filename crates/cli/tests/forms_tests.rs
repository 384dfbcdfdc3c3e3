//! Integration tests for `jotform forms`.

mod common;

use common::{jotform_cmd, jotform_cmd_with_api_url};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn two_forms() -> serde_json::Value {
    serde_json::json!({
        "responseCode": 200,
        "content": [
            {"id": "1", "title": "Form 1", "status": "ENABLED"},
            {"id": 2, "title": "Form 2", "status": "ENABLED"}
        ]
    })
}

#[tokio::test]
async fn test_forms_list_prints_table() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/forms"))
        .and(query_param("limit", "50"))
        .and(header("APIKEY", "somekey"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_forms()))
        .expect(1)
        .mount(&server)
        .await;

    jotform_cmd_with_api_url(&server.uri())
        .args(["forms", "list"])
        .assert()
        .success()
        .stdout("1\tForm 1\n2\tForm 2\n");
}

#[tokio::test]
async fn test_forms_list_json_prints_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_forms()))
        .mount(&server)
        .await;

    let output = jotform_cmd_with_api_url(&server.uri())
        .args(["forms", "list", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body, two_forms());
}

#[tokio::test]
async fn test_forms_list_honors_limit_env() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_forms()))
        .expect(1)
        .mount(&server)
        .await;

    jotform_cmd_with_api_url(&server.uri())
        .env("JOTFORM_LIMIT", "3")
        .args(["forms", "list"])
        .assert()
        .success();
}

#[test]
fn test_forms_list_without_api_url_fails() {
    jotform_cmd()
        .args(["forms", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "API_URL or API_KEY is not set in settings.",
        ))
        .stderr(predicate::str::contains("Jotform settings are incomplete"));
}

#[test]
fn test_forms_list_without_scheme_fails() {
    jotform_cmd_with_api_url("api.jotform.com")
        .args(["forms", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "API_URL must start with http or https.",
        ));
}

#[tokio::test]
async fn test_forms_list_server_error_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    jotform_cmd_with_api_url(&server.uri())
        .args(["forms", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "HTTP/ConnectionError occured when fetching data from",
        ))
        .stderr(predicate::str::contains(
            "Error occured when fetching data from",
        ));
}

#[tokio::test]
async fn test_forms_choices() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(two_forms()))
        .expect(1)
        .mount(&server)
        .await;

    jotform_cmd_with_api_url(&server.uri())
        .args(["forms", "choices"])
        .assert()
        .success()
        .stdout("1\tForm 1\n2\tForm 2\n");
}

#[test]
fn test_forms_choices_never_fail() {
    jotform_cmd_with_api_url("http://127.0.0.1:1")
        .args(["forms", "choices", "--timeout", "2"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_settings_file_overrides_environment() {
    let dir = tempfile::TempDir::new().unwrap();
    let settings_path = dir.path().join("jotform.json");
    std::fs::write(&settings_path, r#"{"API_URL": "ftp://example.com", "API_KEY": "k"}"#).unwrap();

    jotform_cmd_with_api_url("http://127.0.0.1:1")
        .arg("--settings")
        .arg(&settings_path)
        .args(["forms", "list"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid settings"));
}
