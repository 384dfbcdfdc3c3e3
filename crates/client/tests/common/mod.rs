//! Common test utilities for integration tests.
//!
//! # Invariants
//! - Every client built here has its own `ChoiceCache`, so tests never see
//!   each other's cached choices through the process-wide cache.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use jotform_client::testing::{capture_logs, load_fixture};

#[allow(unused_imports)]
pub use jotform_client::{ChoiceCache, JotformClient, endpoints};
#[allow(unused_imports)]
pub use jotform_config::Settings;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every test configuration.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "somekey";

/// A local address nothing listens on.
#[allow(dead_code)]
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

/// Timeout used by tests that need requests to time out quickly.
#[allow(dead_code)]
pub const SHORT_TIMEOUT: Duration = Duration::from_millis(100);

/// Settings pointing at `api_url` with the test key.
#[allow(dead_code)]
pub fn test_settings(api_url: &str) -> Settings {
    Settings::new(api_url, TEST_API_KEY)
}

/// A client with its own cache and the given settings.
#[allow(dead_code)]
pub fn client_with(settings: Settings) -> JotformClient {
    JotformClient::builder()
        .settings(settings)
        .cache(ChoiceCache::new())
        .build()
        .expect("client should build")
}
