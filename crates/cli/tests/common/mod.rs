//! Shared test utilities for jotform CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `JOTFORM_API_KEY` is set to "somekey" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `jotform` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `JOTFORM_API_KEY` is set to a dummy value.
/// - Other settings env vars are cleared to ensure no leakage from the host.
pub fn jotform_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jotform");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("JOTFORM_API_KEY", "somekey");

    // Clear potential host leakage
    cmd.env_remove("JOTFORM_API_URL")
        .env_remove("JOTFORM_LIMIT")
        .env_remove("JOTFORM_SETTINGS_PATH")
        .env_remove("JOTFORM_TIMEOUT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `jotform` command pointed at `api_url`.
#[allow(dead_code)]
pub fn jotform_cmd_with_api_url(api_url: &str) -> Command {
    let mut cmd = jotform_cmd();
    cmd.env("JOTFORM_API_URL", api_url);
    cmd
}
