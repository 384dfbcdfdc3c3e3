//! Centralized constants for the Jotform workspace.
//!
//! Default values used across crates live here to avoid magic number
//! duplication between the client and the CLI.

// =============================================================================
// Remote API Defaults
// =============================================================================

/// Default number of forms requested from the list endpoint.
pub const DEFAULT_LIMIT: u32 = 50;

/// HTTP request timeout in seconds for every call to the remote API.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// =============================================================================
// Choice Cache Defaults
// =============================================================================

/// Time-to-live of the cached form choice list in seconds (5 minutes).
pub const DEFAULT_CHOICES_TTL_SECS: u64 = 300;

/// Fixed key under which the form choice list is cached.
pub const CHOICES_CACHE_KEY: &str = "jot_form_choices";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable holding the remote API base URL.
pub const ENV_API_URL: &str = "JOTFORM_API_URL";

/// Environment variable holding the remote API key.
pub const ENV_API_KEY: &str = "JOTFORM_API_KEY";

/// Environment variable holding the form list limit.
pub const ENV_LIMIT: &str = "JOTFORM_LIMIT";

/// When set to any non-empty value, `.env` loading is skipped.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// Host Mapping Keys
// =============================================================================

/// Mapping key for the API base URL in a host settings block.
pub const KEY_API_URL: &str = "API_URL";

/// Mapping key for the API key in a host settings block.
pub const KEY_API_KEY: &str = "API_KEY";

/// Mapping key for the form list limit in a host settings block.
pub const KEY_LIMIT: &str = "LIMIT";
