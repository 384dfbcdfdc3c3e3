//! Error types for the Jotform client.
//!
//! Every transport failure on the way to the remote API collapses into one
//! normalized error, [`CantPullFromApi`]. The failure category (timeout,
//! connection, malformed URL, ...) is reported in the log line emitted when
//! the error is created, not in the error's type.

use thiserror::Error;

/// Result type alias for client construction.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Result type alias for operations that talk to the remote API.
pub type FetchResult<T> = std::result::Result<T, CantPullFromApi>;

/// A request to the remote API failed.
#[derive(Error, Debug)]
#[error("Error occured when fetching data from {url}")]
pub struct CantPullFromApi {
    /// The URL that was requested, without query parameters.
    pub url: String,
    /// The underlying HTTP error, when one was raised.
    #[source]
    pub source: Option<reqwest::Error>,
}

impl CantPullFromApi {
    pub fn new(url: impl Into<String>, source: Option<reqwest::Error>) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

/// Errors that can occur during Jotform client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A remote call failed.
    #[error(transparent)]
    CantPullFromApi(#[from] CantPullFromApi),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
