//! Jotform REST API client.
//!
//! This crate lists the forms of a Jotform account for a CMS editor, caches
//! them as `(id, title)` choices, and registers a thank-you redirect on a
//! form when the page embedding it is published.

pub mod api;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod pages;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use api::{ContentApi, FormListFetcher, FormSource, JotformApi};
pub use client::JotformClient;
pub use client::builder::JotformClientBuilder;
pub use client::cache::ChoiceCache;
pub use error::{CantPullFromApi, ClientError, FetchResult, Result};
pub use metrics::MetricsCollector;
pub use models::{FormChoice, FormSummary};
pub use pages::{EmbeddedFormPage, EmbeddedFormRoute, PublishedPage};
