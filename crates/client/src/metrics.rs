//! Metrics collection for remote API calls and the choice cache.
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (install a recorder from the host application)
//! - Persistent storage of metrics
//!
//! # Invariants
//! - Metric recording is infallible and never disrupts an API call
//! - Zero-cost when no metrics recorder is installed

use crate::endpoints::FailureCategory;

/// Metric name for the remote request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "jotform_api_requests_total";

/// Metric name for the remote error counter.
pub const METRIC_ERRORS_TOTAL: &str = "jotform_api_errors_total";

/// Metric name for choice cache hits.
pub const METRIC_CACHE_HITS: &str = "jotform_choices_cache_hits_total";

/// Metric name for choice cache misses.
pub const METRIC_CACHE_MISSES: &str = "jotform_choices_cache_misses_total";

/// Metric name for redirects the remote API accepted.
pub const METRIC_REDIRECTS_PUSHED: &str = "jotform_redirects_pushed_total";

/// Thin wrapper around the `metrics` macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record one request to the remote API.
    pub fn record_request(&self, endpoint: &'static str, method: &'static str) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint,
            "method" => method,
        )
        .increment(1);
    }

    /// Record a failed request by category.
    pub fn record_error(&self, endpoint: &'static str, category: FailureCategory) {
        if !self.enabled {
            return;
        }
        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint,
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    pub fn record_cache_hit(&self) {
        if self.enabled {
            metrics::counter!(METRIC_CACHE_HITS).increment(1);
        }
    }

    pub fn record_cache_miss(&self) {
        if self.enabled {
            metrics::counter!(METRIC_CACHE_MISSES).increment(1);
        }
    }

    pub fn record_redirect_pushed(&self) {
        if self.enabled {
            metrics::counter!(METRIC_REDIRECTS_PUSHED).increment(1);
        }
    }
}
