//! Data models for the Jotform API.
//!
//! The list endpoint returns a rich record per form; this crate only keeps the
//! `id` and `title` needed to offer a form in an editor select control.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::serde_helpers::string_from_string_or_number;

/// Key of the form array in a list response.
pub const CONTENT_KEY: &str = "content";

/// Minimal projection of a remote form record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSummary {
    #[serde(deserialize_with = "string_from_string_or_number")]
    pub id: String,
    pub title: String,
}

/// One `(id, title)` option of the form select control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormChoice {
    pub id: String,
    pub title: String,
}

impl FormChoice {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// The choice as an `(id, title)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.id, &self.title)
    }
}

impl From<FormSummary> for FormChoice {
    fn from(summary: FormSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
        }
    }
}

/// Project a list response onto select choices, preserving order.
///
/// Returns an empty list when `content` is missing or not an array. Records
/// without a usable `id` or `title` are skipped with a warning.
pub fn choices_from_data(data: &Value) -> Vec<FormChoice> {
    let Some(content) = data.get(CONTENT_KEY).and_then(Value::as_array) else {
        return Vec::new();
    };

    content
        .iter()
        .enumerate()
        .filter_map(
            |(index, item)| match FormSummary::deserialize(item) {
                Ok(summary) => Some(FormChoice::from(summary)),
                Err(e) => {
                    warn!(index, error = %e, "Skipping form record without id/title");
                    None
                }
            },
        )
        .collect()
}
