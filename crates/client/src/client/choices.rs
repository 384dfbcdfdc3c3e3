//! Editor select choices for the embedded-form page.

use tracing::debug;

use crate::client::JotformClient;
use crate::models::{FormChoice, choices_from_data};

impl JotformClient {
    /// The `(id, title)` choices for the form select control.
    ///
    /// Served from the choice cache when fresh. On a miss the list is fetched
    /// (only when both URL and key are configured), projected, and cached even
    /// when empty. Never fails: transport problems yield an empty list.
    pub async fn form_choices(&self) -> Vec<FormChoice> {
        if let Some(choices) = self.choices.get().await {
            return choices;
        }

        let choices = if self.settings.settings().is_configured() {
            let data = self.api().get_data().await;
            choices_from_data(&data)
        } else {
            Vec::new()
        };

        debug!(count = choices.len(), "Caching form choices");
        self.choices.insert(choices.clone()).await;
        choices
    }

    /// Drop the cached choices so the next call refetches.
    pub async fn invalidate_choices(&self) {
        self.choices.invalidate().await;
    }
}
