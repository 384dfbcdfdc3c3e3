//! Publish hook entry point on the client.

use crate::client::JotformClient;
use crate::error::FetchResult;
use crate::hooks;
use crate::pages::PublishedPage;

impl JotformClient {
    /// Run the post-publish hook for `page` with the current settings.
    ///
    /// See [`hooks::after_publish_page`].
    pub async fn after_publish_page(&self, page: &dyn PublishedPage) -> FetchResult<()> {
        let settings = self.settings.settings();
        hooks::after_publish_page(
            &self.http,
            &settings,
            page,
            self.timeout,
            self.metrics.as_ref(),
        )
        .await
    }
}
