//! Publish command implementation.
//!
//! Runs the post-publish hook for a page described on the command line, for
//! hosts that publish pages outside this process.

use anyhow::{Context, Result};
use jotform_client::{EmbeddedFormPage, JotformClient};
use tracing::info;

pub async fn run(client: &JotformClient, form: &str, page_url: &str, title: &str) -> Result<()> {
    let page = EmbeddedFormPage::new(title, slug_from_url(page_url), page_url, form);
    let Some(form_id) = page.form_id() else {
        info!("No form selected; nothing to register");
        return Ok(());
    };

    client
        .after_publish_page(&page)
        .await
        .with_context(|| format!("Failed to register thank-you redirect for form {form_id}"))?;

    println!(
        "Registered thank-you redirect for form {form_id}: {}",
        page.thank_you_url()
    );
    Ok(())
}

/// Last non-empty path segment of `url`.
fn slug_from_url(url: &str) -> &str {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
}
