//! Page records the host CMS hands to this crate.
//!
//! The host owns page storage, rendering and routing; this module only
//! describes the embedded-form page type and how to reverse its sub-routes.

use serde::{Deserialize, Serialize};

/// A page the host has just published.
///
/// Host page types implement this trait; only embedded-form pages override
/// [`PublishedPage::as_embedded_form`].
pub trait PublishedPage: Sync {
    fn as_embedded_form(&self) -> Option<&EmbeddedFormPage> {
        None
    }
}

/// Sub-routes served under an embedded-form page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedFormRoute {
    /// The page itself, showing the embedded form.
    Index,
    /// Confirmation shown after a successful submission.
    ThankYou,
}

impl EmbeddedFormRoute {
    /// Route name used by the host router.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Index => "embedded_form_index",
            Self::ThankYou => "embedded_form_thank_you",
        }
    }

    /// Path relative to the page URL.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Index => "",
            Self::ThankYou => "thank-you/",
        }
    }

    /// Match a path relative to the page URL.
    pub fn from_subpath(path: &str) -> Option<Self> {
        match path.trim_start_matches('/') {
            "" => Some(Self::Index),
            "thank-you/" => Some(Self::ThankYou),
            _ => None,
        }
    }
}

/// A CMS page that embeds a remote form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddedFormPage {
    pub title: String,
    pub slug: String,
    /// Absolute URL of the page, as resolved by the host.
    pub full_url: String,
    #[serde(default)]
    pub introduction: String,
    /// Id of the selected remote form. May refer to a form that no longer exists.
    #[serde(default)]
    pub form: String,
    /// Rich text shown on the thank-you route.
    #[serde(default)]
    pub thank_you_text: String,
}

impl EmbeddedFormPage {
    pub fn new(
        title: impl Into<String>,
        slug: impl Into<String>,
        full_url: impl Into<String>,
        form: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            full_url: full_url.into(),
            form: form.into(),
            ..Self::default()
        }
    }

    /// The selected form id, if one is set.
    pub fn form_id(&self) -> Option<&str> {
        Some(self.form.trim()).filter(|id| !id.is_empty())
    }

    /// Absolute URL of a sub-route of this page.
    pub fn route_url(&self, route: EmbeddedFormRoute) -> String {
        format!("{}/{}", self.full_url.trim_end_matches('/'), route.path())
    }

    /// Absolute URL users are redirected to after submitting the form.
    pub fn thank_you_url(&self) -> String {
        self.route_url(EmbeddedFormRoute::ThankYou)
    }
}

impl PublishedPage for EmbeddedFormPage {
    fn as_embedded_form(&self) -> Option<&EmbeddedFormPage> {
        Some(self)
    }
}
