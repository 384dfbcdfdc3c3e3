//! Settings providers.
//!
//! A provider hands out a fresh [`Settings`] snapshot each time it is asked.
//! The client calls it once per operation and never keeps the result, so a
//! host that changes its configuration sees the change on the next request.

use std::sync::{Arc, PoisonError, RwLock};

use crate::settings::Settings;

/// Source of integration settings, consulted on every operation.
pub trait SettingsProvider: Send + Sync {
    /// Return the current settings.
    fn settings(&self) -> Settings;
}

impl SettingsProvider for Settings {
    fn settings(&self) -> Settings {
        self.clone()
    }
}

impl<P: SettingsProvider + ?Sized> SettingsProvider for Arc<P> {
    fn settings(&self) -> Settings {
        (**self).settings()
    }
}

/// Host-owned settings that can be replaced at runtime.
///
/// Clones share the same underlying value.
#[derive(Debug, Clone, Default)]
pub struct SharedSettings {
    inner: Arc<RwLock<Settings>>,
}

impl SharedSettings {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(RwLock::new(settings)),
        }
    }

    /// Replace the current settings.
    pub fn replace(&self, settings: Settings) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = settings;
    }

    /// Apply an in-place update to the current settings.
    pub fn update(&self, f: impl FnOnce(&mut Settings)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard);
    }
}

impl SettingsProvider for SharedSettings {
    fn settings(&self) -> Settings {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
