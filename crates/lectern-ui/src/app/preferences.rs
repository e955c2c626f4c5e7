//! Browser persistence and environment helpers for the app shell.

use crate::core::storage::{KeyValueStore, PreferenceStore, StoreError};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

/// `window.localStorage` backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|err| backend_error("get", key, &format!("{err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| backend_error("set", key, &format!("{err:?}")))
    }

    fn remove(&self, key: &str) {
        if let Err(err) = LocalStorage::raw().remove_item(key) {
            log_store_error(&backend_error("remove", key, &format!("{err:?}")));
        }
    }
}

pub(crate) const fn preference_store() -> PreferenceStore<BrowserStore> {
    PreferenceStore::new(BrowserStore)
}

pub(crate) fn load_locale() -> LocaleCode {
    window()
        .navigator()
        .language()
        .and_then(|tag| LocaleCode::from_lang_tag(&tag))
        .unwrap_or(DEFAULT_LOCALE)
}

pub(crate) fn log_store_error(err: &StoreError) {
    console::error!("preference storage failed", err.to_string());
}

/// Startup hook for entries that cannot be read back; the caller falls back to defaults.
pub(crate) fn warn_unreadable(err: &StoreError) {
    console::warn!("ignoring stored preferences", err.to_string());
}

fn backend_error(operation: &'static str, key: &str, detail: &str) -> StoreError {
    StoreError::Backend {
        operation,
        key: key.to_string(),
        detail: detail.to_string(),
    }
}
