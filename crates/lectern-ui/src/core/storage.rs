//! Durable preference persistence over a string key-value backend.
//!
//! # Design
//! - Backends only move strings; encoding lives in [`PreferenceStore`].
//! - Unreadable payloads load as absent so callers fall back to defaults.
//! - Access is single-threaded; backends use interior mutability instead of locks.

use crate::core::preferences::PreferenceSet;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage key for the applied preference set.
pub const ARTICLE_STATE_KEY: &str = "articleState";
/// Storage key for the draft preference set.
pub const FORM_STATE_KEY: &str = "formState";

/// Errors raised while reading or writing persisted preferences.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend refused the operation (quota exceeded, storage disabled, ...).
    #[error("storage {operation} failed for key {key}: {detail}")]
    Backend {
        /// Operation name (`get`, `set`, `remove`).
        operation: &'static str,
        /// Key being accessed.
        key: String,
        /// Backend-provided detail.
        detail: String,
    },
    /// The preference set could not be encoded.
    #[error("failed to encode preferences for key {key}")]
    Encode {
        /// Key being written.
        key: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
    /// The stored payload is not a valid preference set.
    #[error("stored preferences under key {key} are malformed")]
    Decode {
        /// Key being read.
        key: String,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous, string-valued key-value backend.
pub trait KeyValueStore {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns [`StoreError::Backend`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`, if any.
    fn remove(&self, key: &str);
}

/// In-process backend used for native builds and tests.
///
/// Clones share the same underlying map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value currently held for `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Whether anything is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Preference persistence adapter over a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct PreferenceStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    /// Wrap a backend.
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Load the set stored under `key`, surfacing decode and backend failures.
    ///
    /// # Errors
    /// Returns [`StoreError::Decode`] for malformed payloads and
    /// [`StoreError::Backend`] when the backend cannot be read.
    pub fn try_load(&self, key: &str) -> Result<Option<PreferenceSet>, StoreError> {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Decode {
                key: key.to_string(),
                source,
            })
    }

    /// Load the set stored under `key`; absent or unreadable entries yield `None`.
    #[must_use]
    pub fn load(&self, key: &str) -> Option<PreferenceSet> {
        self.load_reporting(key, |_| ())
    }

    /// Load the set stored under `key`, falling back to catalog defaults.
    ///
    /// Decode and backend failures are handed to `report` and the entry is
    /// treated as absent.
    #[must_use]
    pub fn load_or_report(
        &self,
        key: &str,
        report: impl FnOnce(&StoreError),
    ) -> PreferenceSet {
        self.load_reporting(key, report).unwrap_or_default()
    }

    fn load_reporting(
        &self,
        key: &str,
        report: impl FnOnce(&StoreError),
    ) -> Option<PreferenceSet> {
        self.try_load(key).unwrap_or_else(|err| {
            report(&err);
            None
        })
    }

    /// Persist `set` under `key`.
    ///
    /// # Errors
    /// Returns [`StoreError::Encode`] if serialization fails or
    /// [`StoreError::Backend`] if the backend rejects the write.
    pub fn save(&self, key: &str, set: &PreferenceSet) -> Result<(), StoreError> {
        let raw = serde_json::to_string(set).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set(key, &raw)
    }

    /// Remove whatever is stored under `key`.
    pub fn clear(&self, key: &str) {
        self.backend.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{
        ARTICLE_STATE_KEY, FORM_STATE_KEY, KeyValueStore, MemoryStore, PreferenceStore,
        StoreError,
    };
    use crate::core::catalog::Category;
    use crate::core::preferences::PreferenceSet;

    fn store() -> (MemoryStore, PreferenceStore<MemoryStore>) {
        let backend = MemoryStore::new();
        (backend.clone(), PreferenceStore::new(backend))
    }

    #[test]
    fn load_after_save_returns_the_same_set() {
        let (_, prefs) = store();
        let set = PreferenceSet::defaults()
            .with(Category::FontFamily.options()[2])
            .with(Category::BackgroundColor.options()[8])
            .with(Category::ContentWidth.options()[1]);
        prefs.save(ARTICLE_STATE_KEY, &set).expect("save");
        assert_eq!(
            prefs.try_load(ARTICLE_STATE_KEY).expect("readable"),
            Some(set)
        );
    }

    #[test]
    fn never_written_key_is_absent() {
        let (_, prefs) = store();
        assert_eq!(prefs.try_load(FORM_STATE_KEY).expect("readable"), None);
        assert_eq!(
            prefs.load_or_report(FORM_STATE_KEY, |err| panic!("unexpected {err}")),
            PreferenceSet::defaults()
        );
    }

    #[test]
    fn clear_removes_the_entry() {
        let (backend, prefs) = store();
        prefs
            .save(FORM_STATE_KEY, &PreferenceSet::defaults())
            .expect("save");
        assert!(backend.contains(FORM_STATE_KEY));
        prefs.clear(FORM_STATE_KEY);
        assert!(!backend.contains(FORM_STATE_KEY));
        assert_eq!(prefs.try_load(FORM_STATE_KEY).expect("readable"), None);
    }

    #[test]
    fn malformed_payload_loads_as_defaults_and_is_reported() {
        let (backend, prefs) = store();
        backend.set(ARTICLE_STATE_KEY, "{not json").expect("set");
        assert!(matches!(
            prefs.try_load(ARTICLE_STATE_KEY),
            Err(StoreError::Decode { .. })
        ));
        let mut reported = None;
        let loaded = prefs.load_or_report(ARTICLE_STATE_KEY, |err| {
            reported = Some(err.to_string());
        });
        assert_eq!(loaded, PreferenceSet::defaults());
        assert_eq!(prefs.load(ARTICLE_STATE_KEY), None);
        assert!(reported.is_some_and(|message| message.contains(ARTICLE_STATE_KEY)));
    }

    #[test]
    fn foreign_option_payload_loads_as_absent() {
        let (backend, prefs) = store();
        let mut value = serde_json::to_value(PreferenceSet::defaults()).expect("encode");
        value["fontFamilyOption"]["value"] = serde_json::json!("Comic Sans MS");
        backend
            .set(ARTICLE_STATE_KEY, &value.to_string())
            .expect("set");
        assert!(prefs.try_load(ARTICLE_STATE_KEY).is_err());
        assert_eq!(prefs.load(ARTICLE_STATE_KEY), None);
        let mut reported = 0;
        assert_eq!(
            prefs.load_or_report(ARTICLE_STATE_KEY, |_| reported += 1),
            PreferenceSet::defaults()
        );
        assert_eq!(reported, 1);
    }

    #[test]
    fn saved_payload_is_plain_json() {
        let (backend, prefs) = store();
        prefs
            .save(ARTICLE_STATE_KEY, &PreferenceSet::defaults())
            .expect("save");
        let raw = backend.raw(ARTICLE_STATE_KEY).expect("raw entry");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(parsed["fontFamilyOption"]["title"], "Open Sans");
    }
}
