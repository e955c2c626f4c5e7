//! Draft/applied reconciliation for the article settings panel.
//!
//! # Design
//! - The panel owns the draft; the applied set is passed in by its owner on commit and reset.
//! - Persistence is an explicit step of each operation, after the in-memory update.
//! - A commit replaces the applied set in a single assignment.

use crate::core::catalog::ArticleOption;
use crate::core::preferences::PreferenceSet;
use crate::core::storage::{
    ARTICLE_STATE_KEY, FORM_STATE_KEY, KeyValueStore, PreferenceStore, StoreError,
};

/// Settings panel state: the uncommitted draft.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsPanel {
    draft: PreferenceSet,
}

impl SettingsPanel {
    /// Panel seeded with `draft`.
    #[must_use]
    pub const fn new(draft: PreferenceSet) -> Self {
        Self { draft }
    }

    /// Panel seeded from the persisted draft, or catalog defaults.
    ///
    /// An unreadable draft entry is handed to `report` and treated as absent.
    #[must_use]
    pub fn mount<S: KeyValueStore>(
        store: &PreferenceStore<S>,
        report: impl FnOnce(&StoreError),
    ) -> Self {
        Self::new(store.load_or_report(FORM_STATE_KEY, report))
    }

    /// Current draft.
    #[must_use]
    pub const fn draft(&self) -> &PreferenceSet {
        &self.draft
    }

    /// Replace the draft field of the option's category and persist the draft.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the draft cannot be persisted; the in-memory
    /// draft is updated regardless.
    pub fn change_option<S: KeyValueStore>(
        &mut self,
        option: ArticleOption,
        store: &PreferenceStore<S>,
    ) -> Result<(), StoreError> {
        self.draft.set(option);
        store.save(FORM_STATE_KEY, &self.draft)
    }

    /// Copy the whole draft into `applied` and persist it.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the applied set cannot be persisted; `applied`
    /// is updated regardless.
    pub fn submit<S: KeyValueStore>(
        &self,
        applied: &mut PreferenceSet,
        store: &PreferenceStore<S>,
    ) -> Result<(), StoreError> {
        *applied = self.draft;
        store.save(ARTICLE_STATE_KEY, applied)
    }

    /// Return draft and applied to catalog defaults, drop the persisted draft
    /// and persist the defaults as the applied set.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the applied defaults cannot be persisted.
    pub fn reset<S: KeyValueStore>(
        &mut self,
        applied: &mut PreferenceSet,
        store: &PreferenceStore<S>,
    ) -> Result<(), StoreError> {
        self.draft = PreferenceSet::defaults();
        *applied = PreferenceSet::defaults();
        store.clear(FORM_STATE_KEY);
        store.save(ARTICLE_STATE_KEY, applied)
    }
}

/// Applied set restored from storage, or catalog defaults.
///
/// An unreadable applied entry is handed to `report` and treated as absent.
#[must_use]
pub fn mount_applied<S: KeyValueStore>(
    store: &PreferenceStore<S>,
    report: impl FnOnce(&StoreError),
) -> PreferenceSet {
    store.load_or_report(ARTICLE_STATE_KEY, report)
}
