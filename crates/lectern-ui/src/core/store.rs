//! App-wide yewdux store.
//!
//! # Design
//! - Only the applied preference set is shared; the draft stays with the settings panel.
//! - The store is seeded from durable storage before the first render.

use crate::core::panel::mount_applied;
use crate::core::preferences::PreferenceSet;
use crate::core::storage::{KeyValueStore, PreferenceStore, StoreError};
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Preference set currently driving the article rendering.
    pub applied: PreferenceSet,
}

impl AppStore {
    /// Store seeded with the persisted applied set, or catalog defaults.
    #[must_use]
    pub fn restore<S: KeyValueStore>(
        store: &PreferenceStore<S>,
        report: impl FnOnce(&StoreError),
    ) -> Self {
        Self {
            applied: mount_applied(store, report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppStore;
    use crate::core::catalog::Category;
    use crate::core::panel::SettingsPanel;
    use crate::core::preferences::PreferenceSet;
    use crate::core::storage::{MemoryStore, PreferenceStore};

    #[test]
    fn default_store_renders_catalog_defaults() {
        assert_eq!(AppStore::default().applied, PreferenceSet::defaults());
    }

    #[test]
    fn restore_picks_up_a_previous_commit() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut panel = SettingsPanel::mount(&prefs, |_| ());
        let mut store = AppStore::restore(&prefs, |_| ());
        let narrow = Category::ContentWidth.find("948px").expect("catalog width");
        panel.change_option(narrow, &prefs).expect("persist");
        panel.submit(&mut store.applied, &prefs).expect("persist");

        let reloaded = AppStore::restore(&prefs, |_| ());
        assert_eq!(reloaded, store);
        assert_eq!(reloaded.applied.content_width(), narrow);
    }
}
