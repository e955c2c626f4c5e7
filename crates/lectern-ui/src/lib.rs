#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Lectern article reader.
//! This crate holds the Yew front-end entrypoint, the DOM-free preference core
//! and the locale bundles for the reading view.

pub mod core;
pub mod i18n;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;

#[cfg(test)]
mod tests {
    use crate::core::catalog::Category;
    use crate::core::panel::{SettingsPanel, mount_applied};
    use crate::core::storage::{FORM_STATE_KEY, MemoryStore, PreferenceStore};
    use crate::core::store::AppStore;
    use crate::core::visibility::{PanelVisibility, VisibilityAction};

    #[test]
    fn session_survives_a_reload() {
        let backend = MemoryStore::new();
        let prefs = PreferenceStore::new(backend.clone());
        let mut panel = SettingsPanel::mount(&prefs, |_| ());
        let mut store = AppStore::restore(&prefs, |_| ());
        let serif = Category::FontFamily
            .find("'Merriweather', serif")
            .expect("catalog font");
        let yellow = Category::BackgroundColor
            .find("#FFC802")
            .expect("catalog color");
        panel.change_option(serif, &prefs).expect("persist");
        panel.submit(&mut store.applied, &prefs).expect("persist");
        panel.change_option(yellow, &prefs).expect("persist");

        let reopened = PreferenceStore::new(backend);
        let panel_after = SettingsPanel::mount(&reopened, |_| ());
        assert_eq!(panel_after.draft().font_family(), serif);
        assert_eq!(panel_after.draft().background_color(), yellow);
        let applied_after = mount_applied(&reopened, |_| ());
        assert_eq!(applied_after.font_family(), serif);
        assert!(applied_after.background_color().is_default());
        assert!(reopened.try_load(FORM_STATE_KEY).expect("readable").is_some());
    }

    #[test]
    fn closing_the_panel_keeps_the_draft() {
        let prefs = PreferenceStore::new(MemoryStore::new());
        let mut panel = SettingsPanel::mount(&prefs, |_| ());
        let visibility = PanelVisibility::default().apply(VisibilityAction::Toggle);
        let purple = Category::FontColor.find("#5F1694").expect("catalog color");
        panel.change_option(purple, &prefs).expect("persist");
        let visibility = visibility.apply(VisibilityAction::PointerDown { inside: false });

        assert!(!visibility.is_open());
        assert_eq!(panel.draft().font_color(), purple);
        assert!(mount_applied(&prefs, |_| ()).font_color().is_default());
    }
}
