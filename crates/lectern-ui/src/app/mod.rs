use crate::components::article::Article;
use crate::components::params_panel::ArticleParamsPanel;
use crate::core::store::AppStore;
use crate::i18n::{LocaleCode, TranslationBundle};
use gloo::console;
use gloo::utils::document;
use preferences::{load_locale, preference_store, warn_unreadable};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

pub(crate) mod preferences;

#[function_component(LecternApp)]
fn lectern_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let applied = use_selector(|store: &AppStore| store.applied);

    {
        let locale = *locale;
        use_effect_with_deps(
            move |_| {
                apply_lang(locale);
                || ()
            },
            locale,
        );
    }

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <main class="main" style={applied.inline_style()}>
                <ArticleParamsPanel />
                <Article />
            </main>
        </ContextProvider<TranslationBundle>>
    }
}

fn apply_lang(locale: LocaleCode) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("lang", locale.code()) {
            console::warn!("failed to set document language", err);
        }
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    Dispatch::<AppStore>::new().set(AppStore::restore(&preference_store(), warn_unreadable));
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<LecternApp>::with_root(root).render();
    } else {
        yew::Renderer::<LecternApp>::new().render();
    }
}
