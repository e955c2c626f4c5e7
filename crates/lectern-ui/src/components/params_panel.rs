//! Article parameters side panel.
//!
//! # Design
//! - The panel owns the draft; the applied set lives in the app store and only changes on submit or reset.
//! - Persistence is an explicit call inside each operation, never an effect on state changes.
//! - The outside-click listener exists only while the panel is open.

use crate::app::preferences::{log_store_error, preference_store, warn_unreadable};
use crate::components::controls::{
    ActionButton, ActionKind, ArrowButton, OptionRadioGroup, OptionSelect, Separator,
};
use crate::core::catalog::{ArticleOption, Category};
use crate::core::panel::SettingsPanel;
use crate::core::store::AppStore;
use crate::core::visibility::{PanelVisibility, VisibilityAction};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yewdux::prelude::Dispatch;

#[function_component(ArticleParamsPanel)]
pub(crate) fn article_params_panel() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let t = |key: &str, fallback: &str| AttrValue::from(bundle.text(key, fallback));
    let visibility = use_reducer(PanelVisibility::default);
    let panel = use_state(|| SettingsPanel::mount(&preference_store(), warn_unreadable));
    let region_ref = use_node_ref();
    let dispatch = Dispatch::<AppStore>::new();
    let is_open = visibility.is_open();

    {
        let region_ref = region_ref.clone();
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |wants_listener| {
                let listener = wants_listener.then(|| {
                    EventListener::new(&document(), "pointerdown", move |event| {
                        let inside = event_inside(&region_ref, event);
                        visibility.dispatch(VisibilityAction::PointerDown { inside });
                    })
                });
                move || drop(listener)
            },
            visibility.wants_dismiss_listener(),
        );
    }

    let on_toggle = {
        let visibility = visibility.clone();
        Callback::from(move |()| visibility.dispatch(VisibilityAction::Toggle))
    };

    let on_change = {
        let panel = panel.clone();
        Callback::from(move |option: ArticleOption| {
            let mut next = *panel;
            if let Err(err) = next.change_option(option, &preference_store()) {
                log_store_error(&err);
            }
            panel.set(next);
        })
    };

    let on_submit = {
        let panel = panel.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let current = *panel;
            dispatch.reduce_mut(move |store| {
                if let Err(err) = current.submit(&mut store.applied, &preference_store()) {
                    log_store_error(&err);
                }
            });
        })
    };

    let on_reset = {
        let panel = panel.clone();
        Callback::from(move |()| {
            let mut next = *panel;
            dispatch.reduce_mut(|store| {
                if let Err(err) = next.reset(&mut store.applied, &preference_store()) {
                    log_store_error(&err);
                }
            });
            panel.set(next);
        })
    };

    let draft = *panel.draft();
    let select = |category: Category, placeholder: &str| {
        html! {
            <OptionSelect
                {category}
                selected={draft.get(category)}
                title={t(&format!("fields.{}", category.key()), category.key())}
                placeholder={t(&format!("placeholders.{}", category.key()), placeholder)}
                onchange={on_change.clone()}
            />
        }
    };
    let aside_class = classes!("params-panel", is_open.then_some("params-panel--open"));

    html! {
        <div ref={region_ref} class="params-region">
            <ArrowButton
                {is_open}
                label={t("panel.toggle", "Open or close the article parameters form")}
                icon_title={t("panel.arrow_alt", "arrow icon")}
                onclick={on_toggle}
            />
            <aside class={aside_class} aria-hidden={(!is_open).then_some("true")}>
                <form class="params-form" onsubmit={on_submit}>
                    <h2 class="params-form__title uppercase">
                        {t("panel.title", "Set the parameters")}
                    </h2>
                    {select(Category::FontFamily, "Select a font family")}
                    <OptionRadioGroup
                        name="fontSizeGroup"
                        category={Category::FontSize}
                        selected={draft.font_size()}
                        title={t("fields.font_size", "Font size")}
                        onchange={on_change.clone()}
                    />
                    {select(Category::FontColor, "Select a font color")}
                    <Separator />
                    {select(Category::BackgroundColor, "Select a background color")}
                    {select(Category::ContentWidth, "Select content width")}
                    <div class="params-form__actions">
                        <ActionButton
                            label={t("panel.reset", "Reset")}
                            kind={ActionKind::Reset}
                            onclick={on_reset}
                        />
                        <ActionButton label={t("panel.apply", "Apply")} kind={ActionKind::Submit} />
                    </div>
                </form>
            </aside>
        </div>
    }
}

/// Whether the event target sits inside the live panel region (toggle control included).
fn event_inside(region_ref: &NodeRef, event: &Event) -> bool {
    let Some(region) = region_ref.get() else {
        return false;
    };
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| region.contains(Some(&node)))
}
