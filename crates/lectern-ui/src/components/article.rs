use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

/// Article body. Styling comes from the CSS variables set on the app root.
#[function_component(Article)]
pub(crate) fn article() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <article class="article">
            <h1 class="article__title">{bundle.text("article.title", "")}</h1>
            <p class="article__subtitle">{bundle.text("article.subtitle", "")}</p>
            {for bundle.paragraphs("article.body").into_iter().map(|text| html! {
                <p class="article__text">{text}</p>
            })}
        </article>
    }
}
