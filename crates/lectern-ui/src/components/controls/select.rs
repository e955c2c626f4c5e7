use crate::core::catalog::{ArticleOption, Category};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct OptionSelectProps {
    pub category: Category,
    pub selected: ArticleOption,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub onchange: Callback<ArticleOption>,
}

/// Dropdown bound to one catalog category.
#[function_component(OptionSelect)]
pub(crate) fn option_select(props: &OptionSelectProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let id = format!("select-{}", props.category.key());
    let select_ref = use_node_ref();

    // Yew renders `value` on <select> as an attribute only; drive the live
    // selection so external changes such as reset are shown after a manual pick.
    {
        let select_ref = select_ref.clone();
        let offset = usize::from(props.placeholder.is_some());
        let category = props.category;
        use_effect_with_deps(
            move |selected: &ArticleOption| {
                let index = category
                    .position(*selected)
                    .and_then(|position| i32::try_from(position + offset).ok());
                if let (Some(select), Some(index)) =
                    (select_ref.cast::<web_sys::HtmlSelectElement>(), index)
                {
                    select.set_selected_index(index);
                }
                || ()
            },
            props.selected,
        );
    }
    let onchange = {
        let onchange = props.onchange.clone();
        let category = props.category;
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                if let Some(option) = category.find(&target.value()) {
                    onchange.emit(option);
                }
            }
        })
    };

    html! {
        <div class="form-control w-full">
            {props.title.clone().map(|title| html! {
                <label class="label" for={id.clone()}>
                    <span class="label-text uppercase font-semibold">{title}</span>
                </label>
            }).unwrap_or_default()}
            <select
                ref={select_ref}
                id={id}
                class="select select-bordered select-md w-full"
                {onchange}
            >
                {props.placeholder.clone().map(|text| html! {
                    <option disabled={true} value="">{text}</option>
                }).unwrap_or_default()}
                {for props.category.options().iter().map(|option| html! {
                    <option value={option.value()} class={classes!(option.class_name())}>
                        {bundle.option_label(*option)}
                    </option>
                })}
            </select>
        </div>
    }
}
