use crate::core::catalog::{ArticleOption, Category};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct OptionRadioGroupProps {
    pub name: AttrValue,
    pub category: Category,
    pub selected: ArticleOption,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub onchange: Callback<ArticleOption>,
}

/// Radio buttons for every option of one catalog category.
#[function_component(OptionRadioGroup)]
pub(crate) fn option_radio_group(props: &OptionRadioGroupProps) -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));

    html! {
        <fieldset class="form-control w-full">
            {props.title.clone().map(|title| html! {
                <legend class="label-text uppercase font-semibold pb-2">{title}</legend>
            }).unwrap_or_default()}
            <div class="flex flex-wrap gap-3" role="radiogroup">
                {for props.category.options().iter().copied().map(|option| {
                    let onclick = {
                        let onchange = props.onchange.clone();
                        Callback::from(move |_: MouseEvent| onchange.emit(option))
                    };
                    let id = format!("{}-{}", props.name, option.value());
                    html! {
                        <label class="label cursor-pointer gap-2" for={id.clone()}>
                            <input
                                {id}
                                type="radio"
                                name={props.name.clone()}
                                value={option.value()}
                                class={classes!("radio", "radio-sm", option.class_name())}
                                checked={option == props.selected}
                                {onclick}
                            />
                            <span class="label-text">{bundle.option_label(option)}</span>
                        </label>
                    }
                })}
            </div>
        </fieldset>
    }
}
