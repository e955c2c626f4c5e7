use crate::core::visibility::is_activation_key;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ArrowButtonProps {
    pub is_open: bool,
    pub label: AttrValue,
    #[prop_or_default]
    pub icon_title: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

/// Round toggle control pinned to the panel edge; purely reflects `is_open`.
#[function_component(ArrowButton)]
pub(crate) fn arrow_button(props: &ArrowButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        Callback::from(move |_: MouseEvent| onclick.emit(()))
    };
    let onkeydown = {
        let onclick = props.onclick.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_activation_key(&event.key()) && !event.repeat() {
                event.prevent_default();
                onclick.emit(());
            }
        })
    };
    let container = classes!("arrow-button", props.is_open.then_some("arrow-button--open"));
    let arrow = classes!("arrow-icon", props.is_open.then_some("arrow-icon--open"));
    let aria_hidden = props.icon_title.is_none().then_some(AttrValue::from("true"));

    html! {
        <div
            class={container}
            role="button"
            tabindex="0"
            aria-label={props.label.clone()}
            aria-expanded={if props.is_open { "true" } else { "false" }}
            {onclick}
            {onkeydown}
        >
            <svg
                class={arrow}
                width="24"
                height="24"
                viewBox="0 0 24 24"
                role="img"
                aria-hidden={aria_hidden}
                aria-label={props.icon_title.clone()}
            >
                {props.icon_title.clone().map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
                <path
                    d="M4 12h14m-6-6l6 6l-6 6"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                />
            </svg>
        </div>
    }
}
