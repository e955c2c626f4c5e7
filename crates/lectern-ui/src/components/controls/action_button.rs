use yew::prelude::*;

/// Semantic role of an action button inside the panel form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ActionKind {
    /// Commits the form through native submission.
    Submit,
    /// Clear-style trigger; native form reset is suppressed.
    Reset,
}

impl ActionKind {
    const fn button_type(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }

    const fn class(self) -> &'static str {
        match self {
            Self::Submit => "btn-primary",
            Self::Reset => "btn-outline",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ActionButtonProps {
    pub label: AttrValue,
    pub kind: ActionKind,
    #[prop_or_default]
    pub onclick: Callback<()>,
}

#[function_component(ActionButton)]
pub(crate) fn action_button(props: &ActionButtonProps) -> Html {
    let onclick = {
        let onclick = props.onclick.clone();
        let kind = props.kind;
        Callback::from(move |event: MouseEvent| {
            if kind == ActionKind::Reset {
                event.prevent_default();
            }
            onclick.emit(());
        })
    };

    html! {
        <button
            class={classes!("btn", "btn-md", props.kind.class())}
            type={props.kind.button_type()}
            {onclick}
        >
            {props.label.clone()}
        </button>
    }
}
