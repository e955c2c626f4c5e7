use yew::prelude::*;

#[function_component(Separator)]
pub(crate) fn separator() -> Html {
    html! { <div class="divider my-1" role="separator"></div> }
}
