use yew::prelude::*;

#[function_component(Loading)]
pub(crate) fn loading() -> Html {
    html! {
        <div class="loading" role="status" aria-label="Loading">
            <div class="spinner"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ErrorNoticeProps {
    pub message: AttrValue,
}

#[function_component(ErrorNotice)]
pub(crate) fn error_notice(props: &ErrorNoticeProps) -> Html {
    html! { <div class="error-notice" role="alert">{props.message.clone()}</div> }
}
