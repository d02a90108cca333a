use crate::core::store::{TOAST_TIMEOUT_MS, Toast, ToastKind, UiStore};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

fn dismiss(id: u64) {
    Dispatch::<UiStore>::new().reduce_mut(|store| store.dismiss_toast(id));
}

#[function_component(ToastHost)]
pub(crate) fn toast_host() -> Html {
    let toasts = use_selector(|store: &UiStore| store.toasts.clone());

    html! {
        <div class="toast-host" aria-live="polite" aria-atomic="true">
            {for toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

/// One toast; its expiry timer lives as long as the toast's id.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    use_effect_with_deps(
        |id: &u64| {
            let id = *id;
            let handle = Timeout::new(TOAST_TIMEOUT_MS, move || dismiss(id));
            move || drop(handle)
        },
        props.toast.id,
    );

    let toast = &props.toast;
    let class = match toast.kind {
        ToastKind::Info => "info",
        ToastKind::Success => "success",
        ToastKind::Error => "error",
    };
    let id = toast.id;
    let on_close = Callback::from(move |_| dismiss(id));

    html! {
        <div class={classes!("toast", class)} role="status">
            <span>{toast.message.clone()}</span>
            <button class="ghost" aria-label="Dismiss" onclick={on_close}>{"✕"}</button>
        </div>
    }
}
