//! Subscribe and like/dislike controls with optimistic updates.
//!
//! # Design
//! - Each control owns an [`Optimistic`] reducer; parents remount it (via `key`) when the target changes.
//! - New viewer status from the parent is seeded, and ignored while a mutation is in flight.
//! - Presses go through the core press helpers, which redirect signed-out viewers before any request.

use crate::app::api::use_api;
use crate::app::notify;
use crate::app::session::{go_to_login, use_session};
use crate::core::format::subscribers_label;
use crate::core::gate::Gated;
use crate::core::optimistic::{Optimistic, OptimisticAction};
use crate::core::reaction::{REACTION_FAILED, ReactionPress, ReactionState, press_reaction};
use crate::core::store::ToastKind;
use crate::core::subscription::{SUBSCRIPTION_FAILED, SubscriptionState, press_subscribe};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[derive(Properties, PartialEq)]
pub(crate) struct SubscribeControlProps {
    pub channel_id: AttrValue,
    pub initial: SubscriptionState,
    /// Path to come back to after signing in.
    pub return_path: AttrValue,
}

#[function_component(SubscribeControl)]
pub(crate) fn subscribe_control(props: &SubscribeControlProps) -> Html {
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator();
    let state = {
        let initial = props.initial;
        use_reducer(move || Optimistic::new(initial))
    };
    {
        let state = state.clone();
        use_effect_with_deps(
            move |initial: &SubscriptionState| {
                state.dispatch(OptimisticAction::Seed(*initial));
                || ()
            },
            props.initial,
        );
    }

    let on_toggle = {
        let state = state.clone();
        let channel_id = props.channel_id.to_string();
        let return_path = props.return_path.to_string();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let state = state.clone();
            let channel_id = channel_id.clone();
            let return_path = return_path.clone();
            spawn_local(async move {
                let begin = state.clone();
                let gated = press_subscribe(
                    &*api,
                    &session,
                    &return_path,
                    &state,
                    &channel_id,
                    move |next| begin.dispatch(OptimisticAction::Begin(next)),
                )
                .await;
                match gated {
                    Gated::SignIn(redirect) => go_to_login(navigator.as_ref(), &redirect),
                    Gated::Ignored => {}
                    Gated::Proceed(action) => {
                        if action == OptimisticAction::Rollback {
                            notify(ToastKind::Error, SUBSCRIPTION_FAILED);
                        }
                        state.dispatch(action);
                    }
                }
            });
        })
    };

    let current = *state.current();
    html! {
        <div class="subscribe-control">
            <span class="muted small">{subscribers_label(current.subscribers)}</span>
            <button
                class={classes!("subscribe", current.subscribed.then_some("subscribed"))}
                aria-busy={state.is_pending().to_string()}
                onclick={on_toggle}
            >
                {if current.subscribed { "Subscribed" } else { "Subscribe" }}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ReactionControlsProps {
    pub video_id: AttrValue,
    pub initial: ReactionState,
    /// Path to come back to after signing in.
    pub return_path: AttrValue,
}

#[function_component(ReactionControls)]
pub(crate) fn reaction_controls(props: &ReactionControlsProps) -> Html {
    let session = use_session();
    let api = use_api();
    let navigator = use_navigator();
    let state = {
        let initial = props.initial;
        use_reducer(move || Optimistic::new(initial))
    };
    {
        let state = state.clone();
        use_effect_with_deps(
            move |initial: &ReactionState| {
                state.dispatch(OptimisticAction::Seed(*initial));
                || ()
            },
            props.initial,
        );
    }

    let on_press = |press: ReactionPress| {
        let state = state.clone();
        let session = session.clone();
        let api = api.clone();
        let navigator = navigator.clone();
        let video_id = props.video_id.to_string();
        let return_path = props.return_path.to_string();
        Callback::from(move |_: MouseEvent| {
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let state = state.clone();
            let video_id = video_id.clone();
            let return_path = return_path.clone();
            spawn_local(async move {
                let begin = state.clone();
                let gated = press_reaction(
                    &*api,
                    &session,
                    &return_path,
                    &state,
                    &video_id,
                    press,
                    move |next| begin.dispatch(OptimisticAction::Begin(next)),
                )
                .await;
                match gated {
                    Gated::SignIn(redirect) => go_to_login(navigator.as_ref(), &redirect),
                    Gated::Ignored => {}
                    Gated::Proceed(action) => {
                        if action == OptimisticAction::Rollback {
                            notify(ToastKind::Error, REACTION_FAILED);
                        }
                        state.dispatch(action);
                    }
                }
            });
        })
    };

    let current = *state.current();
    let busy = state.is_pending().to_string();
    html! {
        <div class="reaction-controls">
            <button
                class={classes!("reaction", current.liked().then_some("active"))}
                aria-pressed={current.liked().to_string()}
                aria-busy={busy.clone()}
                onclick={on_press(ReactionPress::Like)}
            >
                <span aria-hidden="true">{"👍"}</span>
                {count(current.likes)}
            </button>
            <button
                class={classes!("reaction", current.disliked().then_some("active"))}
                aria-pressed={current.disliked().to_string()}
                aria-busy={busy}
                onclick={on_press(ReactionPress::Dislike)}
            >
                <span aria-hidden="true">{"👎"}</span>
                {count(current.dislikes)}
            </button>
        </div>
    }
}

fn count(value: u64) -> Html {
    if value > 0 {
        html! { <span>{value}</span> }
    } else {
        html! {}
    }
}
