//! Comment list and composer.

use crate::app::api::use_api;
use crate::app::hooks::use_fetch;
use crate::app::notify;
use crate::app::Route;
use crate::app::session::{go_to_login, use_session};
use crate::components::atoms::{Avatar, EmptyState, ErrorNotice, Loading};
use crate::core::fetch::FetchState;
use crate::core::format::{comments_label, relative_time};
use crate::core::gate::Gated;
use crate::core::loaders::load_comments;
use crate::core::store::ToastKind;
use crate::features::comments::state::{
    NO_COMMENTS, can_submit, submit_draft, with_new_comment,
};
use crate::features::watch::state::watch_path;
use chrono::Utc;
use tubestream_api_models::Comment;
use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CommentSectionProps {
    pub video_id: AttrValue,
}

#[function_component(CommentSection)]
pub(crate) fn comment_section(props: &CommentSectionProps) -> Html {
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let draft = use_state(String::new);
    let submitting = use_state(|| false);
    let posted = use_state(Vec::<Comment>::new);
    let fetched = {
        let api = api.clone();
        use_fetch(props.video_id.to_string(), move |id| async move {
            load_comments(&*api, &id).await
        })
    };

    let on_input = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlTextAreaElement = event.target_unchecked_into();
            draft.set(input.value());
        })
    };
    let on_cancel = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| draft.set(String::new()))
    };
    let on_submit = {
        let session = session.clone();
        let draft = draft.clone();
        let submitting = submitting.clone();
        let posted = posted.clone();
        let video_id = props.video_id.to_string();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let text = (*draft).clone();
            let busy = *submitting;
            let draft = draft.clone();
            let submitting = submitting.clone();
            let posted = posted.clone();
            let video_id = video_id.clone();
            spawn_local(async move {
                let begin = submitting.clone();
                let gated = submit_draft(
                    &*api,
                    &session,
                    &watch_path(&video_id),
                    &video_id,
                    &text,
                    busy,
                    move || begin.set(true),
                )
                .await;
                match gated {
                    Gated::SignIn(redirect) => go_to_login(navigator.as_ref(), &redirect),
                    Gated::Ignored => {}
                    Gated::Proceed(outcome) => {
                        match outcome {
                            Ok(created) => {
                                posted.set(with_new_comment(&posted, created));
                                draft.set(String::new());
                            }
                            Err(message) => notify(ToastKind::Error, message),
                        }
                        submitting.set(false);
                    }
                }
            });
        })
    };

    let list = match &*fetched {
        FetchState::Ready(list) => Some(
            posted
                .iter()
                .chain(list.iter())
                .cloned()
                .collect::<Vec<_>>(),
        ),
        _ => None,
    };
    let count = list.as_ref().map_or(posted.len(), Vec::len);
    let body = match (&*fetched, list) {
        (FetchState::Loading, _) => html! { <Loading /> },
        (FetchState::Failed(message), _) => html! { <ErrorNotice message={message.clone()} /> },
        (_, Some(list)) if !list.is_empty() => html! {
            <div class="comment-list">{for list.iter().map(render_comment)}</div>
        },
        _ => html! { <EmptyState title={NO_COMMENTS} /> },
    };
    let viewer = session.user();
    let enabled = can_submit(&draft, *submitting);

    html! {
        <section class="comments">
            <h3>{comments_label(u64::try_from(count).unwrap_or(u64::MAX))}</h3>
            <form class="comment-form" onsubmit={on_submit}>
                <Avatar
                    picture={viewer.and_then(|user| user.profile_picture.clone()).map(AttrValue::from)}
                    name={viewer.map_or_else(|| "User".to_string(), |user| user.username.clone())}
                    size={40}
                />
                <div class="comment-input">
                    <textarea
                        rows="1"
                        placeholder="Add a comment..."
                        value={(*draft).clone()}
                        oninput={on_input}
                    />
                    <div class="comment-actions">
                        <button type="button" class="ghost" onclick={on_cancel}>{"Cancel"}</button>
                        <button type="submit" class="primary" disabled={!enabled}>
                            {if *submitting { "Posting..." } else { "Comment" }}
                        </button>
                    </div>
                </div>
            </form>
            {body}
        </section>
    }
}

fn render_comment(comment: &Comment) -> Html {
    let author = Route::Channel {
        id: comment.user.id.clone(),
    };
    html! {
        <div class="comment" key={comment.id.clone()}>
            <Link<Route> to={author.clone()}>
                <Avatar
                    picture={comment.user.profile_picture.clone().map(AttrValue::from)}
                    name={comment.user.username.clone()}
                    size={40}
                />
            </Link<Route>>
            <div>
                <div class="comment-head">
                    <Link<Route> to={author} classes="strong">{comment.user.username.clone()}</Link<Route>>
                    <span class="muted small">{relative_time(comment.created_at, Utc::now())}</span>
                </div>
                <p>{comment.content.clone()}</p>
                {if comment.likes > 0 {
                    html! { <span class="muted small">{format!("👍 {}", comment.likes)}</span> }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
