//! Watch page composition.
//!
//! # Design
//! - The page is keyed by video id at the router, so every id gets fresh toggle state.
//! - The view increment fires once the video has loaded; failures are only logged.
//! - Viewer status is read only for signed-in viewers and seeded into the toggles.

use crate::app::api::use_api;
use crate::app::hooks::use_fetch;
use crate::app::notify;
use crate::app::session::use_session;
use crate::app::Route;
use crate::components::atoms::{Avatar, EmptyState, ErrorNotice, Loading};
use crate::components::toggles::{ReactionControls, SubscribeControl};
use crate::components::video_list::VideoListItem;
use crate::core::fetch::FetchState;
use crate::core::loaders::{ViewBeacon, load_recommended, load_video, record_view};
use crate::core::store::ToastKind;
use crate::features::comments::view::CommentSection;
use crate::features::watch::state::{
    NO_RECOMMENDATIONS, SHARE_COPIED, SHARE_FAILED, VIDEO_NOT_FOUND, ViewerStatus,
    description_is_long, description_toggle_label, load_viewer_status, viewer_toggles,
    watch_meta, watch_path,
};
use crate::services::clipboard::copy_text;
use chrono::Utc;
use gloo::utils::window;
use tubestream_api_models::Video;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct WatchPageProps {
    pub id: String,
}

#[function_component(WatchPage)]
pub(crate) fn watch_page(props: &WatchPageProps) -> Html {
    let api = use_api();
    let video = {
        let api = api.clone();
        use_fetch(props.id.clone(), move |id| async move { load_video(&*api, &id).await })
    };
    let loaded_id = video.ready().map(|video| video.id.clone());
    use_effect_with_deps(
        move |loaded: &Option<String>| {
            if let Some(id) = loaded.clone() {
                spawn_local(async move {
                    if record_view(&*api, &id).await == ViewBeacon::Recorded {
                        tracing::debug!(video = %id, "view recorded");
                    }
                });
            }
            || ()
        },
        loaded_id,
    );

    match &*video {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        FetchState::NotFound => html! { <EmptyState title={VIDEO_NOT_FOUND} /> },
        FetchState::Ready(video) => html! {
            <div class="watch-page">
                <div class="watch-main">
                    <VideoPlayer src={video.video_url.clone()} />
                    <VideoInfo video={video.clone()} />
                    <CommentSection video_id={video.id.clone()} />
                </div>
                <aside class="watch-side">
                    <RecommendedVideos video_id={video.id.clone()} />
                </aside>
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
struct VideoPlayerProps {
    src: AttrValue,
}

#[function_component(VideoPlayer)]
fn video_player(props: &VideoPlayerProps) -> Html {
    html! {
        <div class="player">
            <video src={props.src.clone()} controls=true autoplay=true controlslist="nodownload" />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct VideoInfoProps {
    video: Video,
}

#[function_component(VideoInfo)]
fn video_info(props: &VideoInfoProps) -> Html {
    let api = use_api();
    let session = use_session();
    let expanded = use_state(|| false);
    let video = &props.video;
    let viewer_id = session.user().map(|user| user.id.clone());
    let status = use_fetch(
        (video.clone(), viewer_id),
        move |(video, viewer)| async move {
            let status = match viewer {
                Some(_) => load_viewer_status(&*api, &video).await,
                None => ViewerStatus::default(),
            };
            FetchState::Ready(status)
        },
    );
    let status = status.ready().copied().unwrap_or_default();
    let (subscription, reaction) = viewer_toggles(video, status);
    let return_path = watch_path(&video.id);

    let on_share = Callback::from(|_: MouseEvent| {
        let href = window().location().href().unwrap_or_default();
        spawn_local(async move {
            match copy_text(&href).await {
                Ok(()) => notify(ToastKind::Success, SHARE_COPIED),
                Err(err) => {
                    tracing::warn!(error = ?err, "share copy failed");
                    notify(ToastKind::Error, SHARE_FAILED);
                }
            }
        });
    });
    let toggle_description = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };
    let channel = Route::Channel {
        id: video.user.id.clone(),
    };

    html! {
        <div class="video-info">
            <h1 class="video-heading">{video.title.clone()}</h1>
            <div class="video-actions">
                <div class="video-owner">
                    <Link<Route> to={channel.clone()} classes="owner-avatar">
                        <Avatar
                            picture={video.user.profile_picture.clone().map(AttrValue::from)}
                            name={video.user.username.clone()}
                            size={40}
                        />
                    </Link<Route>>
                    <Link<Route> to={channel} classes="strong">{video.user.username.clone()}</Link<Route>>
                    <SubscribeControl
                        key={video.user.id.clone()}
                        channel_id={video.user.id.clone()}
                        initial={subscription}
                        return_path={return_path.clone()}
                    />
                </div>
                <div class="video-buttons">
                    <ReactionControls
                        key={video.id.clone()}
                        video_id={video.id.clone()}
                        initial={reaction}
                        {return_path}
                    />
                    <button class="pill" onclick={on_share}>{"Share"}</button>
                </div>
            </div>
            <div class="video-description">
                <p class="muted small">{watch_meta(video, Utc::now())}</p>
                <p class={classes!("description", (!*expanded).then_some("clamp-2"))}>
                    {video.description.clone()}
                </p>
                {if description_is_long(&video.description) {
                    html! {
                        <button class="link" onclick={toggle_description}>
                            {description_toggle_label(*expanded)}
                        </button>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct RecommendedVideosProps {
    video_id: AttrValue,
}

#[function_component(RecommendedVideos)]
fn recommended_videos(props: &RecommendedVideosProps) -> Html {
    let api = use_api();
    let videos = use_fetch(props.video_id.to_string(), move |id| async move {
        load_recommended(&*api, &id).await
    });

    let body = match &*videos {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        FetchState::Ready(list) if !list.is_empty() => html! {
            <div class="video-list">
                {for list.iter().map(|video| html! {
                    <VideoListItem key={video.id.clone()} video={video.clone()} compact=true />
                })}
            </div>
        },
        _ => html! { <EmptyState title={NO_RECOMMENDATIONS} /> },
    };

    html! {
        <section class="recommended">
            <h3>{"Recommended videos"}</h3>
            {body}
        </section>
    }
}
