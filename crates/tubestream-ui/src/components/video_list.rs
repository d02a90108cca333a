//! Row layout for search results and recommendations.

use crate::app::Route;
use crate::components::atoms::Avatar;
use crate::core::format::{duration_badge, video_meta};
use chrono::Utc;
use tubestream_api_models::Video;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VideoListItemProps {
    pub video: Video,
    /// Compact rows drop the description and avatar (recommendation rail).
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(VideoListItem)]
pub(crate) fn video_list_item(props: &VideoListItemProps) -> Html {
    let video = &props.video;
    let watch = Route::Watch {
        id: video.id.clone(),
    };
    let channel = Route::Channel {
        id: video.user.id.clone(),
    };
    let meta = video_meta(video.views, video.created_at, Utc::now());

    html! {
        <div class={classes!("video-list-item", props.compact.then_some("compact"))}>
            <Link<Route> to={watch.clone()} classes="thumbnail">
                <img src={video.thumbnail_url.clone()} alt={video.title.clone()} loading="lazy" />
                {duration_badge(video.duration).map(|badge| html! {
                    <span class="duration-badge">{badge}</span>
                }).unwrap_or_default()}
            </Link<Route>>
            <div class="video-list-body">
                <Link<Route> to={watch}>
                    <h3 class="video-title">{video.title.clone()}</h3>
                </Link<Route>>
                {if props.compact {
                    html! {
                        <>
                            <Link<Route> to={channel} classes="muted small">{video.user.username.clone()}</Link<Route>>
                            <p class="muted small">{meta}</p>
                        </>
                    }
                } else {
                    html! {
                        <>
                            <p class="muted small">{meta}</p>
                            <Link<Route> to={channel} classes="channel-chip">
                                <Avatar
                                    picture={video.user.profile_picture.clone().map(AttrValue::from)}
                                    name={video.user.username.clone()}
                                    size={24}
                                />
                                <span class="muted small">{video.user.username.clone()}</span>
                            </Link<Route>>
                            <p class="muted small clamp-2">{video.description.clone()}</p>
                        </>
                    }
                }}
            </div>
        </div>
    }
}
