//! Grid cards for feeds and channel uploads.

use crate::app::Route;
use crate::components::atoms::Avatar;
use crate::core::format::{duration_badge, video_meta};
use chrono::Utc;
use tubestream_api_models::Video;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct VideoCardProps {
    pub video: Video,
}

#[function_component(VideoCard)]
pub(crate) fn video_card(props: &VideoCardProps) -> Html {
    let video = &props.video;
    let watch = Route::Watch {
        id: video.id.clone(),
    };
    let channel = Route::Channel {
        id: video.user.id.clone(),
    };
    html! {
        <div class="video-card">
            <Link<Route> to={watch.clone()} classes="thumbnail">
                <img src={video.thumbnail_url.clone()} alt={video.title.clone()} loading="lazy" />
                {duration_badge(video.duration).map(|badge| html! {
                    <span class="duration-badge">{badge}</span>
                }).unwrap_or_default()}
            </Link<Route>>
            <div class="video-card-body">
                <Link<Route> to={channel.clone()} classes="video-card-avatar">
                    <Avatar
                        picture={video.user.profile_picture.clone().map(AttrValue::from)}
                        name={video.user.username.clone()}
                    />
                </Link<Route>>
                <div>
                    <Link<Route> to={watch}>
                        <h3 class="video-title">{video.title.clone()}</h3>
                    </Link<Route>>
                    <Link<Route> to={channel} classes="muted">{video.user.username.clone()}</Link<Route>>
                    <p class="muted small">{video_meta(video.views, video.created_at, Utc::now())}</p>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct VideoGridProps {
    pub videos: Vec<Video>,
}

#[function_component(VideoGrid)]
pub(crate) fn video_grid(props: &VideoGridProps) -> Html {
    html! {
        <div class="video-grid">
            {for props.videos.iter().map(|video| html! {
                <VideoCard key={video.id.clone()} video={video.clone()} />
            })}
        </div>
    }
}
