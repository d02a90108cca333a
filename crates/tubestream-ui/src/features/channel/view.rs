//! Channel page: banner, profile, subscribe toggle, uploads.

use crate::app::api::use_api;
use crate::app::hooks::use_fetch;
use crate::app::session::use_session;
use crate::components::atoms::{Avatar, EmptyState, ErrorNotice, Loading};
use crate::components::toggles::SubscribeControl;
use crate::components::video_card::VideoGrid;
use crate::core::fetch::FetchState;
use crate::core::format::videos_label;
use crate::core::loaders::{ChannelPage as ChannelData, load_channel};
use crate::core::subscription::SubscriptionState;
use crate::features::channel::state::{
    CHANNEL_NOT_FOUND, NO_UPLOADS, bio_text, channel_stats, shows_subscribe,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ChannelPageProps {
    pub id: String,
}

#[function_component(ChannelPage)]
pub(crate) fn channel_page(props: &ChannelPageProps) -> Html {
    let api = use_api();
    let session = use_session();
    let viewer = session.user().cloned();
    let page = use_fetch(
        (props.id.clone(), viewer),
        move |(id, viewer)| async move { load_channel(&*api, &id, viewer.as_ref()).await },
    );

    match &*page {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        FetchState::NotFound => html! { <EmptyState title={CHANNEL_NOT_FOUND} /> },
        FetchState::Ready(data) => render_channel(data, shows_subscribe(&session, &props.id)),
    }
}

fn render_channel(data: &ChannelData, offer_subscribe: bool) -> Html {
    let profile = &data.profile;
    let initial = SubscriptionState::new(data.subscribed, profile.subscriber_count);
    let return_path = format!("/channel/{}", profile.id);
    let stats = if offer_subscribe {
        html! {
            <p class="muted">{videos_label(u64::try_from(data.videos.len()).unwrap_or(u64::MAX))}</p>
        }
    } else {
        html! { <p class="muted">{channel_stats(profile.subscriber_count, data.videos.len())}</p> }
    };

    html! {
        <div class="channel-page">
            <div class="channel-banner"></div>
            <div class="channel-header">
                <Avatar
                    picture={profile.profile_picture.clone().map(AttrValue::from)}
                    name={profile.username.clone()}
                    size={112}
                />
                <div class="channel-details">
                    <h1>{profile.username.clone()}</h1>
                    {stats}
                    <p class="muted channel-bio">{bio_text(profile.bio.as_deref()).to_string()}</p>
                </div>
                {if offer_subscribe {
                    html! {
                        <SubscribeControl
                            key={profile.id.clone()}
                            channel_id={profile.id.clone()}
                            {initial}
                            return_path={return_path}
                        />
                    }
                } else {
                    html! {}
                }}
            </div>
            <section class="channel-videos">
                <h2>{"Videos"}</h2>
                {if data.videos.is_empty() {
                    html! { <EmptyState title={NO_UPLOADS} /> }
                } else {
                    html! { <VideoGrid videos={data.videos.clone()} /> }
                }}
            </section>
        </div>
    }
}
