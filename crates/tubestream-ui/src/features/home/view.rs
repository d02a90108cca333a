//! Home and category feeds.

use crate::app::api::use_api;
use crate::app::hooks::use_fetch;
use crate::components::atoms::{EmptyState, ErrorNotice, Loading};
use crate::components::category_bar::CategoryBar;
use crate::components::video_card::VideoGrid;
use crate::core::fetch::FetchState;
use crate::core::loaders::load_feed;
use crate::features::home::state::{NO_VIDEOS, feed_for};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct HomePageProps {
    #[prop_or_default]
    pub slug: Option<String>,
}

#[function_component(HomePage)]
pub(crate) fn home_page(props: &HomePageProps) -> Html {
    let api = use_api();
    let feed = feed_for(props.slug.as_deref());
    let videos = use_fetch(feed, move |feed| async move { load_feed(&*api, &feed).await });

    let body = match &*videos {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        FetchState::NotFound => html! { <EmptyState title={NO_VIDEOS} /> },
        FetchState::Ready(list) if list.is_empty() => html! { <EmptyState title={NO_VIDEOS} /> },
        FetchState::Ready(list) => html! { <VideoGrid videos={list.clone()} /> },
    };

    html! {
        <div class="home-page">
            <CategoryBar active_slug={props.slug.clone().map(AttrValue::from)} />
            {body}
        </div>
    }
}
