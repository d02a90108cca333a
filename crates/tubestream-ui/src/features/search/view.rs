//! Search results page.

use crate::app::api::use_api;
use crate::app::hooks::use_fetch;
use crate::components::atoms::{EmptyState, ErrorNotice, Loading};
use crate::components::video_list::VideoListItem;
use crate::core::fetch::FetchState;
use crate::core::loaders::{load_search, search_query};
use crate::features::search::state::{EMPTY_QUERY, NO_RESULTS, SearchParams, results_heading};
use yew::prelude::*;
use yew_router::prelude::use_location;

#[function_component(SearchPage)]
pub(crate) fn search_page() -> Html {
    let api = use_api();
    let params = use_location()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default();
    let query = search_query(params.q.as_deref());
    let results = use_fetch(query.clone(), move |query| async move {
        match query {
            Some(query) => load_search(&*api, &query).await,
            None => FetchState::Ready(Vec::new()),
        }
    });

    let Some(query) = query else {
        return html! {
            <div class="search-page">
                <EmptyState title={EMPTY_QUERY} />
            </div>
        };
    };

    let body = match &*results {
        FetchState::Loading => html! { <Loading /> },
        FetchState::Failed(message) => html! { <ErrorNotice message={message.clone()} /> },
        FetchState::NotFound => html! { <EmptyState title={NO_RESULTS} /> },
        FetchState::Ready(list) if list.is_empty() => html! { <EmptyState title={NO_RESULTS} /> },
        FetchState::Ready(list) => html! {
            <div class="video-list">
                {for list.iter().map(|video| html! {
                    <VideoListItem key={video.id.clone()} video={video.clone()} />
                })}
            </div>
        },
    };

    html! {
        <div class="search-page">
            <h1 class="page-title">{results_heading(&query)}</h1>
            {body}
        </div>
    }
}
