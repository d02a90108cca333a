//! Page data loaders composed over the API traits.
//!
//! # Design
//! - Each loader returns a finished [`FetchState`]; hooks decide whether it is still current.
//! - Secondary reads (subscription checks, recommendation fallbacks) degrade instead of failing the page.
//! - The view beacon is reported separately and never feeds back into page state.

use crate::core::api::{ChannelApi, VideoApi};
use crate::core::fetch::FetchState;
use crate::core::reaction::Reaction;
use tubestream_api_models::{ChannelProfile, Comment, SessionUser, Video};

/// Feed failure copy.
pub const FEED_FAILED: &str = "Failed to load videos. Please try again later.";
/// Channel failure copy.
pub const CHANNEL_FAILED: &str = "Failed to load channel. Please try again later.";
/// Video failure copy.
pub const VIDEO_FAILED: &str = "Failed to load video. Please try again later.";
/// Comments failure copy.
pub const COMMENTS_FAILED: &str = "Failed to load comments. Please try again later.";
/// Search failure copy.
pub const SEARCH_FAILED: &str = "Failed to load search results. Please try again later.";
/// Recommendations failure copy.
pub const RECOMMENDATIONS_FAILED: &str = "Failed to load recommendations";

/// Which listing the home page shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feed {
    /// Every video.
    All,
    /// Videos in one category (display name).
    Category(String),
}

/// Load the home or category feed.
pub async fn load_feed<A: VideoApi + ?Sized>(api: &A, feed: &Feed) -> FetchState<Vec<Video>> {
    let result = match feed {
        Feed::All => api.list_videos().await,
        Feed::Category(name) => api.videos_by_category(name).await,
    };
    FetchState::from_result(result, FEED_FAILED)
}

/// Everything the channel page renders.
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelPage {
    /// Channel profile.
    pub profile: ChannelProfile,
    /// Channel uploads.
    pub videos: Vec<Video>,
    /// Viewer's subscription flag; false for anonymous viewers.
    pub subscribed: bool,
}

/// Load a channel: profile, then uploads, then (signed in only) the subscription flag.
pub async fn load_channel<A>(
    api: &A,
    channel_id: &str,
    viewer: Option<&SessionUser>,
) -> FetchState<ChannelPage>
where
    A: ChannelApi + VideoApi + ?Sized,
{
    let profile = match FetchState::from_lookup(api.channel(channel_id).await, CHANNEL_FAILED) {
        FetchState::Ready(profile) => profile,
        FetchState::Loading => return FetchState::Loading,
        FetchState::NotFound => return FetchState::NotFound,
        FetchState::Failed(message) => return FetchState::Failed(message),
    };
    let videos = match api.videos_by_user(channel_id).await {
        Ok(videos) => videos,
        Err(err) => {
            tracing::warn!(error = %err, channel = channel_id, "channel uploads failed");
            return FetchState::Failed(CHANNEL_FAILED.to_string());
        }
    };
    let subscribed = match viewer {
        Some(_) => subscription_flag(api, channel_id).await,
        None => false,
    };
    FetchState::Ready(ChannelPage {
        profile,
        videos,
        subscribed,
    })
}

/// Viewer's subscription flag for `channel_id`; failures read as not subscribed.
pub async fn subscription_flag<A: ChannelApi + ?Sized>(api: &A, channel_id: &str) -> bool {
    match api.subscription_status(channel_id).await {
        Ok(status) => status.is_subscribed,
        Err(err) => {
            tracing::warn!(error = %err, channel = channel_id, "subscription check failed");
            false
        }
    }
}

/// Viewer's reaction to `video_id`; failures read as no reaction.
pub async fn reaction_status<A: VideoApi + ?Sized>(api: &A, video_id: &str) -> Reaction {
    match api.like_status(video_id).await {
        Ok(status) => Reaction::from_status(status),
        Err(err) => {
            tracing::warn!(error = %err, video = video_id, "like-status check failed");
            Reaction::None
        }
    }
}

/// Load a single video.
pub async fn load_video<A: VideoApi + ?Sized>(api: &A, video_id: &str) -> FetchState<Video> {
    FetchState::from_lookup(api.video(video_id).await, VIDEO_FAILED)
}

/// Load a video's comments.
pub async fn load_comments<A: VideoApi + ?Sized>(api: &A, video_id: &str) -> FetchState<Vec<Comment>> {
    FetchState::from_result(api.comments(video_id).await, COMMENTS_FAILED)
}

/// Trimmed search text, or `None` when there is nothing to search for.
#[must_use]
pub fn search_query(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|query| !query.is_empty())
        .map(ToString::to_string)
}

/// Run a search. Results keep the order the service returned.
pub async fn load_search<A: VideoApi + ?Sized>(api: &A, query: &str) -> FetchState<Vec<Video>> {
    FetchState::from_result(api.search_videos(query).await, SEARCH_FAILED)
}

/// Recommendations for `video_id`, falling back to the full listing minus the current video.
pub async fn load_recommended<A: VideoApi + ?Sized>(
    api: &A,
    video_id: &str,
) -> FetchState<Vec<Video>> {
    let primary = match api.recommended(video_id).await {
        Ok(videos) => return FetchState::Ready(videos),
        Err(err) => err,
    };
    tracing::warn!(error = %primary, video = video_id, "recommendations failed; using full listing");
    match api.list_videos().await {
        Ok(videos) => FetchState::Ready(
            videos
                .into_iter()
                .filter(|video| video.id != video_id)
                .collect(),
        ),
        Err(err) => {
            tracing::warn!(error = %err, "fallback listing failed");
            FetchState::Failed(RECOMMENDATIONS_FAILED.to_string())
        }
    }
}

/// Outcome of the best-effort view increment.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ViewBeacon {
    /// Not sent yet.
    #[default]
    Idle,
    /// The service counted the view.
    Recorded,
    /// The increment failed; only logged.
    Failed(String),
}

/// Fire the view increment for a loaded video.
pub async fn record_view<A: VideoApi + ?Sized>(api: &A, video_id: &str) -> ViewBeacon {
    match api.record_view(video_id).await {
        Ok(()) => ViewBeacon::Recorded,
        Err(err) => {
            tracing::warn!(error = %err, video = video_id, "view increment failed");
            ViewBeacon::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ApiError;
    use crate::core::testing::{FakeApi, channel_fixture, comment_fixture, user_fixture, video_fixture};
    use futures::executor::block_on;

    fn catalog() -> FakeApi {
        let mut api = FakeApi::default();
        let mut tutorial = video_fixture("v1", "u2");
        tutorial.title = "Rust tutorial".into();
        let mut gaming = video_fixture("v2", "u3");
        gaming.title = "Speedrun".into();
        gaming.category = Some("Gaming".into());
        let mut advanced = video_fixture("v3", "u2");
        advanced.title = "Advanced Rust".into();
        api.videos = vec![tutorial, gaming, advanced];
        api.channels = vec![channel_fixture("u2")];
        api
    }

    #[test]
    fn feed_uses_category_endpoint() {
        let api = catalog();
        let state = block_on(load_feed(&api, &Feed::Category("Gaming".into())));
        let ids: Vec<_> = state.ready().map(|videos| videos.iter().map(|v| v.id.clone()).collect()).unwrap_or_default();
        assert_eq!(ids, vec!["v2"]);
        assert_eq!(api.calls(), vec!["category Gaming"]);
        api.fail("videos");
        assert_eq!(
            block_on(load_feed(&api, &Feed::All)),
            FetchState::Failed(FEED_FAILED.into())
        );
    }

    #[test]
    fn channel_loads_in_order_and_checks_subscription_for_viewers() {
        let mut api = catalog();
        api.subscribed = true;
        let viewer = user_fixture("u1");
        let state = block_on(load_channel(&api, "u2", Some(&viewer)));
        let page = state.ready().expect("channel loaded");
        assert_eq!(page.videos.len(), 2);
        assert!(page.subscribed);
        assert_eq!(
            api.calls(),
            vec!["channel u2", "user-videos u2", "check-subscription u2"]
        );
    }

    #[test]
    fn anonymous_channel_view_skips_subscription_check() {
        let api = catalog();
        let state = block_on(load_channel(&api, "u2", None));
        assert!(!state.ready().expect("channel loaded").subscribed);
        assert!(!api.calls().iter().any(|call| call.starts_with("check-subscription")));
    }

    #[test]
    fn failing_subscription_check_degrades_to_not_subscribed() {
        let mut api = catalog();
        api.subscribed = true;
        api.fail("check-subscription");
        let viewer = user_fixture("u1");
        let state = block_on(load_channel(&api, "u2", Some(&viewer)));
        assert!(!state.ready().expect("channel loaded").subscribed);
    }

    #[test]
    fn missing_channel_is_not_found_and_stops_early() {
        let api = catalog();
        assert_eq!(block_on(load_channel(&api, "nobody", None)), FetchState::NotFound);
        assert_eq!(api.calls(), vec!["channel nobody"]);
        api.fail("user-videos");
        assert_eq!(
            block_on(load_channel(&api, "u2", None)),
            FetchState::Failed(CHANNEL_FAILED.into())
        );
    }

    #[test]
    fn search_preserves_service_order() {
        let api = catalog();
        let state = block_on(load_search(&api, "rust"));
        let titles: Vec<_> = state
            .ready()
            .map(|videos| videos.iter().map(|v| v.title.clone()).collect())
            .unwrap_or_default();
        assert_eq!(titles, vec!["Rust tutorial", "Advanced Rust"]);
        let empty = block_on(load_search(&api, "cooking"));
        assert_eq!(empty, FetchState::Ready(Vec::new()));
    }

    #[test]
    fn blank_search_issues_no_request() {
        assert_eq!(search_query(Some("   ")), None);
        assert_eq!(search_query(None), None);
        assert_eq!(search_query(Some("  cats ")), Some("cats".into()));
    }

    #[test]
    fn recommendation_fallback_excludes_current_video() {
        let api = catalog();
        api.fail("recommended");
        let state = block_on(load_recommended(&api, "v1"));
        let ids: Vec<_> = state
            .ready()
            .map(|videos| videos.iter().map(|v| v.id.clone()).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec!["v2", "v3"]);
        assert_eq!(api.calls(), vec!["recommended v1", "videos"]);
    }

    #[test]
    fn recommendation_failure_when_both_fail() {
        let api = catalog();
        api.fail("recommended");
        api.fail("videos");
        assert_eq!(
            block_on(load_recommended(&api, "v1")),
            FetchState::Failed(RECOMMENDATIONS_FAILED.into())
        );
    }

    #[test]
    fn video_and_comments_loaders() {
        let mut api = catalog();
        api.comments = vec![comment_fixture("c1", "u3")];
        assert_eq!(block_on(load_video(&api, "missing")), FetchState::NotFound);
        assert!(block_on(load_video(&api, "v1")).ready().is_some());
        assert_eq!(
            block_on(load_comments(&api, "v1")).ready().map(Vec::len),
            Some(1)
        );
        api.fail("comments");
        assert_eq!(
            block_on(load_comments(&api, "v1")),
            FetchState::Failed(COMMENTS_FAILED.into())
        );
    }

    #[test]
    fn view_beacon_reports_its_own_outcome() {
        let api = FakeApi::default();
        assert_eq!(block_on(record_view(&api, "v1")), ViewBeacon::Recorded);
        api.fail_with("view", ApiError::Network("offline".into()));
        assert!(matches!(block_on(record_view(&api, "v1")), ViewBeacon::Failed(_)));
    }

    #[test]
    fn reaction_status_degrades_to_none() {
        let mut api = FakeApi::default();
        api.like_status.disliked = true;
        assert_eq!(block_on(reaction_status(&api, "v1")), Reaction::Dislike);
        api.fail("like-status");
        assert_eq!(block_on(reaction_status(&api, "v1")), Reaction::None);
    }
}
