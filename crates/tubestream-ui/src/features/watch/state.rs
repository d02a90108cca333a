//! Watch page state helpers.
//!
//! # Design
//! - Toggles start from the fetched counters with no viewer state.
//! - Viewer status is read separately and only for signed-in viewers.

use crate::core::api::{ChannelApi, VideoApi};
use crate::core::format::video_meta;
use crate::core::loaders::{reaction_status, subscription_flag};
use crate::core::reaction::{Reaction, ReactionState};
use crate::core::subscription::SubscriptionState;
use chrono::{DateTime, Utc};
use tubestream_api_models::Video;

/// Toast after copying the share link.
pub const SHARE_COPIED: &str = "Link copied to clipboard!";
/// Shown when the share copy fails.
pub const SHARE_FAILED: &str = "Could not copy the link";
/// Shown when the video lookup finds nothing.
pub const VIDEO_NOT_FOUND: &str = "Video not found";
/// Empty recommendations copy.
pub const NO_RECOMMENDATIONS: &str = "No recommendations available";
/// Descriptions longer than this get a "Show more" toggle.
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// Viewer-specific toggle state read from the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ViewerStatus {
    /// Subscribed to the uploader.
    pub subscribed: bool,
    /// Reaction to the video.
    pub reaction: Reaction,
}

/// Toggle states before any viewer status is known.
#[must_use]
pub const fn initial_toggles(video: &Video) -> (SubscriptionState, ReactionState) {
    (
        SubscriptionState::new(false, video.user.subscriber_count),
        ReactionState::from_video(video),
    )
}

/// Toggle states once the viewer's status is known.
#[must_use]
pub const fn viewer_toggles(video: &Video, status: ViewerStatus) -> (SubscriptionState, ReactionState) {
    let (subscription, reaction) = initial_toggles(video);
    (
        subscription.with_status(status.subscribed),
        reaction.with_status(status.reaction),
    )
}

/// Read the viewer's subscription and reaction; each check degrades independently.
pub async fn load_viewer_status<A>(api: &A, video: &Video) -> ViewerStatus
where
    A: ChannelApi + VideoApi + ?Sized,
{
    let subscribed = subscription_flag(api, &video.user.id).await;
    let reaction = reaction_status(api, &video.id).await;
    ViewerStatus {
        subscribed,
        reaction,
    }
}

/// Whether the description needs an expand toggle.
#[must_use]
pub fn description_is_long(description: &str) -> bool {
    description.chars().count() > DESCRIPTION_PREVIEW_CHARS
}

/// Label of the description toggle.
#[must_use]
pub const fn description_toggle_label(expanded: bool) -> &'static str {
    if expanded { "Show less" } else { "Show more" }
}

/// `views • age • category` line above the description.
#[must_use]
pub fn watch_meta(video: &Video, now: DateTime<Utc>) -> String {
    let base = video_meta(video.views, video.created_at, now);
    match video.category.as_deref().filter(|category| !category.is_empty()) {
        Some(category) => format!("{base} • {category}"),
        None => base,
    }
}

/// Route path of a watch page.
#[must_use]
pub fn watch_path(video_id: &str) -> String {
    format!("/watch/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{FakeApi, video_fixture};
    use futures::executor::block_on;

    #[test]
    fn initial_toggles_use_fetched_counts() {
        let video = video_fixture("v1", "u2");
        let (subscription, reaction) = initial_toggles(&video);
        assert_eq!(subscription, SubscriptionState::new(false, 41));
        assert_eq!(reaction.likes, 10);
        assert_eq!(reaction.dislikes, 2);
        assert_eq!(reaction.reaction, Reaction::None);
    }

    #[test]
    fn viewer_status_reads_both_checks() {
        let mut api = FakeApi::default();
        api.subscribed = true;
        api.like_status.liked = true;
        let video = video_fixture("v1", "u2");
        let status = block_on(load_viewer_status(&api, &video));
        assert_eq!(
            status,
            ViewerStatus {
                subscribed: true,
                reaction: Reaction::Like
            }
        );
        assert_eq!(api.calls(), vec!["check-subscription u2", "like-status v1"]);
    }

    #[test]
    fn viewer_status_keeps_fetched_counts() {
        let video = video_fixture("v1", "u2");
        let status = ViewerStatus {
            subscribed: true,
            reaction: Reaction::Dislike,
        };
        let (subscription, reaction) = viewer_toggles(&video, status);
        assert_eq!(subscription, SubscriptionState::new(true, 41));
        assert!(reaction.disliked());
        assert_eq!((reaction.likes, reaction.dislikes), (10, 2));
    }

    #[test]
    fn one_failing_check_keeps_the_other() {
        let mut api = FakeApi::default();
        api.like_status.disliked = true;
        api.fail("check-subscription");
        let status = block_on(load_viewer_status(&api, &video_fixture("v1", "u2")));
        assert!(!status.subscribed);
        assert_eq!(status.reaction, Reaction::Dislike);
    }

    #[test]
    fn description_toggle() {
        assert!(!description_is_long(&"a".repeat(100)));
        assert!(description_is_long(&"a".repeat(101)));
        assert_eq!(description_toggle_label(false), "Show more");
        assert_eq!(watch_path("v1"), "/watch/v1");
    }

    #[test]
    fn meta_line_appends_category() {
        let mut video = video_fixture("v1", "u2");
        let now = video.created_at + chrono::Duration::hours(2);
        assert_eq!(watch_meta(&video, now), "100 views • about 2 hours ago • Music");
        video.category = None;
        assert_eq!(watch_meta(&video, now), "100 views • about 2 hours ago");
    }
}
