//! In-memory backend and fixtures shared by core tests.

use crate::core::api::{AuthApi, ChannelApi, VideoApi};
use crate::core::error::ApiError;
use crate::core::reaction::ReactionCall;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::HashMap;
use tubestream_api_models::{
    ChannelProfile, Comment, LikeStatus, LoginRequest, NewComment, RegisterRequest, SessionUser,
    SubscriptionStatus, UserSummary, Video,
};

/// Fake API that serves canned documents and records every call as `"<op> <arg>"`.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub me: Option<SessionUser>,
    pub videos: Vec<Video>,
    pub channels: Vec<ChannelProfile>,
    pub comments: Vec<Comment>,
    pub recommendations: Vec<Video>,
    pub like_status: LikeStatus,
    pub subscribed: bool,
    calls: RefCell<Vec<String>>,
    failures: RefCell<HashMap<String, ApiError>>,
}

impl FakeApi {
    /// Make every call to `op` fail with a 500 and no message.
    pub(crate) fn fail(&self, op: &str) {
        self.fail_with(
            op,
            ApiError::Status {
                status: 500,
                message: None,
            },
        );
    }

    /// Make every call to `op` fail with `error`.
    pub(crate) fn fail_with(&self, op: &str, error: ApiError) {
        self.failures.borrow_mut().insert(op.to_string(), error);
    }

    /// Calls recorded so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, op: &str, arg: &str) -> Result<(), ApiError> {
        let label = if arg.is_empty() {
            op.to_string()
        } else {
            format!("{op} {arg}")
        };
        self.calls.borrow_mut().push(label);
        self.failures
            .borrow()
            .get(op)
            .map_or(Ok(()), |err| Err(err.clone()))
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeApi {
    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        self.record("me", "")?;
        self.me.clone().ok_or(ApiError::Status {
            status: 401,
            message: Some("Not authenticated".into()),
        })
    }

    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ApiError> {
        self.record("login", &request.email)?;
        let mut user = user_fixture("u-login");
        user.email.clone_from(&request.email);
        Ok(user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.record("logout", "")
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.record("register", &request.username)
    }
}

#[async_trait(?Send)]
impl VideoApi for FakeApi {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.record("videos", "")?;
        Ok(self.videos.clone())
    }

    async fn videos_by_category(&self, category: &str) -> Result<Vec<Video>, ApiError> {
        self.record("category", category)?;
        Ok(self
            .videos
            .iter()
            .filter(|video| video.category.as_deref() == Some(category))
            .cloned()
            .collect())
    }

    async fn videos_by_user(&self, user_id: &str) -> Result<Vec<Video>, ApiError> {
        self.record("user-videos", user_id)?;
        Ok(self
            .videos
            .iter()
            .filter(|video| video.user.id == user_id)
            .cloned()
            .collect())
    }

    async fn search_videos(&self, query: &str) -> Result<Vec<Video>, ApiError> {
        self.record("search", query)?;
        let needle = query.to_lowercase();
        Ok(self
            .videos
            .iter()
            .filter(|video| video.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn video(&self, id: &str) -> Result<Option<Video>, ApiError> {
        self.record("video", id)?;
        Ok(self.videos.iter().find(|video| video.id == id).cloned())
    }

    async fn record_view(&self, id: &str) -> Result<(), ApiError> {
        self.record("view", id)
    }

    async fn recommended(&self, id: &str) -> Result<Vec<Video>, ApiError> {
        self.record("recommended", id)?;
        Ok(self.recommendations.clone())
    }

    async fn comments(&self, id: &str) -> Result<Vec<Comment>, ApiError> {
        self.record("comments", id)?;
        Ok(self.comments.clone())
    }

    async fn post_comment(&self, id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        self.record("comment", id)?;
        let mut created = comment_fixture("c-new", "u-login");
        created.content.clone_from(&comment.content);
        Ok(created)
    }

    async fn like_status(&self, id: &str) -> Result<LikeStatus, ApiError> {
        self.record("like-status", id)?;
        Ok(self.like_status)
    }

    async fn send_reaction(&self, id: &str, call: ReactionCall) -> Result<(), ApiError> {
        self.record(call.segment(), id)
    }
}

#[async_trait(?Send)]
impl ChannelApi for FakeApi {
    async fn channel(&self, id: &str) -> Result<Option<ChannelProfile>, ApiError> {
        self.record("channel", id)?;
        Ok(self.channels.iter().find(|channel| channel.id == id).cloned())
    }

    async fn subscription_status(&self, id: &str) -> Result<SubscriptionStatus, ApiError> {
        self.record("check-subscription", id)?;
        Ok(SubscriptionStatus {
            is_subscribed: self.subscribed,
        })
    }

    async fn subscribe(&self, id: &str) -> Result<(), ApiError> {
        self.record("subscribe", id)
    }

    async fn unsubscribe(&self, id: &str) -> Result<(), ApiError> {
        self.record("unsubscribe", id)
    }
}

pub(crate) fn user_fixture(id: &str) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        username: format!("user-{id}"),
        email: format!("{id}@example.test"),
        profile_picture: None,
    }
}

pub(crate) fn owner_fixture(id: &str) -> UserSummary {
    UserSummary {
        id: id.to_string(),
        username: format!("channel-{id}"),
        profile_picture: None,
        subscriber_count: 41,
    }
}

pub(crate) fn channel_fixture(id: &str) -> ChannelProfile {
    ChannelProfile {
        id: id.to_string(),
        username: format!("channel-{id}"),
        bio: None,
        profile_picture: None,
        subscriber_count: 41,
    }
}

pub(crate) fn video_fixture(id: &str, owner: &str) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: String::new(),
        category: Some("Music".to_string()),
        thumbnail_url: format!("https://cdn.example.test/{id}.jpg"),
        video_url: format!("https://cdn.example.test/{id}.mp4"),
        user: owner_fixture(owner),
        views: 100,
        likes: 10,
        dislikes: 2,
        duration: 125.4,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    }
}

pub(crate) fn comment_fixture(id: &str, author: &str) -> Comment {
    Comment {
        id: id.to_string(),
        content: format!("comment {id}"),
        user: owner_fixture(author),
        likes: 0,
        created_at: Utc
            .with_ymd_and_hms(2024, 1, 2, 8, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    }
}
