//! API seams consumed by the session store, loaders, and toggles.
//!
//! # Design
//! - Split the remote surface by concern so fakes stay small in tests.
//! - Futures are `?Send`; everything runs on the browser event loop.
//! - Path construction lives here so the wasm client and tests agree on the wire layout.

use crate::core::error::ApiError;
use crate::core::reaction::ReactionCall;
use async_trait::async_trait;
use tubestream_api_models::{
    ChannelProfile, Comment, LikeStatus, LoginRequest, NewComment, RegisterRequest, SessionUser,
    SubscriptionStatus, Video,
};

/// Authentication endpoints.
#[async_trait(?Send)]
pub trait AuthApi {
    /// `GET /api/auth/me`.
    async fn current_user(&self) -> Result<SessionUser, ApiError>;
    /// `POST /api/auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ApiError>;
    /// `POST /api/auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
    /// `POST /api/auth/register`.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;
}

/// Video, comment, and reaction endpoints.
#[async_trait(?Send)]
pub trait VideoApi {
    /// `GET /api/videos`.
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError>;
    /// `GET /api/videos/category/{category}`.
    async fn videos_by_category(&self, category: &str) -> Result<Vec<Video>, ApiError>;
    /// `GET /api/videos/user/{user_id}`.
    async fn videos_by_user(&self, user_id: &str) -> Result<Vec<Video>, ApiError>;
    /// `GET /api/videos/search?q=`.
    async fn search_videos(&self, query: &str) -> Result<Vec<Video>, ApiError>;
    /// `GET /api/videos/{id}`; `Ok(None)` when the service returned no document.
    async fn video(&self, id: &str) -> Result<Option<Video>, ApiError>;
    /// `POST /api/videos/{id}/view`.
    async fn record_view(&self, id: &str) -> Result<(), ApiError>;
    /// `GET /api/videos/{id}/recommended`.
    async fn recommended(&self, id: &str) -> Result<Vec<Video>, ApiError>;
    /// `GET /api/videos/{id}/comments`.
    async fn comments(&self, id: &str) -> Result<Vec<Comment>, ApiError>;
    /// `POST /api/videos/{id}/comments`.
    async fn post_comment(&self, id: &str, comment: &NewComment) -> Result<Comment, ApiError>;
    /// `GET /api/videos/{id}/like-status`.
    async fn like_status(&self, id: &str) -> Result<LikeStatus, ApiError>;
    /// One of the like/unlike/dislike/undislike mutations.
    async fn send_reaction(&self, id: &str, call: ReactionCall) -> Result<(), ApiError>;
}

/// Channel profile and subscription endpoints.
#[async_trait(?Send)]
pub trait ChannelApi {
    /// `GET /api/users/{id}`; `Ok(None)` when the service returned no document.
    async fn channel(&self, id: &str) -> Result<Option<ChannelProfile>, ApiError>;
    /// `GET /api/users/check-subscription/{id}`.
    async fn subscription_status(&self, id: &str) -> Result<SubscriptionStatus, ApiError>;
    /// `POST /api/users/subscribe/{id}`.
    async fn subscribe(&self, id: &str) -> Result<(), ApiError>;
    /// `DELETE /api/users/unsubscribe/{id}`.
    async fn unsubscribe(&self, id: &str) -> Result<(), ApiError>;
}

/// Relative request paths for every endpoint the UI calls.
pub mod paths {
    use crate::core::reaction::ReactionCall;

    /// Identity check.
    pub const AUTH_ME: &str = "/api/auth/me";
    /// Login.
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    /// Logout.
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    /// Registration.
    pub const AUTH_REGISTER: &str = "/api/auth/register";
    /// Video listing and upload target.
    pub const VIDEOS: &str = "/api/videos";

    /// Channel profile.
    #[must_use]
    pub fn user(id: &str) -> String {
        format!("/api/users/{}", urlencoding::encode(id))
    }

    /// Subscription status for the signed-in viewer.
    #[must_use]
    pub fn check_subscription(id: &str) -> String {
        format!("/api/users/check-subscription/{}", urlencoding::encode(id))
    }

    /// Subscribe mutation.
    #[must_use]
    pub fn subscribe(id: &str) -> String {
        format!("/api/users/subscribe/{}", urlencoding::encode(id))
    }

    /// Unsubscribe mutation.
    #[must_use]
    pub fn unsubscribe(id: &str) -> String {
        format!("/api/users/unsubscribe/{}", urlencoding::encode(id))
    }

    /// Category listing.
    #[must_use]
    pub fn category(name: &str) -> String {
        format!("/api/videos/category/{}", urlencoding::encode(name))
    }

    /// Uploads by a channel.
    #[must_use]
    pub fn videos_by_user(id: &str) -> String {
        format!("/api/videos/user/{}", urlencoding::encode(id))
    }

    /// Full-text search.
    #[must_use]
    pub fn search(query: &str) -> String {
        format!("/api/videos/search?q={}", urlencoding::encode(query))
    }

    /// Video detail.
    #[must_use]
    pub fn video(id: &str) -> String {
        format!("/api/videos/{}", urlencoding::encode(id))
    }

    /// View increment.
    #[must_use]
    pub fn view(id: &str) -> String {
        format!("{}/view", video(id))
    }

    /// Recommendations for a video.
    #[must_use]
    pub fn recommended(id: &str) -> String {
        format!("{}/recommended", video(id))
    }

    /// Comment list and creation.
    #[must_use]
    pub fn comments(id: &str) -> String {
        format!("{}/comments", video(id))
    }

    /// Reaction flags for the signed-in viewer.
    #[must_use]
    pub fn like_status(id: &str) -> String {
        format!("{}/like-status", video(id))
    }

    /// Path for a reaction mutation.
    #[must_use]
    pub fn reaction(id: &str, call: ReactionCall) -> String {
        format!("{}/{}", video(id), call.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::paths;
    use crate::core::reaction::ReactionCall;

    #[test]
    fn search_path_encodes_query() {
        assert_eq!(
            paths::search("rust & wasm"),
            "/api/videos/search?q=rust%20%26%20wasm"
        );
    }

    #[test]
    fn category_path_encodes_names() {
        assert_eq!(
            paths::category("Science & Technology"),
            "/api/videos/category/Science%20%26%20Technology"
        );
    }

    #[test]
    fn nested_video_paths() {
        assert_eq!(paths::view("abc"), "/api/videos/abc/view");
        assert_eq!(paths::recommended("abc"), "/api/videos/abc/recommended");
        assert_eq!(paths::comments("abc"), "/api/videos/abc/comments");
        assert_eq!(paths::like_status("abc"), "/api/videos/abc/like-status");
        assert_eq!(
            paths::reaction("abc", ReactionCall::Undislike),
            "/api/videos/abc/undislike"
        );
    }

    #[test]
    fn user_paths() {
        assert_eq!(paths::user("u1"), "/api/users/u1");
        assert_eq!(
            paths::check_subscription("u1"),
            "/api/users/check-subscription/u1"
        );
        assert_eq!(paths::subscribe("u1"), "/api/users/subscribe/u1");
        assert_eq!(paths::unsubscribe("u1"), "/api/users/unsubscribe/u1");
        assert_eq!(paths::videos_by_user("u1"), "/api/videos/user/u1");
    }
}
