#![forbid(unsafe_code)]
#![deny(unused_must_use, rustdoc::broken_intra_doc_links, rustdoc::bare_urls)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, missing_docs)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the TubeStream public API.
//!
//! Field names mirror the wire contract of the remote service: identifiers
//! travel as `_id` and multi-word fields are camelCase. Counters default to
//! zero when the service omits them so partially populated documents still
//! decode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity returned by `GET /api/auth/me` and the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Stable user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Public handle.
    pub username: String,
    /// Account email address.
    #[serde(default)]
    pub email: String,
    /// Avatar URL, when the user uploaded one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

/// Owner reference embedded in videos and comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// Stable user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Public handle.
    pub username: String,
    /// Avatar URL, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Subscriber count at fetch time.
    #[serde(default)]
    pub subscriber_count: u64,
}

/// Public channel profile served by `GET /api/users/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChannelProfile {
    /// Stable user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Public handle.
    pub username: String,
    /// Free-form channel description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Avatar URL, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    /// Subscriber count at fetch time.
    #[serde(default)]
    pub subscriber_count: u64,
}

/// Video document as served by the listing, search, and detail endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Stable video identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Long-form description.
    #[serde(default)]
    pub description: String,
    /// Category label chosen at upload time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Thumbnail image URL.
    #[serde(default)]
    pub thumbnail_url: String,
    /// Playable media URL.
    #[serde(default)]
    pub video_url: String,
    /// Owning channel.
    pub user: UserSummary,
    /// Total view count.
    #[serde(default)]
    pub views: u64,
    /// Like counter.
    #[serde(default)]
    pub likes: u64,
    /// Dislike counter.
    #[serde(default)]
    pub dislikes: u64,
    /// Media length in seconds; may carry a fractional part.
    #[serde(default)]
    pub duration: f64,
    /// Upload timestamp.
    pub created_at: DateTime<Utc>,
}

/// Comment attached to a video.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Stable comment identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Comment body.
    pub content: String,
    /// Comment author.
    pub user: UserSummary,
    /// Like counter.
    #[serde(default)]
    pub likes: u64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /api/videos/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewComment {
    /// Comment body.
    pub content: String,
}

/// Viewer's reaction flags from `GET /api/videos/{id}/like-status`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LikeStatus {
    /// Viewer currently likes the video.
    #[serde(default)]
    pub liked: bool,
    /// Viewer currently dislikes the video.
    #[serde(default)]
    pub disliked: bool,
}

/// Response of `GET /api/users/check-subscription/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    /// Viewer is subscribed to the channel.
    #[serde(default)]
    pub is_subscribed: bool,
}

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Identity established by the login.
    pub user: SessionUser,
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Requested handle.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Chosen password.
    pub password: String,
}

/// Error document returned by the API on failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ErrorBody {
    /// Human-readable failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of the multipart upload to `POST /api/videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedVideo {
    /// Identifier of the stored video.
    #[serde(rename = "_id")]
    pub id: String,
}
