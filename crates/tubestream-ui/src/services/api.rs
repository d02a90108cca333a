//! HTTP client for the TubeStream REST API.

use crate::core::api::{AuthApi, ChannelApi, VideoApi, paths};
use crate::core::error::ApiError;
use crate::core::reaction::ReactionCall;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tubestream_api_models::{
    ChannelProfile, Comment, LikeStatus, LoginRequest, LoginResponse, NewComment,
    RegisterRequest, SessionUser, SubscriptionStatus, Video,
};
use web_sys::RequestCredentials;

/// REST client; every request carries the session cookie.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ApiClient {
    pub base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(checked(response).await?).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        decode(checked(response).await?).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        checked(response).await.map(drop)
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.url(path))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        checked(response).await.map(drop)
    }
}

async fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_status(status, &body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl AuthApi for ApiClient {
    async fn current_user(&self) -> Result<SessionUser, ApiError> {
        self.get_json(paths::AUTH_ME).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ApiError> {
        let response: LoginResponse = self.post_json(paths::AUTH_LOGIN, request).await?;
        Ok(response.user)
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty(paths::AUTH_LOGOUT).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.url(paths::AUTH_REGISTER))
            .json(request)
            .map_err(|err| ApiError::Decode(err.to_string()))?
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        checked(response).await.map(drop)
    }
}

#[async_trait(?Send)]
impl VideoApi for ApiClient {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.get_json(paths::VIDEOS).await
    }

    async fn videos_by_category(&self, category: &str) -> Result<Vec<Video>, ApiError> {
        self.get_json(&paths::category(category)).await
    }

    async fn videos_by_user(&self, user_id: &str) -> Result<Vec<Video>, ApiError> {
        self.get_json(&paths::videos_by_user(user_id)).await
    }

    async fn search_videos(&self, query: &str) -> Result<Vec<Video>, ApiError> {
        self.get_json(&paths::search(query)).await
    }

    async fn video(&self, id: &str) -> Result<Option<Video>, ApiError> {
        self.get_json(&paths::video(id)).await
    }

    async fn record_view(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&paths::view(id)).await
    }

    async fn recommended(&self, id: &str) -> Result<Vec<Video>, ApiError> {
        self.get_json(&paths::recommended(id)).await
    }

    async fn comments(&self, id: &str) -> Result<Vec<Comment>, ApiError> {
        self.get_json(&paths::comments(id)).await
    }

    async fn post_comment(&self, id: &str, comment: &NewComment) -> Result<Comment, ApiError> {
        self.post_json(&paths::comments(id), comment).await
    }

    async fn like_status(&self, id: &str) -> Result<LikeStatus, ApiError> {
        self.get_json(&paths::like_status(id)).await
    }

    async fn send_reaction(&self, id: &str, call: ReactionCall) -> Result<(), ApiError> {
        let path = paths::reaction(id, call);
        if call.is_delete() {
            self.delete(&path).await
        } else {
            self.post_empty(&path).await
        }
    }
}

#[async_trait(?Send)]
impl ChannelApi for ApiClient {
    async fn channel(&self, id: &str) -> Result<Option<ChannelProfile>, ApiError> {
        self.get_json(&paths::user(id)).await
    }

    async fn subscription_status(&self, id: &str) -> Result<SubscriptionStatus, ApiError> {
        self.get_json(&paths::check_subscription(id)).await
    }

    async fn subscribe(&self, id: &str) -> Result<(), ApiError> {
        self.post_empty(&paths::subscribe(id)).await
    }

    async fn unsubscribe(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&paths::unsubscribe(id)).await
    }
}
