//! TubeStream service handle provided at the app root.
//!
//! # Design
//! - Built once from the boot-time [`ClientConfig`]; pages never construct their own client.
//! - Two handles are equal when they talk to the same API origin, so a re-render that rebuilds
//!   the context does not re-run every fetch keyed on it.

use crate::core::config::ClientConfig;
use crate::services::api::ApiClient;
use std::rc::Rc;
use yew::prelude::*;

/// Service handle shared through context.
#[derive(Clone)]
pub(crate) struct ApiCtx {
    client: Rc<ApiClient>,
}

impl ApiCtx {
    /// Handle for the configured API origin.
    pub(crate) fn from_config(config: &ClientConfig) -> Self {
        tracing::debug!(api = %config.api_base_url, "api client ready");
        Self {
            client: Rc::new(ApiClient::new(config.api_base_url.clone())),
        }
    }
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client) || self.client.base_url == other.client.base_url
    }
}

/// Client from the nearest provider; falls back to a freshly configured one outside the app root.
#[hook]
pub(crate) fn use_api() -> Rc<ApiClient> {
    use_context::<ApiCtx>().map_or_else(
        || {
            tracing::error!("api context missing; using the configured default");
            ApiCtx::from_config(&super::preferences::load_config()).client
        },
        |ctx| ctx.client,
    )
}
