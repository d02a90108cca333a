//! Persistence and environment helpers for the app shell.

use crate::core::config::{ClientConfig, PageOrigin};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub(crate) const SIDEBAR_EXPANDED_KEY: &str = "tubestream.sidebar_expanded";
pub(crate) const LOG_LEVEL_KEY: &str = "tubestream.log_level";
const SESSION_COOKIE: &str = "jwt";

pub(crate) fn load_config() -> ClientConfig {
    let stored_level = LocalStorage::get::<String>(LOG_LEVEL_KEY).ok();
    ClientConfig::resolve(
        option_env!("TUBESTREAM_API_URL"),
        page_origin().as_ref(),
        stored_level.as_deref(),
    )
}

fn page_origin() -> Option<PageOrigin> {
    let location = window().location();
    Some(PageOrigin {
        protocol: location.protocol().ok()?,
        hostname: location.hostname().ok()?,
        port: location.port().unwrap_or_default(),
    })
}

pub(crate) fn load_sidebar_expanded() -> bool {
    LocalStorage::get::<bool>(SIDEBAR_EXPANDED_KEY).unwrap_or(true)
}

pub(crate) fn persist_sidebar_expanded(expanded: bool) {
    set_storage(SIDEBAR_EXPANDED_KEY, expanded);
}

/// Expire the session cookie the API set at login.
pub(crate) fn clear_credentials() {
    let Ok(html) = document().dyn_into::<HtmlDocument>() else {
        log_storage_error("clear", SESSION_COOKIE, "document is not an HTML document");
        return;
    };
    let expired = format!("{SESSION_COOKIE}=; Max-Age=0; path=/");
    if let Err(err) = html.set_cookie(&expired) {
        log_storage_error("clear", SESSION_COOKIE, &format!("{err:?}"));
    }
}

fn set_storage<T: Serialize>(key: &'static str, value: T) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
