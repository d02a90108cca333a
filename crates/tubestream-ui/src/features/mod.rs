//! Page features: DOM-free state next to the wasm-only views that render it.

pub mod auth;
pub mod channel;
pub mod comments;
pub mod home;
pub mod search;
pub mod upload;
pub mod watch;
