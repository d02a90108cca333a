//! Core, DOM-free primitives and helpers for the Web UI.
pub mod api;
pub mod categories;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod gate;
pub mod loaders;
pub mod nav;
pub mod optimistic;
pub mod reaction;
pub mod session;
pub mod store;
pub mod subscription;
#[cfg(test)]
pub(crate) mod testing;
