//! Shared UI atoms used across the shell and pages.

pub(crate) mod avatar;
pub(crate) mod empty_state;
pub(crate) mod loading;

pub(crate) use avatar::{Avatar, InitialAvatar};
pub(crate) use empty_state::EmptyState;
pub(crate) use loading::{ErrorNotice, Loading};
