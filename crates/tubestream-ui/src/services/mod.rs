pub(crate) mod api;
pub(crate) mod clipboard;
pub(crate) mod upload;
