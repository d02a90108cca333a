//! Watch page: player, video details, viewer toggles, and recommendations.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
