//! Comment list and composer under the player.

pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
