//! Channel page copy and ownership checks.

use crate::core::format::{subscribers_label, videos_label};
use crate::core::session::SessionState;

/// Bio placeholder.
pub const NO_BIO: &str = "No bio available";
/// Empty uploads copy.
pub const NO_UPLOADS: &str = "This channel hasn't uploaded any videos yet.";
/// Shown when the profile lookup finds nothing.
pub const CHANNEL_NOT_FOUND: &str = "Channel not found";

/// Whether the subscribe toggle is offered: hidden on the viewer's own channel.
#[must_use]
pub fn shows_subscribe(session: &SessionState, channel_id: &str) -> bool {
    session.user().is_none_or(|viewer| viewer.id != channel_id)
}

/// `N subscribers • M videos`.
#[must_use]
pub fn channel_stats(subscribers: u64, videos: usize) -> String {
    format!(
        "{} • {}",
        subscribers_label(subscribers),
        videos_label(u64::try_from(videos).unwrap_or(u64::MAX))
    )
}

/// Bio text or the placeholder.
#[must_use]
pub fn bio_text(bio: Option<&str>) -> &str {
    bio.map(str::trim)
        .filter(|bio| !bio.is_empty())
        .unwrap_or(NO_BIO)
}
