//! Which feed the home routes show.

use crate::core::categories::{category_from_slug, category_slug};
use crate::core::loaders::Feed;

/// Shown when a feed is empty.
pub const NO_VIDEOS: &str = "No videos found";

/// Feed for `/` (no slug) or `/category/{slug}`.
#[must_use]
pub fn feed_for(slug: Option<&str>) -> Feed {
    match slug.map(str::trim).filter(|slug| !slug.is_empty()) {
        Some(slug) => Feed::Category(category_from_slug(slug)),
        None => Feed::All,
    }
}

/// Whether a category chip matches the current slug; "All" is active on the home route.
#[must_use]
pub fn is_active_chip(name: &str, slug: Option<&str>) -> bool {
    slug.map_or(name == "All", |slug| {
        name != "All" && category_slug(name) == slug
    })
}
