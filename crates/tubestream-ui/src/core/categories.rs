//! Category lists, slugs, and category-bar arrow logic.

/// Entries of the horizontal category bar, in display order.
pub const BAR_CATEGORIES: [&str; 19] = [
    "All",
    "Music",
    "Gaming",
    "News",
    "Sports",
    "Comedy",
    "Education",
    "Science & Technology",
    "Travel",
    "Food",
    "Fashion",
    "Beauty",
    "Vlogs",
    "Podcasts",
    "Animation",
    "Documentaries",
    "Pets & Animals",
    "Autos",
    "Entertainment",
];

/// Categories offered on the upload form.
pub const UPLOAD_CATEGORIES: [&str; 10] = [
    "Entertainment",
    "Music",
    "Sports",
    "Gaming",
    "Education",
    "Science & Technology",
    "Travel",
    "News",
    "Comedy",
    "Vlogs",
];

/// Preselected upload category.
pub const DEFAULT_UPLOAD_CATEGORY: &str = "Entertainment";

/// Pixels the arrows scroll per press.
pub const SCROLL_STEP: f64 = 200.0;

const RIGHT_EDGE_SLACK: f64 = 10.0;

/// URL slug: lower-cased with `" & "` replaced by `"-and-"`.
#[must_use]
pub fn category_slug(name: &str) -> String {
    name.to_lowercase().replace(" & ", "-and-")
}

/// Path a category chip navigates to; "All" goes home.
#[must_use]
pub fn category_href(name: &str) -> String {
    if name == "All" {
        "/".to_string()
    } else {
        format!("/category/{}", category_slug(name))
    }
}

/// Display name for a slug: a known category, or the slug title-cased.
#[must_use]
pub fn category_from_slug(slug: &str) -> String {
    if let Some(known) = BAR_CATEGORIES
        .iter()
        .find(|name| **name != "All" && category_slug(name) == slug)
    {
        return (*known).to_string();
    }
    slug.split("-and-")
        .map(|part| {
            part.split('-')
                .map(title_case)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" & ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Which scroll arrows the category bar shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrowVisibility {
    /// Content is scrolled away from the left edge.
    pub left: bool,
    /// More content lies to the right.
    pub right: bool,
}

impl Default for ArrowVisibility {
    fn default() -> Self {
        Self {
            left: false,
            right: true,
        }
    }
}

impl ArrowVisibility {
    /// Derive arrow visibility from the scroll container's metrics.
    #[must_use]
    pub fn from_scroll(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            left: scroll_left > 0.0,
            right: scroll_left < scroll_width - client_width - RIGHT_EDGE_SLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_replace_ampersands() {
        assert_eq!(category_slug("Science & Technology"), "science-and-technology");
        assert_eq!(category_slug("Music"), "music");
        assert_eq!(category_href("All"), "/");
        assert_eq!(category_href("Pets & Animals"), "/category/pets-and-animals");
    }

    #[test]
    fn slugs_resolve_back_to_names() {
        for name in BAR_CATEGORIES.iter().filter(|name| **name != "All") {
            assert_eq!(category_from_slug(&category_slug(name)), *name);
        }
        assert_eq!(category_from_slug("movies"), "Movies");
        assert_eq!(category_from_slug("tv"), "Tv");
    }

    #[test]
    fn arrow_visibility_tracks_scroll_position() {
        assert_eq!(
            ArrowVisibility::from_scroll(0.0, 1000.0, 400.0),
            ArrowVisibility {
                left: false,
                right: true
            }
        );
        assert_eq!(
            ArrowVisibility::from_scroll(300.0, 1000.0, 400.0),
            ArrowVisibility {
                left: true,
                right: true
            }
        );
        assert_eq!(
            ArrowVisibility::from_scroll(595.0, 1000.0, 400.0),
            ArrowVisibility {
                left: true,
                right: false
            }
        );
        assert!(!ArrowVisibility::from_scroll(0.0, 400.0, 400.0).right);
    }

    #[test]
    fn upload_default_is_offered() {
        assert!(UPLOAD_CATEGORIES.contains(&DEFAULT_UPLOAD_CATEGORY));
    }
}
