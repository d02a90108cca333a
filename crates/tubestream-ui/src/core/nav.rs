//! Sidebar navigation model.

use tubestream_api_models::SessionUser;

/// How an item decides it is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Path equals the item path.
    Exact,
    /// Path starts with the item path.
    Prefix,
}

/// Glyph shown next to a sidebar label.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Explore,
    Shorts,
    Trending,
    Channel,
    History,
    Liked,
    Music,
    Movies,
    Tv,
    Gaming,
    News,
    Sports,
    Settings,
    Help,
    Report,
}

impl NavIcon {
    /// Text glyph for the icon.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::Explore => "◎",
            Self::Shorts => "▶",
            Self::Trending => "↗",
            Self::Channel => "☺",
            Self::History => "◷",
            Self::Liked => "♥",
            Self::Music => "♪",
            Self::Movies => "▦",
            Self::Tv => "▭",
            Self::Gaming => "◆",
            Self::News => "≡",
            Self::Sports => "★",
            Self::Settings => "⚙",
            Self::Help => "?",
            Self::Report => "⚑",
        }
    }
}

/// One sidebar link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Visible label.
    pub label: &'static str,
    /// Target path.
    pub path: String,
    /// Icon.
    pub icon: NavIcon,
    /// Active-state rule.
    pub matching: MatchMode,
}

impl NavItem {
    fn exact(label: &'static str, path: &str, icon: NavIcon) -> Self {
        Self {
            label,
            path: path.to_string(),
            icon,
            matching: MatchMode::Exact,
        }
    }

    /// Whether `current` selects this item.
    #[must_use]
    pub fn is_active(&self, current: &str) -> bool {
        match self.matching {
            MatchMode::Exact => current == self.path,
            MatchMode::Prefix => current.starts_with(&self.path),
        }
    }
}

/// Group of sidebar links with an optional heading.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSection {
    /// Heading shown when the sidebar is expanded.
    pub title: Option<&'static str>,
    /// Links.
    pub items: Vec<NavItem>,
}

/// Sidebar sections; the "You" section only appears for a signed-in viewer.
#[must_use]
pub fn sidebar_sections(viewer: Option<&SessionUser>) -> Vec<NavSection> {
    let mut sections = vec![NavSection {
        title: None,
        items: vec![
            NavItem::exact("Home", "/", NavIcon::Home),
            NavItem::exact("Explore", "/explore", NavIcon::Explore),
            NavItem::exact("Shorts", "/shorts", NavIcon::Shorts),
            NavItem::exact("Trending", "/trending", NavIcon::Trending),
        ],
    }];
    if let Some(user) = viewer {
        sections.push(NavSection {
            title: Some("You"),
            items: vec![
                NavItem {
                    label: "Your channel",
                    path: format!("/channel/{}", user.id),
                    icon: NavIcon::Channel,
                    matching: MatchMode::Prefix,
                },
                NavItem::exact("History", "/history", NavIcon::History),
                NavItem::exact("Liked videos", "/liked", NavIcon::Liked),
            ],
        });
    }
    sections.push(NavSection {
        title: Some("Categories"),
        items: vec![
            NavItem::exact("Music", "/category/music", NavIcon::Music),
            NavItem::exact("Movies", "/category/movies", NavIcon::Movies),
            NavItem::exact("TV Shows", "/category/tv", NavIcon::Tv),
            NavItem::exact("Gaming", "/category/gaming", NavIcon::Gaming),
            NavItem::exact("News", "/category/news", NavIcon::News),
            NavItem::exact("Sports", "/category/sports", NavIcon::Sports),
        ],
    });
    sections.push(NavSection {
        title: None,
        items: vec![
            NavItem::exact("Settings", "/settings", NavIcon::Settings),
            NavItem::exact("Help", "/help", NavIcon::Help),
            NavItem::exact("Report", "/report", NavIcon::Report),
        ],
    });
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::user_fixture;

    fn active_labels(sections: &[NavSection], path: &str) -> Vec<&'static str> {
        sections
            .iter()
            .flat_map(|section| section.items.iter())
            .filter(|item| item.is_active(path))
            .map(|item| item.label)
            .collect()
    }

    #[test]
    fn anonymous_sidebar_hides_you_section() {
        let sections = sidebar_sections(None);
        assert!(sections.iter().all(|section| section.title != Some("You")));
        assert_eq!(active_labels(&sections, "/"), vec!["Home"]);
    }

    #[test]
    fn exact_items_do_not_match_subpaths() {
        let sections = sidebar_sections(None);
        assert!(active_labels(&sections, "/watch/v1").is_empty());
        assert_eq!(active_labels(&sections, "/category/music"), vec!["Music"]);
    }

    #[test]
    fn your_channel_matches_by_prefix() {
        let viewer = user_fixture("u1");
        let sections = sidebar_sections(Some(&viewer));
        assert_eq!(active_labels(&sections, "/channel/u1"), vec!["Your channel"]);
        assert_eq!(active_labels(&sections, "/channel/u1/videos"), vec!["Your channel"]);
        assert!(active_labels(&sections, "/channel/u2").is_empty());
    }
}
