//! Search page copy and the navbar's search target.

use serde::{Deserialize, Serialize};

/// Empty results copy.
pub const NO_RESULTS: &str = "No videos found matching your search.";
/// Shown when the page is opened without a query.
pub const EMPTY_QUERY: &str = "Type something in the search bar to find videos.";

/// Query string of the search route.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Raw search text.
    #[serde(default)]
    pub q: Option<String>,
}

impl SearchParams {
    /// Params for a navbar submission; `None` when the input is blank.
    #[must_use]
    pub fn from_input(input: &str) -> Option<Self> {
        let query = input.trim();
        (!query.is_empty()).then(|| Self {
            q: Some(query.to_string()),
        })
    }
}

/// Results heading.
#[must_use]
pub fn results_heading(query: &str) -> String {
    format!("Search results for: {query}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::loaders::{load_search, search_query};
    use crate::core::testing::{FakeApi, video_fixture};
    use futures::executor::block_on;

    #[test]
    fn blank_input_does_not_navigate() {
        assert_eq!(SearchParams::from_input("   "), None);
        assert_eq!(
            SearchParams::from_input("  cats "),
            Some(SearchParams {
                q: Some("cats".into())
            })
        );
    }

    #[test]
    fn results_keep_service_order() {
        let mut api = FakeApi::default();
        api.videos = vec![video_fixture("b", "u1"), video_fixture("a", "u1")];
        let query = search_query(Some(" vid ")).expect("query present");
        let results = block_on(load_search(&api, &query));
        let ids: Vec<_> = results
            .ready()
            .map(|videos| videos.iter().map(|video| video.id.clone()).collect())
            .unwrap_or_default();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(api.calls(), vec!["search vid"]);
        assert_eq!(results_heading("vid"), "Search results for: vid");
    }
}
