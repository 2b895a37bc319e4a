//! Type-ahead search state

use crate::index::{SearchHit, SearchIndex};

/// Query text, ranked hits and the highlighted hit of a search box
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
    results: Vec<SearchHit>,
    selected_index: usize,
}

impl SearchBox {
    /// Create an empty search box
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Get ranked hits for the current query
    pub fn results(&self) -> &[SearchHit] {
        &self.results
    }

    /// Get selected hit index
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Get selected hit
    pub fn selected(&self) -> Option<&SearchHit> {
        self.results.get(self.selected_index)
    }

    /// Whether the dropdown should be shown at all
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
    }

    /// Replace the query and re-run it
    pub fn set_query(&mut self, index: &SearchIndex, query: &str) {
        self.query = query.to_string();
        self.refresh(index);
    }

    /// Append a typed character
    pub fn push(&mut self, index: &SearchIndex, c: char) {
        self.query.push(c);
        self.refresh(index);
    }

    /// Remove the last character
    pub fn pop(&mut self, index: &SearchIndex) {
        self.query.pop();
        self.refresh(index);
    }

    /// Move selection up
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn select_next(&mut self) {
        if self.selected_index + 1 < self.results.len() {
            self.selected_index += 1;
        }
    }

    /// Take the selected hit's slug and reset the box
    pub fn pick(&mut self) -> Option<String> {
        let slug = self.selected().map(|hit| hit.slug.clone());
        if slug.is_some() {
            self.clear();
        }
        slug
    }

    /// Clear query and hits
    pub fn clear(&mut self) {
        self.query.clear();
        self.results.clear();
        self.selected_index = 0;
    }

    fn refresh(&mut self, index: &SearchIndex) {
        self.results = index.search(&self.query);
        self.selected_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zapwiki_content::{builtin, ContentStore};

    fn index() -> SearchIndex {
        let store = ContentStore::new(builtin::zap_post_catalog(), builtin::HOME_SLUG).unwrap();
        SearchIndex::build(&store)
    }

    #[test]
    fn test_search_box_creation() {
        let search = SearchBox::new();
        assert_eq!(search.query(), "");
        assert!(search.results().is_empty());
        assert_eq!(search.selected_index(), 0);
        assert!(!search.is_active());
    }

    #[test]
    fn test_typing_refreshes_results() {
        let index = index();
        let mut search = SearchBox::new();

        for c in "rotei".chars() {
            search.push(&index, c);
        }
        assert_eq!(search.query(), "rotei");
        assert_eq!(search.selected().map(|h| h.slug.as_str()), Some("roteiros"));

        search.pop(&index);
        assert_eq!(search.query(), "rote");
        assert!(!search.results().is_empty());
    }

    #[test]
    fn test_navigation_is_bounded() {
        let index = index();
        let mut search = SearchBox::new();
        search.set_query(&index, "post");

        let count = search.results().len();
        assert!(count > 1);

        search.select_previous();
        assert_eq!(search.selected_index(), 0);

        for _ in 0..(count + 3) {
            search.select_next();
        }
        assert_eq!(search.selected_index(), count - 1);
    }

    #[test]
    fn test_pick_clears() {
        let index = index();
        let mut search = SearchBox::new();
        search.set_query(&index, "carross");

        assert_eq!(search.pick().as_deref(), Some("carrosseis"));
        assert!(!search.is_active());
        assert!(search.results().is_empty());

        assert_eq!(search.pick(), None);
    }

    #[test]
    fn test_whitespace_query_is_active_without_results() {
        let index = index();
        let mut search = SearchBox::new();
        search.set_query(&index, "  ");

        assert!(search.is_active());
        assert!(search.results().is_empty());
    }
}
