//! Property tests across search and navigation
//!
//! Every article in the built-in catalog is reachable by searching for its
//! title and following the top hit.

use proptest::prelude::*;
use zapwiki_content::{builtin, ContentStore};
use zapwiki_router::{slug_from_fragment, MemoryLocation, NavigationController};
use zapwiki_search::{normalize, SearchIndex, MAX_RESULTS};

fn store() -> ContentStore {
    ContentStore::new(builtin::zap_post_catalog(), builtin::HOME_SLUG).expect("built-in catalog")
}

/// Strategy for picking an article position in the built-in catalog
fn article_position() -> impl Strategy<Value = usize> {
    0..builtin::zap_post_catalog().articles.len()
}

proptest! {
    #[test]
    fn prop_title_search_reaches_article(position in article_position()) {
        let store = store();
        let index = SearchIndex::build(&store);
        let article = &store.articles()[position];

        let hits = index.search(&article.title);
        let hit = hits.iter().find(|h| h.slug == article.slug);
        prop_assert!(hit.is_some(), "{} not found by its title", article.slug);
        prop_assert!(hit.map_or(false, |h| h.score >= 3));

        let location = MemoryLocation::new();
        let router = NavigationController::new(store.home_slug()).with_location(location.clone());
        router.navigate_to(&article.slug);
        prop_assert_eq!(slug_from_fragment(&location.current(), store.home_slug()), article.slug.clone());
        prop_assert_eq!(router.current_article(&store).map(|a| a.title.clone()), Some(article.title.clone()));
    }

    #[test]
    fn prop_hits_are_capped_and_ranked(query in "[a-zA-Zãçé ]{1,6}") {
        let store = store();
        let index = SearchIndex::build(&store);
        let hits = index.search(&query);

        prop_assert!(hits.len() <= MAX_RESULTS);
        prop_assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
        if normalize(query.trim()).is_empty() {
            prop_assert!(hits.is_empty());
        }
    }
}
