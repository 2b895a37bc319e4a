//! ZAP POST Wiki search
//!
//! A small in-memory search engine over the article catalog:
//! - Accent and case insensitive normalization
//! - Best-effort text extraction from section payloads
//! - An index built once from the content store
//! - Weighted substring ranking (title, summary, section text)
//! - Type-ahead state for search boxes
//!
//! # Examples
//!
//! ```
//! use zapwiki_content::{builtin, ContentStore};
//! use zapwiki_search::SearchIndex;
//!
//! let store = ContentStore::new(builtin::zap_post_catalog(), builtin::HOME_SLUG).unwrap();
//! let index = SearchIndex::build(&store);
//!
//! let hits = index.search("acoes");
//! assert!(hits.iter().any(|hit| hit.slug == "creditos-e-acoes"));
//! assert!(index.search("   ").is_empty());
//! ```

pub mod extract;
pub mod index;
pub mod normalize;
pub mod search_box;

pub use extract::section_text;
pub use index::{IndexEntry, MatchFields, SearchHit, SearchIndex, MAX_RESULTS};
pub use normalize::normalize;
pub use search_box::SearchBox;
