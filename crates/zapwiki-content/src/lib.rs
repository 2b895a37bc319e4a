//! ZAP POST Wiki content store
//!
//! This crate owns the article catalog for the wiki:
//! - Article, section and quick-facts data structures
//! - Opaque content payloads authored as text or markup-like nodes
//! - Category groupings for the navigation sidebar
//! - An immutable store with slug lookup and cross-reference resolution
//! - The built-in ZAP POST catalog
//!
//! # Examples
//!
//! ```
//! use zapwiki_content::{builtin, ContentStore};
//!
//! let store = ContentStore::new(builtin::zap_post_catalog(), builtin::HOME_SLUG).unwrap();
//!
//! let article = store.get_by_slug("dashboard").unwrap();
//! assert_eq!(article.title, "Entendendo o Dashboard");
//! assert!(store.get_by_slug("no-such-slug").is_none());
//! ```

pub mod builtin;
pub mod error;
pub mod model;
pub mod store;

pub use error::{ContentError, Result};
pub use model::{
    Article, Catalog, CategoryGroup, ContentNode, ContentPayload, InfoItem, Section,
};
pub use store::ContentStore;
