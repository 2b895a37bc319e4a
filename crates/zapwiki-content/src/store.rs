//! Immutable article store with slug lookup

use std::{
    collections::{HashMap, HashSet},
    path::Path,
};

use crate::{
    error::{ContentError, Result},
    model::{Article, Catalog, CategoryGroup},
};

/// Read-only catalog of articles, built once at startup
#[derive(Debug, Clone)]
pub struct ContentStore {
    articles: Vec<Article>,
    categories: Vec<CategoryGroup>,
    /// Map from slug to position in `articles`
    by_slug: HashMap<String, usize>,
    home_slug: String,
}

impl ContentStore {
    /// Validate a catalog and build the store
    ///
    /// Slugs must be non-empty and unique, and section ids unique within
    /// their article. Category groupings are kept as authored, even when
    /// they name slugs that do not exist.
    pub fn new(catalog: Catalog, home_slug: impl Into<String>) -> Result<Self> {
        let Catalog {
            articles,
            categories,
        } = catalog;

        let mut by_slug = HashMap::with_capacity(articles.len());
        for (position, article) in articles.iter().enumerate() {
            if article.slug.is_empty() {
                return Err(ContentError::EmptySlug(article.title.clone()));
            }
            if by_slug.insert(article.slug.clone(), position).is_some() {
                return Err(ContentError::DuplicateSlug(article.slug.clone()));
            }

            let mut seen = HashSet::new();
            for section in &article.sections {
                if !seen.insert(section.id.as_str()) {
                    return Err(ContentError::DuplicateSectionId {
                        slug: article.slug.clone(),
                        section: section.id.clone(),
                    });
                }
            }
        }

        let store = Self {
            articles,
            categories,
            by_slug,
            home_slug: home_slug.into(),
        };

        tracing::info!(
            "Loaded content catalog with {} articles in {} categories",
            store.articles.len(),
            store.categories.len()
        );
        if store.get_by_slug(&store.home_slug).is_none() {
            tracing::warn!(
                "Home slug '{}' is not in the catalog; unknown slugs will fall back to the first article",
                store.home_slug
            );
        }

        Ok(store)
    }

    /// Parse a JSON catalog and build the store
    pub fn from_json_str(json: &str, home_slug: impl Into<String>) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Self::new(catalog, home_slug)
    }

    /// Read a JSON catalog from disk and build the store
    pub fn from_json_file(path: &Path, home_slug: impl Into<String>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!("Read catalog from {}", path.display());
        Self::from_json_str(&json, home_slug)
    }

    /// Look up an article by slug
    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        self.by_slug.get(slug).map(|&position| &self.articles[position])
    }

    /// Check whether a slug is in the catalog
    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Category groupings exactly as configured
    pub fn list_by_category(&self) -> &[CategoryGroup] {
        &self.categories
    }

    /// Category groupings with their articles, skipping unknown slugs
    pub fn grouped_articles(&self) -> Vec<(&str, Vec<&Article>)> {
        self.categories
            .iter()
            .map(|group| {
                let articles = group
                    .slugs
                    .iter()
                    .filter_map(|slug| self.get_by_slug(slug))
                    .collect();
                (group.category.as_str(), articles)
            })
            .collect()
    }

    /// Resolve an article's cross-references; dangling slugs map to `None`
    pub fn resolve_see_also<'a>(&'a self, article: &'a Article) -> Vec<(&'a str, Option<&'a Article>)> {
        article
            .see_also
            .iter()
            .map(|slug| (slug.as_str(), self.get_by_slug(slug)))
            .collect()
    }

    /// All articles in catalog order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// First article in catalog order
    pub fn first(&self) -> Option<&Article> {
        self.articles.first()
    }

    /// Slug used when the location is empty or unknown
    pub fn home_slug(&self) -> &str {
        &self.home_slug
    }

    /// The home article, if the home slug is in the catalog
    pub fn home(&self) -> Option<&Article> {
        self.get_by_slug(&self.home_slug)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
