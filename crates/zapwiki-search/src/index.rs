//! Search index construction and ranked queries

use serde::Serialize;
use zapwiki_content::{Article, ContentStore};

use crate::{extract::section_text, normalize::normalize};

/// Upper bound on the number of hits returned by a query
pub const MAX_RESULTS: usize = 8;

const TITLE_WEIGHT: u8 = 3;
const SUMMARY_WEIGHT: u8 = 2;
const SECTIONS_WEIGHT: u8 = 1;

/// Flattened, pre-normalized view of one article
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub slug: String,
    pub title: String,
    /// Extracted text of every section, joined with spaces
    pub joined: String,
    norm_title: String,
    norm_summary: String,
    norm_joined: String,
}

impl IndexEntry {
    fn from_article(article: &Article) -> Self {
        let joined = article
            .sections
            .iter()
            .map(|section| format!("{} {}", section.title, section_text(&section.content)))
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            slug: article.slug.clone(),
            title: article.title.clone(),
            norm_title: normalize(&article.title),
            norm_summary: normalize(&article.summary),
            norm_joined: normalize(&joined),
            joined,
        }
    }

    /// Which fields contain an already-normalized query
    fn matches(&self, query: &str) -> MatchFields {
        MatchFields {
            title: self.norm_title.contains(query),
            summary: self.norm_summary.contains(query),
            sections: self.norm_joined.contains(query),
        }
    }
}

/// Fields of an article that contained the query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchFields {
    pub title: bool,
    pub summary: bool,
    pub sections: bool,
}

impl MatchFields {
    /// Weighted score in 0..=6
    pub fn score(&self) -> u8 {
        let mut score = 0;
        if self.title {
            score += TITLE_WEIGHT;
        }
        if self.summary {
            score += SUMMARY_WEIGHT;
        }
        if self.sections {
            score += SECTIONS_WEIGHT;
        }
        score
    }
}

/// A ranked search result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub slug: String,
    pub title: String,
    pub score: u8,
    pub matched: MatchFields,
}

/// Read-only search index, built once from a content store
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build the index for every article in catalog order
    pub fn build(store: &ContentStore) -> Self {
        let entries: Vec<IndexEntry> = store.articles().iter().map(IndexEntry::from_article).collect();
        tracing::info!("Built search index for {} articles", entries.len());
        Self { entries }
    }

    /// Rank articles against a query
    ///
    /// Blank queries return nothing. Results are ordered by score, with ties
    /// kept in catalog order, and capped at [`MAX_RESULTS`].
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        let query = normalize(query.trim());
        if query.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let matched = entry.matches(&query);
                let score = matched.score();
                (score > 0).then(|| SearchHit {
                    slug: entry.slug.clone(),
                    title: entry.title.clone(),
                    score,
                    matched,
                })
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order
        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits.truncate(MAX_RESULTS);

        tracing::debug!("Search '{}' matched {} articles", query, hits.len());
        hits
    }

    /// Indexed entry for a slug
    pub fn entry(&self, slug: &str) -> Option<&IndexEntry> {
        self.entries.iter().find(|entry| entry.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
