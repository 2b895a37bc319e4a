//! Article, section and payload data structures

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Opaque body of a section.
///
/// The core never interprets a payload beyond pulling matchable text out of
/// it; how it is displayed belongs to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ContentPayload {
    /// Plain prose
    Text(String),
    /// Markup-like node with attributes and nested payloads
    Node(ContentNode),
    /// Any other authored shape, kept as-is
    Opaque(serde_json::Value),
}

impl ContentPayload {
    /// Create a plain text payload
    pub fn text(text: impl Into<String>) -> Self {
        ContentPayload::Text(text.into())
    }

    /// Create a node payload with children
    pub fn node(tag: impl Into<String>, children: Vec<ContentPayload>) -> Self {
        ContentPayload::Node(ContentNode::new(tag).with_children(children))
    }

    /// Create a node payload with a `class` attribute
    pub fn styled(
        tag: impl Into<String>,
        class: impl Into<String>,
        children: Vec<ContentPayload>,
    ) -> Self {
        ContentPayload::Node(
            ContentNode::new(tag)
                .with_attr("class", class)
                .with_children(children),
        )
    }
}

impl From<&str> for ContentPayload {
    fn from(text: &str) -> Self {
        ContentPayload::Text(text.to_string())
    }
}

impl From<String> for ContentPayload {
    fn from(text: String) -> Self {
        ContentPayload::Text(text)
    }
}

impl From<ContentNode> for ContentPayload {
    fn from(node: ContentNode) -> Self {
        ContentPayload::Node(node)
    }
}

/// A markup-like node inside a section payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub children: Vec<ContentPayload>,
}

impl ContentNode {
    /// Create an empty node
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Replace the children
    pub fn with_children(mut self, children: Vec<ContentPayload>) -> Self {
        self.children = children;
        self
    }

    /// Append a child
    pub fn push(mut self, child: impl Into<ContentPayload>) -> Self {
        self.children.push(child.into());
        self
    }
}

/// A label/value pair shown in the quick-facts panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InfoItem {
    pub label: String,
    pub value: String,
}

impl InfoItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled sub-unit of an article with its own jump target
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Unique within the owning article only
    pub id: String,
    pub title: String,
    pub content: ContentPayload,
}

impl Section {
    /// Create a new section
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<ContentPayload>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A unit of documentation content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, alias = "info", alias = "infoItems")]
    pub info_items: Vec<InfoItem>,
    #[serde(default)]
    pub sections: Vec<Section>,
    #[serde(default, alias = "seeAlso")]
    pub see_also: Vec<String>,
}

impl Article {
    /// Create a new article with no summary, facts or sections
    pub fn new(
        slug: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            category: category.into(),
            summary: String::new(),
            info_items: Vec::new(),
            sections: Vec::new(),
            see_also: Vec::new(),
        }
    }

    /// Set the summary line
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Add a quick-facts entry
    pub fn add_info(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.info_items.push(InfoItem::new(label, value));
        self
    }

    /// Add a section
    pub fn add_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Set the cross-references
    pub fn with_see_also<I, S>(mut self, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.see_also = slugs.into_iter().map(Into::into).collect();
        self
    }

    /// Articles without sections render a "content pending" notice
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Find a section by id
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Ordered list of slugs shown under one sidebar heading
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub slugs: Vec<String>,
}

impl CategoryGroup {
    pub fn new<I, S>(category: impl Into<String>, slugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category: category.into(),
            slugs: slugs.into_iter().map(Into::into).collect(),
        }
    }
}

/// Raw catalog as authored, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub articles: Vec<Article>,
    #[serde(default)]
    pub categories: Vec<CategoryGroup>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an article
    pub fn add_article(mut self, article: Article) -> Self {
        self.articles.push(article);
        self
    }

    /// Add a category grouping
    pub fn add_category(mut self, group: CategoryGroup) -> Self {
        self.categories.push(group);
        self
    }
}
