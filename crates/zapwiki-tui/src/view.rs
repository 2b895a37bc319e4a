//! Line layout of an article for the article pane

use std::collections::HashMap;

use zapwiki_content::{Article, ContentStore};
use zapwiki_router::{ScrollAlign, ScrollRequest, ScrollTarget};

use crate::text::{marker_width, payload_blocks, wrap};

pub const BREADCRUMB_ROOT: &str = "Início";
pub const EMPTY_NOTICE_TITLE: &str = "Conteúdo em breve";
pub const EMPTY_NOTICE_BODY: &str = "Este artigo ainda não possui seções cadastradas.";
pub const SEE_ALSO_TITLE: &str = "Veja também";

/// Role of a laid-out line, used for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Breadcrumb,
    Title,
    Summary,
    Heading,
    Body,
    Notice,
    SeeAlso,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLine {
    pub kind: LineKind,
    pub text: String,
}

/// A "see also" entry whose target is in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeeAlsoLink {
    pub slug: String,
    pub title: String,
}

/// An article wrapped to a fixed width, with section anchors
#[derive(Debug, Clone)]
pub struct ArticleView {
    slug: String,
    width: usize,
    lines: Vec<ViewLine>,
    anchors: HashMap<String, usize>,
    links: Vec<SeeAlsoLink>,
}

impl ArticleView {
    /// Lay out an article for a pane `width` columns wide
    pub fn build(store: &ContentStore, article: &Article, width: usize) -> Self {
        let mut view = Self {
            slug: article.slug.clone(),
            width,
            lines: Vec::new(),
            anchors: HashMap::new(),
            links: Vec::new(),
        };

        view.push_wrapped(
            LineKind::Breadcrumb,
            &format!(
                "{} › {} › {}",
                BREADCRUMB_ROOT, article.category, article.title
            ),
            0,
        );
        view.blank();
        view.push_wrapped(LineKind::Title, &article.title, 0);
        if !article.summary.is_empty() {
            view.push_wrapped(LineKind::Summary, &article.summary, 0);
        }
        view.blank();

        if article.has_sections() {
            for section in &article.sections {
                view.anchors
                    .entry(section.id.clone())
                    .or_insert(view.lines.len());
                view.push_wrapped(LineKind::Heading, &section.title, 0);
                for block in payload_blocks(&section.content) {
                    view.push_wrapped(LineKind::Body, &block, marker_width(&block));
                }
                view.blank();
            }
        } else {
            view.push_wrapped(LineKind::Notice, EMPTY_NOTICE_TITLE, 0);
            view.push_wrapped(LineKind::Notice, EMPTY_NOTICE_BODY, 0);
            view.blank();
        }

        // dangling targets are left out
        let links: Vec<SeeAlsoLink> = store
            .resolve_see_also(article)
            .into_iter()
            .filter_map(|(slug, target)| {
                target.map(|a| SeeAlsoLink {
                    slug: slug.to_string(),
                    title: a.title.clone(),
                })
            })
            .collect();

        if !links.is_empty() {
            view.push_wrapped(LineKind::Heading, SEE_ALSO_TITLE, 0);
            for (i, link) in links.iter().enumerate() {
                let entry = format!("[{}] {}", i + 1, link.title);
                let indent = entry.find(' ').map(|i| i + 1).unwrap_or(0);
                view.push_wrapped(LineKind::SeeAlso, &entry, indent);
            }
        }
        view.links = links;

        view
    }

    fn push_wrapped(&mut self, kind: LineKind, text: &str, indent: usize) {
        for line in wrap(text, self.width, indent) {
            self.lines.push(ViewLine { kind, text: line });
        }
    }

    fn blank(&mut self) {
        self.lines.push(ViewLine {
            kind: LineKind::Blank,
            text: String::new(),
        });
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn lines(&self) -> &[ViewLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// First line of a section, if the article has it
    pub fn anchor(&self, section_id: &str) -> Option<usize> {
        self.anchors.get(section_id).copied()
    }

    /// Resolved "see also" entries in authored order
    pub fn links(&self) -> &[SeeAlsoLink] {
        &self.links
    }

    /// Largest useful scroll offset for a viewport of `height` lines
    pub fn max_offset(&self, height: usize) -> usize {
        self.lines.len().saturating_sub(height.max(1))
    }

    /// Scroll offset satisfying a request, or `None` for an unknown section
    pub fn offset_for(&self, request: &ScrollRequest, height: usize) -> Option<usize> {
        let line = match &request.target {
            ScrollTarget::Top => return Some(0),
            ScrollTarget::Section(id) => self.anchor(id)?,
        };

        let offset = match request.align {
            ScrollAlign::Start => line,
            ScrollAlign::Center => line.saturating_sub(height / 2),
            ScrollAlign::End => (line + 1).saturating_sub(height),
        };
        Some(offset.min(self.max_offset(height)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zapwiki_content::{Catalog, Section};
    use zapwiki_router::ScrollBehavior;

    fn store() -> ContentStore {
        let catalog = Catalog::new()
            .add_article(
                Article::new("guia", "Guia", "Introdução")
                    .with_summary("Primeiros passos.")
                    .add_section(Section::new("um", "Um", "Texto do primeiro passo."))
                    .add_section(Section::new("dois", "Dois", "Texto do segundo passo."))
                    .with_see_also(["vazio", "sumido"]),
            )
            .add_article(Article::new("vazio", "Vazio", "Introdução"));
        ContentStore::new(catalog, "guia").unwrap()
    }

    fn request(target: ScrollTarget, align: ScrollAlign) -> ScrollRequest {
        ScrollRequest {
            target,
            behavior: ScrollBehavior::Smooth,
            align,
        }
    }

    #[test]
    fn test_layout_and_anchors() {
        let store = store();
        let view = ArticleView::build(&store, store.get_by_slug("guia").unwrap(), 60);

        assert_eq!(view.lines()[0].text, "Início › Introdução › Guia");
        assert_eq!(view.lines()[2].kind, LineKind::Title);

        let um = view.anchor("um").unwrap();
        let dois = view.anchor("dois").unwrap();
        assert!(um < dois);
        assert_eq!(view.lines()[um].text, "Um");
        assert_eq!(view.lines()[dois].kind, LineKind::Heading);
        assert_eq!(view.anchor("tres"), None);
    }

    #[test]
    fn test_see_also_omits_dangling_targets() {
        let store = store();
        let view = ArticleView::build(&store, store.get_by_slug("guia").unwrap(), 60);

        let slugs: Vec<&str> = view.links().iter().map(|l| l.slug.as_str()).collect();
        assert_eq!(slugs, vec!["vazio"]);
        assert_eq!(view.links()[0].title, "Vazio");

        let entries: Vec<&str> = view
            .lines()
            .iter()
            .filter(|l| l.kind == LineKind::SeeAlso)
            .map(|l| l.text.as_str())
            .collect();
        assert_eq!(entries, vec!["[1] Vazio"]);
        assert!(!view.lines().iter().any(|l| l.text.contains("sumido")));
    }

    #[test]
    fn test_all_dangling_hides_see_also_heading() {
        let catalog = Catalog::new().add_article(
            Article::new("so", "Só", "Introdução").with_see_also(["fantasma"]),
        );
        let store = ContentStore::new(catalog, "so").unwrap();
        let view = ArticleView::build(&store, store.get_by_slug("so").unwrap(), 60);

        assert!(view.links().is_empty());
        assert!(!view.lines().iter().any(|l| l.text == SEE_ALSO_TITLE));
    }

    #[test]
    fn test_empty_article_shows_notice() {
        let store = store();
        let view = ArticleView::build(&store, store.get_by_slug("vazio").unwrap(), 60);

        assert!(view
            .lines()
            .iter()
            .any(|l| l.kind == LineKind::Notice && l.text == EMPTY_NOTICE_TITLE));
        assert!(view.links().is_empty());
    }

    #[test]
    fn test_offsets_for_requests() {
        let store = store();
        let view = ArticleView::build(&store, store.get_by_slug("guia").unwrap(), 60);
        let dois = view.anchor("dois").unwrap();

        assert_eq!(
            view.offset_for(&request(ScrollTarget::Top, ScrollAlign::Start), 5),
            Some(0)
        );
        assert_eq!(
            view.offset_for(&request(ScrollTarget::Section("dois".into()), ScrollAlign::Start), 3),
            Some(dois.min(view.max_offset(3)))
        );
        assert_eq!(
            view.offset_for(&request(ScrollTarget::Section("nope".into()), ScrollAlign::Start), 3),
            None
        );

        // a tall viewport never scrolls past the end
        assert_eq!(
            view.offset_for(&request(ScrollTarget::Section("dois".into()), ScrollAlign::Start), 100),
            Some(0)
        );
    }
}
