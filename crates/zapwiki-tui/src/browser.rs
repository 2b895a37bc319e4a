//! Wiki browser state and keyboard handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zapwiki_config::{SupportConfig, WikiConfig};
use zapwiki_content::{Article, ContentStore};
use zapwiki_router::{MemoryLocation, NavigationController, ScrollQueue};
use zapwiki_search::{SearchBox, SearchIndex};

use crate::view::ArticleView;

const DEFAULT_VIEWPORT_HEIGHT: usize = 20;

/// Pane receiving keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Article,
    Contents,
    Search,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Sidebar => Focus::Article,
            Focus::Article => Focus::Contents,
            Focus::Contents | Focus::Search => Focus::Sidebar,
        }
    }

    fn previous(self) -> Self {
        match self {
            Focus::Sidebar | Focus::Search => Focus::Contents,
            Focus::Article => Focus::Sidebar,
            Focus::Contents => Focus::Article,
        }
    }
}

/// The terminal wiki: catalog, search, navigation and pane state
pub struct WikiBrowser {
    store: ContentStore,
    index: SearchIndex,
    router: NavigationController,
    location: MemoryLocation,
    scroll: ScrollQueue,
    search: SearchBox,
    support: SupportConfig,
    sidebar_width: u16,
    sidebar: Vec<String>,
    sidebar_selected: usize,
    toc_selected: usize,
    focus: Focus,
    return_focus: Focus,
    view: Option<ArticleView>,
    offset: usize,
    viewport_height: usize,
    should_quit: bool,
}

impl WikiBrowser {
    /// Create a browser starting at the home article
    pub fn new(store: ContentStore, config: &WikiConfig) -> Self {
        Self::with_location(store, config, MemoryLocation::new())
    }

    /// Create a browser bound to an existing location
    pub fn with_location(store: ContentStore, config: &WikiConfig, location: MemoryLocation) -> Self {
        let index = SearchIndex::build(&store);
        let scroll = ScrollQueue::with_smooth_support(config.ui.smooth_scroll);
        let router = NavigationController::new(store.home_slug())
            .with_location(location.clone())
            .with_scroll(scroll.clone());

        let sidebar = store
            .grouped_articles()
            .into_iter()
            .flat_map(|(_, articles)| articles.into_iter().map(|a| a.slug.clone()))
            .collect();

        let mut browser = Self {
            store,
            index,
            router,
            location,
            scroll,
            search: SearchBox::new(),
            support: config.support.clone(),
            sidebar_width: config.ui.sidebar_width,
            sidebar,
            sidebar_selected: 0,
            toc_selected: 0,
            focus: Focus::Sidebar,
            return_focus: Focus::Sidebar,
            view: None,
            offset: 0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
            should_quit: false,
        };
        browser.sync_sidebar();
        browser
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn router(&self) -> &NavigationController {
        &self.router
    }

    pub fn location(&self) -> &MemoryLocation {
        &self.location
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn support(&self) -> &SupportConfig {
        &self.support
    }

    pub fn sidebar_width(&self) -> u16 {
        self.sidebar_width
    }

    /// Article slugs in sidebar order
    pub fn sidebar_entries(&self) -> &[String] {
        &self.sidebar
    }

    pub fn sidebar_selected(&self) -> usize {
        self.sidebar_selected
    }

    pub fn toc_selected(&self) -> usize {
        self.toc_selected
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// First visible line of the article pane
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Layout from the last call to [`Self::layout`]
    pub fn view(&self) -> Option<&ArticleView> {
        self.view.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Article for the current location
    pub fn current_article(&self) -> Option<&Article> {
        self.router.current_article(&self.store)
    }

    /// Lay out the current article and apply the newest scroll request
    ///
    /// Called once per frame with the article pane's inner size.
    pub fn layout(&mut self, width: usize, height: usize) {
        self.viewport_height = height.max(1);

        let Some(article) = self.router.current_article(&self.store) else {
            self.view = None;
            self.offset = 0;
            return;
        };

        let stale = match &self.view {
            Some(view) => view.slug() != article.slug || view.width() != width,
            None => true,
        };
        if stale {
            let article_changed = self
                .view
                .as_ref()
                .map_or(true, |view| view.slug() != article.slug);
            self.view = Some(ArticleView::build(&self.store, article, width));
            if article_changed {
                self.offset = 0;
                self.toc_selected = 0;
                self.sync_sidebar();
            }
        }

        let Some(view) = &self.view else {
            return;
        };
        if let Some(request) = self.scroll.take_latest() {
            match view.offset_for(&request, self.viewport_height) {
                Some(offset) => self.offset = offset,
                None => tracing::debug!("No anchor for scroll request {:?}", request.target),
            }
        }
        self.offset = self.offset.min(view.max_offset(self.viewport_height));
    }

    /// Handle a key press; returns whether it was consumed
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return true;
            }
            (KeyCode::Left, KeyModifiers::ALT) => return self.location.back(),
            (KeyCode::Right, KeyModifiers::ALT) => return self.location.forward(),
            _ => {}
        }

        if self.focus == Focus::Search {
            return self.handle_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('/') => {
                self.return_focus = self.focus;
                self.focus = Focus::Search;
                true
            }
            KeyCode::Char('h') => {
                self.router.go_home();
                true
            }
            KeyCode::Tab => {
                self.focus = self.focus.next();
                true
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                true
            }
            _ => match self.focus {
                Focus::Sidebar => self.handle_sidebar_key(key),
                Focus::Article => self.handle_article_key(key),
                Focus::Contents => self.handle_contents_key(key),
                Focus::Search => false,
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.search.clear();
                self.focus = self.return_focus;
                true
            }
            KeyCode::Enter => {
                if let Some(slug) = self.search.pick() {
                    self.router.navigate_to(&slug);
                    self.focus = Focus::Article;
                }
                true
            }
            KeyCode::Up => {
                self.search.select_previous();
                true
            }
            KeyCode::Down => {
                self.search.select_next();
                true
            }
            KeyCode::Backspace => {
                self.search.pop(&self.index);
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.search.push(&self.index, c);
                true
            }
            _ => false,
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.sidebar_selected = self.sidebar_selected.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.sidebar_selected + 1 < self.sidebar.len() {
                    self.sidebar_selected += 1;
                }
                true
            }
            KeyCode::Enter => {
                if let Some(slug) = self.sidebar.get(self.sidebar_selected).cloned() {
                    self.router.navigate_to(&slug);
                }
                true
            }
            _ => false,
        }
    }

    fn handle_article_key(&mut self, key: KeyEvent) -> bool {
        let max_offset = self
            .view
            .as_ref()
            .map_or(0, |view| view.max_offset(self.viewport_height));

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.offset = self.offset.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.offset = (self.offset + 1).min(max_offset);
                true
            }
            KeyCode::PageUp => {
                self.offset = self.offset.saturating_sub(self.viewport_height);
                true
            }
            KeyCode::PageDown => {
                self.offset = (self.offset + self.viewport_height).min(max_offset);
                true
            }
            KeyCode::Home => {
                self.offset = 0;
                true
            }
            KeyCode::End => {
                self.offset = max_offset;
                true
            }
            KeyCode::Char(c @ '1'..='9') => {
                let n = c as usize - '1' as usize;
                let target = self
                    .view
                    .as_ref()
                    .and_then(|view| view.links().get(n))
                    .map(|link| link.slug.clone());
                match target {
                    Some(slug) => {
                        self.router.navigate_to(&slug);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    fn handle_contents_key(&mut self, key: KeyEvent) -> bool {
        let section_count = self.current_article().map_or(0, |a| a.sections.len());

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.toc_selected = self.toc_selected.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.toc_selected + 1 < section_count {
                    self.toc_selected += 1;
                }
                true
            }
            KeyCode::Enter => {
                let section_id = self
                    .current_article()
                    .and_then(|a| a.sections.get(self.toc_selected))
                    .map(|s| s.id.clone());
                if let Some(id) = section_id {
                    self.router.jump_to(&id);
                }
                true
            }
            _ => false,
        }
    }

    fn sync_sidebar(&mut self) {
        let current = self.router.current_slug();
        if let Some(pos) = self.sidebar.iter().position(|slug| *slug == current) {
            self.sidebar_selected = pos;
        }
    }
}

impl std::fmt::Debug for WikiBrowser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WikiBrowser")
            .field("router", &self.router)
            .field("focus", &self.focus)
            .field("offset", &self.offset)
            .field("query", &self.search.query())
            .finish()
    }
}
