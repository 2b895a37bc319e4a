//! Navigation state machine

use std::{cell::RefCell, rc::Rc};

use zapwiki_content::{Article, ContentStore};

use crate::{
    error::ScrollError,
    fragment::{fragment_for, slug_from_fragment},
    port::{LocationPort, ScrollAlign, ScrollBehavior, ScrollPort, Subscription},
};

/// Owns the current article slug and keeps it in sync with the location
///
/// Without a location port the controller keeps its state in memory only:
/// navigation and jumps neither write a fragment nor scroll, even when a
/// scroll port is attached.
pub struct NavigationController {
    home_slug: String,
    current: Rc<RefCell<String>>,
    location: Option<Box<dyn LocationPort>>,
    scroll: Option<Box<dyn ScrollPort>>,
    subscription: Option<Subscription>,
}

impl NavigationController {
    /// Create a detached controller positioned at the home slug
    pub fn new(home_slug: impl Into<String>) -> Self {
        let home_slug = home_slug.into();
        Self {
            current: Rc::new(RefCell::new(home_slug.clone())),
            home_slug,
            location: None,
            scroll: None,
            subscription: None,
        }
    }

    /// Attach a location: read the initial slug from it and follow its changes
    pub fn with_location(mut self, location: impl LocationPort + 'static) -> Self {
        let initial = slug_from_fragment(&location.read(), &self.home_slug);
        tracing::debug!("Initial slug from location: {}", initial);
        *self.current.borrow_mut() = initial;

        let current = Rc::downgrade(&self.current);
        let home_slug = self.home_slug.clone();
        let subscription = location.on_change(Rc::new(move |fragment: &str| {
            let Some(current) = current.upgrade() else {
                return;
            };
            let slug = slug_from_fragment(fragment, &home_slug);
            let mut current = current.borrow_mut();
            if *current != slug {
                tracing::debug!("Location changed: {} -> {}", current, slug);
                *current = slug;
            }
        }));

        self.subscription = Some(subscription);
        self.location = Some(Box::new(location));
        self
    }

    /// Attach a viewport to scroll on navigation and jumps
    pub fn with_scroll(mut self, scroll: impl ScrollPort + 'static) -> Self {
        self.scroll = Some(Box::new(scroll));
        self
    }

    /// Slug used for empty fragments
    pub fn home_slug(&self) -> &str {
        &self.home_slug
    }

    /// Current article slug
    pub fn current_slug(&self) -> String {
        self.current.borrow().clone()
    }

    /// Whether a location port is attached
    pub fn is_attached(&self) -> bool {
        self.location.is_some()
    }

    /// Scroll port, only while a location is attached
    fn attached_scroll(&self) -> Option<&dyn ScrollPort> {
        match (&self.location, &self.scroll) {
            (Some(_), Some(scroll)) => Some(scroll.as_ref()),
            _ => None,
        }
    }

    /// Navigate to an article
    ///
    /// Writes `#/<slug>` to the location, scrolls to the top (instantly when
    /// smooth scrolling is unavailable) and then updates the current slug.
    /// Navigating to the current slug still scrolls.
    pub fn navigate_to(&self, slug: &str) {
        tracing::debug!("Navigating to {}", slug);

        if let Some(location) = &self.location {
            location.write(&fragment_for(slug));
        }
        if let Some(scroll) = self.attached_scroll() {
            with_instant_fallback(|behavior| scroll.scroll_to_top(behavior));
        }

        let mut current = self.current.borrow_mut();
        if *current != slug {
            *current = slug.to_string();
        }
    }

    /// Navigate to the home article
    pub fn go_home(&self) {
        let home_slug = self.home_slug.clone();
        self.navigate_to(&home_slug);
    }

    /// Scroll a section of the current article into view
    ///
    /// Does not touch the current slug or the location history.
    pub fn jump_to(&self, section_id: &str) {
        tracing::debug!("Jumping to section {}", section_id);

        if let Some(scroll) = self.attached_scroll() {
            with_instant_fallback(|behavior| {
                scroll.scroll_into_view(section_id, behavior, ScrollAlign::Start)
            });
        }
    }

    /// Resolve the current slug against the catalog
    ///
    /// Unknown slugs fall back to the home article, or to the first article
    /// when the home slug is not in the catalog. Only an empty catalog
    /// yields `None`.
    pub fn current_article<'a>(&self, store: &'a ContentStore) -> Option<&'a Article> {
        let current = self.current.borrow();
        self.resolve(store, &current)
    }

    /// Resolve any slug with the same fallback as [`Self::current_article`]
    ///
    /// The home article is tried before the first article in catalog order,
    /// matching what an empty fragment shows.
    pub fn resolve<'a>(&self, store: &'a ContentStore, slug: &str) -> Option<&'a Article> {
        store.get_by_slug(slug).or_else(|| {
            tracing::debug!("Unknown slug '{}', showing default article", slug);
            store.get_by_slug(&self.home_slug).or_else(|| store.first())
        })
    }
}

impl std::fmt::Debug for NavigationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationController")
            .field("home_slug", &self.home_slug)
            .field("current", &*self.current.borrow())
            .field("attached", &self.location.is_some())
            .field("scrolls", &self.scroll.is_some())
            .finish()
    }
}

/// Try a smooth scroll and fall back to an instant one
fn with_instant_fallback(request: impl Fn(ScrollBehavior) -> Result<(), ScrollError>) {
    if let Err(e) = request(ScrollBehavior::Smooth) {
        tracing::debug!("{}; scrolling instantly", e);
        if let Err(e) = request(ScrollBehavior::Instant) {
            tracing::debug!("Scroll request dropped: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        memory::{MemoryLocation, ScrollQueue},
        port::{ScrollRequest, ScrollTarget},
    };
    use zapwiki_content::{Catalog, Section};

    fn store() -> ContentStore {
        let catalog = Catalog::new()
            .add_article(Article::new("first", "First", "C"))
            .add_article(
                Article::new("home", "Home", "C").add_section(Section::new("intro", "Intro", "x")),
            )
            .add_article(Article::new("dashboard", "Dashboard", "C"));
        ContentStore::new(catalog, "home").unwrap()
    }

    #[test]
    fn test_detached_controller() {
        let router = NavigationController::new("home");
        assert_eq!(router.current_slug(), "home");
        assert!(!router.is_attached());

        router.navigate_to("dashboard");
        router.jump_to("intro");
        assert_eq!(router.current_slug(), "dashboard");
    }

    #[test]
    fn test_detached_controller_never_scrolls() {
        let scroll = ScrollQueue::new();
        let router = NavigationController::new("home").with_scroll(scroll.clone());

        router.navigate_to("dashboard");
        router.jump_to("intro");
        router.go_home();

        assert!(scroll.requests().is_empty());
        assert_eq!(router.current_slug(), "home");
    }

    #[test]
    fn test_initial_slug_from_location() {
        let router =
            NavigationController::new("home").with_location(MemoryLocation::with_fragment("#/dashboard"));
        assert_eq!(router.current_slug(), "dashboard");

        let router = NavigationController::new("home").with_location(MemoryLocation::new());
        assert_eq!(router.current_slug(), "home");
    }

    #[test]
    fn test_navigate_writes_scrolls_and_updates() {
        let location = MemoryLocation::new();
        let scroll = ScrollQueue::new();
        let router = NavigationController::new("home")
            .with_location(location.clone())
            .with_scroll(scroll.clone());

        router.navigate_to("dashboard");

        assert_eq!(router.current_slug(), "dashboard");
        assert_eq!(location.current(), "#/dashboard");
        assert_eq!(
            scroll.requests(),
            vec![ScrollRequest {
                target: ScrollTarget::Top,
                behavior: ScrollBehavior::Smooth,
                align: ScrollAlign::Start,
            }]
        );
    }

    #[test]
    fn test_navigate_to_current_slug_still_scrolls() {
        let location = MemoryLocation::new();
        let scroll = ScrollQueue::new();
        let router = NavigationController::new("home")
            .with_location(location.clone())
            .with_scroll(scroll.clone());

        router.navigate_to("dashboard");
        router.navigate_to("dashboard");

        assert_eq!(router.current_slug(), "dashboard");
        assert_eq!(location.history_len(), 2);
        assert_eq!(scroll.requests().len(), 2);
    }

    #[test]
    fn test_smooth_fallback_to_instant() {
        let scroll = ScrollQueue::without_smooth();
        let router = NavigationController::new("home")
            .with_location(MemoryLocation::new())
            .with_scroll(scroll.clone());

        router.navigate_to("dashboard");
        router.jump_to("intro");

        let behaviors: Vec<ScrollBehavior> = scroll.requests().iter().map(|r| r.behavior).collect();
        assert_eq!(behaviors, vec![ScrollBehavior::Instant, ScrollBehavior::Instant]);
    }

    #[test]
    fn test_external_change_updates_state() {
        let location = MemoryLocation::new();
        let router = NavigationController::new("home").with_location(location.clone());

        location.write("#/dashboard");
        assert_eq!(router.current_slug(), "dashboard");

        location.write("");
        assert_eq!(router.current_slug(), "home");
    }

    #[test]
    fn test_jump_does_not_navigate() {
        let location = MemoryLocation::with_fragment("#/home");
        let scroll = ScrollQueue::new();
        let router = NavigationController::new("home")
            .with_location(location.clone())
            .with_scroll(scroll.clone());

        router.jump_to("intro");
        router.jump_to("intro");

        assert_eq!(router.current_slug(), "home");
        assert_eq!(location.history_len(), 1);
        let requests = scroll.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0], requests[1]);
        assert_eq!(requests[0].target, ScrollTarget::Section("intro".into()));
    }

    #[test]
    fn test_resolution_fallbacks() {
        let store = store();
        let router = NavigationController::new("home");

        router.navigate_to("no-such-slug");
        assert_eq!(router.current_article(&store).map(|a| a.slug.as_str()), Some("home"));

        let orphan = NavigationController::new("missing-home");
        assert_eq!(orphan.current_article(&store).map(|a| a.slug.as_str()), Some("first"));

        let empty = ContentStore::new(Catalog::new(), "home").unwrap();
        assert!(router.current_article(&empty).is_none());
    }

    #[test]
    fn test_dropping_controller_unsubscribes() {
        let location = MemoryLocation::new();
        let router = NavigationController::new("home").with_location(location.clone());
        assert_eq!(location.listener_count(), 1);

        drop(router);
        assert_eq!(location.listener_count(), 0);
        location.write("#/dashboard");
    }
}
