//! In-process location and scroll implementations

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    error::ScrollError,
    port::{
        ChangeCallback, LocationPort, ScrollAlign, ScrollBehavior, ScrollPort, ScrollRequest,
        ScrollTarget, Subscription,
    },
};

#[derive(Default)]
struct LocationInner {
    history: RefCell<History>,
    listeners: RefCell<Vec<(u64, ChangeCallback)>>,
    next_listener_id: Cell<u64>,
}

#[derive(Debug)]
struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self {
            entries: vec![String::new()],
            cursor: 0,
        }
    }
}

/// Location fragment with a back/forward history, like a browser tab
///
/// Clones share the same location. Every fragment change (write, back,
/// forward) notifies listeners synchronously, after internal borrows are
/// released, so listeners may read or write the location again.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    inner: Rc<LocationInner>,
}

impl MemoryLocation {
    /// Create a location with an empty fragment
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a location that starts at `fragment`
    pub fn with_fragment(fragment: impl Into<String>) -> Self {
        let location = Self::new();
        location.inner.history.borrow_mut().entries[0] = fragment.into();
        location
    }

    /// Current fragment
    pub fn current(&self) -> String {
        let history = self.inner.history.borrow();
        history.entries[history.cursor].clone()
    }

    /// Go one entry back; returns false at the start of history
    pub fn back(&self) -> bool {
        let fragment = {
            let mut history = self.inner.history.borrow_mut();
            if history.cursor == 0 {
                return false;
            }
            history.cursor -= 1;
            history.entries[history.cursor].clone()
        };
        tracing::debug!("History back to '{}'", fragment);
        self.notify(&fragment);
        true
    }

    /// Go one entry forward; returns false at the end of history
    pub fn forward(&self) -> bool {
        let fragment = {
            let mut history = self.inner.history.borrow_mut();
            if history.cursor + 1 >= history.entries.len() {
                return false;
            }
            history.cursor += 1;
            history.entries[history.cursor].clone()
        };
        tracing::debug!("History forward to '{}'", fragment);
        self.notify(&fragment);
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.history.borrow().cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        let history = self.inner.history.borrow();
        history.cursor + 1 < history.entries.len()
    }

    /// Number of history entries
    pub fn history_len(&self) -> usize {
        self.inner.history.borrow().entries.len()
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self, fragment: &str) {
        let listeners: Vec<ChangeCallback> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        for listener in listeners {
            listener(fragment);
        }
    }
}

impl LocationPort for MemoryLocation {
    fn read(&self) -> String {
        self.current()
    }

    fn write(&self, fragment: &str) {
        {
            let mut history = self.inner.history.borrow_mut();
            if history.entries[history.cursor] == fragment {
                return;
            }
            let next = history.cursor + 1;
            history.entries.truncate(next);
            history.entries.push(fragment.to_string());
            history.cursor = next;
        }
        self.notify(fragment);
    }

    fn on_change(&self, callback: ChangeCallback) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner.listeners.borrow_mut().push((id, callback));

        let inner: Weak<LocationInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                inner.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
            }
        })
    }
}

impl fmt::Debug for MemoryLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryLocation")
            .field("history", &*self.inner.history.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

#[derive(Debug)]
struct QueueState {
    smooth_supported: bool,
    requests: Vec<ScrollRequest>,
}

/// Records scroll requests for a renderer to apply
///
/// Clones share the same queue.
#[derive(Debug, Clone)]
pub struct ScrollQueue {
    state: Rc<RefCell<QueueState>>,
}

impl ScrollQueue {
    /// Queue that accepts smooth and instant requests
    pub fn new() -> Self {
        Self::with_smooth_support(true)
    }

    /// Queue that rejects smooth requests
    pub fn without_smooth() -> Self {
        Self::with_smooth_support(false)
    }

    pub fn with_smooth_support(smooth_supported: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(QueueState {
                smooth_supported,
                requests: Vec::new(),
            })),
        }
    }

    /// All pending requests in order
    pub fn requests(&self) -> Vec<ScrollRequest> {
        self.state.borrow().requests.clone()
    }

    /// Most recent pending request
    pub fn last(&self) -> Option<ScrollRequest> {
        self.state.borrow().requests.last().cloned()
    }

    /// Remove and return all pending requests
    pub fn drain(&self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.state.borrow_mut().requests)
    }

    /// Remove all pending requests and keep only the newest, which supersedes the rest
    pub fn take_latest(&self) -> Option<ScrollRequest> {
        self.drain().pop()
    }

    fn push(
        &self,
        target: ScrollTarget,
        behavior: ScrollBehavior,
        align: ScrollAlign,
    ) -> Result<(), ScrollError> {
        let mut state = self.state.borrow_mut();
        if behavior == ScrollBehavior::Smooth && !state.smooth_supported {
            return Err(ScrollError::SmoothUnsupported);
        }
        state.requests.push(ScrollRequest {
            target,
            behavior,
            align,
        });
        Ok(())
    }
}

impl Default for ScrollQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollPort for ScrollQueue {
    fn scroll_to_top(&self, behavior: ScrollBehavior) -> Result<(), ScrollError> {
        self.push(ScrollTarget::Top, behavior, ScrollAlign::Start)
    }

    fn scroll_into_view(
        &self,
        section_id: &str,
        behavior: ScrollBehavior,
        align: ScrollAlign,
    ) -> Result<(), ScrollError> {
        self.push(ScrollTarget::Section(section_id.to_string()), behavior, align)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder(location: &MemoryLocation) -> (Rc<RefCell<Vec<String>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let subscription = location.on_change(Rc::new(move |fragment: &str| {
            sink.borrow_mut().push(fragment.to_string());
        }));
        (seen, subscription)
    }

    #[test]
    fn test_write_pushes_history_and_notifies() {
        let location = MemoryLocation::new();
        let (seen, _subscription) = recorder(&location);

        location.write("#/a");
        location.write("#/b");

        assert_eq!(location.read(), "#/b");
        assert_eq!(location.history_len(), 3);
        assert_eq!(*seen.borrow(), vec!["#/a", "#/b"]);
    }

    #[test]
    fn test_write_same_fragment_is_silent() {
        let location = MemoryLocation::with_fragment("#/a");
        let (seen, _subscription) = recorder(&location);

        location.write("#/a");

        assert_eq!(location.history_len(), 1);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_back_and_forward() {
        let location = MemoryLocation::new();
        location.write("#/a");
        location.write("#/b");
        let (seen, _subscription) = recorder(&location);

        assert!(location.back());
        assert_eq!(location.current(), "#/a");
        assert!(location.back());
        assert_eq!(location.current(), "");
        assert!(!location.back());

        assert!(location.forward());
        assert!(location.forward());
        assert!(!location.forward());
        assert_eq!(location.current(), "#/b");

        assert_eq!(*seen.borrow(), vec!["#/a", "", "#/a", "#/b"]);
    }

    #[test]
    fn test_write_after_back_drops_forward_entries() {
        let location = MemoryLocation::new();
        location.write("#/a");
        location.write("#/b");
        location.back();
        location.write("#/c");

        assert!(!location.can_go_forward());
        assert!(location.can_go_back());
        assert_eq!(location.history_len(), 3);
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let location = MemoryLocation::new();
        let (seen, subscription) = recorder(&location);
        assert_eq!(location.listener_count(), 1);

        drop(subscription);
        location.write("#/a");

        assert_eq!(location.listener_count(), 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_listener_may_reenter_location() {
        let location = MemoryLocation::new();
        let reader = location.clone();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _subscription = location.on_change(Rc::new(move |_: &str| {
            sink.borrow_mut().push(reader.read());
        }));

        location.write("#/a");
        assert_eq!(*seen.borrow(), vec!["#/a"]);
    }

    #[test]
    fn test_scroll_queue_records_requests() {
        let queue = ScrollQueue::new();
        queue.scroll_to_top(ScrollBehavior::Smooth).unwrap();
        queue
            .scroll_into_view("intro", ScrollBehavior::Smooth, ScrollAlign::Start)
            .unwrap();

        assert_eq!(queue.requests().len(), 2);
        assert_eq!(
            queue.take_latest(),
            Some(ScrollRequest {
                target: ScrollTarget::Section("intro".into()),
                behavior: ScrollBehavior::Smooth,
                align: ScrollAlign::Start,
            })
        );
        assert!(queue.requests().is_empty());
    }

    #[test]
    fn test_scroll_queue_without_smooth() {
        let queue = ScrollQueue::without_smooth();

        assert_eq!(
            queue.scroll_to_top(ScrollBehavior::Smooth),
            Err(ScrollError::SmoothUnsupported)
        );
        assert!(queue.requests().is_empty());
        assert!(queue.scroll_to_top(ScrollBehavior::Instant).is_ok());
        assert_eq!(queue.drain().len(), 1);
    }
}
