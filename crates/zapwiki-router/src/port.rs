//! Environment capabilities used by the navigation controller

use std::{fmt, rc::Rc};

use serde::Serialize;

use crate::error::ScrollError;

/// Listener for location changes; receives the new raw fragment
pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Addressable location of the host environment
pub trait LocationPort {
    /// Current raw fragment, e.g. `#/dashboard` or an empty string
    fn read(&self) -> String;

    /// Replace the fragment, creating a history entry
    fn write(&self, fragment: &str);

    /// Register a listener for fragment changes
    fn on_change(&self, callback: ChangeCallback) -> Subscription;
}

/// Handle that removes a change listener when dropped or unsubscribed
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Create a subscription that runs `unsubscribe` once
    pub fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Subscription with nothing to undo
    pub fn empty() -> Self {
        Self { unsubscribe: None }
    }

    /// Remove the listener now
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// How a scroll should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Which edge of the target lines up with the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrollAlign {
    Start,
    Center,
    End,
}

/// What a scroll request points at
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ScrollTarget {
    /// Top of the page
    Top,
    /// Section anchor within the displayed article
    Section(String),
}

/// A recorded scroll request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub behavior: ScrollBehavior,
    pub align: ScrollAlign,
}

/// Viewport scrolling of the host environment
pub trait ScrollPort {
    /// Scroll the viewport to the top of the page
    fn scroll_to_top(&self, behavior: ScrollBehavior) -> Result<(), ScrollError>;

    /// Bring the element for a section into view
    fn scroll_into_view(
        &self,
        section_id: &str,
        behavior: ScrollBehavior,
        align: ScrollAlign,
    ) -> Result<(), ScrollError>;
}
