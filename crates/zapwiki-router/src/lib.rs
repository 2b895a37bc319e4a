//! ZAP POST Wiki navigation
//!
//! The router keeps a single piece of state, the current article slug, in
//! sync with an addressable location of the form `#/<slug>`:
//! - [`LocationPort`] and [`ScrollPort`] abstract the host environment
//! - [`NavigationController`] owns the current slug and drives scrolling
//! - [`MemoryLocation`] and [`ScrollQueue`] are in-process implementations
//!   with browser-like history
//!
//! # Examples
//!
//! ```
//! use zapwiki_router::{MemoryLocation, NavigationController, ScrollQueue};
//!
//! let location = MemoryLocation::new();
//! let scroll = ScrollQueue::new();
//! let router = NavigationController::new("bem-vindo")
//!     .with_location(location.clone())
//!     .with_scroll(scroll.clone());
//!
//! router.navigate_to("dashboard");
//! assert_eq!(router.current_slug(), "dashboard");
//! assert_eq!(location.current(), "#/dashboard");
//!
//! location.back();
//! assert_eq!(router.current_slug(), "bem-vindo");
//! ```

pub mod controller;
pub mod error;
pub mod fragment;
pub mod memory;
pub mod port;

pub use controller::NavigationController;
pub use error::ScrollError;
pub use fragment::{fragment_for, slug_from_fragment, FRAGMENT_PREFIX};
pub use memory::{MemoryLocation, ScrollQueue};
pub use port::{
    ChangeCallback, LocationPort, ScrollAlign, ScrollBehavior, ScrollPort, ScrollRequest,
    ScrollTarget, Subscription,
};
