//! ZAP POST Wiki terminal browser
//!
//! A ratatui front end over the content store, search index and navigation
//! controller: category sidebar, article pane, table of contents with quick
//! facts, type-ahead search and a support footer.

pub mod app;
pub mod browser;
pub mod error;
pub mod render;
pub mod text;
pub mod view;

pub use app::{load_store, run};
pub use browser::{Focus, WikiBrowser};
pub use error::{Result, TuiError};
pub use render::render;
pub use view::{ArticleView, LineKind, SeeAlsoLink, ViewLine};
