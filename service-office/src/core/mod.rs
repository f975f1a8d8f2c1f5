//! Core infrastructure shared by every page
//!
//! - [`session`]: session providers (stored login, static)
//! - [`navigation`]: routes and the navigator seam
//! - [`dialog`]: confirmation and alert seam
//! - [`context`]: the dependencies a page is constructed with

pub mod config;
pub mod context;
pub mod dialog;
pub mod error;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use config::AppConfig;
pub use context::{PageContext, RedirectPolicy};
pub use dialog::{Dialog, TerminalDialog};
pub use error::PageError;
pub use navigation::{Navigator, Route, TokioNavigator};
pub use session::{FileSessionStore, SessionProvider, StaticSession};
