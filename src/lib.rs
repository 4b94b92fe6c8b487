//! # Chartboard
//!
//! A browser charts dashboard built with Leptos (WASM), with a swappable
//! top-level view.
//!
//! ## Features
//!
//! - **Two top-level views**: the charts dashboard (default) and a minimal app shell
//! - **Single-shot startup**: one view, one target, one handle per mount
//! - **Swappable targets**: document body, element id, or CSS selector
//! - **Host-page config**: JSON block plus query-string overrides
//!
//! ## Modules
//!
//! - [`boot`]: startup entry points and the mounted-app handle
//! - [`mount`]: mount targets and mount errors
//! - [`views`]: the selectable top-level views
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chartboard::{start, MountConfig, MountError};
//!
//! fn main() -> Result<(), MountError> {
//!     // Mount the default view into the document body
//!     let app = start(MountConfig::default())?;
//!
//!     // Keep it mounted for the lifetime of the page
//!     app.forget();
//!
//!     Ok(())
//! }
//! ```

pub mod boot;
pub mod mount;
pub mod views;

// Re-export top-level types for convenience
pub use boot::{start, start_with, AppHandle, BootOptions, MountConfig, CONFIG_ELEMENT_ID};

pub use mount::{DomTarget, MountError, MountResult, MountTarget, RenderFn};

pub use views::{App, Charts, ViewKind, ViewProps};
