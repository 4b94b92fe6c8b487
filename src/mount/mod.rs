//! Mounting Capability
//!
//! The seam between the bootstrap and the host document:
//!
//! - **`MountTarget`**: a surface a view can attach its rendered output to
//! - **`dom`**: the real implementation over the browser document
//! - **`MountError`**: failures reported by a surface
//!
//! The bootstrap only ever talks to `Rc<dyn MountTarget>`, so a test harness
//! can substitute a stub surface and observe the attach/detach calls without
//! a browser.

pub mod dom;

pub use dom::DomTarget;

use thiserror::Error;

/// Renders the selected view into a concrete host element.
///
/// Built by [`crate::views::ViewKind::renderer`] and invoked at most once, by
/// the target that accepts the mount. Targets that never reach a real
/// document (stubs) simply discard it.
pub type RenderFn = Box<dyn FnOnce(web_sys::HtmlElement)>;

/// A host surface a view renders into.
///
/// Shared single-threaded as `Rc<dyn MountTarget>`: the bootstrap attaches
/// through it once, and the returned handle detaches through it on disposal.
pub trait MountTarget {
    /// Human-readable name for the surface, used in logs and errors.
    fn describe(&self) -> String;

    /// Accept a mount: hand the render closure its host element.
    ///
    /// Invoked exactly once per bootstrap attempt. Implementations report an
    /// absent or malformed surface via [`MountError`] and must not invoke the
    /// closure in that case.
    fn attach(&self, render: RenderFn) -> MountResult<()>;

    /// Remove previously attached output from the surface.
    ///
    /// A no-op when nothing is attached or the surface is already gone.
    fn detach(&self);
}

/// Errors reported by mount surfaces
#[derive(Debug, Error)]
pub enum MountError {
    /// No window or document to mount into
    #[error("host document unavailable")]
    DocumentUnavailable,

    /// The configured surface does not exist in the document
    #[error("mount target unavailable: {0}")]
    TargetUnavailable(String),

    /// The configured selector is not valid CSS
    #[error("invalid mount selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Result type alias for mount operations
pub type MountResult<T> = Result<T, MountError>;
