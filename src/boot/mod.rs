//! Application Bootstrap
//!
//! Selects a top-level view, mounts it into its target exactly once, and
//! hands back an [`AppHandle`] that owns the mounted instance. Mount
//! failures surface as [`MountError`](crate::mount::MountError) through `?`,
//! untouched.

pub mod config;

pub use config::{BootOptions, MountConfig, CONFIG_ELEMENT_ID};

use std::fmt;
use std::rc::Rc;

use crate::mount::{MountResult, MountTarget};
use crate::views::ViewKind;

/// Mount the default view into the configured target
pub fn start(config: MountConfig) -> MountResult<AppHandle> {
    start_with(ViewKind::default(), config)
}

/// Mount a specific view into the configured target
pub fn start_with(view: ViewKind, config: MountConfig) -> MountResult<AppHandle> {
    let MountConfig { target, props } = config;

    log::debug!("Mounting {} view into {}", view.label(), target.describe());
    target.attach(view.renderer(&props))?;
    log::info!("Mounted {} view into {}", view.label(), target.describe());

    Ok(AppHandle { view, target })
}

/// Owner of one mounted view instance
///
/// Dropping the handle detaches the view from its target. Call
/// [`forget`](AppHandle::forget) to keep the view mounted for the lifetime
/// of the page instead.
pub struct AppHandle {
    view: ViewKind,
    target: Rc<dyn MountTarget>,
}

impl AppHandle {
    /// Which view this handle mounted
    pub fn view(&self) -> ViewKind {
        self.view
    }

    /// The target the view is attached to
    pub fn target(&self) -> &Rc<dyn MountTarget> {
        &self.target
    }

    /// Tear the view down now, same as dropping the handle
    pub fn unmount(self) {}

    /// Leave the view mounted and never detach it
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        self.target.detach();
    }
}

impl fmt::Debug for AppHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppHandle")
            .field("view", &self.view)
            .field("target", &self.target.describe())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mount::{MountError, RenderFn};
    use std::cell::Cell;

    /// Records lifecycle calls instead of touching a document
    struct StubTarget {
        attaches: Cell<u32>,
        detaches: Cell<u32>,
        fail_attach: bool,
    }

    impl StubTarget {
        fn new() -> Rc<Self> {
            Rc::new(Self {
                attaches: Cell::new(0),
                detaches: Cell::new(0),
                fail_attach: false,
            })
        }

        fn failing() -> Rc<Self> {
            Rc::new(Self {
                attaches: Cell::new(0),
                detaches: Cell::new(0),
                fail_attach: true,
            })
        }
    }

    impl MountTarget for StubTarget {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        fn attach(&self, _render: RenderFn) -> MountResult<()> {
            self.attaches.set(self.attaches.get() + 1);
            if self.fail_attach {
                return Err(MountError::TargetUnavailable("stub".to_string()));
            }
            Ok(())
        }

        fn detach(&self) {
            self.detaches.set(self.detaches.get() + 1);
        }
    }

    fn config_for(stub: &Rc<StubTarget>) -> MountConfig {
        MountConfig::new(stub.clone())
    }

    #[test]
    fn test_start_mounts_the_default_view_once() {
        let stub = StubTarget::new();
        let app = start(config_for(&stub)).expect("mount");

        assert_eq!(app.view(), ViewKind::Charts);
        assert_eq!(stub.attaches.get(), 1);
        assert_eq!(stub.detaches.get(), 0);

        app.forget();
    }

    #[test]
    fn test_explicit_selection_mounts_the_alternative() {
        let stub = StubTarget::new();
        let app = start_with(ViewKind::App, config_for(&stub)).expect("mount");

        assert_eq!(app.view(), ViewKind::App);
        assert_eq!(stub.attaches.get(), 1);

        app.forget();
    }

    #[test]
    fn test_handle_keeps_the_attached_target() {
        let stub = StubTarget::new();
        let app = start(config_for(&stub)).expect("mount");

        let held = Rc::as_ptr(app.target()) as *const ();
        let stub_ptr = Rc::as_ptr(&stub) as *const ();
        assert_eq!(held, stub_ptr);

        app.forget();
    }

    #[test]
    fn test_attach_failure_propagates_unwrapped() {
        let stub = StubTarget::failing();
        let err = start(config_for(&stub)).unwrap_err();

        assert!(matches!(err, MountError::TargetUnavailable(_)));
        assert_eq!(stub.attaches.get(), 1);
        assert_eq!(stub.detaches.get(), 0);
    }

    #[test]
    fn test_drop_detaches_the_view() {
        let stub = StubTarget::new();
        let app = start(config_for(&stub)).expect("mount");

        drop(app);
        assert_eq!(stub.detaches.get(), 1);
    }

    #[test]
    fn test_unmount_detaches_exactly_once() {
        let stub = StubTarget::new();
        let app = start(config_for(&stub)).expect("mount");

        app.unmount();
        assert_eq!(stub.detaches.get(), 1);
    }

    #[test]
    fn test_forget_never_detaches() {
        let stub = StubTarget::new();
        let app = start(config_for(&stub)).expect("mount");

        app.forget();
        assert_eq!(stub.attaches.get(), 1);
        assert_eq!(stub.detaches.get(), 0);
    }

    #[test]
    fn test_instances_stay_independent() {
        let first = StubTarget::new();
        let second = StubTarget::new();

        let app_one = start(config_for(&first)).expect("mount");
        let app_two = start_with(ViewKind::App, config_for(&second)).expect("mount");

        assert_eq!(first.attaches.get(), 1);
        assert_eq!(second.attaches.get(), 1);

        drop(app_one);
        assert_eq!(first.detaches.get(), 1);
        assert_eq!(second.detaches.get(), 0);

        app_two.forget();
    }
}
