//! Top-Level Views
//!
//! The fixed set of views the bootstrap can start:
//!
//! - **charts**: the charts dashboard (the active default)
//! - **app**: the generic application shell, kept selectable for development
//!
//! Exactly one view is active per process start. [`ViewKind`] is the
//! selector; [`ViewKind::renderer`] is the constructor-like operation the
//! bootstrap hands to the mount target.

pub mod app;
pub mod charts;

pub use app::App;
pub use charts::Charts;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::mount::RenderFn;

/// Selector for the available top-level views
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Generic application shell
    App,
    /// Charts dashboard
    #[default]
    Charts,
}

impl ViewKind {
    /// Every view the bootstrap can start
    pub const ALL: [ViewKind; 2] = [ViewKind::App, ViewKind::Charts];

    /// Stable lowercase name, used in logs and host options
    pub fn label(&self) -> &'static str {
        match self {
            ViewKind::App => "app",
            ViewKind::Charts => "charts",
        }
    }

    /// Parse a host-supplied view name. Unknown names yield `None`; callers
    /// fall back to the default rather than failing the boot.
    pub fn parse(name: &str) -> Option<ViewKind> {
        match name.trim().to_ascii_lowercase().as_str() {
            "app" => Some(ViewKind::App),
            "charts" => Some(ViewKind::Charts),
            _ => None,
        }
    }

    /// Build the render closure for this view.
    ///
    /// The closure mounts the component into the host element it is given;
    /// the target that accepts the mount invokes it at most once.
    pub fn renderer(&self, props: &ViewProps) -> RenderFn {
        match self {
            ViewKind::App => {
                let name = props.name.clone();
                Box::new(move |host| {
                    leptos::mount_to(host, move || view! { <App name=name /> });
                })
            }
            ViewKind::Charts => Box::new(|host| {
                leptos::mount_to(host, || view! { <Charts /> });
            }),
        }
    }
}

/// Initial properties handed to the selected view
///
/// Only the application shell reads any of these today; the charts dashboard
/// takes no properties.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewProps {
    /// Display name greeted by the application shell
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_charts() {
        assert_eq!(ViewKind::default(), ViewKind::Charts);
    }

    #[test]
    fn test_labels_round_trip_through_parse() {
        for view in ViewKind::ALL {
            assert_eq!(ViewKind::parse(view.label()), Some(view));
        }
    }

    #[test]
    fn test_parse_is_forgiving_about_case_and_whitespace() {
        assert_eq!(ViewKind::parse("  Charts "), Some(ViewKind::Charts));
        assert_eq!(ViewKind::parse("APP"), Some(ViewKind::App));
        assert_eq!(ViewKind::parse("dashboard"), None);
        assert_eq!(ViewKind::parse(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ViewKind::Charts).unwrap();
        assert_eq!(json, "\"charts\"");

        let view: ViewKind = serde_json::from_str("\"app\"").unwrap();
        assert_eq!(view, ViewKind::App);
    }

    #[test]
    fn test_props_default_to_empty() {
        assert_eq!(ViewProps::default(), ViewProps { name: None });
    }
}
