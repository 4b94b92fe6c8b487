//! Startup Options
//!
//! Where the app reads its startup knobs from:
//!
//! - an optional JSON `<script>` block in the host page
//! - query-string overrides (`?view=app&target=chart-root&name=Ada`)
//!
//! Malformed or unknown input is logged and skipped, with defaults filling
//! the gaps.

use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::mount::{DomTarget, MountTarget};
use crate::views::{ViewKind, ViewProps};

/// Id of the optional JSON config block in the host page
pub const CONFIG_ELEMENT_ID: &str = "chartboard-config";

/// Everything a mount needs besides the view itself
#[derive(Clone)]
pub struct MountConfig {
    /// Where the view gets attached
    pub target: Rc<dyn MountTarget>,
    /// Props handed to the view on mount
    pub props: ViewProps,
}

impl MountConfig {
    pub fn new(target: Rc<dyn MountTarget>) -> Self {
        Self {
            target,
            props: ViewProps::default(),
        }
    }

    pub fn with_props(mut self, props: ViewProps) -> Self {
        self.props = props;
        self
    }

    /// Build the mount config the startup options describe
    pub fn from_options(options: &BootOptions) -> Self {
        let target: Rc<dyn MountTarget> = match &options.target {
            Some(raw) => Rc::new(DomTarget::parse(raw)),
            None => Rc::new(DomTarget::body()),
        };

        Self {
            target,
            props: options.props.clone(),
        }
    }
}

impl Default for MountConfig {
    /// Mount into the document body with empty props
    fn default() -> Self {
        Self::new(Rc::new(DomTarget::body()))
    }
}

impl fmt::Debug for MountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountConfig")
            .field("target", &self.target.describe())
            .field("props", &self.props)
            .finish()
    }
}

/// Startup options collected from the host page
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BootOptions {
    /// Which view to mount, defaulting to [`ViewKind::Charts`]
    #[serde(default)]
    pub view: Option<ViewKind>,
    /// Mount target string, defaulting to the document body
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub props: ViewProps,
}

impl BootOptions {
    /// Read options from the current page: config block first, then
    /// query-string overrides on top
    pub fn from_host() -> Self {
        let mut options = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content())
            .map(|text| Self::from_json(&text))
            .unwrap_or_default();

        if let Some(window) = web_sys::window() {
            if let Ok(search) = window.location().search() {
                options.apply_query(&search);
            }
        }

        options
    }

    /// Parse options from a JSON string, falling back to defaults on error
    pub fn from_json(text: &str) -> Self {
        match serde_json::from_str(text) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("Ignoring malformed host config: {}", err);
                Self::default()
            }
        }
    }

    /// Apply `?key=value` overrides from a query string
    pub fn apply_query(&mut self, search: &str) {
        for pair in search.trim_start_matches('?').split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                if value.is_empty() {
                    continue;
                }

                let value = decode_value(value);
                match key {
                    "view" => match ViewKind::parse(&value) {
                        Some(view) => self.view = Some(view),
                        None => log::warn!("Unknown view {:?} in query string", value),
                    },
                    "target" => self.target = Some(value),
                    "name" => self.props.name = Some(value),
                    _ => {}
                }
            }
        }
    }

    /// The view to mount
    pub fn view(&self) -> ViewKind {
        self.view.unwrap_or_default()
    }
}

/// Decode a form-encoded query value (`+` for space, `%XX` escapes)
fn decode_value(raw: &str) -> String {
    let raw = raw.replace('+', " ");
    match urlencoding::decode(&raw).map(|value| value.into_owned()) {
        Ok(value) => value,
        Err(_) => raw,
    }
}
