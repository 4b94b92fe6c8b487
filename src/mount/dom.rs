//! DOM Mount Target
//!
//! [`MountTarget`] implementation over the browser document. The default
//! surface is the document body; a host page can redirect the mount to any
//! element by id or CSS selector.

use wasm_bindgen::JsCast;

use super::{MountError, MountResult, MountTarget, RenderFn};

/// A surface in the browser document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomTarget {
    /// The document body (the default surface)
    Body,
    /// The element with the given id
    ElementId(String),
    /// The first element matching a CSS selector
    Selector(String),
}

impl DomTarget {
    /// The document body
    pub fn body() -> Self {
        DomTarget::Body
    }

    /// The element with the given id
    pub fn element_id(id: impl Into<String>) -> Self {
        DomTarget::ElementId(id.into())
    }

    /// The first element matching a CSS selector
    pub fn selector(selector: impl Into<String>) -> Self {
        DomTarget::Selector(selector.into())
    }

    /// Classify a host-supplied target string.
    ///
    /// Plain identifiers (`chart-root`) are treated as element ids; anything
    /// that looks like CSS (`#chart-root`, `.panel`, `main > div`) is treated
    /// as a selector.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let looks_like_css = raw.starts_with('#')
            || raw.starts_with('.')
            || raw
                .chars()
                .any(|c| c.is_whitespace() || "[]>+~:*,".contains(c));
        if looks_like_css {
            DomTarget::Selector(raw.to_string())
        } else {
            DomTarget::ElementId(raw.to_string())
        }
    }

    /// Look up the host element in the live document.
    fn resolve(&self) -> MountResult<web_sys::HtmlElement> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(MountError::DocumentUnavailable)?;

        match self {
            DomTarget::Body => document
                .body()
                .ok_or_else(|| MountError::TargetUnavailable("document body".to_string())),
            DomTarget::ElementId(id) => {
                let element = document
                    .get_element_by_id(id)
                    .ok_or_else(|| MountError::TargetUnavailable(format!("#{}", id)))?;
                element.dyn_into::<web_sys::HtmlElement>().map_err(|_| {
                    MountError::TargetUnavailable(format!("#{} is not an HTML element", id))
                })
            }
            DomTarget::Selector(selector) => {
                let element = document
                    .query_selector(selector)
                    .map_err(|err| MountError::InvalidSelector {
                        selector: selector.clone(),
                        reason: format!("{:?}", err),
                    })?
                    .ok_or_else(|| MountError::TargetUnavailable(selector.clone()))?;
                element.dyn_into::<web_sys::HtmlElement>().map_err(|_| {
                    MountError::TargetUnavailable(format!("{} is not an HTML element", selector))
                })
            }
        }
    }
}

impl MountTarget for DomTarget {
    fn describe(&self) -> String {
        match self {
            DomTarget::Body => "document body".to_string(),
            DomTarget::ElementId(id) => format!("#{}", id),
            DomTarget::Selector(selector) => selector.clone(),
        }
    }

    fn attach(&self, render: RenderFn) -> MountResult<()> {
        let host = self.resolve()?;
        render(host);
        Ok(())
    }

    fn detach(&self) {
        // The surface may already be gone (e.g. the page tore it down first).
        if let Ok(host) = self.resolve() {
            host.set_inner_html("");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_id() {
        assert_eq!(
            DomTarget::parse("chart-root"),
            DomTarget::ElementId("chart-root".to_string())
        );
        assert_eq!(
            DomTarget::parse("  main_panel  "),
            DomTarget::ElementId("main_panel".to_string())
        );
    }

    #[test]
    fn test_parse_css_selector() {
        assert_eq!(
            DomTarget::parse("#chart-root"),
            DomTarget::Selector("#chart-root".to_string())
        );
        assert_eq!(
            DomTarget::parse(".panel"),
            DomTarget::Selector(".panel".to_string())
        );
        assert_eq!(
            DomTarget::parse("main > div"),
            DomTarget::Selector("main > div".to_string())
        );
    }

    #[test]
    fn test_describe() {
        assert_eq!(DomTarget::body().describe(), "document body");
        assert_eq!(DomTarget::element_id("chart-root").describe(), "#chart-root");
        assert_eq!(DomTarget::selector("main .panel").describe(), "main .panel");
    }
}
