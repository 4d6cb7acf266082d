//! DOM Layer: Browser Wiring
//!
//! Binds the pure core to the page through `web-sys`. The
//! `PortfolioController` owns all mutable state and attaches every
//! event listener; only the result renderer and the modal content
//! setter write presentation state.

pub mod controller;
pub mod effects;
pub mod modal;
pub mod render;

pub use controller::PortfolioController;

use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement};

/// Look up a named control; a missing control disables its feature
/// with a console warning instead of failing the whole mount.
pub(crate) fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        console::warn_1(&format!("[foliocore] #{id} not found; feature disabled").into());
    }
    found
}

/// Show or hide an element via its inline display style
pub(crate) fn set_displayed(element: &Element, displayed: bool) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let value = if displayed { "block" } else { "none" };
        let _ = html.style().set_property("display", value);
    }
}
