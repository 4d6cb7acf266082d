//! Result Rendering: Display Model to DOM
//!
//! The only code that writes the search result list. Walks the pure
//! `RenderedResults` model into `<li>` entries built on a document
//! fragment: plain segments become text nodes, emphasized segments
//! `<strong class="highlight">` elements carrying the original casing.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::search::highlight::Segment;
use crate::search::results::RenderedResults;

/// Attribute mapping a result entry back to its snapshot handle
pub(crate) const HANDLE_ATTR: &str = "data-handle";

pub(crate) fn render_results(
    document: &Document,
    list: &Element,
    count: &Element,
    model: &RenderedResults,
) -> Result<(), JsValue> {
    list.set_inner_html("");

    let fragment = document.create_document_fragment();
    for entry in &model.entries {
        let li = document.create_element("li")?;
        li.set_class_name("search-item");
        if let Some(handle) = entry.handle {
            li.set_attribute(HANDLE_ATTR, &handle.to_string())?;
        }
        for segment in &entry.segments {
            match segment {
                Segment::Plain(text) => {
                    let node = document.create_text_node(text);
                    li.append_child(node.as_ref())?;
                }
                Segment::Emphasized(text) => {
                    let strong = document.create_element("strong")?;
                    strong.set_class_name("highlight");
                    strong.set_text_content(Some(text));
                    li.append_child(strong.as_ref())?;
                }
            }
        }
        fragment.append_child(li.as_ref())?;
    }
    list.append_child(fragment.as_ref())?;

    count.set_text_content(Some(&model.count_label));
    Ok(())
}

/// Clear the list and count back to the not-yet-searched state
pub(crate) fn clear_results(list: &Element, count: &Element) {
    list.set_inner_html("");
    count.set_text_content(Some(""));
}
