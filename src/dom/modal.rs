//! Project Modal: Content Setter and Carousel Wiring
//!
//! The modal content setter is the second (and last) DOM-writing path.
//! A card click reads the card's dataset into a `ProjectDetails`,
//! fills the modal and resets the shared carousel; the navigation
//! buttons move the carousel and swap the image source.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement, HtmlImageElement};

use crate::dom::controller::AppState;
use crate::dom::{element_by_id, set_displayed};
use crate::ui::project::ProjectDetails;

/// Controls the modal needs; wiring is skipped when any is missing
struct ModalControls {
    modal: Element,
    title: Element,
    description: Element,
    image: HtmlImageElement,
    links: Element,
}

pub(crate) fn wire(document: &Document, state: &Rc<RefCell<AppState>>) -> Result<(), JsValue> {
    let (Some(modal), Some(title), Some(description), Some(image), Some(links)) = (
        element_by_id(document, "projectModal"),
        element_by_id(document, "modalTitle"),
        element_by_id(document, "modalDesc"),
        element_by_id(document, "modalImage"),
        element_by_id(document, "modalLinks"),
    ) else {
        return Ok(());
    };
    let image: HtmlImageElement = image
        .dyn_into()
        .map_err(|_| JsValue::from_str("modalImage is not an <img>"))?;
    let controls = Rc::new(ModalControls {
        modal,
        title,
        description,
        image,
        links,
    });

    // Card clicks open the modal with that card's details
    let cards = document.query_selector_all(".project-card")?;
    for i in 0..cards.length() {
        let Some(node) = cards.item(i) else { continue };
        let Ok(card) = node.dyn_into::<HtmlElement>() else {
            continue;
        };

        let state = Rc::clone(state);
        let document = document.clone();
        let controls = Rc::clone(&controls);
        let card_el = card.clone();
        let on_click = Closure::<dyn FnMut()>::new(move || {
            let dataset = card_el.dataset();
            let details = ProjectDetails::from_dataset(
                dataset.get("title"),
                dataset.get("desc"),
                dataset.get("img"),
                dataset.get("extras"),
                dataset.get("links"),
            );
            if let Err(e) = open_modal(&document, &controls, &state, &details) {
                console::error_1(&format!("[foliocore] modal open failed: {e:?}").into());
            }
        });
        card.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    // Carousel navigation; no-ops on an empty image list
    if let Some(next) = element_by_id(document, "modalNext") {
        let state = Rc::clone(state);
        let image = controls.image.clone();
        let on_next = Closure::<dyn FnMut()>::new(move || {
            let src = state.borrow_mut().carousel.next().map(|s| s.to_string());
            if let Some(src) = src {
                image.set_src(&src);
            }
        });
        next.add_event_listener_with_callback("click", on_next.as_ref().unchecked_ref())?;
        on_next.forget();
    }
    if let Some(prev) = element_by_id(document, "modalPrev") {
        let state = Rc::clone(state);
        let image = controls.image.clone();
        let on_prev = Closure::<dyn FnMut()>::new(move || {
            let src = state.borrow_mut().carousel.prev().map(|s| s.to_string());
            if let Some(src) = src {
                image.set_src(&src);
            }
        });
        prev.add_event_listener_with_callback("click", on_prev.as_ref().unchecked_ref())?;
        on_prev.forget();
    }

    if let Some(close) = element_by_id(document, "modalClose") {
        let modal = controls.modal.clone();
        let on_close = Closure::<dyn FnMut()>::new(move || {
            set_displayed(&modal, false);
        });
        close.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref())?;
        on_close.forget();
    }

    Ok(())
}

/// Fill the modal from one project's details and show it
fn open_modal(
    document: &Document,
    controls: &ModalControls,
    state: &Rc<RefCell<AppState>>,
    details: &ProjectDetails,
) -> Result<(), JsValue> {
    controls.title.set_text_content(Some(&details.title));
    controls.description.set_text_content(Some(&details.description));

    controls.links.set_inner_html("");
    for link in &details.links {
        let li = document.create_element("li")?;
        let anchor = document.create_element("a")?;
        anchor.set_attribute("href", &link.url)?;
        anchor.set_attribute("target", "_blank")?;
        anchor.set_text_content(Some(&link.label));
        li.append_child(anchor.as_ref())?;
        controls.links.append_child(li.as_ref())?;
    }

    let carousel = details.carousel();
    if let Some(src) = carousel.current() {
        controls.image.set_src(src);
    }
    state.borrow_mut().carousel = carousel;

    set_displayed(&controls.modal, true);
    Ok(())
}
