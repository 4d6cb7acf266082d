//! PortfolioController: Page Facade and Event Wiring
//!
//! Constructed once at page init. Captures the searchable snapshot,
//! owns every piece of mutable UI state behind one `Rc<RefCell<..>>`,
//! and attaches the event listeners that drive the page: search input,
//! overlay, Escape, theme toggle, share button, project cards, modal
//! navigation, scroll progress, fade-in observer and the hero
//! typewriter.
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { PortfolioController } from 'foliocore';
//!
//! await init();
//! const controller = new PortfolioController();
//! controller.mount();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlInputElement, KeyboardEvent};

use crate::dom::{effects, element_by_id, modal, render, set_displayed};
use crate::search::filter::filter;
use crate::search::index::SearchIndex;
use crate::search::results;
use crate::ui::carousel::Carousel;
use crate::ui::reveal::RevealTracker;
use crate::ui::theme::ThemeMode;
use crate::ui::typing::TypingEffect;

/// Elements whose rendered text makes up the searchable snapshot
const SEARCHABLE_SELECTOR: &str = "p, h1, h2, h3, li, span, div";

/// Delay before a blurred search panel closes. A refocus can race a
/// pending close; resetting an already-reset panel is idempotent, so
/// the timer is never cancelled.
const BLUR_CLOSE_DELAY_MS: i32 = 200;

// =============================================================================
// Shared state
// =============================================================================

/// All mutable UI state, owned by the controller and shared with the
/// event closures. The search index is read-only after construction.
pub(crate) struct AppState {
    pub index: SearchIndex,
    /// Live elements behind the snapshot, parallel to entry handles
    pub searchables: Vec<Element>,
    pub carousel: Carousel,
    pub reveal: RevealTracker,
    pub typing: TypingEffect,
    /// Hero text revealed so far
    pub typed: String,
    pub theme: ThemeMode,
}

// =============================================================================
// PortfolioController
// =============================================================================

#[wasm_bindgen]
pub struct PortfolioController {
    state: Rc<RefCell<AppState>>,
    document: Document,
}

#[wasm_bindgen]
impl PortfolioController {
    /// Capture the searchable snapshot and initialize all UI state.
    /// The snapshot scans `<main>` when present, the body otherwise.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PortfolioController, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let root: Element = match document.query_selector("main")? {
            Some(main) => main,
            None => document
                .body()
                .map(Element::from)
                .ok_or_else(|| JsValue::from_str("document has no body"))?,
        };

        let nodes = root.query_selector_all(SEARCHABLE_SELECTOR)?;
        let mut searchables: Vec<Element> = Vec::with_capacity(nodes.length() as usize);
        let mut texts: Vec<String> = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            if let Some(node) = nodes.item(i) {
                if let Ok(element) = node.dyn_into::<Element>() {
                    texts.push(element.text_content().unwrap_or_default());
                    searchables.push(element);
                }
            }
        }

        let state = AppState {
            index: SearchIndex::build(&texts),
            searchables,
            carousel: Carousel::default(),
            reveal: RevealTracker::new(),
            typing: TypingEffect::new(&effects::HERO_LINES, effects::HERO_SWAP_AFTER_LINE),
            typed: String::new(),
            theme: ThemeMode::default(),
        };

        Ok(PortfolioController {
            state: Rc::new(RefCell::new(state)),
            document,
        })
    }

    /// Attach every listener. Missing controls disable their feature
    /// only; the rest of the page still binds.
    #[wasm_bindgen]
    pub fn mount(&self) -> Result<(), JsValue> {
        self.wire_search()?;
        effects::wire_theme(&self.document, &self.state)?;
        effects::wire_share(&self.document)?;
        effects::wire_progress(&self.document)?;
        effects::wire_reveal(&self.document, &self.state)?;
        effects::start_typing(&self.document, &self.state)?;
        modal::wire(&self.document, &self.state)?;
        Ok(())
    }

    /// Number of entries in the searchable snapshot
    #[wasm_bindgen(js_name = searchableCount)]
    pub fn searchable_count(&self) -> usize {
        self.state.borrow().index.len()
    }

    /// Run one query and return the display model (for host pages that
    /// render results themselves)
    #[wasm_bindgen(js_name = runSearch)]
    pub fn js_run_search(&self, raw_query: &str) -> JsValue {
        let query = raw_query.trim().to_lowercase();
        let model = if query.is_empty() {
            results::render_empty()
        } else {
            let state = self.state.borrow();
            let hits = filter(&state.index, &query);
            results::render(&hits, &query)
        };
        match serde_wasm_bindgen::to_value(&model) {
            Ok(value) => value,
            Err(e) => {
                console::error_1(
                    &format!("[PortfolioController] serialization failed: {e:?}").into(),
                );
                JsValue::NULL
            }
        }
    }

    /// Current theme's body class
    #[wasm_bindgen(js_name = themeClass)]
    pub fn theme_class(&self) -> String {
        self.state.borrow().theme.class_name().to_string()
    }
}

// =============================================================================
// Search wiring
// =============================================================================

impl PortfolioController {
    fn wire_search(&self) -> Result<(), JsValue> {
        let document = &self.document;
        let (Some(input), Some(overlay), Some(panel), Some(list), Some(count)) = (
            element_by_id(document, "searchInput"),
            element_by_id(document, "overlay"),
            element_by_id(document, "searchModal"),
            element_by_id(document, "searchResults"),
            element_by_id(document, "searchCount"),
        ) else {
            return Ok(());
        };
        let input: HtmlInputElement = input
            .dyn_into()
            .map_err(|_| JsValue::from_str("searchInput is not an <input>"))?;

        // Input: empty query short-circuits to the explicit empty
        // state; the filter only ever sees non-empty queries.
        {
            let state = Rc::clone(&self.state);
            let document = document.clone();
            let input_el = input.clone();
            let list = list.clone();
            let count = count.clone();
            let on_input = Closure::<dyn FnMut()>::new(move || {
                let query = input_el.value().trim().to_lowercase();
                let model = if query.is_empty() {
                    results::render_empty()
                } else {
                    let state = state.borrow();
                    let hits = filter(&state.index, &query);
                    results::render(&hits, &query)
                };
                if let Err(e) = render::render_results(&document, &list, &count, &model) {
                    console::error_1(&format!("[PortfolioController] render failed: {e:?}").into());
                }
            });
            input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
            on_input.forget();
        }

        // Focus opens the overlay and expands the input
        {
            let overlay = overlay.clone();
            let panel = panel.clone();
            let input_el = input.clone();
            let on_focus = Closure::<dyn FnMut()>::new(move || {
                set_displayed(&overlay, true);
                set_displayed(&panel, true);
                let _ = input_el.class_list().add_1("expanded");
            });
            input.add_event_listener_with_callback("focus", on_focus.as_ref().unchecked_ref())?;
            on_focus.forget();
        }

        // Blur schedules a delayed close
        {
            let input_el = input.clone();
            let overlay = overlay.clone();
            let panel = panel.clone();
            let list = list.clone();
            let count = count.clone();
            let on_blur = Closure::<dyn FnMut()>::new(move || {
                let input_el = input_el.clone();
                let overlay = overlay.clone();
                let panel = panel.clone();
                let list = list.clone();
                let count = count.clone();
                let close = Closure::once_into_js(move || {
                    reset_search(&input_el, &overlay, &panel, &list, &count);
                });
                if let Some(window) = web_sys::window() {
                    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                        close.unchecked_ref(),
                        BLUR_CLOSE_DELAY_MS,
                    );
                }
            });
            input.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;
            on_blur.forget();
        }

        // Overlay click closes immediately
        {
            let input = input.clone();
            let overlay_el = overlay.clone();
            let panel = panel.clone();
            let list = list.clone();
            let count = count.clone();
            let on_click = Closure::<dyn FnMut()>::new(move || {
                reset_search(&input, &overlay_el, &panel, &list, &count);
            });
            overlay.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
            on_click.forget();
        }

        // Escape closes from anywhere
        {
            let input = input.clone();
            let overlay = overlay.clone();
            let panel = panel.clone();
            let list = list.clone();
            let count = count.clone();
            let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
                if event.key() == "Escape" {
                    reset_search(&input, &overlay, &panel, &list, &count);
                }
            });
            document
                .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;
            on_keydown.forget();
        }

        // Delegated click on the result list scrolls to the source
        // element of the clicked entry
        {
            let state = Rc::clone(&self.state);
            let on_result_click =
                Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                    let Some(target) = event.target() else { return };
                    let Ok(target) = target.dyn_into::<Element>() else { return };
                    let Ok(Some(item)) = target.closest("li.search-item") else { return };
                    let Some(handle) = item
                        .get_attribute(render::HANDLE_ATTR)
                        .and_then(|v| v.parse::<usize>().ok())
                    else {
                        return;
                    };
                    if let Some(source) = state.borrow().searchables.get(handle) {
                        source.scroll_into_view();
                    }
                });
            list.add_event_listener_with_callback("click", on_result_click.as_ref().unchecked_ref())?;
            on_result_click.forget();
        }

        Ok(())
    }
}

/// Close the search UI and drop back to the not-yet-searched state
fn reset_search(
    input: &HtmlInputElement,
    overlay: &Element,
    panel: &Element,
    list: &Element,
    count: &Element,
) {
    set_displayed(overlay, false);
    set_displayed(panel, false);
    let _ = input.class_list().remove_1("expanded");
    render::clear_results(list, count);
    input.set_value("");
}
