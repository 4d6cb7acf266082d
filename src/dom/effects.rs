//! Ancillary Effects: Theme, Share, Scroll, Reveal, Typewriter
//!
//! Each `wire_*` function binds one behavior; a missing control skips
//! that behavior with a warning and leaves the rest of the page alone.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom::controller::AppState;
use crate::dom::element_by_id;
use crate::ui::reveal::REVEAL_THRESHOLD;
use crate::ui::scroll::scroll_progress;
use crate::ui::theme::ThemeMode;
use crate::ui::typing::TypingEvent;

// =============================================================================
// Hero script
// =============================================================================

/// The fixed hero script, typed character by character
pub(crate) const HERO_LINES: [&str; 2] = ["Hi, I build for the web.", "Welcome to my portfolio."];

/// Full lines typed before the hero image swaps
pub(crate) const HERO_SWAP_AFTER_LINE: usize = 1;

/// Image swapped in partway through the script
const HERO_ALT_IMAGE: &str = "assets/hero-alt.png";

/// Typewriter tick
const TYPING_TICK_MS: i32 = 80;

/// Attribute carrying a fade-in element's tracker handle
const REVEAL_INDEX_ATTR: &str = "data-reveal-index";

// =============================================================================
// Theme toggle
// =============================================================================

pub(crate) fn wire_theme(
    document: &Document,
    state: &Rc<RefCell<AppState>>,
) -> Result<(), JsValue> {
    let Some(toggle) = element_by_id(document, "darkModeToggle") else {
        return Ok(());
    };
    let toggle: HtmlInputElement = toggle
        .dyn_into()
        .map_err(|_| JsValue::from_str("darkModeToggle is not an <input>"))?;
    let Some(body) = document.body() else {
        return Ok(());
    };

    let state = Rc::clone(state);
    let toggle_el = toggle.clone();
    let on_change = Closure::<dyn FnMut()>::new(move || {
        let mode = ThemeMode::from_checked(toggle_el.checked());
        state.borrow_mut().theme = mode;
        let classes = body.class_list();
        let _ = classes.toggle_with_force(ThemeMode::Dark.class_name(), mode == ThemeMode::Dark);
        let _ = classes.toggle_with_force(ThemeMode::Light.class_name(), mode == ThemeMode::Light);
    });
    toggle.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();
    Ok(())
}

// =============================================================================
// Share button
// =============================================================================

pub(crate) fn wire_share(document: &Document) -> Result<(), JsValue> {
    let Some(button) = element_by_id(document, "shareBtn") else {
        return Ok(());
    };

    let on_click = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else { return };
        let Ok(href) = window.location().href() else { return };
        // Clipboard failure is the only error condition and is
        // non-fatal: report it and move on.
        wasm_bindgen_futures::spawn_local(async move {
            let Some(window) = web_sys::window() else { return };
            let clipboard = window.navigator().clipboard();
            let message = match JsFuture::from(clipboard.write_text(&href)).await {
                Ok(_) => "Link copied to clipboard!",
                Err(_) => "Could not copy the link.",
            };
            let _ = window.alert_with_message(message);
        });
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

// =============================================================================
// Scroll progress bar
// =============================================================================

pub(crate) fn wire_progress(document: &Document) -> Result<(), JsValue> {
    let Some(bar) = element_by_id(document, "progressBar") else {
        return Ok(());
    };
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let document = document.clone();
    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let Some(window) = web_sys::window() else { return };
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let doc_height = document
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let percent = scroll_progress(scroll_top, doc_height, viewport);
        if let Some(html) = bar.dyn_ref::<HtmlElement>() {
            let _ = html.style().set_property("width", &format!("{percent}%"));
        }
    });
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

// =============================================================================
// Fade-in reveal
// =============================================================================

pub(crate) fn wire_reveal(
    document: &Document,
    state: &Rc<RefCell<AppState>>,
) -> Result<(), JsValue> {
    let targets = document.query_selector_all(".fade-in")?;
    if targets.length() == 0 {
        return Ok(());
    }

    let state = Rc::clone(state);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(handle) = target
                    .get_attribute(REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };
                // The tracker latches once per handle; unobserving
                // afterwards keeps the observer from re-firing at all.
                if state.borrow_mut().reveal.observe(handle, entry.intersection_ratio()) {
                    let _ = target.class_list().add_1("visible");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for i in 0..targets.length() {
        if let Some(node) = targets.item(i) {
            if let Ok(element) = node.dyn_into::<Element>() {
                element.set_attribute(REVEAL_INDEX_ATTR, &i.to_string())?;
                observer.observe(&element);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Hero typewriter
// =============================================================================

pub(crate) fn start_typing(
    document: &Document,
    state: &Rc<RefCell<AppState>>,
) -> Result<(), JsValue> {
    let (Some(hero), Some(text), Some(image)) = (
        element_by_id(document, "heroSection"),
        element_by_id(document, "heroText"),
        element_by_id(document, "heroImage"),
    ) else {
        return Ok(());
    };
    let text: HtmlElement = text
        .dyn_into()
        .map_err(|_| JsValue::from_str("heroText is not an HTML element"))?;
    let image: HtmlImageElement = image
        .dyn_into()
        .map_err(|_| JsValue::from_str("heroImage is not an <img>"))?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let interval_id = Rc::new(Cell::new(0i32));
    let tick = Closure::<dyn FnMut()>::new({
        let state = Rc::clone(state);
        let interval_id = Rc::clone(&interval_id);
        move || {
            let event = state.borrow_mut().typing.step();
            match event {
                TypingEvent::Char(c) => {
                    let mut s = state.borrow_mut();
                    s.typed.push(c);
                    text.set_inner_text(&s.typed);
                }
                TypingEvent::LineBreak => {
                    let mut s = state.borrow_mut();
                    s.typed.push('\n');
                    text.set_inner_text(&s.typed);
                }
                TypingEvent::SwapImage => image.set_src(HERO_ALT_IMAGE),
                TypingEvent::BeginExit => {
                    let _ = hero.class_list().add_1("hero-exit");
                }
                TypingEvent::Hold => {}
                TypingEvent::Done => {
                    hero.remove();
                    if let Some(window) = web_sys::window() {
                        window.clear_interval_with_handle(interval_id.get());
                    }
                }
            }
        }
    });
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        TYPING_TICK_MS,
    )?;
    interval_id.set(id);
    tick.forget();
    Ok(())
}
