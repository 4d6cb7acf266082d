//! FolioCore: Portfolio Page Interactivity Engine
//!
//! A Rust/WASM implementation of a portfolio page's client-side
//! behavior: in-page text search with highlighting, theme toggle,
//! share button, project modal with image carousel, scroll progress,
//! fade-in reveal and the hero typewriter.
//!
//! # Architecture
//!
//! ## Pure core (native-testable, no DOM types)
//! - `search/normalize.rs` - TextNormalizer: whitespace collapse + punctuation stripping
//! - `search/index.rs` - SearchIndex: one-shot snapshot of the page's text
//! - `search/filter.rs` - ordered, first-seen-deduplicated substring filtering
//! - `search/highlight.rs` - plain/emphasized segmentation, excerpt windows
//! - `search/results.rs` - display model: entries of segments + count label
//! - `ui/` - theme, carousel, scroll percentage, reveal latch, typewriter FSM,
//!   modal content model
//!
//! ## DOM layer (WASM)
//! - `dom/controller.rs` - PortfolioController: snapshot capture + event wiring
//! - `dom/render.rs` - result list renderer (one of two DOM-writing paths)
//! - `dom/modal.rs` - modal content setter (the other one)
//! - `dom/effects.rs` - theme, share, scroll bar, observer, typewriter driver
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { PortfolioController } from 'foliocore';
//!
//! await init();
//! new PortfolioController().mount();
//! ```

pub mod dom;
pub mod search;
pub mod ui;

pub use dom::PortfolioController;
pub use search::*;
pub use ui::*;

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("foliocore v{}", env!("CARGO_PKG_VERSION"))
}
