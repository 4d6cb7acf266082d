//! WASM smoke tests (browser/node target only)

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use foliocore::search::index::SearchIndex;
use foliocore::search::{filter, results};

#[wasm_bindgen_test]
fn version_reports_crate() {
    assert!(foliocore::version().starts_with("foliocore v"));
}

#[wasm_bindgen_test]
fn display_model_crosses_the_boundary() {
    let index = SearchIndex::build(["The Cat sat", "unrelated"]);
    let hits = filter::filter(&index, "cat");
    let model = results::render(&hits, "cat");
    let value = serde_wasm_bindgen::to_value(&model).expect("serialize display model");
    assert!(!value.is_null());
}
