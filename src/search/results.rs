//! RenderedResults: Pure Half of the Result Renderer
//!
//! Converts filtered entries into a display model: one entry of
//! highlighted segments per hit plus a formatted count label. The DOM
//! half (`dom::render`) only walks this model; it never re-derives
//! matches.

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::search::highlight::{highlight, highlight_excerpt, Segment, DEFAULT_EXCERPT_RADIUS};
use crate::search::index::SearchEntry;

// =============================================================================
// Types
// =============================================================================

/// Placeholder shown for the explicit zero-result state
pub const NO_RESULTS_TEXT: &str = "No results found.";

/// Texts longer than this (in graphemes) render as excerpts
pub const EXCERPT_THRESHOLD: usize = 160;

/// One displayed list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Snapshot handle of the source element; `None` for the placeholder
    pub handle: Option<usize>,
    pub segments: Vec<Segment>,
}

/// Full display model for one query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedResults {
    pub entries: Vec<ResultEntry>,
    pub count_label: String,
}

// =============================================================================
// Rendering
// =============================================================================

fn count_label(count: usize) -> String {
    format!("{} search result(s)", count)
}

/// Display model for the explicit empty state (empty query or zero
/// hits): one informational placeholder plus a zero count. Distinct
/// from the not-yet-searched state, which renders nothing at all.
pub fn render_empty() -> RenderedResults {
    RenderedResults {
        entries: vec![ResultEntry {
            handle: None,
            segments: vec![Segment::Plain(NO_RESULTS_TEXT.to_string())],
        }],
        count_label: count_label(0),
    }
}

/// Build the display model for a non-empty query's hits.
pub fn render(hits: &[&SearchEntry], query: &str) -> RenderedResults {
    if hits.is_empty() {
        return render_empty();
    }

    let entries = hits
        .iter()
        .map(|hit| {
            let long = hit.raw_text.graphemes(true).count() > EXCERPT_THRESHOLD;
            let segments = if long {
                highlight_excerpt(&hit.raw_text, query, DEFAULT_EXCERPT_RADIUS)
            } else {
                highlight(&hit.raw_text, query)
            };
            ResultEntry {
                handle: Some(hit.handle),
                segments,
            }
        })
        .collect();

    RenderedResults {
        entries,
        count_label: count_label(hits.len()),
    }
}

// =============================================================================
// Tests
// =============================================================================
