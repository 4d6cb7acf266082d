//! Scroll Progress: Offset-to-Percentage Mapping
//!
//! Maps the vertical scroll offset linearly onto 0-100 percent of the
//! scrollable range `document height - viewport height`. A page that
//! does not scroll (zero or negative range) reports 0 instead of
//! dividing by zero.

/// Percentage of the page scrolled, clamped to [0, 100].
pub fn scroll_progress(scroll_top: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}
