//! SearchIndex: One-Shot Snapshot of the Page's Searchable Text
//!
//! Built once at startup from the rendered text of the page's
//! text-bearing elements and read-only afterwards. Each entry keeps a
//! stable handle (its position in the original scan) so the DOM layer
//! can map hits back to live elements without the index holding any
//! DOM references itself.

use serde::{Deserialize, Serialize};

use crate::search::normalize::TextNormalizer;

// =============================================================================
// Types
// =============================================================================

/// One text-bearing entry in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Position of the source element in the original snapshot scan
    pub handle: usize,
    /// Rendered text content, exactly as captured
    pub raw_text: String,
    /// Whitespace-collapsed, punctuation-stripped form
    pub normalized: String,
    /// Lowered normalized form (dedup key and containment haystack)
    pub normalized_lower: String,
}

// =============================================================================
// SearchIndex
// =============================================================================

/// Ordered, immutable snapshot of searchable entries
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

impl SearchIndex {
    /// Build the snapshot from captured element texts, in scan order.
    pub fn build<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalizer = TextNormalizer::new();
        let entries = texts
            .into_iter()
            .enumerate()
            .map(|(handle, raw)| {
                let raw_text = raw.as_ref().to_string();
                let normalized = normalizer.normalize(&raw_text);
                let normalized_lower = normalized.to_lowercase();
                SearchEntry {
                    handle,
                    raw_text,
                    normalized,
                    normalized_lower,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Requirement 1: Entries keep scan order and stable handles
    // -------------------------------------------------------------------------
    #[test]
    fn test_build_preserves_order_and_handles() {
        let index = SearchIndex::build(["first", "second", "third"]);
        assert_eq!(index.len(), 3);
        for (i, entry) in index.entries().iter().enumerate() {
            assert_eq!(entry.handle, i);
        }
        assert_eq!(index.entries()[1].raw_text, "second");
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Raw text is captured verbatim, normalization is derived
    // -------------------------------------------------------------------------
    #[test]
    fn test_raw_text_untouched() {
        let index = SearchIndex::build(["  Hello   World  "]);
        let entry = &index.entries()[0];
        assert_eq!(entry.raw_text, "  Hello   World  ");
        assert_eq!(entry.normalized, "Hello World");
        assert_eq!(entry.normalized_lower, "hello world");
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Empty input set builds an empty index
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_index() {
        let index = SearchIndex::build(Vec::<String>::new());
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }
}
