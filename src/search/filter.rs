//! QueryFilter: Ordered, Deduplicated Substring Filtering
//!
//! Scans the snapshot in original order and keeps the first entry for
//! each distinct normalized text. Later entries that normalize to the
//! same key are dropped even when they are different underlying
//! elements; the result list shows text, so identical keys would be
//! visually redundant.

use std::collections::HashSet;

use crate::search::index::{SearchEntry, SearchIndex};

/// Filter the snapshot against a non-empty, pre-lowercased query.
///
/// Callers must short-circuit the empty query themselves: an empty
/// query is the explicit "no results" UI state, not "match everything".
/// Zero hits is a valid empty result, never an error.
pub fn filter<'a>(index: &'a SearchIndex, query: &str) -> Vec<&'a SearchEntry> {
    debug_assert!(!query.is_empty(), "empty query must be short-circuited by the caller");

    let mut seen: HashSet<&str> = HashSet::new();
    let mut hits: Vec<&SearchEntry> = Vec::new();

    for entry in index.entries() {
        if entry.normalized_lower.contains(query) && seen.insert(&entry.normalized_lower) {
            hits.push(entry);
        }
    }

    hits
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Requirement 1: Case-insensitive substring containment
    // -------------------------------------------------------------------------
    #[test]
    fn test_case_insensitive_containment() {
        let index = SearchIndex::build(["The Quick Brown Fox", "unrelated"]);
        let hits = filter(&index, "quick");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].raw_text, "The Quick Brown Fox");
    }

    // -------------------------------------------------------------------------
    // Requirement 2: First-seen wins per distinct normalized text
    // -------------------------------------------------------------------------
    #[test]
    fn test_dedup_first_seen_wins() {
        // Whitespace and case variants collapse to one hit
        let index = SearchIndex::build(["Hello world", "hello   world", "Goodbye"]);
        let hits = filter(&index, "hello");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].handle, 0);
        assert_eq!(hits[0].raw_text, "Hello world");
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Scan order is preserved
    // -------------------------------------------------------------------------
    #[test]
    fn test_order_preserved() {
        let index = SearchIndex::build(["b apple", "c apple", "a apple"]);
        let hits = filter(&index, "apple");
        let handles: Vec<usize> = hits.iter().map(|h| h.handle).collect();
        assert_eq!(handles, vec![0, 1, 2]);
    }

    // -------------------------------------------------------------------------
    // Requirement 4: No duplicate normalized keys in any result set
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_duplicate_keys() {
        let index = SearchIndex::build([
            "shared   text",
            "Shared Text",
            "shared text",
            "other shared text",
        ]);
        let hits = filter(&index, "shared");
        let mut keys: Vec<&str> = hits.iter().map(|h| h.normalized_lower.as_str()).collect();
        let before = keys.len();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), before);
        assert_eq!(hits.len(), 2); // "shared text" + "other shared text"
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Zero matches is a valid empty result
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_match_is_empty() {
        let index = SearchIndex::build(["alpha", "beta"]);
        assert!(filter(&index, "gamma").is_empty());
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Normalization applies before matching
    // -------------------------------------------------------------------------
    #[test]
    fn test_matches_normalized_form() {
        // "well-known" normalizes to "wellknown", so the joined form matches
        let index = SearchIndex::build(["a well-known fact"]);
        assert_eq!(filter(&index, "wellknown").len(), 1);
        assert!(filter(&index, "well-known").is_empty());
    }
}
