//! TextNormalizer: Searchable Text Normalization
//!
//! Collapses whitespace runs to a single space and strips decorative
//! punctuation runs (tildes, em-dashes, hyphens) so that visually
//! identical entries produce the same key. The normalized form is used
//! only as a deduplication key and as match input; the captured text
//! itself is never rewritten.

use regex::Regex;

// =============================================================================
// TextNormalizer
// =============================================================================

/// Normalizer with patterns compiled once at construction
pub struct TextNormalizer {
    whitespace_re: Regex,
    punct_run_re: Regex,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self {
            whitespace_re: Regex::new(r"\s+").unwrap(),
            punct_run_re: Regex::new(r"~+|—+|-+").unwrap(),
        }
    }

    /// Normalize raw captured text into its dedup/match key.
    ///
    /// Order matters: trim, collapse whitespace, then strip punctuation
    /// runs. Stripping can expose no new whitespace, so no second pass
    /// is needed.
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = self.whitespace_re.replace_all(text.trim(), " ");
        self.punct_run_re.replace_all(&collapsed, "").into_owned()
    }

    /// Normalized key lowered for case-insensitive comparison
    pub fn normalize_lower(&self, text: &str) -> String {
        self.normalize(text).to_lowercase()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Requirement 1: Whitespace runs collapse to a single space
    // -------------------------------------------------------------------------
    #[test]
    fn test_whitespace_collapse() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("hello   world"), "hello world");
        assert_eq!(n.normalize("a\t\tb\n\nc"), "a b c");
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Leading/trailing whitespace is trimmed
    // -------------------------------------------------------------------------
    #[test]
    fn test_trim() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("  padded  "), "padded");
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Punctuation runs are stripped
    // -------------------------------------------------------------------------
    #[test]
    fn test_punctuation_runs_stripped() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("~~~intro~~~"), "intro");
        assert_eq!(n.normalize("before——after"), "beforeafter");
        assert_eq!(n.normalize("dash---run"), "dashrun");
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Single hyphens inside words are stripped too
    //                (matches the run pattern, length >= 1)
    // -------------------------------------------------------------------------
    #[test]
    fn test_single_hyphen_stripped() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize("well-known"), "wellknown");
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Empty and whitespace-only input normalize to empty
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_input() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize(""), "");
        assert_eq!(n.normalize("   \n\t "), "");
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Lowered variant folds case
    // -------------------------------------------------------------------------
    #[test]
    fn test_normalize_lower() {
        let n = TextNormalizer::new();
        assert_eq!(n.normalize_lower("  Hello   World  "), "hello world");
    }
}
