//! Highlighter: Keyword Emphasis Segmentation
//!
//! Splits a matched entry's text into plain and emphasized segments
//! around every non-overlapping occurrence of the keyword. Matching is
//! ASCII-case-insensitive via Aho-Corasick so that the automaton's
//! offsets slice the original text directly; lowercasing the haystack
//! instead could shift byte offsets under Unicode and lose data.
//!
//! Concatenating the segments of any result reproduces the input text
//! exactly, casing included.

use aho_corasick::{AhoCorasickBuilder, MatchKind};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

// =============================================================================
// Types
// =============================================================================

/// One run of output text, either carried through or emphasized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Plain(String),
    Emphasized(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(t) | Segment::Emphasized(t) => t,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Segment::Emphasized(_))
    }
}

/// Marker glued onto a clipped excerpt edge
pub const ELLIPSIS: &str = "…";

/// Graphemes kept on each side of the first match in excerpt mode
pub const DEFAULT_EXCERPT_RADIUS: usize = 60;

// =============================================================================
// Highlighting
// =============================================================================

/// Segment `text` around every occurrence of `keyword`.
///
/// Greedy forward scan: after consuming an occurrence, scanning resumes
/// immediately after it, never overlapping. An empty keyword is treated
/// as "no occurrences" (one plain segment of the whole text) rather
/// than a zero-width match at every position.
pub fn highlight(text: &str, keyword: &str) -> Vec<Segment> {
    if keyword.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let automaton = match AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostFirst)
        .ascii_case_insensitive(true)
        .build([keyword])
    {
        Ok(a) => a,
        // Pattern too large for the automaton; emphasis is cosmetic, so
        // degrade to an unhighlighted segment instead of failing.
        Err(_) => return vec![Segment::Plain(text.to_string())],
    };

    let mut segments: Vec<Segment> = Vec::new();
    let mut last_end = 0;

    for mat in automaton.find_iter(text) {
        if mat.start() > last_end {
            segments.push(Segment::Plain(text[last_end..mat.start()].to_string()));
        }
        segments.push(Segment::Emphasized(text[mat.start()..mat.end()].to_string()));
        last_end = mat.end();
    }
    if last_end < text.len() {
        segments.push(Segment::Plain(text[last_end..].to_string()));
    }

    segments
}

/// Excerpt variant for long texts: clip a window of `radius` graphemes
/// on each side of the first occurrence, mark clipped edges with an
/// ellipsis, then highlight the excerpt. Without an occurrence (or
/// with an empty keyword) the whole text passes through unhighlighted.
pub fn highlight_excerpt(text: &str, keyword: &str, radius: usize) -> Vec<Segment> {
    if keyword.is_empty() {
        return vec![Segment::Plain(text.to_string())];
    }

    let automaton = match AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostFirst)
        .ascii_case_insensitive(true)
        .build([keyword])
    {
        Ok(a) => a,
        Err(_) => return vec![Segment::Plain(text.to_string())],
    };

    let first = match automaton.find(text) {
        Some(m) => m,
        None => return vec![Segment::Plain(text.to_string())],
    };

    let start = clip_back(text, first.start(), radius);
    let end = clip_forward(text, first.end(), radius);

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
    }
    excerpt.push_str(&text[start..end]);
    if end < text.len() {
        excerpt.push_str(ELLIPSIS);
    }

    highlight(&excerpt, keyword)
}

/// Byte offset `radius` graphemes before `from`, snapped to a boundary
fn clip_back(text: &str, from: usize, radius: usize) -> usize {
    text[..from]
        .grapheme_indices(true)
        .rev()
        .take(radius)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(from)
}

/// Byte offset `radius` graphemes after `from`, snapped to a boundary
fn clip_forward(text: &str, from: usize, radius: usize) -> usize {
    text[from..]
        .grapheme_indices(true)
        .nth(radius)
        .map(|(i, _)| from + i)
        .unwrap_or(text.len())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text()).collect()
    }

    // -------------------------------------------------------------------------
    // Requirement 1: Basic emphasis - "The Cat sat" / "cat"
    // -------------------------------------------------------------------------
    #[test]
    fn test_basic_case_insensitive_emphasis() {
        let segments = highlight("The Cat sat", "cat");
        assert_eq!(
            segments,
            vec![
                Segment::Plain("The ".to_string()),
                Segment::Emphasized("Cat".to_string()),
                Segment::Plain(" sat".to_string()),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 2: Concatenated segments round-trip the input exactly
    // -------------------------------------------------------------------------
    #[test]
    fn test_round_trip() {
        let cases = [
            ("The Cat sat on the CATALOG", "cat"),
            ("no occurrence here", "zzz"),
            ("catcatcat", "cat"),
            ("", "cat"),
            ("edge cat", "cat"),
        ];
        for (text, keyword) in cases {
            assert_eq!(joined(&highlight(text, keyword)), text, "case {text:?}/{keyword:?}");
        }
    }

    // -------------------------------------------------------------------------
    // Requirement 3: Empty keyword yields one plain segment, no looping
    // -------------------------------------------------------------------------
    #[test]
    fn test_empty_keyword_single_plain_segment() {
        let segments = highlight("anything at all", "");
        assert_eq!(segments, vec![Segment::Plain("anything at all".to_string())]);
    }

    // -------------------------------------------------------------------------
    // Requirement 4: Occurrences never overlap (greedy forward scan)
    // -------------------------------------------------------------------------
    #[test]
    fn test_non_overlapping_occurrences() {
        // "aaaa" with keyword "aa" consumes positions 0-2 and 2-4, not 1-3
        let segments = highlight("aaaa", "aa");
        assert_eq!(
            segments,
            vec![
                Segment::Emphasized("aa".to_string()),
                Segment::Emphasized("aa".to_string()),
            ]
        );
    }

    // -------------------------------------------------------------------------
    // Requirement 5: Original casing is preserved in emphasized runs
    // -------------------------------------------------------------------------
    #[test]
    fn test_original_casing_preserved() {
        let segments = highlight("CaT cAt CAT", "cat");
        let emphasized: Vec<&str> = segments
            .iter()
            .filter(|s| s.is_emphasized())
            .map(|s| s.text())
            .collect();
        assert_eq!(emphasized, vec!["CaT", "cAt", "CAT"]);
    }

    // -------------------------------------------------------------------------
    // Requirement 6: Adjacent occurrences emit no empty plain segments
    // -------------------------------------------------------------------------
    #[test]
    fn test_no_empty_segments() {
        let segments = highlight("catcat tail", "cat");
        assert!(segments.iter().all(|s| !s.text().is_empty()));
    }

    // -------------------------------------------------------------------------
    // Requirement 7: Excerpt clips both edges with ellipsis markers
    // -------------------------------------------------------------------------
    #[test]
    fn test_excerpt_clips_both_sides() {
        let text = format!("{}cat{}", "x".repeat(100), "y".repeat(100));
        let segments = highlight_excerpt(&text, "cat", 10);
        let joined = joined(&segments);
        assert_eq!(joined, format!("{}{}cat{}{}", ELLIPSIS, "x".repeat(10), "y".repeat(10), ELLIPSIS));
        assert!(segments.iter().any(|s| s.is_emphasized()));
    }

    // -------------------------------------------------------------------------
    // Requirement 8: Excerpt leaves short texts unclipped, no ellipsis
    // -------------------------------------------------------------------------
    #[test]
    fn test_excerpt_short_text_unclipped() {
        let segments = highlight_excerpt("tiny cat text", "cat", DEFAULT_EXCERPT_RADIUS);
        assert_eq!(joined(&segments), "tiny cat text");
    }

    // -------------------------------------------------------------------------
    // Requirement 9: Excerpt without an occurrence passes text through
    // -------------------------------------------------------------------------
    #[test]
    fn test_excerpt_no_match_passthrough() {
        let segments = highlight_excerpt("nothing relevant", "cat", 5);
        assert_eq!(segments, vec![Segment::Plain("nothing relevant".to_string())]);
    }

    // -------------------------------------------------------------------------
    // Requirement 10: Excerpt clipping respects multi-byte boundaries
    // -------------------------------------------------------------------------
    #[test]
    fn test_excerpt_multibyte_safe() {
        let text = format!("{}cat{}", "é".repeat(20), "漢".repeat(20));
        let segments = highlight_excerpt(&text, "cat", 4);
        let joined = joined(&segments);
        assert_eq!(joined, format!("{}{}cat{}{}", ELLIPSIS, "é".repeat(4), "漢".repeat(4), ELLIPSIS));
    }
}
