//! String utilities for the domain layer.
//!
//! Keyword matching here is plain substring containment on lower-cased
//! text: `"data"` matches inside `"database"`. Scores derived from these
//! helpers depend on that, so do not switch to word-boundary matching.

/// Lower-case text once for repeated keyword checks.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Count how many keywords occur (as substrings) in already lower-cased text.
///
/// Each keyword counts at most once no matter how often it appears.
pub fn count_matches(lowered: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| lowered.contains(*k)).count()
}

/// Returns `true` if any keyword occurs in already lower-cased text.
pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| lowered.contains(k))
}

/// Fraction of keywords present in the text, in `[0, 1]`.
///
/// An empty keyword list scores `0.0`.
pub fn match_ratio(lowered: &str, keywords: &[&str]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    count_matches(lowered, keywords) as f64 / keywords.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_substring_semantics() {
        let text = normalize("Loading the DATABASE");
        assert_eq!(count_matches(&text, &["data", "base", "load"]), 3);
    }

    #[test]
    fn test_count_matches_counts_each_keyword_once() {
        assert_eq!(count_matches("data data data", &["data"]), 1);
    }

    #[test]
    fn test_contains_any() {
        assert!(contains_any("please compare them", &["versus", "compare"]));
        assert!(!contains_any("nothing here", &["versus", "compare"]));
    }

    #[test]
    fn test_match_ratio() {
        assert_eq!(match_ratio("a b", &["a", "b", "c", "d"]), 0.5);
        assert_eq!(match_ratio("anything", &[]), 0.0);
    }
}
