//! Topic extraction from answer text

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Topics kept per answer
pub const MAX_TOPICS: usize = 10;

const MIN_TOPIC_LEN: usize = 3;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did", "will",
    "would", "could", "should", "can", "may", "might", "this", "that", "these", "those",
];

static TOPIC_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[a-z][a-z0-9-]+\b").ok());

pub(crate) fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Up to [`MAX_TOPICS`] words of three or more characters, stop words
/// removed, ranked by frequency then length. Remaining ties keep first
/// occurrence order.
pub fn extract_topics(text: &str) -> Vec<String> {
    let Some(pattern) = TOPIC_WORD.as_ref() else {
        return Vec::new();
    };
    let lowered = text.to_lowercase();

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for word in pattern.find_iter(&lowered).map(|m| m.as_str()) {
        if word.chars().count() < MIN_TOPIC_LEN || is_stop_word(word) {
            continue;
        }
        let count = counts.entry(word).or_insert(0);
        if *count == 0 {
            order.push(word);
        }
        *count += 1;
    }

    order.sort_by(|a, b| {
        counts[b]
            .cmp(&counts[a])
            .then_with(|| b.chars().count().cmp(&a.chars().count()))
    });
    order
        .into_iter()
        .take(MAX_TOPICS)
        .map(str::to_string)
        .collect()
}
