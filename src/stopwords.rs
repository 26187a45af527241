use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English words excluded from keyword statistics.
///
/// Data, not logic: the list targets SEO noise (articles, pronouns,
/// auxiliaries, number words) and is already lowercase.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he",
    "in", "is", "it", "its", "of", "on", "that", "the", "to", "was", "will",
    "with", "this", "but", "they", "have", "had", "what", "when", "where", "who",
    "which", "why", "how", "all", "each", "every", "both", "few", "more", "most",
    "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so",
    "than", "too", "very", "s", "t", "can", "just", "don", "should",
    "now", "or", "any", "if", "about", "into", "through", "during", "before",
    "after", "above", "below", "up", "down", "out", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "one", "two", "three",
    "would", "could", "also", "much", "many", "may", "do", "does", "did", "been",
    "being", "i", "you", "we", "our", "your",
];

fn stop_word_set() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// Membership test against the static set. Callers pass already-lowercased
/// tokens; the set itself is never mutated at runtime.
pub fn is_stop_word(word: &str) -> bool {
    stop_word_set().contains(word)
}
