use crate::stopwords::is_stop_word;

/// Splits text into lowercase alphabetic tokens.
///
/// The whole input is lowercased first, then scanned for maximal runs of
/// ASCII letters. Everything else (digits, punctuation, underscores,
/// non-ASCII) acts purely as a separator and is dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lowered.chars() {
        if c.is_ascii_lowercase() {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Drops stop words and tokens shorter than `min_len`, preserving the
/// relative order of survivors. Idempotent.
pub fn filter_keywords(tokens: Vec<String>, min_len: usize) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| t.len() >= min_len && !is_stop_word(t))
        .collect()
}
