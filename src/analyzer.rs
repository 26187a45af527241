// ===== wordrank/src/analyzer.rs =====
use crate::config::Config;
use crate::tokenizer::{filter_keywords, tokenize};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};
use tracing::debug;

/// Phrase window sizes covered by the full report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum PhraseSize {
    #[strum(serialize = "2-word")]
    TwoWord,
    #[strum(serialize = "3-word")]
    ThreeWord,
}

impl PhraseSize {
    pub fn window(self) -> usize {
        match self {
            Self::TwoWord => 2,
            Self::ThreeWord => 3,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FrequencyEntry {
    pub term: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
    pub chars_with_spaces: usize,
    pub total_words: usize,
    pub total_filtered_words: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Full ranked unigram list (presentation decides how many to show).
    pub keywords: Vec<FrequencyEntry>,
    pub two_word_phrases: Vec<FrequencyEntry>,
    pub three_word_phrases: Vec<FrequencyEntry>,
    pub stats: TextStats,
}

impl AnalysisReport {
    pub fn phrases(&self, size: PhraseSize) -> &[FrequencyEntry] {
        match size {
            PhraseSize::TwoWord => &self.two_word_phrases,
            PhraseSize::ThreeWord => &self.three_word_phrases,
        }
    }
}

/// Tallies terms and ranks them by count descending.
///
/// Equal counts are broken by first-occurrence index so the ordering is
/// reproducible run to run. Percentages are taken against the input
/// length; an empty input returns an empty ranking (no division).
pub fn rank(terms: &[String]) -> Vec<FrequencyEntry> {
    let total = terms.len();
    if total == 0 {
        return Vec::new();
    }

    let mut tally: HashMap<&str, (usize, usize)> = HashMap::new();
    for (idx, term) in terms.iter().enumerate() {
        let entry = tally.entry(term.as_str()).or_insert((0, idx));
        entry.0 += 1;
    }

    let mut entries: Vec<(&str, (usize, usize))> = tally.into_iter().collect();
    entries.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));

    entries
        .into_iter()
        .map(|(term, (count, _first))| FrequencyEntry {
            term: term.to_string(),
            count,
            percentage: (count as f64 / total as f64) * 100.0,
        })
        .collect()
}

/// All contiguous windows of `n` filtered tokens, joined by single spaces.
///
/// Windows run over the stream AFTER stop-word removal, so a phrase can
/// bridge source words that were separated only by stop words. That is
/// the intended grouping behavior, not an accident.
///
/// `n == 0` or `n > terms.len()` yields no windows.
pub fn ngrams(terms: &[String], n: usize) -> Vec<String> {
    if n == 0 || n > terms.len() {
        return Vec::new();
    }
    terms.windows(n).map(|w| w.join(" ")).collect()
}

/// Runs the full text → ranked-statistics pipeline for one configuration.
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let chars_with_spaces = text.chars().count();
        let tokens = tokenize(text);
        let total_words = tokens.len();
        let filtered = filter_keywords(tokens, self.config.analysis.min_word_len);

        let stats = TextStats {
            chars_with_spaces,
            total_words,
            total_filtered_words: filtered.len(),
        };
        debug!(
            "Pipeline: {} chars, {} words, {} after filtering",
            stats.chars_with_spaces, stats.total_words, stats.total_filtered_words
        );

        AnalysisReport {
            keywords: rank(&filtered),
            two_word_phrases: self.ranked_windows(&filtered, PhraseSize::TwoWord.window()),
            three_word_phrases: self.ranked_windows(&filtered, PhraseSize::ThreeWord.window()),
            stats,
        }
    }

    /// Ranked n-gram combinations for an arbitrary window size.
    pub fn phrase_ranking(&self, text: &str, n: usize) -> Vec<FrequencyEntry> {
        let filtered = filter_keywords(tokenize(text), self.config.analysis.min_word_len);
        self.ranked_windows(&filtered, n)
    }

    fn ranked_windows(&self, filtered: &[String], n: usize) -> Vec<FrequencyEntry> {
        let mut ranked = rank(&ngrams(filtered, n));
        ranked.truncate(self.config.report.top_phrases);
        ranked
    }
}
