use wordrank::analyzer::{ngrams, rank, Analyzer, PhraseSize};
use wordrank::config::Config;

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn default_analyzer() -> Analyzer {
    Analyzer::new(Config::default())
}

#[test]
fn test_worked_example() {
    let text = "The quick brown fox jumps over the lazy dog. The dog barks.";
    let report = default_analyzer().analyze(text);

    assert_eq!(report.stats.chars_with_spaces, text.chars().count());
    assert_eq!(report.stats.total_words, 12);
    assert_eq!(report.stats.total_filtered_words, 8);

    // "the" and "over" are stop words; "dog" appears twice out of 8.
    assert_eq!(report.keywords.len(), 7);
    assert_eq!(report.keywords[0].term, "dog");
    assert_eq!(report.keywords[0].count, 2);
    assert!((report.keywords[0].percentage - 25.0).abs() < 1e-9);
}

#[test]
fn test_percentage_split() {
    let report = default_analyzer().analyze("testing testing analysis testing");

    let testing = report.keywords.iter().find(|e| e.term == "testing").unwrap();
    let analysis = report
        .keywords
        .iter()
        .find(|e| e.term == "analysis")
        .unwrap();

    assert_eq!(testing.count, 3);
    assert!((testing.percentage - 75.0).abs() < 1e-9);
    assert_eq!(analysis.count, 1);
    assert!((analysis.percentage - 25.0).abs() < 1e-9);
}

#[test]
fn test_rank_sorts_by_count_descending() {
    let report = default_analyzer().analyze("apple banana apple cherry apple banana");

    let terms: Vec<&str> = report.keywords.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["apple", "banana", "cherry"]);
    assert_eq!(report.keywords[0].count, 3);
    assert_eq!(report.keywords[1].count, 2);
    assert_eq!(report.keywords[2].count, 1);
}

#[test]
fn test_rank_ties_break_by_first_occurrence() {
    let tokens = owned(&["delta", "alpha", "delta", "alpha", "charlie"]);
    let ranked = rank(&tokens);

    let terms: Vec<&str> = ranked.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["delta", "alpha", "charlie"]);
}

#[test]
fn test_empty_input() {
    let report = default_analyzer().analyze("");

    assert_eq!(report.stats.chars_with_spaces, 0);
    assert_eq!(report.stats.total_words, 0);
    assert_eq!(report.stats.total_filtered_words, 0);
    assert!(report.keywords.is_empty());
    assert!(report.two_word_phrases.is_empty());
    assert!(report.three_word_phrases.is_empty());
}

#[test]
fn test_stop_words_only() {
    let report = default_analyzer().analyze("the and but or if");

    assert_eq!(report.stats.total_words, 5);
    assert_eq!(report.stats.total_filtered_words, 0);
    assert!(report.keywords.is_empty());
}

#[test]
fn test_rank_of_empty_slice_is_empty() {
    assert!(rank(&[]).is_empty());
}

#[test]
fn test_ngram_window_counts() {
    let tokens = owned(&["alpha", "beta", "gamma", "delta"]);

    assert_eq!(ngrams(&tokens, 2).len(), 3);
    assert_eq!(ngrams(&tokens, 3).len(), 2);
    assert_eq!(ngrams(&tokens, 4).len(), 1);
    assert_eq!(ngrams(&tokens, 5).len(), 0);
    assert_eq!(ngrams(&tokens, 0).len(), 0);
}

#[test]
fn test_ngrams_join_with_single_space() {
    let tokens = owned(&["seo", "keyword", "analysis"]);
    assert_eq!(
        ngrams(&tokens, 2),
        owned(&["seo keyword", "keyword analysis"])
    );
}

#[test]
fn test_phrase_counts() {
    let report = default_analyzer().analyze("seo keyword analysis seo keyword");

    let top = &report.two_word_phrases[0];
    assert_eq!(top.term, "seo keyword");
    assert_eq!(top.count, 2);

    assert_eq!(report.phrases(PhraseSize::TwoWord), &report.two_word_phrases[..]);
}

#[test]
fn test_phrases_bridge_removed_stop_words() {
    // "of" is filtered out before windows are built, so the two survivors
    // form one phrase even though they were not adjacent in the source.
    let report = default_analyzer().analyze("speed of light");

    assert_eq!(report.two_word_phrases.len(), 1);
    assert_eq!(report.two_word_phrases[0].term, "speed light");
}

#[test]
fn test_phrase_lists_truncate_to_top_ten() {
    let text = "alpha bravo charlie delta echo foxtrot golf hotel india \
                juliet kilo lima mike november oscar papa";
    let report = default_analyzer().analyze(text);

    // 16 unique words produce 15 unique windows; only 10 survive.
    assert_eq!(report.stats.total_filtered_words, 16);
    assert_eq!(report.two_word_phrases.len(), 10);
}

#[test]
fn test_keywords_are_not_padded() {
    // Five unique words, default display budget of 20: the ranking holds
    // exactly five entries.
    let report = default_analyzer().analyze("zebra mango apple grape peach");
    assert_eq!(report.keywords.len(), 5);
}

#[test]
fn test_min_word_len_is_configurable() {
    let mut config = Config::default();
    config.analysis.min_word_len = 4;
    let report = Analyzer::new(config).analyze("dog dogs barking dog");

    let terms: Vec<&str> = report.keywords.iter().map(|e| e.term.as_str()).collect();
    assert_eq!(terms, vec!["dogs", "barking"]);
}

#[test]
fn test_phrase_ranking_arbitrary_window() {
    let analyzer = default_analyzer();
    let ranked = analyzer.phrase_ranking("seo keyword analysis tool seo keyword analysis", 3);

    assert_eq!(ranked[0].term, "seo keyword analysis");
    assert_eq!(ranked[0].count, 2);
}

#[test]
fn test_report_serializes_camel_case() {
    let report = default_analyzer().analyze("testing analysis testing");
    let value = serde_json::to_value(&report).unwrap();

    assert!(value.get("twoWordPhrases").is_some());
    assert!(value["stats"].get("totalFilteredWords").is_some());
    assert_eq!(value["keywords"][0]["term"], "testing");
}
