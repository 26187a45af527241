use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub analysis: AnalysisParams,
    #[command(flatten)]
    pub report: ReportParams,
}

#[derive(Args, Debug, Clone)]
pub struct AnalysisParams {
    /// Tokens shorter than this survive neither the keyword nor the
    /// phrase pipeline (stop words are removed independently).
    #[arg(long, default_value_t = 3)]
    pub min_word_len: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ReportParams {
    /// Entries shown in the "Top Keywords" section.
    #[arg(long, default_value_t = 20)]
    pub top_keywords: usize,
    /// Entries kept per phrase-combination ranking.
    #[arg(long, default_value_t = 10)]
    pub top_phrases: usize,
}

// Defaults must match the clap default_value_t values above; tests and
// library callers construct Config without going through the CLI.
impl Default for AnalysisParams {
    fn default() -> Self {
        Self { min_word_len: 3 }
    }
}

impl Default for ReportParams {
    fn default() -> Self {
        Self {
            top_keywords: 20,
            top_phrases: 10,
        }
    }
}
