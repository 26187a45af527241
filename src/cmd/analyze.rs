use crate::reports;
use clap::Args;
use strum::IntoEnumIterator;
use tracing::warn;
use wordrank::analyzer::{Analyzer, PhraseSize};
use wordrank::config::Config;
use wordrank::error::WrResult;

#[derive(Args, Debug, Clone, Default)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: AnalyzeArgs, text: &str, json: bool) -> WrResult<()> {
    let top_keywords = args.config.report.top_keywords;
    let analyzer = Analyzer::new(args.config);
    let report = analyzer.analyze(text);

    if report.stats.total_filtered_words == 0 {
        warn!("⚠️  No meaningful words left after stop-word filtering.");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_stats_summary(&report.stats);
    reports::print_keyword_report(&report.keywords);
    reports::print_top_keywords(&report.keywords, top_keywords);
    for size in PhraseSize::iter() {
        reports::print_phrase_report(size, report.phrases(size));
    }

    Ok(())
}
