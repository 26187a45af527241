use crate::reports;
use clap::Args;
use wordrank::analyzer::Analyzer;
use wordrank::config::Config;
use wordrank::error::{WordRankError, WrResult};

#[derive(Args, Debug, Clone)]
pub struct PhrasesArgs {
    #[command(flatten)]
    pub config: Config,

    /// Words per phrase window.
    #[arg(short = 'n', long = "ngram", default_value_t = 2)]
    pub n: usize,
}

pub fn run(args: PhrasesArgs, text: &str, json: bool) -> WrResult<()> {
    if args.n == 0 {
        return Err(WordRankError::Validation(
            "phrase window must be at least 1 word".to_string(),
        ));
    }

    let n = args.n;
    let analyzer = Analyzer::new(args.config);
    let ranked = analyzer.phrase_ranking(text, n);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    reports::print_ngram_report(n, &ranked);
    Ok(())
}
