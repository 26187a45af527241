// ===== wordrank/src/main.rs =====
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, info};
use wordrank::input;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(global = true, short, long, default_value = "text.txt")]
    input: String,

    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Phrases(cmd::phrases::PhrasesArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so --json output stays machine-readable.
    if cli.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .init();
    }

    info!("🚀 Initializing WordRank...");

    info!("📂 Loading Text: {}", cli.input);
    let text = input::read_text(&cli.input).unwrap_or_else(|e| {
        error!("❌ Failed to read '{}': {}", cli.input, e);
        process::exit(1);
    });

    let result = match cli.command {
        Some(Commands::Phrases(args)) => cmd::phrases::run(args, &text, cli.json),
        Some(Commands::Analyze(args)) => cmd::analyze::run(args, &text, cli.json),
        // Bare invocation runs the full report with defaults.
        None => cmd::analyze::run(cmd::analyze::AnalyzeArgs::default(), &text, cli.json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
