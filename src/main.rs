//! Jumu - Arabic plural classification from the command line
//!
//! Validates the input locally and sends the surviving words to the
//! classification service.

use anyhow::Result;
use clap::Parser;
use jumu::config::Config;
use jumu::core::{normalize, HttpClassifier};
use jumu::display::{progress_bar, DisplayCell};
use jumu::i18n::{self, tr, Lang};
use jumu::session::{ClassificationSession, DisplayState, SubmitOutcome};
use std::io::Read;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};

/// Sample input: one word of each plural class
const EXAMPLE_INPUT: &str = "كتب، مهندسات، لاعبون";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Comma-separated plural words (read from stdin if omitted)
    input: Option<String>,

    /// Classify a ready-made example
    #[arg(long, conflicts_with = "input")]
    example: bool,

    /// Classification service base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Message language
    #[arg(long, value_enum)]
    lang: Option<Lang>,

    /// Print the service response as JSON
    #[arg(long)]
    json: bool,

    /// Only validate the input, never contact the service
    #[arg(long)]
    check: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Setup logging before config so load warnings are visible
    let log = jumu::logging::init(args.verbose);
    let mut config = Config::load()?;
    if !args.verbose {
        log.apply_level(&config.log_level);
    }

    if let Some(base) = args.api_base {
        config.api_base = base;
    }
    config.validate()?;

    let lang = args.lang.unwrap_or(config.ui_language);
    i18n::set_language(lang);

    let raw = match (args.example, args.input) {
        (true, _) => EXAMPLE_INPUT.to_string(),
        (false, Some(input)) => input,
        (false, None) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    debug!("Raw input: '{}'", raw);

    if args.check {
        return Ok(match normalize(&raw) {
            Ok(words) => {
                for word in words {
                    println!("{}", word);
                }
                ExitCode::SUCCESS
            }
            Err(rejection) => {
                eprintln!("{}", rejection.message(lang));
                ExitCode::FAILURE
            }
        });
    }

    info!("🧠 Jumu v{} using {}", env!("CARGO_PKG_VERSION"), config.api_base);
    let session = ClassificationSession::new(Arc::new(HttpClassifier::from_config(&config)));

    eprintln!("{}", tr("status.loading"));
    let outcome = session.submit(&raw).await?;
    let state = session.display()?;

    match outcome {
        SubmitOutcome::Displayed => {
            if args.json {
                let envelope = jumu::core::ResponseEnvelope {
                    results: state.results,
                    notice: state.notice,
                };
                println!("{}", serde_json::to_string_pretty(&envelope)?);
            } else {
                print_results(&state);
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            if let Some(alert) = state.alert {
                eprintln!("{}", alert.message(lang));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_results(state: &DisplayState) {
    println!("{}", tr("results.title"));

    if let Some(ref notice) = state.notice {
        println!("⚠️ {}", notice);
    }

    println!(
        "{:<16} {:<20} {}",
        tr("column.word"),
        tr("column.label"),
        tr("column.confidence")
    );
    for row in state.rows() {
        match row.cell {
            DisplayCell::Classified {
                label,
                confidence_text,
                bar_percent,
            } => {
                let label_text = match label.glyph() {
                    Some(glyph) => format!("{} {}", glyph, label.display_name()),
                    None => label.display_name(),
                };
                println!(
                    "{:<16} {:<20} {:>7} {}",
                    row.word,
                    label_text,
                    confidence_text,
                    progress_bar(bar_percent, 20)
                );
            }
            DisplayCell::Error { message } => {
                println!("{:<16} {:<20} {}", row.word, message, tr("cell.unavailable"));
            }
        }
    }
}
