mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Args, format_error};
use deckstats_core::{ReportStyle, Statistics, format_report, load_directory};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging (RUST_LOG overrides; stderr keeps the report clean)
    let default_filter = if args.verbose {
        "deckstats_cli=debug,deckstats_core=debug"
    } else {
        "deckstats_cli=warn,deckstats_core=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    println!("deckstats {}\n", env!("CARGO_PKG_VERSION"));

    match run(&args) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            print!("{}", format_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<String> {
    let config = args.resolve_config(Path::new("."))?;
    let classifier = config.classifier()?;

    info!("Reading match histories from {}", config.data_dir.display());
    let histories = load_directory(&config.data_dir, &config.extension)?;
    let stats = Statistics::from_histories(&histories, classifier, config.stats_options());

    let style = ReportStyle {
        colored: args.color,
    };
    Ok(format_report(&stats, style))
}
