//! Triage CLI
//!
//! Runs the department classifier over single descriptions or whole report
//! exports, and prints the active keyword table.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use triage_cli::cli::{Cli, Commands};
use triage_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    triage_reports::metrics::describe();

    let classifier = commands::build_classifier(cli.config.as_deref(), cli.strategy.map(Into::into))?;
    info!(
        version = %classifier.table().version(),
        strategy = ?classifier.strategy(),
        "Classifier ready"
    );

    match cli.command {
        Commands::Classify { text, scores } => {
            print!("{}", commands::classify(&classifier, &text.join(" "), scores));
        }

        Commands::Triage { input, output } => {
            let reports_json = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;

            let (json, summary) = commands::triage(Arc::new(classifier), &reports_json).await?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Wrote updated reports");
                }
                None => println!("{}", json),
            }

            info!(
                scanned = summary.scanned,
                assigned = summary.assigned,
                unmatched = summary.unmatched,
                already_assigned = summary.already_assigned,
                failed = summary.failed,
                unread = summary.unread,
                "Triage complete"
            );
        }

        Commands::Keywords => {
            print!("{}", commands::keywords(&classifier)?);
        }
    }

    Ok(())
}

/// Initialize tracing/logging on stderr so command output stays clean
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("triage=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("triage=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
