//! Footnote CLI
//!
//! Run with: cargo run -p footnote-cli -- resolve --input answer.json

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use footnote_core::{parse_answer_json, FootnoteConfig, LabelOptions, ParsedAnswer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "footnote")]
#[command(version, about = "Resolve [docN] citation markers in answer JSON into footnotes")]
struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved answer as JSON
    Resolve {
        /// Answer JSON file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Print one display label per resolved citation
    Labels {
        /// Answer JSON file (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Show file paths in full
        #[arg(long)]
        no_truncate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FootnoteConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FootnoteConfig::default(),
    };

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Resolve { input, pretty } => {
            let parsed = resolve_input(input.as_deref())?;
            let json = if pretty || config.output.pretty {
                serde_json::to_string_pretty(&parsed)?
            } else {
                serde_json::to_string(&parsed)?
            };
            writeln!(out, "{}", json)?;
        }
        Command::Labels { input, no_truncate } => {
            let parsed = resolve_input(input.as_deref())?;
            let mut options = config.labels.clone();
            if no_truncate {
                options.truncate = false;
            }
            for line in render_labels(&parsed, &options) {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}

fn resolve_input(input: Option<&Path>) -> Result<ParsedAnswer> {
    let raw = read_input(input)?;
    let parsed = parse_answer_json(&raw).context("Failed to resolve answer")?;
    tracing::info!("Resolved answer with {} citations", parsed.citations.len());
    Ok(parsed)
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// `"<footnote>. <label>"` for every resolved citation
fn render_labels(parsed: &ParsedAnswer, options: &LabelOptions) -> Vec<String> {
    parsed
        .citations
        .iter()
        .enumerate()
        .map(|(i, citation)| {
            let number = citation
                .reindex_id
                .clone()
                .unwrap_or_else(|| (i + 1).to_string());
            format!("{}. {}", number, citation.display_label(i + 1, options))
        })
        .collect()
}
