use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linguistic_fingerprint::{render_text, summary_line, CreatorReport, Transcript};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Parser)]
#[command(
    name = "linguistic-fingerprint",
    about = "Measure the linguistic fingerprint of creator transcripts",
    version
)]
struct Cli {
    /// Transcript files to analyze (reads stdin if none provided)
    files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log a one-line summary per creator once all files are analyzed
    #[arg(long)]
    summary: bool,
}

fn emit(report: &CreatorReport, cli: &Cli) -> Result<()> {
    match cli.format {
        Format::Json => println!("{}", report.to_json(!cli.compact)?),
        Format::Text => println!("{}", render_text(report)),
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("linguistic_fingerprint=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut reports = Vec::new();

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        let report = Transcript::new("stdin", input).analyze();
        emit(&report, &cli)?;
        reports.push(report);
    } else {
        for path in &cli.files {
            let transcript = Transcript::load(path)
                .with_context(|| format!("Error analyzing {}", path.display()))?;
            info!(creator = %transcript.creator, "analyzing");
            let report = transcript.analyze();
            emit(&report, &cli)?;
            reports.push(report);
        }
    }

    if cli.summary {
        info!(creators = reports.len(), "linguistic analysis complete");
        // Requested output, so it bypasses the log filter.
        for report in &reports {
            eprintln!("{}", summary_line(report));
        }
    }
    Ok(())
}
