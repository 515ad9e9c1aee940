//! CLI module containing the main entry point logic.
//!
//! This module is separated from main.rs so the flag handling is testable
//! and the binary stays a one-liner.

use crate::folder::{self, FoldOptions};
use crate::report::FoldReport;
use crate::source;
use clap::Parser as ClapParser;
use std::path::PathBuf;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the dbfold tool.
#[derive(ClapParser)]
#[command(name = "dbfold")]
#[command(version = PKG_VERSION)]
#[command(about = "Collapse multi-line database records onto single lines", long_about = None)]
struct Cli {
    /// Source file containing the database block to fold
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Print the folded text to stdout instead of rewriting the file
    #[arg(long)]
    stdout: bool,

    /// Do not write; exit 1 if the file would change
    #[arg(long)]
    check: bool,

    /// Text that opens the database region (substring match)
    #[arg(long, value_name = "TEXT", default_value = folder::DEFAULT_START_MARKER)]
    start_marker: String,

    /// Trimmed line that closes the database region
    #[arg(long, value_name = "TEXT", default_value = folder::DEFAULT_END_MARKER)]
    end_marker: String,

    /// Output format for the run summary (stream, json)
    #[arg(long, value_name = "FORMAT", default_value = "stream")]
    output_format: OutputFormatArg,
}

/// Output format for the run summary
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable messages (default)
    Stream,
    /// Serialized fold report
    Json,
}

impl OutputFormatArg {
    /// Format a fold report according to this format.
    /// Returns None for Stream mode (the caller prints plain messages).
    #[must_use]
    pub fn format_report(self, report: &FoldReport) -> Option<String> {
        match self {
            Self::Stream => None,
            Self::Json => Some(report.to_json()),
        }
    }
}

/// Main CLI logic.
pub fn run_cli() {
    let cli = Cli::parse();

    let options = FoldOptions {
        start_marker: cli.start_marker,
        end_marker: cli.end_marker,
    };

    let input = source::read_or_exit(&cli.file);
    let outcome = folder::fold_text(&input, &options);
    let changed = outcome.text != input;

    let file_label = cli.file.display().to_string();
    let report = FoldReport::from_outcome(&file_label, &outcome, changed);

    // --check: report only, exit code carries the verdict.
    if cli.check {
        match cli.output_format.format_report(&report) {
            Some(formatted) => println!("{formatted}"),
            None if changed => println!("{file_label}: would change"),
            None => println!("{file_label}: up to date"),
        }
        if changed {
            std::process::exit(1);
        }
        return;
    }

    // --stdout: the folded text owns stdout; a JSON report still goes to
    // stderr when requested.
    if cli.stdout {
        print!("{}", outcome.text);
        if let Some(formatted) = cli.output_format.format_report(&report) {
            eprintln!("{formatted}");
        }
        return;
    }

    // Default: rewrite the file in place, but only touch it on changes.
    if changed {
        source::rewrite_or_exit(&cli.file, &outcome.text);
    }
    match cli.output_format.format_report(&report) {
        Some(formatted) => println!("{formatted}"),
        None => println!("{}", report.summary),
    }
}
