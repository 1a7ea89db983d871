use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::classify::BucketCounts;
use crate::cli::Output;
use crate::config::DispatchgenConfig;
use crate::extract::{ExtractionReport, extract_handlers};

#[derive(Args)]
pub struct ExtractArgs {
    /// Implementation file containing the edit_* handlers
    #[arg(value_name = "IMPL")]
    pub input: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Body length above which a handler counts as custom
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Additional handler suffixes to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON format
    Json,
}

pub fn execute(args: ExtractArgs, config: &DispatchgenConfig, output: &Output) -> Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read file: {}", args.input.display()))?;

    let options = super::extract_options(args.threshold, &args.skip, config);
    let report = extract_handlers(&source, &options)?;

    match args.format {
        OutputFormat::Json => print_json_report(&report)?,
        OutputFormat::Text => print_text_report(&report, output),
    }

    Ok(())
}

fn print_json_report(report: &ExtractionReport) -> Result<()> {
    let json = serde_json::json!({
        "handlers": report.handlers,
        "rejected": report.rejected,
        "skipped": report.skipped,
        "counts": BucketCounts::tally(&report.handlers),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_text_report(report: &ExtractionReport, output: &Output) {
    let counts = BucketCounts::tally(&report.handlers);

    output.count("📊", "Handlers classified", report.handlers.len());
    output.summary_stats("Bool:", counts.bools);
    output.summary_stats("Int:", counts.ints);
    output.summary_stats("Float:", counts.floats);
    output.summary_stats("String:", counts.strings);
    output.summary_stats("List:", counts.lists);
    output.summary_stats("Custom:", counts.custom);

    for handler in &report.handlers {
        output.verbose(&format!(
            "edit_{}: {} (variable {}, default {}{})",
            handler.name,
            handler.kind,
            handler.variable,
            handler.default,
            if handler.is_custom { ", custom" } else { "" }
        ));
    }

    super::report_exclusions(report, output);
}
