use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::Output;
use crate::config::DispatchgenConfig;
use crate::extract::extract_handlers;
use crate::generate::generate_dispatch;

#[derive(Args)]
pub struct GenerateArgs {
    /// Implementation file containing the edit_* handlers
    #[arg(value_name = "IMPL")]
    pub input: PathBuf,

    /// Where to write the generated dispatch function
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Body length above which a handler counts as custom
    #[arg(long)]
    pub threshold: Option<usize>,

    /// Additional handler suffixes to skip (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,
}

pub fn execute(args: GenerateArgs, config: &DispatchgenConfig, output: &Output) -> Result<()> {
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read file: {}", args.input.display()))?;

    output.info("Extracting handler metadata...");
    let options = super::extract_options(args.threshold, &args.skip, config);
    let report = extract_handlers(&source, &options)?;
    output.count("📊", "Handlers found", report.handlers.len());
    super::report_exclusions(&report, output);

    let generated = generate_dispatch(&report.handlers);
    output.summary_stats("Bool:", generated.counts.bools);
    output.summary_stats("Int:", generated.counts.ints);
    output.summary_stats("Float:", generated.counts.floats);
    output.summary_stats("String:", generated.counts.strings);
    output.summary_stats("List:", generated.counts.lists);
    output.summary_stats("Custom:", generated.counts.custom);

    std::fs::write(&args.output, format!("{}\n", generated.text))
        .with_context(|| format!("Failed to write file: {}", args.output.display()))?;
    output.success(&format!(
        "Dispatch function written to: {}",
        args.output.display()
    ));

    Ok(())
}
