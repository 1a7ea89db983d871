use anyhow::{Context, Result, bail};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::Output;
use crate::config::DispatchgenConfig;
use crate::strip::{AllowList, StripAction, StripOutcome, strip_decls, strip_impl};

#[derive(Args)]
pub struct StripImplArgs {
    /// Implementation file to strip
    #[arg(value_name = "IMPL")]
    pub input: PathBuf,

    /// Where to write the stripped file (must differ from the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Additional function names to preserve (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub preserve: Vec<String>,
}

#[derive(Args)]
pub struct StripDeclsArgs {
    /// Header file to strip
    #[arg(value_name = "HEADER")]
    pub input: PathBuf,

    /// Where to write the stripped file (must differ from the input)
    #[arg(short, long, value_name = "FILE")]
    pub output: PathBuf,

    /// Additional function names to preserve (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub preserve: Vec<String>,
}

pub fn execute_impl(args: StripImplArgs, config: &DispatchgenConfig, output: &Output) -> Result<()> {
    let source = load_input(&args.input, &args.output)?;
    let allow = build_allowlist(&args.preserve, config);

    let outcome = strip_impl(&source, &allow)?;
    report_outcome(&outcome, "Functions removed", output);

    std::fs::write(&args.output, &outcome.text)
        .with_context(|| format!("Failed to write file: {}", args.output.display()))?;
    output.success(&format!(
        "Stripped file written to: {}",
        args.output.display()
    ));

    Ok(())
}

pub fn execute_decls(
    args: StripDeclsArgs,
    config: &DispatchgenConfig,
    output: &Output,
) -> Result<()> {
    let source = load_input(&args.input, &args.output)?;
    let allow = build_allowlist(&args.preserve, config);

    let outcome = strip_decls(&source, &allow);
    report_outcome(&outcome, "Declarations removed", output);

    std::fs::write(&args.output, &outcome.text)
        .with_context(|| format!("Failed to write file: {}", args.output.display()))?;
    output.success(&format!(
        "Stripped file written to: {}",
        args.output.display()
    ));

    Ok(())
}

/// The cleaned file always goes to a distinct path; promoting it over the
/// original is a manual step.
fn load_input(input: &Path, output: &Path) -> Result<String> {
    if input == output {
        bail!(
            "output path must differ from the input path: {}",
            input.display()
        );
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))
}

fn build_allowlist(preserve: &[String], config: &DispatchgenConfig) -> AllowList {
    AllowList::with_extra(config.preserve.iter().chain(preserve.iter()).cloned())
}

fn report_outcome(outcome: &StripOutcome, label: &str, output: &Output) {
    for action in &outcome.log {
        match action {
            StripAction::Kept(name) => output.verbose(&format!("Keeping: {name}")),
            StripAction::Removed(name) => output.verbose(&format!("Removed: {name}")),
        }
    }
    output.count("🧹", label, outcome.removed);
}
