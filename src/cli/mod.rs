//! Command-line interface for dispatchgen
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing and keeps each command in its own
//! module.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

/// dispatchgen - Consolidate handwritten config parameter handlers
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract and classify handlers from an implementation file
    Extract(commands::extract::ExtractArgs),
    /// Generate the consolidated dispatch function
    Generate(commands::generate::GenerateArgs),
    /// Remove redundant handler bodies from an implementation file
    StripImpl(commands::strip::StripImplArgs),
    /// Remove redundant handler declarations from a header file
    StripDecls(commands::strip::StripDeclsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = Output::new(self.verbose, self.quiet);
        let config = crate::config::DispatchgenConfig::load(self.config.as_deref())?;

        match self.command {
            Some(Commands::Extract(args)) => commands::extract::execute(args, &config, &output),
            Some(Commands::Generate(args)) => commands::generate::execute(args, &config, &output),
            Some(Commands::StripImpl(args)) => {
                commands::strip::execute_impl(args, &config, &output)
            }
            Some(Commands::StripDecls(args)) => {
                commands::strip::execute_decls(args, &config, &output)
            }
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
