use anyhow::Result;
use clap::Parser;

use dispatchgen::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
