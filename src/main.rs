use anyhow::Result;
use clap::Parser;
use settled::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
