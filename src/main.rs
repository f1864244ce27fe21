use anyhow::{Context, Result};
use clap::Parser;

use pixiu::cli::Cli;
use pixiu::dispatch;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let project_dir =
        std::env::current_dir().context("Failed to determine the working directory")?;

    dispatch::run(&cli, &project_dir)
}
