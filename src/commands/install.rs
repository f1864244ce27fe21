use anyhow::Result;
use colored::*;

use crate::config::ProjectConfig;

/// Run the install action - resolve the project's dependencies
pub fn run(config: &ProjectConfig) -> Result<()> {
    println!(
        "Installing dependencies for {} with {}...",
        config.name().cyan(),
        config.project.platform.installer()
    );

    Ok(())
}
