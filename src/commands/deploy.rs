use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::ProjectConfig;

/// Run the deploy action - push the project to a configured environment.
///
/// The environment must already exist in the configuration's deployment
/// table; deploying also persists the configuration so the file on disk
/// reflects exactly what was deployed.
pub fn run(config: &ProjectConfig, environment: &str, project_dir: &Path) -> Result<()> {
    let target = config.deployment(environment)?;

    println!(
        "Deploying {} to {} (database profile: {})...",
        config.name().cyan(),
        environment.cyan(),
        target.database
    );

    config.save(project_dir)?;

    println!(
        "{} {} deployed to {}",
        "✓".green(),
        config.name(),
        environment
    );

    Ok(())
}
