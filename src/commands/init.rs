use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::config::{Platform, ProjectConfig, CONFIG_FILE};

/// Run the init action - scaffold a project configuration for a platform
pub fn run(project_dir: &Path, platform: Platform) -> Result<ProjectConfig> {
    println!("Scaffolding a {} project...", platform.name());

    if ProjectConfig::path_in(project_dir).exists() {
        println!("Replacing existing {}", CONFIG_FILE);
    }

    let config = ProjectConfig::bootstrap(platform, project_dir);
    config.save(project_dir)?;

    println!("Initialized {} in {}", config.name().cyan(), CONFIG_FILE);
    println!();
    println!("Next steps:");
    println!("  1. Review {} and adjust the database profiles", CONFIG_FILE);
    println!("  2. Run {} to fetch dependencies", "pixiu --install".cyan());
    println!(
        "  3. Run {} to deploy locally",
        "pixiu --deploy test_localhost".cyan()
    );

    Ok(config)
}
