//! Flag dispatch - turn parsed command-line flags into actions.
//!
//! Flags are not mutually exclusive, so they run as a cascade with a fixed
//! priority rather than as subcommands:
//!
//! 1. `--version` and `--update` short-circuit; they never read the project
//!    configuration and ignore every other flag.
//! 2. `--init` scaffolds a fresh configuration; without it, the remaining
//!    actions load the existing one.
//! 3. `--install`, `--deploy` and `--info` then run against that
//!    configuration, in that order.
//!
//! `--deploy` is skipped when it shares an invocation with `--init`: a
//! freshly scaffolded configuration should be reviewed before anything is
//! deployed from it.

use anyhow::Result;
use colored::*;
use std::path::Path;

use crate::cli::Cli;
use crate::commands;
use crate::config::{ProjectConfig, CONFIG_FILE};

/// Interpret the parsed flags and run the selected actions in priority order.
pub fn run(cli: &Cli, project_dir: &Path) -> Result<()> {
    if cli.version {
        return commands::version::run();
    }

    if cli.update {
        return commands::update::run();
    }

    let config = match cli.init {
        Some(platform) => commands::init::run(project_dir, platform)?,
        None => ProjectConfig::load_required(project_dir)?,
    };

    if cli.install {
        commands::install::run(&config)?;
    }

    if let Some(environment) = cli.deploy.as_deref() {
        if cli.init.is_some() {
            println!(
                "{}",
                format!(
                    "Skipping deploy to '{}'; review {} first",
                    environment, CONFIG_FILE
                )
                .yellow()
            );
        } else {
            commands::deploy::run(&config, environment, project_dir)?;
        }
    }

    if cli.info {
        commands::info::run(&config)?;
    }

    Ok(())
}
