use clap::Parser;

use crate::config::Platform;

#[derive(Parser)]
#[command(name = "pixiu")]
#[command(about = "A company CLI for dependency management and deployment")]
#[command(long_about = "Pixiu scaffolds a project configuration (pixiu.toml), installs the \
project's dependencies, deploys it to configured environments, and keeps itself up to date \
from its published source repository.")]
pub struct Cli {
    /// Scaffold a project configuration for the given platform
    #[arg(long, value_enum, value_name = "PLATFORM")]
    pub init: Option<Platform>,

    /// Install the project's dependencies
    #[arg(long)]
    pub install: bool,

    /// Deploy the project to a configured environment
    #[arg(long, value_name = "ENVIRONMENT")]
    pub deploy: Option<String>,

    /// Show project and deployment details
    #[arg(long)]
    pub info: bool,

    /// Update pixiu itself from its published source
    #[arg(long)]
    pub update: bool,

    /// Print version information
    #[arg(long)]
    pub version: bool,
}
