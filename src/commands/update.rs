use anyhow::{bail, Result};
use colored::*;

use crate::update::{update as do_update, SOURCE_REPO};

/// Run the update action - reinstall pixiu from its source repository
pub fn run() -> Result<()> {
    if which::which("git").is_err() {
        bail!("git command not found. The updater clones {}.", SOURCE_REPO);
    }
    if which::which("cargo").is_err() {
        bail!("cargo command not found. The updater reinstalls pixiu with it.");
    }

    println!("Updating pixiu from {}...", SOURCE_REPO.cyan());

    match do_update() {
        Ok(()) => {
            println!();
            println!(
                "{} pixiu updated to the latest published revision",
                "✓".green()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} Update failed: {}", "✗".red(), e);
            Err(e.into())
        }
    }
}
