use anyhow::Result;

use crate::config::ProjectConfig;

/// Run the info action.
///
/// Accepted but not implemented yet; prints nothing.
pub fn run(_config: &ProjectConfig) -> Result<()> {
    // TODO: report per-environment deployment status
    Ok(())
}
