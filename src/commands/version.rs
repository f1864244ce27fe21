use anyhow::Result;

/// Run the version action - display version and build information
pub fn run() -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");

    println!("{} v{}", name, version);
    println!();
    println!("Repository: {}", env!("CARGO_PKG_REPOSITORY"));
    println!("License: MIT");

    // Show build info if available
    if let Some(hash) = option_env!("PIXIU_BUILD_HASH") {
        println!("Build: {}", hash);
    }

    Ok(())
}
