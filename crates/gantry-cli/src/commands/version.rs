use gantry_core::{GantryConfig, manifest};
use std::path::Path;

/// Print the version string from the version manifest.
pub fn version() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let version = manifest::read_version(Path::new(&config.manifests.version))?;

    println!("{version}");
    Ok(())
}
