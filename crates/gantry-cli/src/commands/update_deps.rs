use gantry_core::{GantryConfig, manifest};
use std::path::Path;
use std::process::Stdio;

use super::ToolFailure;

/// Re-add every dependency listed in the requirements manifest via poetry,
/// letting poetry resolve each to a current compatible version.
pub async fn update_poetry_dependencies() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let deps = manifest::read_requirements(Path::new(&config.manifests.requirements))?;

    if deps.is_empty() {
        println!("No dependencies listed in {}", config.manifests.requirements);
        return Ok(());
    }

    tracing::debug!(count = deps.len(), manifest = %config.manifests.requirements, "re-adding dependencies");

    for dep in &deps {
        println!("Adding {dep}...");
        exec_poetry(&["add", dep]).await?;
    }

    println!("Updated {} dependencies.", deps.len());
    Ok(())
}

/// Execute a poetry command, streaming output to the terminal.
async fn exec_poetry(poetry_args: &[&str]) -> anyhow::Result<()> {
    let status = tokio::process::Command::new("poetry")
        .args(poetry_args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| {
            anyhow::anyhow!("poetry CLI not found ({e}) — install: https://python-poetry.org")
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolFailure {
            program: "poetry",
            code: status.code(),
            detail: format!("poetry {} exited with {status}", poetry_args.join(" ")),
        }
        .into())
    }
}
