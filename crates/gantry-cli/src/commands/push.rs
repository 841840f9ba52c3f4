use gantry_core::GantryConfig;
use gantry_docker::{DockerClient, DockerExecutor};
use std::path::Path;

/// Tag the local image for the registry and push it.
pub async fn push() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let client = DockerClient::new();
    run(&client, &config).await
}

pub(crate) async fn run<E: DockerExecutor>(
    client: &DockerClient<E>,
    config: &GantryConfig,
) -> anyhow::Result<()> {
    let local_ref = super::local_image_ref(config)?;
    let remote_ref = super::remote_image_ref(config)?;

    println!("Pushing {remote_ref}...");
    client.push_image(&local_ref, &remote_ref).await?;

    Ok(())
}
