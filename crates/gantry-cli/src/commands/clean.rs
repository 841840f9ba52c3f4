use gantry_core::GantryConfig;
use gantry_docker::{DockerClient, DockerExecutor};
use std::path::Path;

/// Remove the local image. Tool failures are suppressed: an image that is
/// already absent must not fail the pipeline.
pub async fn clean() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let client = DockerClient::new();
    run(&client, &config).await
}

pub(crate) async fn run<E: DockerExecutor>(
    client: &DockerClient<E>,
    config: &GantryConfig,
) -> anyhow::Result<()> {
    let image_ref = super::local_image_ref(config)?;

    match client.remove_image(&image_ref).await {
        Ok(()) => println!("Removed {image_ref}"),
        Err(e) => println!("Skipped removing {image_ref} ({e})"),
    }

    Ok(())
}
