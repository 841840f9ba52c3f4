use gantry_core::GantryConfig;
use gantry_docker::{DockerClient, DockerExecutor};
use std::path::Path;

/// Run the full pipeline: clean, then build, then push.
pub async fn deploy() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let client = DockerClient::new();
    run(&client, &config).await
}

/// clean's failure suppression never masks a build or push failure; either
/// of those aborts the remainder of the sequence.
pub(crate) async fn run<E: DockerExecutor>(
    client: &DockerClient<E>,
    config: &GantryConfig,
) -> anyhow::Result<()> {
    super::clean::run(client, config).await?;
    super::build::run(client, config).await?;
    super::push::run(client, config).await?;

    println!("Deploy complete.");
    Ok(())
}
