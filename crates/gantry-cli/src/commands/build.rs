use chrono::{SecondsFormat, Utc};
use gantry_core::{GantryConfig, manifest};
use gantry_docker::{DockerClient, DockerExecutor};
use std::path::Path;

/// Build the container image, stamping BUILD_DATE and DOCKER_VERSION.
pub async fn build() -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let client = DockerClient::new();
    run(&client, &config).await
}

pub(crate) async fn run<E: DockerExecutor>(
    client: &DockerClient<E>,
    config: &GantryConfig,
) -> anyhow::Result<()> {
    let image_ref = super::local_image_ref(config)?;
    let version = manifest::read_version(Path::new(&config.manifests.version))?;
    let build_date = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

    println!("Building {image_ref} (version {version})...");
    client
        .build_image(&image_ref, &config.image.context, &build_date, &version)
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{MockDockerExec, pipeline_config};

    #[tokio::test]
    async fn build_passes_manifest_version_and_tagged_ref() {
        let tmp = tempfile::TempDir::new().unwrap();
        let version_path = tmp.path().join("VERSION");
        std::fs::write(&version_path, "9.9.9\n").unwrap();
        let config = pipeline_config(&version_path);

        let mut mock = MockDockerExec::new();
        mock.expect_exec_streaming()
            .withf(|args| {
                args.first() == Some(&"build".to_owned())
                    && args.contains(&"DOCKER_VERSION=9.9.9".to_owned())
                    && args.iter().any(|a| a.starts_with("BUILD_DATE="))
                    && args.contains(&"myapp:latest".to_owned())
                    && args.last() == Some(&".".to_owned())
            })
            .returning(|_| Ok(()));

        let client = DockerClient::with_executor(mock);
        run(&client, &config).await.unwrap();
    }

    #[tokio::test]
    async fn build_without_version_manifest_fails() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config = pipeline_config(&tmp.path().join("VERSION"));

        let client = DockerClient::with_executor(MockDockerExec::new());
        let err = run(&client, &config).await.unwrap_err();

        assert!(err.to_string().contains("VERSION"), "got: {err}");
    }
}
