use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Build `image_ref` from `context`, stamping the build date and image
    /// version as build arguments.
    pub async fn build_image(
        &self,
        image_ref: &str,
        context: &str,
        build_date: &str,
        version: &str,
    ) -> Result<(), DockerError> {
        tracing::debug!(image = %image_ref, context = %context, "building image");

        let build_date_arg = format!("BUILD_DATE={build_date}");
        let version_arg = format!("DOCKER_VERSION={version}");
        self.executor
            .exec_streaming(&args([
                "build",
                "--build-arg",
                &build_date_arg,
                "--build-arg",
                &version_arg,
                "-t",
                image_ref,
                context,
            ]))
            .await
    }

    /// Tag `local_ref` as `remote_ref` and push it.
    pub async fn push_image(&self, local_ref: &str, remote_ref: &str) -> Result<(), DockerError> {
        tracing::debug!(local = %local_ref, remote = %remote_ref, "pushing image");

        self.executor
            .exec(&args(["tag", local_ref, remote_ref]))
            .await?;
        self.executor
            .exec_streaming(&args(["push", remote_ref]))
            .await
    }

    /// Remove a local image by reference.
    pub async fn remove_image(&self, image_ref: &str) -> Result<(), DockerError> {
        tracing::debug!(image = %image_ref, "removing image");

        self.executor.exec(&args(["rmi", image_ref])).await?;
        Ok(())
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
