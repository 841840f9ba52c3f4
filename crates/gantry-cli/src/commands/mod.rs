mod build;
mod catalog;
mod changelog;
mod clean;
mod deploy;
mod push;
mod release;
mod update_deps;
mod version;
mod watch;

use gantry_core::GantryConfig;

pub use build::build;
pub use catalog::show_catalog;
pub use changelog::changelog_action;
pub use clean::clean;
pub use deploy::deploy;
pub use push::push;
pub use release::{ReleaseArgs, release_action};
pub use update_deps::update_poetry_dependencies;
pub use version::version;
pub use watch::watch_actions;

/// An external tool (other than docker/gh) that exited unsuccessfully.
#[derive(Debug, thiserror::Error)]
#[error("{program} failed: {detail}")]
pub struct ToolFailure {
    pub program: &'static str,
    pub code: Option<i32>,
    pub detail: String,
}

/// Local image reference, `name:tag`.
pub(crate) fn local_image_ref(config: &GantryConfig) -> anyhow::Result<String> {
    let name = require_image_name(config)?;
    Ok(format!("{name}:{tag}", tag = config.image.tag))
}

/// Registry image reference, `registry/name:tag`.
pub(crate) fn remote_image_ref(config: &GantryConfig) -> anyhow::Result<String> {
    let name = require_image_name(config)?;
    let registry = require_registry(config)?;
    Ok(format!("{registry}/{name}:{tag}", tag = config.image.tag))
}

pub(crate) fn require_image_name(config: &GantryConfig) -> anyhow::Result<&str> {
    config
        .image
        .name
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("image name not set in gantry.toml — set [image].name"))
}

pub(crate) fn require_registry(config: &GantryConfig) -> anyhow::Result<&str> {
    config
        .image
        .registry
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("registry not set in gantry.toml — set [image].registry"))
}

#[cfg(test)]
pub(crate) mod test_support {
    use gantry_core::GantryConfig;
    use gantry_docker::{DockerError, DockerExecutor};
    use mockall::mock;

    mock! {
        pub DockerExec {}

        impl DockerExecutor for DockerExec {
            async fn exec(&self, args: &[String]) -> Result<String, DockerError>;
            async fn exec_streaming(&self, args: &[String]) -> Result<(), DockerError>;
        }
    }

    /// Config with image name/registry set and the version manifest pointed
    /// at `version_path`.
    pub fn pipeline_config(version_path: &std::path::Path) -> GantryConfig {
        let mut config = GantryConfig::default();
        config.image.name = Some("myapp".to_owned());
        config.image.registry = Some("ghcr.io/acme".to_owned());
        config.manifests.version = version_path.to_string_lossy().into_owned();
        config
    }
}
