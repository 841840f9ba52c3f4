use serde::{Deserialize, Serialize};

/// gantry.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GantryConfig {
    #[serde(default)]
    pub image: ImageConfig,
    #[serde(default)]
    pub workflows: WorkflowsConfig,
    #[serde(default)]
    pub manifests: ManifestsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageConfig {
    /// Local image name. Commands that touch the image refuse to run
    /// without it.
    pub name: Option<String>,
    /// Image tag
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Registry path the image is pushed under, e.g. "ghcr.io/acme"
    pub registry: Option<String>,
    /// docker build context directory
    #[serde(default = "default_context")]
    pub context: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowsConfig {
    /// Workflow file triggered by changelog-action
    #[serde(default = "default_changelog_workflow")]
    pub changelog: String,
    /// Workflow file triggered by release-action
    #[serde(default = "default_release_workflow")]
    pub release: String,
    /// Git ref used for workflow dispatch when none is supplied
    #[serde(default = "default_ref")]
    pub default_ref: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestsConfig {
    /// File holding the current image version string
    #[serde(default = "default_version_manifest")]
    pub version: String,
    /// Dependency list consumed by update-poetry-dependencies
    #[serde(default = "default_requirements_manifest")]
    pub requirements: String,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            name: None,
            tag: default_tag(),
            registry: None,
            context: default_context(),
        }
    }
}

impl Default for WorkflowsConfig {
    fn default() -> Self {
        Self {
            changelog: default_changelog_workflow(),
            release: default_release_workflow(),
            default_ref: default_ref(),
        }
    }
}

impl Default for ManifestsConfig {
    fn default() -> Self {
        Self {
            version: default_version_manifest(),
            requirements: default_requirements_manifest(),
        }
    }
}

impl GantryConfig {
    /// Load from gantry.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("gantry.toml");
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_tag() -> String {
    "latest".to_owned()
}

fn default_context() -> String {
    ".".to_owned()
}

fn default_changelog_workflow() -> String {
    "changelog.yml".to_owned()
}

fn default_release_workflow() -> String {
    "release.yml".to_owned()
}

fn default_ref() -> String {
    "dev".to_owned()
}

fn default_version_manifest() -> String {
    "VERSION".to_owned()
}

fn default_requirements_manifest() -> String {
    "requirements.txt".to_owned()
}
