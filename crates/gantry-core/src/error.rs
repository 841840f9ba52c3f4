use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to read version manifest {path}")]
    VersionManifest {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read requirements manifest {path}")]
    RequirementsManifest {
        path: PathBuf,
        source: std::io::Error,
    },
}
