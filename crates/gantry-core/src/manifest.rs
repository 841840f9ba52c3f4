//! Version and requirements manifest readers.

use std::path::Path;

/// Read the version string from the version-manifest file.
///
/// Trailing whitespace is trimmed; the value is otherwise untouched, so the
/// printed version and the `DOCKER_VERSION` build argument match the file
/// byte for byte.
pub fn read_version(path: &Path) -> crate::Result<String> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::Error::VersionManifest {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(content.trim_end().to_owned())
}

/// Read the requirements manifest and return its dependency entries.
pub fn read_requirements(path: &Path) -> crate::Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| crate::Error::RequirementsManifest {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_requirements(&content))
}

/// One dependency per line; blank lines and `#` comments are skipped,
/// declaration order is preserved.
pub fn parse_requirements(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect()
}
