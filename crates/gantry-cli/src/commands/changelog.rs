use gantry_actions::ActionsClient;
use gantry_core::{GantryConfig, or_default};
use std::path::Path;

/// Trigger the remote changelog workflow.
pub async fn changelog_action(
    git_ref: Option<String>,
    version: Option<String>,
) -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let git_ref = or_default(git_ref.as_deref(), &config.workflows.default_ref);
    let inputs = changelog_inputs(version.as_deref());

    let client = ActionsClient::new();
    client
        .dispatch_workflow(&config.workflows.changelog, &git_ref, &inputs)
        .await?;

    println!(
        "Triggered {workflow} on {git_ref}",
        workflow = config.workflows.changelog
    );
    Ok(())
}

/// Workflow inputs for the changelog dispatch.
fn changelog_inputs(version: Option<&str>) -> Vec<(String, String)> {
    vec![("version".to_owned(), or_default(version, ""))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_defaults_to_empty() {
        assert_eq!(
            changelog_inputs(None),
            vec![("version".to_owned(), String::new())]
        );
    }

    #[test]
    fn version_override_wins() {
        assert_eq!(
            changelog_inputs(Some("1.4.0")),
            vec![("version".to_owned(), "1.4.0".to_owned())]
        );
    }

    #[test]
    fn explicit_empty_version_collapses() {
        assert_eq!(changelog_inputs(Some("")), changelog_inputs(None));
    }
}
