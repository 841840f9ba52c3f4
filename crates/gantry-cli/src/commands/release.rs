use gantry_actions::ActionsClient;
use gantry_core::{GantryConfig, or_default};
use std::path::Path;

/// Caller-supplied overrides for the release workflow inputs.
#[derive(Debug, Default)]
pub struct ReleaseArgs {
    pub git_ref: Option<String>,
    pub skip_release_file: Option<String>,
    pub release_file_name: Option<String>,
    pub release_directory: Option<String>,
    pub skip_changelog: Option<String>,
    pub version: Option<String>,
    pub create_pr_for_branch: Option<String>,
}

/// Trigger the remote release workflow.
pub async fn release_action(args: ReleaseArgs) -> anyhow::Result<()> {
    let config = GantryConfig::load(Path::new("."))?;
    let git_ref = or_default(args.git_ref.as_deref(), &config.workflows.default_ref);
    let inputs = release_inputs(&args);

    let client = ActionsClient::new();
    client
        .dispatch_workflow(&config.workflows.release, &git_ref, &inputs)
        .await?;

    println!(
        "Triggered {workflow} on {git_ref}",
        workflow = config.workflows.release
    );
    Ok(())
}

/// Workflow inputs for the release dispatch: every field is always passed,
/// in this order, with per-field defaults applied.
fn release_inputs(args: &ReleaseArgs) -> Vec<(String, String)> {
    vec![
        (
            "skip_release_file".to_owned(),
            or_default(args.skip_release_file.as_deref(), "true"),
        ),
        (
            "release_file_name".to_owned(),
            or_default(args.release_file_name.as_deref(), "release"),
        ),
        (
            "release_directory".to_owned(),
            or_default(args.release_directory.as_deref(), "."),
        ),
        (
            "skip_changelog".to_owned(),
            or_default(args.skip_changelog.as_deref(), "true"),
        ),
        ("version".to_owned(), or_default(args.version.as_deref(), "")),
        (
            "create_pr_for_branch".to_owned(),
            or_default(args.create_pr_for_branch.as_deref(), ""),
        ),
    ]
}
