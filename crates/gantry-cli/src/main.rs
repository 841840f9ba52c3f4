mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "gantry",
    about = "Container image build/push automation and release workflow dispatch"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the container image with version and build-date metadata
    Build,
    /// Tag and push the image to the configured registry
    Push,
    /// Remove the local container image, ignoring missing-image errors
    Clean,
    /// Run clean, build, and push in sequence
    Deploy,
    /// Re-add each dependency from the requirements manifest via poetry
    UpdatePoetryDependencies,
    /// Wait for a workflow run to finish, then notify the desktop
    WatchActions {
        /// Run id to watch (defaults to the most recent run)
        #[arg(long)]
        run_id: Option<u64>,
    },
    /// Trigger the remote changelog workflow
    ChangelogAction {
        /// Git ref to run the workflow on
        #[arg(long = "ref")]
        git_ref: Option<String>,
        /// Version to record in the changelog
        #[arg(long)]
        version: Option<String>,
    },
    /// Trigger the remote release workflow
    ReleaseAction {
        /// Git ref to run the workflow on
        #[arg(long = "ref")]
        git_ref: Option<String>,
        /// Skip creating the release file ("true"/"false")
        #[arg(long)]
        skip_release_file: Option<String>,
        /// Name of the release file
        #[arg(long)]
        release_file_name: Option<String>,
        /// Directory the release file is created in
        #[arg(long)]
        release_directory: Option<String>,
        /// Skip the changelog step ("true"/"false")
        #[arg(long)]
        skip_changelog: Option<String>,
        /// Version to release
        #[arg(long)]
        version: Option<String>,
        /// Branch to open a PR for
        #[arg(long)]
        create_pr_for_branch: Option<String>,
    },
    /// Print the image version from the version manifest
    Version,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(exit_code(&err));
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Build) => commands::build().await?,
        Some(Commands::Push) => commands::push().await?,
        Some(Commands::Clean) => commands::clean().await?,
        Some(Commands::Deploy) => commands::deploy().await?,
        Some(Commands::UpdatePoetryDependencies) => commands::update_poetry_dependencies().await?,
        Some(Commands::WatchActions { run_id }) => commands::watch_actions(run_id).await?,
        Some(Commands::ChangelogAction { git_ref, version }) => {
            commands::changelog_action(git_ref, version).await?
        }
        Some(Commands::ReleaseAction {
            git_ref,
            skip_release_file,
            release_file_name,
            release_directory,
            skip_changelog,
            version,
            create_pr_for_branch,
        }) => {
            commands::release_action(commands::ReleaseArgs {
                git_ref,
                skip_release_file,
                release_file_name,
                release_directory,
                skip_changelog,
                version,
                create_pr_for_branch,
            })
            .await?
        }
        Some(Commands::Version) => commands::version()?,
        None => commands::show_catalog(),
    }

    Ok(())
}

/// Exit code for a failed run: the delegated tool's own exit code when one
/// is known, 1 otherwise.
fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<gantry_docker::DockerError>()
            && let Some(code) = e.exit_code()
        {
            return code;
        }
        if let Some(e) = cause.downcast_ref::<gantry_actions::GhError>()
            && let Some(code) = e.exit_code()
        {
            return code;
        }
        if let Some(e) = cause.downcast_ref::<commands::ToolFailure>()
            && let Some(code) = e.code
        {
            return code;
        }
    }
    1
}
