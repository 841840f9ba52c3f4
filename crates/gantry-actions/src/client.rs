use crate::executor::{GhExecutor, RealExecutor};
use crate::gh::GhError;
use serde::Deserialize;

/// GitHub Actions operations client, parameterized over the executor for
/// testability.
pub struct ActionsClient<E: GhExecutor = RealExecutor> {
    executor: E,
}

/// Row shape of `gh run list --json databaseId`.
#[derive(Debug, Deserialize)]
struct RunRow {
    #[serde(rename = "databaseId")]
    database_id: u64,
}

impl ActionsClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for ActionsClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GhExecutor> ActionsClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Trigger a workflow-dispatch run of `workflow` on `git_ref`.
    ///
    /// Inputs are passed through verbatim as `-f key=value` pairs, empty
    /// values included.
    pub async fn dispatch_workflow(
        &self,
        workflow: &str,
        git_ref: &str,
        inputs: &[(String, String)],
    ) -> Result<(), GhError> {
        tracing::debug!(workflow = %workflow, git_ref = %git_ref, "dispatching workflow");

        let mut cmd = vec![
            "workflow".to_owned(),
            "run".to_owned(),
            workflow.to_owned(),
            "--ref".to_owned(),
            git_ref.to_owned(),
        ];
        for (key, value) in inputs {
            cmd.push("-f".to_owned());
            cmd.push(format!("{key}={value}"));
        }

        self.executor.exec(&cmd).await?;
        Ok(())
    }

    /// Look up the id of the most recent workflow run, if any.
    pub async fn latest_run_id(&self) -> Result<Option<u64>, GhError> {
        let output = self
            .executor
            .exec(&args(["run", "list", "--limit", "1", "--json", "databaseId"]))
            .await?;

        let rows: Vec<RunRow> = serde_json::from_str(output.trim())
            .map_err(|e| GhError::RunListParse { source: e })?;
        Ok(rows.first().map(|row| row.database_id))
    }

    /// Block until the given run completes, streaming progress.
    ///
    /// `--exit-status` makes gh exit non-zero when the run concludes
    /// failed, so a red run surfaces as a command failure here.
    pub async fn watch_run(&self, run_id: u64) -> Result<(), GhError> {
        let id = run_id.to_string();
        self.executor
            .exec_streaming(&args(["run", "watch", &id, "--exit-status"]))
            .await
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}
