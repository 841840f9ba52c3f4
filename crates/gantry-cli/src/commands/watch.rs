use gantry_actions::ActionsClient;
use std::process::Stdio;

use super::ToolFailure;

/// Block until the workflow run finishes, then notify the desktop.
pub async fn watch_actions(run_id: Option<u64>) -> anyhow::Result<()> {
    let client = ActionsClient::new();

    let run_id = match run_id {
        Some(id) => id,
        None => client
            .latest_run_id()
            .await?
            .ok_or_else(|| anyhow::anyhow!("no workflow runs found for this repository"))?,
    };

    println!("Watching run {run_id}...");
    client.watch_run(run_id).await?;

    notify("GitHub Actions", &format!("Workflow run {run_id} completed")).await?;
    Ok(())
}

/// Fire a desktop notification via notify-send.
async fn notify(summary: &str, body: &str) -> anyhow::Result<()> {
    let status = tokio::process::Command::new("notify-send")
        .arg(summary)
        .arg(body)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| anyhow::anyhow!("notify-send not found ({e})"))?;

    if status.success() {
        Ok(())
    } else {
        Err(ToolFailure {
            program: "notify-send",
            code: status.code(),
            detail: format!("exited with {status}"),
        }
        .into())
    }
}
