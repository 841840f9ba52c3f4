use crate::gh::GhError;

/// Abstraction over gh CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait GhExecutor: Send + Sync {
    /// Execute a gh command and capture stdout.
    async fn exec(&self, args: &[String]) -> Result<String, GhError>;

    /// Execute a gh command, streaming output to the terminal.
    async fn exec_streaming(&self, args: &[String]) -> Result<(), GhError>;
}

/// Real gh CLI executor.
pub struct RealExecutor;

impl GhExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<String, GhError> {
        use std::process::Stdio;

        let output = tokio::process::Command::new("gh")
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| GhError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| GhError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(GhError::CommandFailed {
                args: args.to_vec(),
                code: output.status.code(),
                stderr,
            })
        }
    }

    async fn exec_streaming(&self, args: &[String]) -> Result<(), GhError> {
        use std::process::Stdio;

        let status = tokio::process::Command::new("gh")
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| GhError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(GhError::CommandFailed {
                args: args.to_vec(),
                code: status.code(),
                stderr: format!("exit code: {status}"),
            })
        }
    }
}
