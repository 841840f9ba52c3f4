#[derive(Debug, thiserror::Error)]
pub enum GhError {
    #[error("gh CLI not found — install: https://cli.github.com")]
    NotFound { source: std::io::Error },

    #[error("gh command failed: {args:?}\n{stderr}")]
    CommandFailed {
        args: Vec<String>,
        /// Exit code of the gh process, when it exited normally.
        code: Option<i32>,
        stderr: String,
    },

    #[error("gh output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },

    #[error("failed to parse `gh run list` output")]
    RunListParse { source: serde_json::Error },
}

impl GhError {
    /// Exit code to propagate when this error reaches the process boundary.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } => *code,
            _ => None,
        }
    }
}
