//! Shared type definitions for the task layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sandbox::SandboxStatus;

/// Captured compiler output and completion status, retained for diagnostic
/// reporting when a submission fails to compile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CompileInfo {
    /// Combined stdout/stderr from the toolchain invocation.
    pub output: String,
    /// Completion status reported by the sandbox runner.
    pub status: SandboxStatus,
}

impl CompileInfo {
    /// Diagnostic record for failures detected before any toolchain runs
    /// (e.g. no main class in a Java submission).
    pub(crate) fn diagnostic(message: impl Into<String>) -> Self {
        CompileInfo {
            output: message.into(),
            status: SandboxStatus {
                exit_code: Some(1),
                timed_out: false,
                memory_exceeded: false,
            },
        }
    }
}

impl std::fmt::Display for CompileInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let summary = self.output.lines().next().unwrap_or("").trim();
        if summary.is_empty() {
            write!(f, "toolchain exited with status {:?}", self.status.exit_code)
        } else {
            write!(f, "{}", summary)
        }
    }
}

/// Error taxonomy for the task layer.
///
/// Toolchain diagnostics meant for the submitter travel as `Compile`;
/// environment faults local to the host travel as `Staging`. A version probe
/// that finds nothing is not an error (see
/// [`ToolchainVersion::Unknown`](crate::tasks::version::ToolchainVersion)).
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("staging error: {0}")]
    Staging(String),

    #[error("compilation failed: {0}")]
    Compile(CompileInfo),
}

/// Result type alias for task-layer operations.
pub type Result<T> = std::result::Result<T, TaskError>;
